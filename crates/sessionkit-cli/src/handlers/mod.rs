pub mod guard;
pub mod move_session;
pub mod recap;
