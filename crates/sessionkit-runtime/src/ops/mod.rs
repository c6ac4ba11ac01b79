pub mod guard;
pub mod recap;
pub mod relocate;
