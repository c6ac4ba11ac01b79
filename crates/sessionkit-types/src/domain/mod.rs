pub mod notice;
pub mod project;
pub mod recap;
pub mod session;

pub use notice::*;
pub use project::*;
pub use recap::*;
pub use session::*;
