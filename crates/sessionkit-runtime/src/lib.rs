pub mod config;
pub mod error;
pub mod ops;
pub mod ports;

pub use config::{Config, RecapConfig};
pub use error::{Error, Result};
pub use ops::guard::{GuardVerdict, is_destructive, review_command};
pub use ops::recap::{RecapOutcome, RecapRequest, build_recap, parse_recap_date, run_recap};
pub use ops::relocate::{RelocationOutcome, RelocationWorkflow, Stage, session_label};
pub use ports::{ActiveSession, Outbound, Prompt};
