//! Testing infrastructure for sessionkit integration tests.
//!
//! - `StoreWorld`: an isolated session store under a temp directory
//! - `fixtures`: transcript line builders
//! - `ports`: scripted stand-ins for the operator prompt, live-session
//!   tracker and outbound channel

pub mod fixtures;
pub mod ports;
pub mod world;

pub use fixtures::Transcript;
pub use ports::{CapturedOutbound, ScriptedPrompt, SharedActiveSession};
pub use world::StoreWorld;
