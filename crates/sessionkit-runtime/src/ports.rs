//! Collaborators the workflows talk to.
//!
//! The host owns the prompt widgets, the live-session tracker and the
//! outbound message channel; the workflows only see these traits.

use std::path::PathBuf;

use sessionkit_types::Severity;

use crate::Result;

/// Operator interaction
pub trait Prompt {
    /// Offer `options`; `None` when the operator backs out.
    fn select(&mut self, prompt: &str, options: &[String]) -> Option<usize>;

    fn confirm(&mut self, title: &str, detail: &str) -> bool;

    fn notify(&mut self, message: &str, severity: Severity);
}

/// Read-only view of the transcript the live process is appending to
pub trait ActiveSession {
    fn current_session_path(&self) -> Option<PathBuf>;
}

impl ActiveSession for Option<PathBuf> {
    fn current_session_path(&self) -> Option<PathBuf> {
        self.clone()
    }
}

impl<F> ActiveSession for F
where
    F: Fn() -> Option<PathBuf>,
{
    fn current_session_path(&self) -> Option<PathBuf> {
        self()
    }
}

/// Hand-off for text that should reach the language model
pub trait Outbound {
    fn send(&mut self, text: &str) -> Result<()>;
}
