use crate::terminal::TerminalPrompt;
use anyhow::Result;
use sessionkit_runtime::{ActiveSession, RelocationOutcome, RelocationWorkflow};
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

pub fn handle(store_root: &Path, active: &dyn ActiveSession) -> Result<ExitCode> {
    let mut prompt = TerminalPrompt::new();

    match RelocationWorkflow::new(store_root, &mut prompt, active).run() {
        RelocationOutcome::Moved { from, to } => {
            debug!(from = %from.display(), to = %to.display(), "session moved");
            Ok(ExitCode::SUCCESS)
        }
        RelocationOutcome::Cancelled => Ok(ExitCode::SUCCESS),
        // already reported through the prompt
        RelocationOutcome::Failed(err) => {
            debug!(error = %err, "move did not complete");
            Ok(ExitCode::from(1))
        }
    }
}
