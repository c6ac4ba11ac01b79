use crate::terminal::TerminalPrompt;
use anyhow::Result;
use sessionkit_runtime::{GuardVerdict, review_command};
use std::process::ExitCode;

/// Exit status telling the calling hook to skip the command
const BLOCKED: u8 = 2;

pub fn handle(command: &str) -> Result<ExitCode> {
    let mut prompt = TerminalPrompt::new();

    match review_command(command, &mut prompt) {
        GuardVerdict::Allow => Ok(ExitCode::SUCCESS),
        GuardVerdict::Block { reason } => {
            eprintln!("{}", reason);
            Ok(ExitCode::from(BLOCKED))
        }
    }
}
