//! Terminal-backed ports for the runtime workflows.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use sessionkit_core::ACTIVE_SESSION_ENV;
use sessionkit_runtime::{ActiveSession, Error, Outbound, Prompt};
use sessionkit_types::Severity;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Prompt on stderr using dialoguer widgets.
///
/// Without a terminal on stdin every select cancels and every confirm
/// declines, so scripted runs never block or mutate the store.
pub struct TerminalPrompt {
    interactive: bool,
    colored: bool,
    theme: ColorfulTheme,
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompt {
    pub fn new() -> Self {
        let stderr_tty = std::io::stderr().is_terminal();
        Self {
            interactive: std::io::stdin().is_terminal() && stderr_tty,
            colored: stderr_tty,
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompt for TerminalPrompt {
    fn select(&mut self, prompt: &str, options: &[String]) -> Option<usize> {
        if !self.interactive || options.is_empty() {
            debug!(prompt, "no interactive terminal; selection cancelled");
            return None;
        }

        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact_opt()
            .unwrap_or_else(|err| {
                debug!(error = %err, "selection aborted");
                None
            })
    }

    fn confirm(&mut self, title: &str, detail: &str) -> bool {
        if !self.interactive {
            debug!(title, "no interactive terminal; confirmation declined");
            return false;
        }

        eprintln!("{}", detail);
        Confirm::with_theme(&self.theme)
            .with_prompt(title)
            .default(false)
            .interact_opt()
            .ok()
            .flatten()
            .unwrap_or(false)
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        if !self.colored {
            eprintln!("{}: {}", severity, message);
            return;
        }

        match severity {
            Severity::Info => eprintln!("{} {}", "info:".cyan().bold(), message),
            Severity::Warning => eprintln!("{} {}", "warning:".yellow().bold(), message),
            Severity::Error => eprintln!("{} {}", "error:".red().bold(), message),
        }
    }
}

/// Outbound channel that writes the payload to stdout for the caller to pipe on
pub struct StdoutOutbound;

impl Outbound for StdoutOutbound {
    fn send(&mut self, text: &str) -> sessionkit_runtime::Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|err| Error::Outbound(err.to_string()))
    }
}

/// Active session from `--active-session`, else the environment at call time
#[derive(Debug, Clone, Default)]
pub struct EnvActiveSession {
    explicit: Option<PathBuf>,
}

impl EnvActiveSession {
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self { explicit }
    }
}

impl ActiveSession for EnvActiveSession {
    fn current_session_path(&self) -> Option<PathBuf> {
        self.explicit.clone().or_else(|| {
            std::env::var_os(ACTIVE_SESSION_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
    }
}
