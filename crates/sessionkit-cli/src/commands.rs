use super::args::{Cli, Commands};
use super::handlers;
use crate::terminal::EnvActiveSession;
use crate::types::LogLevel;
use anyhow::Result;
use sessionkit_runtime::Config;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber; `RUST_LOG` wins over `--log-level`.
fn init_tracing(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run(cli: Cli) -> Result<ExitCode> {
    init_tracing(cli.log_level);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let store_root = config.resolve_store_root(cli.store.as_deref())?;
    debug!(store = %store_root.display(), "resolved session store");

    match cli.command {
        Commands::Move => {
            let active = EnvActiveSession::new(cli.active_session);
            handlers::move_session::handle(&store_root, &active)
        }
        Commands::Recap { date, format } => {
            handlers::recap::handle(store_root, date, format, &config.recap)
        }
        Commands::Guard { command } => handlers::guard::handle(&command.join(" ")),
    }
}
