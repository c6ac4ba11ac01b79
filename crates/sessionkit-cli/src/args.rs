use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::{LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "sessionkit")]
#[command(about = "Move agent session transcripts between projects and recap the day's work", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Session store root (default: $SESSIONKIT_STORE or ~/.pi/agent/sessions)
    #[arg(long, global = true)]
    pub store: Option<String>,

    /// Config file (default: <config dir>/sessionkit/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log verbosity when RUST_LOG is unset
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Transcript the live agent is writing (default: $SESSIONKIT_ACTIVE_SESSION)
    #[arg(long, global = true)]
    pub active_session: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactively move one session to another project directory
    Move,

    /// Collect the day's user prompts grouped by project
    Recap {
        /// Calendar date as YYYY-MM-DD (default: today)
        date: Option<String>,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Ask for approval before a destructive git command runs
    Guard {
        /// Shell command about to be executed
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}
