use clap::Parser;
use sessionkit::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when piping the recap payload into `head`)
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
