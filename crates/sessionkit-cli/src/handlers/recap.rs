use crate::terminal::{StdoutOutbound, TerminalPrompt};
use crate::types::OutputFormat;
use anyhow::Result;
use sessionkit_runtime::{RecapConfig, RecapRequest, build_recap, parse_recap_date, run_recap};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

pub fn handle(
    store_root: PathBuf,
    date: Option<String>,
    format: OutputFormat,
    config: &RecapConfig,
) -> Result<ExitCode> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match format {
        OutputFormat::Plain => {
            let mut prompt = TerminalPrompt::new();
            let mut outbound = StdoutOutbound;
            let request = RecapRequest {
                store_root,
                date,
                rules: config.rules(),
                header: config.header(),
            };

            match runtime.block_on(run_recap(request, &mut prompt, &mut outbound)) {
                Ok(outcome) => {
                    debug!(?outcome, "recap finished");
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    debug!(error = %err, "recap failed");
                    Ok(ExitCode::from(1))
                }
            }
        }
        OutputFormat::Json => {
            let date = parse_recap_date(date.as_deref())?;
            let recap = runtime.block_on(build_recap(&store_root, date, config.rules()));
            println!("{}", serde_json::to_string_pretty(&recap)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
