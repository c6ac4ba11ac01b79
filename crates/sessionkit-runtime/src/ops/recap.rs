//! Same-day activity across every project in the store.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use futures::future::join_all;
use sessionkit_core::filename_date_prefix;
use sessionkit_store::{
    ExcerptRules, list_project_directories, list_sessions, modified_local_date, read_activity_with,
};
use sessionkit_types::{Recap, SessionActivity, Severity};
use tracing::debug;

use crate::ports::{Outbound, Prompt};
use crate::{Error, Result};

/// Parse the optional date argument; blank or absent means today (local).
pub fn parse_recap_date(arg: Option<&str>) -> Result<NaiveDate> {
    match arg.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| Error::InvalidDate(value.to_string())),
        None => Ok(Local::now().date_naive()),
    }
}

/// Transcripts modified on `date`, in directory-scan then filename order
fn qualifying_transcripts(root: &Path, date: NaiveDate) -> Vec<PathBuf> {
    let projects = match list_project_directories(root) {
        Ok(projects) => projects,
        Err(err) => {
            debug!(error = %err, "nothing to recap");
            return Vec::new();
        }
    };

    let mut selected = Vec::new();
    for project in projects {
        let Ok(mut files) = list_sessions(&project.path) else {
            continue;
        };
        files.reverse();

        for file in files {
            if modified_local_date(&file) != Some(date) {
                continue;
            }

            // Filename dates are informational only; mtime alone gates inclusion.
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            debug!(
                file = %file.display(),
                filename_date = filename_date_prefix(&name).unwrap_or("-"),
                "selected for recap"
            );
            selected.push(file);
        }
    }
    selected
}

/// Collect and group user prompts from every transcript modified on `date`.
///
/// Files are read in parallel on the blocking pool; results are folded back
/// in scan order so grouping is deterministic.
pub async fn build_recap(root: &Path, date: NaiveDate, rules: ExcerptRules) -> Recap {
    let files = qualifying_transcripts(root, date);

    let reads = files.into_iter().map(|path| {
        tokio::task::spawn_blocking(move || read_activity_with(&path, &rules))
    });

    let mut recap = Recap::new(date.format("%Y-%m-%d").to_string());
    for joined in join_all(reads).await {
        let activity: SessionActivity = match joined {
            Ok(activity) => activity,
            Err(err) => {
                debug!(error = %err, "transcript read task failed");
                continue;
            }
        };
        recap.absorb(&activity.cwd, activity.user_messages);
    }
    recap
}

pub struct RecapRequest<'a> {
    pub store_root: PathBuf,
    /// Raw date argument as typed by the operator
    pub date: Option<String>,
    pub rules: ExcerptRules,
    pub header: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecapOutcome {
    /// Payload handed to the outbound channel
    Sent { projects: usize },
    /// Nothing matched the date
    Empty,
}

/// Build the recap and hand the payload to `outbound` exactly once.
pub async fn run_recap(
    request: RecapRequest<'_>,
    prompt: &mut dyn Prompt,
    outbound: &mut dyn Outbound,
) -> Result<RecapOutcome> {
    let date = match parse_recap_date(request.date.as_deref()) {
        Ok(date) => date,
        Err(err) => {
            prompt.notify(&err.to_string(), Severity::Error);
            return Err(err);
        }
    };

    let recap = build_recap(&request.store_root, date, request.rules).await;

    if recap.is_empty() {
        let when = if date == Local::now().date_naive() {
            "today".to_string()
        } else {
            recap.date.clone()
        };
        prompt.notify(&format!("No sessions found for {}.", when), Severity::Warning);
        return Ok(RecapOutcome::Empty);
    }

    let payload = recap.to_prompt_with_header(request.header);
    if let Err(err) = outbound.send(&payload) {
        prompt.notify(&err.to_string(), Severity::Error);
        return Err(err);
    }

    Ok(RecapOutcome::Sent {
        projects: recap.groups.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recap_date() {
        assert_eq!(
            parse_recap_date(Some("2026-02-26")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 26).unwrap()
        );
        assert_eq!(
            parse_recap_date(Some("  2026-02-26 ")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 26).unwrap()
        );
        assert_eq!(parse_recap_date(None).unwrap(), Local::now().date_naive());
        assert_eq!(parse_recap_date(Some("  ")).unwrap(), Local::now().date_naive());
    }

    #[test]
    fn test_parse_recap_date_rejects_garbage() {
        let err = parse_recap_date(Some("26/02/2026")).unwrap_err();
        assert!(matches!(err, Error::InvalidDate(v) if v == "26/02/2026"));
    }
}
