//! Streaming transcript reader.
//!
//! Transcripts are append-only and may be mid-write, so lines are pulled one
//! at a time, decoded independently, and anything that fails to decode is
//! skipped. An I/O failure anywhere in the stream collapses the result to an
//! empty summary instead of an error.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use sessionkit_types::{SessionActivity, SessionSummary, truncate_chars};
use tracing::debug;

use crate::schema::{TranscriptRecord, decode_line};

/// Lines inspected when building a [`SessionSummary`]
pub const SUMMARY_LINE_CAP: usize = 50;

/// Characters kept of the first user message
pub const FIRST_MESSAGE_CHARS: usize = 80;

/// Filtering applied to user-message excerpts gathered for a recap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcerptRules {
    /// Excerpts of this many characters or fewer are dropped ("yes", "exit")
    pub short_cutoff: usize,
    /// Longer excerpts are cut to this many characters
    pub max_chars: usize,
}

impl Default for ExcerptRules {
    fn default() -> Self {
        Self {
            short_cutoff: 5,
            max_chars: 300,
        }
    }
}

impl ExcerptRules {
    pub fn excerpt(&self, text: &str) -> Option<String> {
        if text.chars().count() <= self.short_cutoff {
            return None;
        }
        Some(truncate_chars(text, self.max_chars))
    }
}

/// Feed decoded records to `visit` with their 1-based line number.
///
/// Lines are split on `\n` and decoded lossily so a stray invalid byte only
/// spoils its own line.
fn scan_records<F>(path: &Path, limit: Option<usize>, mut visit: F) -> io::Result<()>
where
    F: FnMut(usize, TranscriptRecord),
{
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    for (idx, chunk) in reader.split(b'\n').enumerate() {
        let line_num = idx + 1;
        if limit.is_some_and(|cap| line_num > cap) {
            break;
        }

        let bytes = chunk?;
        let line = String::from_utf8_lossy(&bytes);
        if let Some(record) = decode_line(&line) {
            visit(line_num, record);
        }
    }

    Ok(())
}

/// Read identity and a display label from the first [`SUMMARY_LINE_CAP`] lines.
pub fn read_summary(path: &Path) -> SessionSummary {
    let mut summary = SessionSummary::empty(path);

    let scanned = scan_records(path, Some(SUMMARY_LINE_CAP), |line_num, record| {
        match record {
            TranscriptRecord::Session(header) if line_num == 1 => {
                summary.session_id = header.id.unwrap_or_default();
                summary.timestamp = header.timestamp.unwrap_or_default();
            }
            TranscriptRecord::SessionInfo(info) => {
                if let Some(name) = info.name.filter(|n| !n.is_empty()) {
                    summary.name = Some(name);
                }
            }
            TranscriptRecord::Message(msg) if summary.first_user_message.is_none() => {
                if let Some(text) = msg
                    .user_content()
                    .and_then(|c| c.first_text())
                    .filter(|t| !t.is_empty())
                {
                    summary.first_user_message = Some(truncate_chars(text, FIRST_MESSAGE_CHARS));
                }
            }
            _ => {}
        }
    });

    match scanned {
        Ok(()) => summary,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "unreadable transcript");
            SessionSummary::empty(path)
        }
    }
}

/// Read the whole transcript for recap purposes with the stock excerpt rules.
pub fn read_activity(path: &Path) -> SessionActivity {
    read_activity_with(path, &ExcerptRules::default())
}

/// Read the whole transcript, collecting working directory and user prompts.
pub fn read_activity_with(path: &Path, rules: &ExcerptRules) -> SessionActivity {
    let mut activity = SessionActivity::empty(path);

    let scanned = scan_records(path, None, |line_num, record| match record {
        TranscriptRecord::Session(header) => {
            if line_num == 1 {
                activity.session_id = header.id.unwrap_or_default();
                activity.timestamp = header.timestamp.unwrap_or_default();
            }
            if let Some(cwd) = header.cwd.filter(|c| !c.is_empty()) {
                activity.cwd = cwd;
            }
        }
        TranscriptRecord::Message(msg) => {
            if let Some(content) = msg.user_content() {
                activity.user_messages.extend(
                    content
                        .texts()
                        .into_iter()
                        .filter_map(|text| rules.excerpt(text)),
                );
            }
        }
        _ => {}
    });

    match scanned {
        Ok(()) => activity,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "unreadable transcript");
            SessionActivity::empty(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_rules() {
        let rules = ExcerptRules::default();
        assert_eq!(rules.excerpt("ok"), None);
        assert_eq!(rules.excerpt("exit!"), None);
        assert_eq!(rules.excerpt("exit!!").as_deref(), Some("exit!!"));

        let long = "x".repeat(400);
        assert_eq!(rules.excerpt(&long).map(|e| e.len()), Some(300));
    }

    #[test]
    fn test_missing_file_is_empty_summary() {
        let summary = read_summary(Path::new("/definitely/not/here.jsonl"));
        assert!(!summary.is_usable());
        assert!(summary.session_id.is_empty());
        assert!(summary.timestamp.is_empty());
        assert!(summary.name.is_none());

        let activity = read_activity(Path::new("/definitely/not/here.jsonl"));
        assert!(activity.user_messages.is_empty());
    }
}
