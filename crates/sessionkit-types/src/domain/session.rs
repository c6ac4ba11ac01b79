use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placeholder shown for sessions with neither a name nor a user message
pub const EMPTY_SESSION_LABEL: &str = "(empty session)";

/// Identity of a transcript, read from its first few lines
///
/// `session_id` and `timestamp` are empty when the header is missing or the
/// file could not be read; callers treat that as unusable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub path: PathBuf,
    pub session_id: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_user_message: Option<String>,
}

impl SessionSummary {
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Header fields were recovered
    pub fn is_usable(&self) -> bool {
        !self.session_id.is_empty() && !self.timestamp.is_empty()
    }

    /// Human label: session name, then first user message
    pub fn title(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.first_user_message.as_deref().filter(|s| !s.is_empty()))
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Everything the recap needs from one transcript
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionActivity {
    pub path: PathBuf,
    pub session_id: String,
    pub timestamp: String,
    pub cwd: String,
    pub user_messages: Vec<String>,
}

impl SessionActivity {
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }
}
