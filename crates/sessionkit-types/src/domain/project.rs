use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// On-disk name of a project directory inside the session store
///
/// Opaque: produced by the agent's lossy path encoding (`--home-joe-src-app--`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedDirName(String);

impl EncodedDirName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedDirName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EncodedDirName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EncodedDirName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for EncodedDirName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A project subdirectory of the session store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDirectory {
    pub encoded_name: EncodedDirName,
    /// Display-only label; never turn this back into a path
    pub label: String,
    pub path: PathBuf,
}

impl ProjectDirectory {
    pub fn as_path(&self) -> &Path {
        &self.path
    }
}
