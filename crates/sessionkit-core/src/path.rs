use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Environment variable overriding the session store location
pub const STORE_ENV: &str = "SESSIONKIT_STORE";

/// Environment variable naming the transcript the live agent is writing
pub const ACTIVE_SESSION_ENV: &str = "SESSIONKIT_ACTIVE_SESSION";

/// Suffix of transcript files inside a project directory
pub const TRANSCRIPT_EXTENSION: &str = "jsonl";

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Config(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Resolve the session store root based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SESSIONKIT_STORE environment variable (with tilde expansion)
/// 3. ~/.pi/agent/sessions
pub fn resolve_store_root(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(STORE_ENV)
        && !env_path.is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    default_store_root()
}

/// The agent's own session directory under the user's home
pub fn default_store_root() -> Result<PathBuf> {
    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".pi").join("agent").join("sessions"));
    }

    Err(Error::Config(
        "Could not determine session store path: no home directory found".to_string(),
    ))
}

/// Default location of the optional TOML config
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sessionkit").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Whether `path` carries the transcript suffix
pub fn is_transcript_path(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == TRANSCRIPT_EXTENSION)
}

/// Calendar date embedded at the front of a transcript filename
///
/// Files look like `2026-02-26T05-03-11-234Z_<uuid>.jsonl`.
pub fn filename_date_prefix(file_name: &str) -> Option<&str> {
    let prefix = file_name.get(..10)?;
    let bytes = prefix.as_bytes();
    let shaped = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    shaped.then_some(prefix)
}

/// Normalize a path for comparison (resolve to absolute, canonicalize if possible)
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    })
}

/// Check if two paths are equivalent after normalization
pub fn paths_equal(path1: &Path, path2: &Path) -> bool {
    path1 == path2 || normalize_path(path1) == normalize_path(path2)
}
