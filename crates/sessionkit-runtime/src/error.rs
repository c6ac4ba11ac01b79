use std::fmt;
use std::path::PathBuf;

/// Result type for sessionkit-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Store layer error (missing root, empty project, failed move)
    Store(sessionkit_store::Error),

    /// Path resolution error
    Core(sessionkit_core::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Attempted to move the transcript the live process is writing
    ActiveSessionConflict(PathBuf),

    /// Nowhere to move a session to
    NoDestination,

    /// Recap date argument is not an ISO calendar date
    InvalidDate(String),

    /// Outbound channel refused the payload
    Outbound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "{}", err),
            Error::Core(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::ActiveSessionConflict(path) => {
                write!(f, "Cannot move the currently active session: {}", path.display())
            }
            Error::NoDestination => write!(f, "No other project directories to move to"),
            Error::InvalidDate(value) => {
                write!(f, "Invalid date '{}': expected YYYY-MM-DD", value)
            }
            Error::Outbound(msg) => write!(f, "Failed to send recap: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Core(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_)
            | Error::ActiveSessionConflict(_)
            | Error::NoDestination
            | Error::InvalidDate(_)
            | Error::Outbound(_) => None,
        }
    }
}

impl From<sessionkit_store::Error> for Error {
    fn from(err: sessionkit_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<sessionkit_core::Error> for Error {
    fn from(err: sessionkit_core::Error) -> Self {
        Error::Core(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
