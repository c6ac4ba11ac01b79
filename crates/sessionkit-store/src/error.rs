use std::fmt;
use std::path::PathBuf;

/// Result type for sessionkit-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Walkdir error below the store root
    WalkDir(walkdir::Error),

    /// Store root is missing or cannot be listed
    StoreUnavailable(PathBuf),

    /// Store root has no project directories
    EmptyStore(PathBuf),

    /// Project directory has no transcripts
    EmptyProject(PathBuf),

    /// A file with the same name already sits in the destination
    DestinationExists(PathBuf),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "{}", err),
            Error::WalkDir(err) => write!(f, "Directory traversal error: {}", err),
            Error::StoreUnavailable(path) => {
                write!(f, "No sessions directory found at {}", path.display())
            }
            Error::EmptyStore(path) => {
                write!(f, "No project directories found in {}", path.display())
            }
            Error::EmptyProject(path) => {
                write!(f, "No sessions in {}", path.display())
            }
            Error::DestinationExists(path) => {
                write!(f, "Destination already exists: {}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::WalkDir(err) => Some(err),
            Error::StoreUnavailable(_)
            | Error::EmptyStore(_)
            | Error::EmptyProject(_)
            | Error::DestinationExists(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDir(err)
    }
}
