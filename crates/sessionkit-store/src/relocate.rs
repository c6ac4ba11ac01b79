use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{Error, Result};

/// Move a transcript into `dest_dir` under its original filename.
///
/// Creates `dest_dir` when missing, refuses to replace an existing file, and
/// uses a single `rename`, so the transcript is either fully at the source or
/// fully at the destination. Cross-filesystem moves fail instead of falling
/// back to copy + delete.
pub fn relocate_transcript(source: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let file_name = source.file_name().ok_or_else(|| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("not a file path: {}", source.display()),
        ))
    })?;

    fs::create_dir_all(dest_dir)?;

    let target = dest_dir.join(file_name);
    if target.exists() {
        return Err(Error::DestinationExists(target));
    }

    fs::rename(source, &target)?;
    info!(from = %source.display(), to = %target.display(), "moved transcript");
    Ok(target)
}
