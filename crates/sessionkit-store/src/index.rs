use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate};
use sessionkit_core::{is_transcript_path, project_directory};
use sessionkit_types::ProjectDirectory;
use walkdir::WalkDir;

use crate::{Error, Result};

/// List project directories directly under the store root, sorted by encoded name.
///
/// Fails with [`Error::StoreUnavailable`] when the root is missing or cannot
/// be listed and with [`Error::EmptyStore`] when it holds no directories.
pub fn list_project_directories(root: &Path) -> Result<Vec<ProjectDirectory>> {
    if !root.is_dir() {
        return Err(Error::StoreUnavailable(root.to_path_buf()));
    }

    let mut dirs = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(err) if err.depth() == 0 => {
                return Err(Error::StoreUnavailable(root.to_path_buf()));
            }
            Err(_) => continue,
        };

        if entry.file_type().is_dir() {
            dirs.push(project_directory(entry.path()));
        }
    }

    if dirs.is_empty() {
        return Err(Error::EmptyStore(root.to_path_buf()));
    }
    Ok(dirs)
}

/// List transcript files in one project directory, newest first.
///
/// Transcript filenames start with a sortable timestamp, so a descending
/// filename sort is a newest-first sort.
pub fn list_sessions(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.file_type().is_file() && is_transcript_path(entry.path()) {
            files.push(entry.into_path());
        }
    }

    if files.is_empty() {
        return Err(Error::EmptyProject(dir.to_path_buf()));
    }

    files.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
    Ok(files)
}

/// Local calendar date of a file's last modification
pub fn modified_local_date(path: &Path) -> Option<NaiveDate> {
    let modified = std::fs::metadata(path).ok()?.modified().ok()?;
    let local: DateTime<Local> = modified.into();
    Some(local.date_naive())
}
