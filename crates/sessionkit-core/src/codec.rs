//! Display labels for encoded project directory names.
//!
//! The agent stores each project's transcripts under a directory named after
//! the working directory with separators replaced by dashes and wrapped in
//! `--` (`/home/joe/dev/foo` becomes `--home-joe-dev-foo--`). Real dashes and
//! separators are indistinguishable after encoding, so decoding is lossy and
//! only ever used for display.

use regex::Regex;
use sessionkit_types::{EncodedDirName, ProjectDirectory};
use std::path::Path;
use std::sync::LazyLock;

static HOME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^home-[^-]+-").unwrap());

/// Decode a dir name like `--home-joe-Development-foo--` to `Development-foo`.
///
/// Strips one leading and one trailing `--`, then a `home-<user>-` prefix.
/// Internal dashes are kept as they are.
pub fn decode_dir_name(name: &str) -> String {
    let label = name.strip_prefix("--").unwrap_or(name);
    let label = label.strip_suffix("--").unwrap_or(label);
    HOME_PREFIX.replace(label, "").into_owned()
}

/// Build the store entry for a project directory at `path`.
pub fn project_directory(path: &Path) -> ProjectDirectory {
    let encoded = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let label = decode_dir_name(&encoded);
    ProjectDirectory {
        encoded_name: EncodedDirName::new(encoded),
        label,
        path: path.to_path_buf(),
    }
}
