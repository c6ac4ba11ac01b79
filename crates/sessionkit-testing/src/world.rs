//! Isolated session store for integration tests.
//!
//! Lays out `<temp>/.pi/agent/sessions/<encoded-dir>/<transcript>.jsonl`
//! the way the agent does, and can pin modification times so date-based
//! selection is deterministic.

use anyhow::Result;
use assert_cmd::Command;
use chrono::{Local, NaiveDate, TimeZone};
use filetime::FileTime;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{Transcript, transcript_file_name};

/// Declarative session store builder.
///
/// # Example
/// ```no_run
/// use sessionkit_testing::{StoreWorld, Transcript};
///
/// let world = StoreWorld::new().with_project("--home-joe-api--");
/// let path = world
///     .add_transcript(
///         "--home-joe-api--",
///         "2026-02-26T05-03-11-234Z_a.jsonl",
///         &Transcript::with_header("a", "2026-02-26T05:03:11.234Z", "/home/joe/api"),
///     )
///     .unwrap();
/// assert!(path.exists());
/// ```
pub struct StoreWorld {
    temp_dir: TempDir,
    root: PathBuf,
}

impl Default for StoreWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreWorld {
    /// Create a new isolated store with an existing, empty root.
    pub fn new() -> Self {
        let world = Self::without_store();
        std::fs::create_dir_all(&world.root).expect("Failed to create store root");
        world
    }

    /// Create an environment whose store root does not exist.
    pub fn without_store() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir
            .path()
            .join(".pi")
            .join("agent")
            .join("sessions");
        Self { temp_dir, root }
    }

    /// Session store root
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn project_dir(&self, encoded: &str) -> PathBuf {
        self.root.join(encoded)
    }

    /// Create an (empty) project directory.
    pub fn with_project(self, encoded: &str) -> Self {
        std::fs::create_dir_all(self.project_dir(encoded)).expect("Failed to create project dir");
        self
    }

    /// Write a transcript under an explicit filename.
    pub fn add_transcript(
        &self,
        encoded: &str,
        file_name: &str,
        transcript: &Transcript,
    ) -> Result<PathBuf> {
        self.add_file(encoded, file_name, &transcript.build())
    }

    /// Write a transcript named after `timestamp` with a fresh uuid suffix.
    pub fn add_session(
        &self,
        encoded: &str,
        timestamp: &str,
        transcript: &Transcript,
    ) -> Result<PathBuf> {
        self.add_transcript(encoded, &transcript_file_name(timestamp), transcript)
    }

    /// Write arbitrary bytes into a project directory.
    pub fn add_file(&self, encoded: &str, file_name: &str, content: &str) -> Result<PathBuf> {
        let dir = self.project_dir(encoded);
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(file_name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Pin a file's modification time to local noon on `date`.
    pub fn set_modified_on(&self, path: &Path, date: NaiveDate) -> Result<()> {
        let noon = date
            .and_hms_opt(12, 0, 0)
            .ok_or_else(|| anyhow::anyhow!("invalid time"))?;
        let local = Local
            .from_local_datetime(&noon)
            .earliest()
            .ok_or_else(|| anyhow::anyhow!("no local time for {}", noon))?;
        let mtime = FileTime::from_unix_time(local.timestamp(), 0);
        filetime::set_file_mtime(path, mtime)?;
        Ok(())
    }

    /// Every transcript currently in the store, sorted
    pub fn all_transcripts(&self) -> Vec<PathBuf> {
        let mut found = Vec::new();
        let Ok(dirs) = std::fs::read_dir(&self.root) else {
            return found;
        };
        for dir in dirs.flatten() {
            let Ok(files) = std::fs::read_dir(dir.path()) else {
                continue;
            };
            for file in files.flatten() {
                let path = file.path();
                if path.extension().is_some_and(|e| e == "jsonl") {
                    found.push(path);
                }
            }
        }
        found.sort();
        found
    }

    /// Configure a `sessionkit` command to run against this store.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--store")
            .arg(&self.root)
            .arg("--config")
            .arg(self.temp_dir.path().join("config.toml"))
            .env_remove("SESSIONKIT_STORE")
            .env_remove("SESSIONKIT_ACTIVE_SESSION")
            .current_dir(self.temp_dir.path());
        cmd
    }

    /// Execute the `sessionkit` binary against this store.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("sessionkit")
            .map_err(|e| anyhow::anyhow!("Failed to find sessionkit binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
