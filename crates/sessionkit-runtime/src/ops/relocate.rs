//! Interactive move of one transcript between project directories.
//!
//! The workflow is a small state machine. Every stage either advances or
//! lands in `Aborted`; the only filesystem mutation happens in `Move`, right
//! after the active-session check is repeated.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use sessionkit_core::paths_equal;
use sessionkit_store::{list_project_directories, list_sessions, read_summary, relocate_transcript};
use sessionkit_types::{EMPTY_SESSION_LABEL, ProjectDirectory, SessionSummary, Severity};
use tracing::debug;

use crate::ports::{ActiveSession, Prompt};
use crate::Error;

const LOCK_MARKER: &str = "🔒 ";
const NO_MARKER: &str = "   ";

#[derive(Debug)]
pub enum Stage {
    ChooseSource,
    ChooseSession {
        source: ProjectDirectory,
    },
    SafetyCheck {
        source: ProjectDirectory,
        session: SessionSummary,
    },
    ChooseDestination {
        source: ProjectDirectory,
        session: SessionSummary,
    },
    Confirm {
        source: ProjectDirectory,
        session: SessionSummary,
        destination: ProjectDirectory,
    },
    Move {
        source: ProjectDirectory,
        session: SessionSummary,
        destination: ProjectDirectory,
    },
    Done {
        from: PathBuf,
        to: PathBuf,
    },
    Aborted(Option<Error>),
}

impl Stage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Done { .. } | Stage::Aborted(_))
    }
}

#[derive(Debug)]
pub enum RelocationOutcome {
    Moved { from: PathBuf, to: PathBuf },
    /// Operator backed out; nothing changed
    Cancelled,
    /// Reported to the operator; nothing changed
    Failed(Error),
}

impl RelocationOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, RelocationOutcome::Moved { .. })
    }
}

/// Picker row for a session: `<lock><date> | <title>`
pub fn session_label(summary: &SessionSummary, active: Option<&Path>) -> String {
    let is_current = active.is_some_and(|p| paths_equal(p, &summary.path));
    let prefix = if is_current { LOCK_MARKER } else { NO_MARKER };
    let title = summary.title().unwrap_or(EMPTY_SESSION_LABEL);
    format!("{}{} | {}", prefix, format_timestamp(&summary.timestamp), title)
}

fn format_timestamp(ts: &str) -> String {
    if ts.is_empty() {
        return "unknown date".to_string();
    }
    match DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => ts.to_string(),
    }
}

pub struct RelocationWorkflow<'a> {
    store_root: PathBuf,
    prompt: &'a mut dyn Prompt,
    active: &'a dyn ActiveSession,
    projects: Vec<ProjectDirectory>,
}

impl<'a> RelocationWorkflow<'a> {
    pub fn new(
        store_root: impl Into<PathBuf>,
        prompt: &'a mut dyn Prompt,
        active: &'a dyn ActiveSession,
    ) -> Self {
        Self {
            store_root: store_root.into(),
            prompt,
            active,
            projects: Vec::new(),
        }
    }

    /// Drive the workflow until it reaches a terminal stage.
    pub fn run(mut self) -> RelocationOutcome {
        let mut stage = Stage::ChooseSource;
        while !stage.is_terminal() {
            stage = self.step(stage);
        }

        match stage {
            Stage::Done { from, to } => RelocationOutcome::Moved { from, to },
            Stage::Aborted(Some(err)) => RelocationOutcome::Failed(err),
            _ => RelocationOutcome::Cancelled,
        }
    }

    pub fn step(&mut self, stage: Stage) -> Stage {
        match stage {
            Stage::ChooseSource => self.choose_source(),
            Stage::ChooseSession { source } => self.choose_session(source),
            Stage::SafetyCheck { source, session } => {
                if self.is_active(&session.path) {
                    return self.active_conflict(&session.path);
                }
                Stage::ChooseDestination { source, session }
            }
            Stage::ChooseDestination { source, session } => {
                self.choose_destination(source, session)
            }
            Stage::Confirm {
                source,
                session,
                destination,
            } => self.confirm(source, session, destination),
            Stage::Move {
                source,
                session,
                destination,
            } => self.move_session(source, session, destination),
            terminal => terminal,
        }
    }

    fn choose_source(&mut self) -> Stage {
        self.projects = match list_project_directories(&self.store_root) {
            Ok(projects) => projects,
            Err(err @ sessionkit_store::Error::EmptyStore(_)) => {
                return self.fail("No project directories found", Severity::Error, err.into());
            }
            Err(err) => {
                return self.fail("No sessions directory found", Severity::Error, err.into());
            }
        };

        let options: Vec<String> = self.projects.iter().map(|p| p.label.clone()).collect();
        match self.prompt.select("Source project directory:", &options) {
            Some(idx) if idx < self.projects.len() => Stage::ChooseSession {
                source: self.projects[idx].clone(),
            },
            _ => Stage::Aborted(None),
        }
    }

    fn choose_session(&mut self, source: ProjectDirectory) -> Stage {
        let files = match list_sessions(&source.path) {
            Ok(files) => files,
            Err(err @ sessionkit_store::Error::EmptyProject(_)) => {
                return self.fail("No sessions in this directory", Severity::Info, err.into());
            }
            Err(err) => {
                return self.fail("Could not read sessions directory", Severity::Error, err.into());
            }
        };

        let summaries: Vec<SessionSummary> = files.iter().map(|f| read_summary(f)).collect();
        let active = self.active.current_session_path();
        let labels: Vec<String> = summaries
            .iter()
            .map(|s| session_label(s, active.as_deref()))
            .collect();

        match self.prompt.select("Select session to move:", &labels) {
            Some(idx) if idx < summaries.len() => Stage::SafetyCheck {
                source,
                session: summaries[idx].clone(),
            },
            _ => Stage::Aborted(None),
        }
    }

    fn choose_destination(&mut self, source: ProjectDirectory, session: SessionSummary) -> Stage {
        let candidates: Vec<ProjectDirectory> = self
            .projects
            .iter()
            .filter(|p| p.encoded_name != source.encoded_name)
            .cloned()
            .collect();

        if candidates.is_empty() {
            return self.fail(
                "No other project directories to move to",
                Severity::Error,
                Error::NoDestination,
            );
        }

        let options: Vec<String> = candidates.iter().map(|p| p.label.clone()).collect();
        match self.prompt.select("Destination project directory:", &options) {
            Some(idx) if idx < candidates.len() => Stage::Confirm {
                source,
                session,
                destination: candidates[idx].clone(),
            },
            _ => Stage::Aborted(None),
        }
    }

    fn confirm(
        &mut self,
        source: ProjectDirectory,
        session: SessionSummary,
        destination: ProjectDirectory,
    ) -> Stage {
        let label = session
            .title()
            .map(str::to_string)
            .unwrap_or_else(|| session.file_name());
        let detail = format!(
            "\"{}\"\n\nFrom: {}\nTo:   {}",
            label, source.label, destination.label
        );

        if !self.prompt.confirm("Move session?", &detail) {
            self.prompt.notify("Cancelled", Severity::Info);
            return Stage::Aborted(None);
        }

        Stage::Move {
            source,
            session,
            destination,
        }
    }

    fn move_session(
        &mut self,
        _source: ProjectDirectory,
        session: SessionSummary,
        destination: ProjectDirectory,
    ) -> Stage {
        // The marker may have moved while the operator was deciding.
        if self.is_active(&session.path) {
            return self.active_conflict(&session.path);
        }

        match relocate_transcript(&session.path, &destination.path) {
            Ok(to) => {
                self.prompt.notify(
                    &format!("Moved session to {}", destination.label),
                    Severity::Info,
                );
                Stage::Done {
                    from: session.path,
                    to,
                }
            }
            Err(err) => {
                let message = format!("Failed to move: {}", err);
                self.fail(&message, Severity::Error, err.into())
            }
        }
    }

    fn is_active(&self, path: &Path) -> bool {
        self.active
            .current_session_path()
            .is_some_and(|current| paths_equal(&current, path))
    }

    fn active_conflict(&mut self, path: &Path) -> Stage {
        self.fail(
            "Cannot move the currently active session!",
            Severity::Error,
            Error::ActiveSessionConflict(path.to_path_buf()),
        )
    }

    fn fail(&mut self, message: &str, severity: Severity, err: Error) -> Stage {
        debug!(error = %err, "relocation aborted");
        self.prompt.notify(message, severity);
        Stage::Aborted(Some(err))
    }
}
