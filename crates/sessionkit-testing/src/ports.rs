//! Scripted port implementations for driving workflows without a terminal.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use sessionkit_runtime::{ActiveSession, Outbound, Prompt};
use sessionkit_types::Severity;

/// A select call as the workflow issued it
#[derive(Debug, Clone)]
pub struct SelectCall {
    pub prompt: String,
    pub options: Vec<String>,
}

type Hook = Box<dyn FnMut()>;

/// Prompt that answers from queues and records everything it was shown.
///
/// Unscripted selects cancel and unscripted confirms decline.
#[derive(Default)]
pub struct ScriptedPrompt {
    selections: VecDeque<Option<usize>>,
    confirmations: VecDeque<bool>,
    before_confirm: Option<Hook>,
    pub selects: Vec<SelectCall>,
    pub confirms: Vec<(String, String)>,
    pub notifications: Vec<(String, Severity)>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn choose(mut self, choice: usize) -> Self {
        self.selections.push_back(Some(choice));
        self
    }

    pub fn cancel(mut self) -> Self {
        self.selections.push_back(None);
        self
    }

    pub fn answer(mut self, answer: bool) -> Self {
        self.confirmations.push_back(answer);
        self
    }

    /// Run `hook` right before the next confirm is answered.
    pub fn before_confirm(mut self, hook: impl FnMut() + 'static) -> Self {
        self.before_confirm = Some(Box::new(hook));
        self
    }

    pub fn last_notification(&self) -> Option<&(String, Severity)> {
        self.notifications.last()
    }

    pub fn notified(&self, message: &str, severity: Severity) -> bool {
        self.notifications
            .iter()
            .any(|(m, s)| m == message && *s == severity)
    }
}

impl Prompt for ScriptedPrompt {
    fn select(&mut self, prompt: &str, options: &[String]) -> Option<usize> {
        self.selects.push(SelectCall {
            prompt: prompt.to_string(),
            options: options.to_vec(),
        });
        self.selections.pop_front().flatten()
    }

    fn confirm(&mut self, title: &str, detail: &str) -> bool {
        if let Some(hook) = self.before_confirm.as_mut() {
            hook();
        }
        self.confirms.push((title.to_string(), detail.to_string()));
        self.confirmations.pop_front().unwrap_or(false)
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        self.notifications.push((message.to_string(), severity));
    }
}

/// Active-session marker that tests can move while a workflow runs
#[derive(Debug, Clone, Default)]
pub struct SharedActiveSession {
    current: Arc<Mutex<Option<PathBuf>>>,
}

impl SharedActiveSession {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            current: Arc::new(Mutex::new(path)),
        }
    }

    pub fn set(&self, path: Option<PathBuf>) {
        *self.current.lock().expect("active session lock poisoned") = path;
    }
}

impl ActiveSession for SharedActiveSession {
    fn current_session_path(&self) -> Option<PathBuf> {
        self.current
            .lock()
            .expect("active session lock poisoned")
            .clone()
    }
}

/// Outbound channel that keeps every payload
#[derive(Debug, Default)]
pub struct CapturedOutbound {
    pub sent: Vec<String>,
}

impl Outbound for CapturedOutbound {
    fn send(&mut self, text: &str) -> sessionkit_runtime::Result<()> {
        self.sent.push(text.to_string());
        Ok(())
    }
}
