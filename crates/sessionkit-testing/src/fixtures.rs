//! Transcript fixtures.
//!
//! Builds JSONL transcripts line by line in the agent's on-disk format:
//! a `session` header, optional `session_info` names, and `message` records
//! with either string or block content.

use serde_json::{Value, json};

/// Fluent builder for a transcript file body
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript starting with a session header.
    pub fn with_header(id: &str, timestamp: &str, cwd: &str) -> Self {
        Self::new().record(json!({
            "type": "session",
            "version": 3,
            "id": id,
            "timestamp": timestamp,
            "cwd": cwd,
        }))
    }

    pub fn record(mut self, value: Value) -> Self {
        self.lines.push(value.to_string());
        self
    }

    /// Append a raw line verbatim (use for malformed input).
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn session_name(self, name: &str) -> Self {
        self.record(json!({ "type": "session_info", "name": name }))
    }

    /// User message with plain string content
    pub fn user_text(self, text: &str) -> Self {
        self.record(json!({
            "type": "message",
            "message": { "role": "user", "content": text },
        }))
    }

    /// User message with one text block per entry
    pub fn user_blocks(self, texts: &[&str]) -> Self {
        let blocks: Vec<Value> = texts
            .iter()
            .map(|t| json!({ "type": "text", "text": t }))
            .collect();
        self.record(json!({
            "type": "message",
            "message": { "role": "user", "content": blocks },
        }))
    }

    pub fn assistant_text(self, text: &str) -> Self {
        self.record(json!({
            "type": "message",
            "message": {
                "role": "assistant",
                "content": [{ "type": "text", "text": text }],
            },
        }))
    }

    /// Filler records the store tools ignore
    pub fn noise(mut self, count: usize) -> Self {
        for i in 0..count {
            self = self.record(json!({ "type": "model_change", "seq": i }));
        }
        self
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Body with a trailing newline after every line
    pub fn build(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Transcript filename in the agent's `<timestamp>_<uuid>.jsonl` shape
///
/// `timestamp` is an RFC 3339 instant such as `2026-02-26T05:03:11.234Z`.
pub fn transcript_file_name(timestamp: &str) -> String {
    let stamp = timestamp.replace([':', '.'], "-");
    format!("{}_{}.jsonl", stamp, uuid::Uuid::new_v4())
}
