// Error types
pub mod error;

// Transcript record schema
pub mod schema;

// Streaming transcript reader
pub mod reader;

// Store enumeration
pub mod index;

// Atomic transcript move
pub mod relocate;

pub use error::{Error, Result};
pub use index::{list_project_directories, list_sessions, modified_local_date};
pub use reader::{
    ExcerptRules, FIRST_MESSAGE_CHARS, SUMMARY_LINE_CAP, read_activity, read_activity_with,
    read_summary,
};
pub use relocate::relocate_transcript;
pub use schema::{ContentBlock, MessageContent, TranscriptRecord, decode_line};
