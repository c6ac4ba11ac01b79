use sessionkit_types::*;
use std::path::PathBuf;

#[test]
fn test_truncate_chars() {
    assert_eq!(truncate_chars("short", 10), "short");
    assert_eq!(truncate_chars("exactly", 7), "exactly");
    assert_eq!(truncate_chars("this is a very long string", 10), "this is a ");
}

#[test]
fn test_truncate_chars_multibyte() {
    let text = "héllo wörld";
    let truncated = truncate_chars(text, 4);
    assert_eq!(truncated, "héll");
    assert_eq!(truncated.chars().count(), 4);
}

#[test]
fn test_basename_or_self() {
    assert_eq!(basename_or_self("/home/user/project"), "project");
    assert_eq!(basename_or_self("project"), "project");
    assert_eq!(basename_or_self("/"), "/");
}

#[test]
fn test_summary_title_priority() {
    let mut summary = SessionSummary::empty(PathBuf::from("/tmp/a.jsonl"));
    assert_eq!(summary.title(), None);

    summary.first_user_message = Some("fix the parser".to_string());
    assert_eq!(summary.title(), Some("fix the parser"));

    summary.name = Some("parser work".to_string());
    assert_eq!(summary.title(), Some("parser work"));
}

#[test]
fn test_summary_usable_requires_header() {
    let mut summary = SessionSummary::empty("/tmp/a.jsonl");
    assert!(!summary.is_usable());

    summary.session_id = "abc".to_string();
    assert!(!summary.is_usable());

    summary.timestamp = "2026-02-26T05:03:11.234Z".to_string();
    assert!(summary.is_usable());
    assert_eq!(summary.file_name(), "a.jsonl");
}

#[test]
fn test_recap_prompt_layout() {
    let mut recap = Recap::new("2026-02-26");
    recap.absorb("/home/a/uploader", vec!["Implemented the retry logic".to_string()]);

    let prompt = recap.to_prompt_with_header("Summarize.");
    assert_eq!(
        prompt,
        "Summarize.\n\n## uploader (/home/a/uploader)\nUser prompts:\n- Implemented the retry logic\n\n"
    );
}

#[test]
fn test_severity_serializes_snake_case() {
    let json = serde_json::to_string(&Severity::Warning).unwrap();
    assert_eq!(json, "\"warning\"");
}

#[test]
fn test_recap_prompt_uses_stock_header() {
    let mut recap = Recap::new("2026-02-26");
    recap.absorb("/home/joe/api", vec!["add pagination".to_string()]);

    let prompt = recap.to_prompt();
    assert!(prompt.starts_with(DEFAULT_RECAP_HEADER));
    assert!(prompt.ends_with("## api (/home/joe/api)\nUser prompts:\n- add pagination\n\n"));
    assert_eq!(prompt, recap.to_prompt_with_header(DEFAULT_RECAP_HEADER));
}
