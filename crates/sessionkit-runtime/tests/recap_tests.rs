//! Daily recap selection, grouping and hand-off.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use sessionkit_runtime::{
    Error, Outbound, RecapOutcome, RecapRequest, build_recap, run_recap,
};
use sessionkit_store::ExcerptRules;
use sessionkit_testing::{CapturedOutbound, ScriptedPrompt, StoreWorld, Transcript};
use sessionkit_types::{DEFAULT_RECAP_HEADER, Severity};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Write a transcript and pin its mtime to `date`.
fn session_on(
    world: &StoreWorld,
    encoded: &str,
    file_name: &str,
    transcript: Transcript,
    date: NaiveDate,
) -> Result<PathBuf> {
    let path = world.add_transcript(encoded, file_name, &transcript)?;
    world.set_modified_on(&path, date)?;
    Ok(path)
}

/// Three projects on the same day, two sharing the `proj` basename
fn busy_day(world: &StoreWorld, date: NaiveDate) -> Result<()> {
    session_on(
        world,
        "--home-a-proj--",
        "2026-02-26T08-00-00-000Z_a.jsonl",
        Transcript::with_header("a", "2026-02-26T08:00:00.000Z", "/home/a/proj")
            .user_text("add retry to the uploader")
            .assistant_text("Added exponential backoff.")
            .user_text("thx"),
        date,
    )?;
    session_on(
        world,
        "--home-b-other-proj--",
        "2026-02-26T10-00-00-000Z_b.jsonl",
        Transcript::with_header("b", "2026-02-26T10:00:00.000Z", "/home/b/other/proj")
            .user_text("wire the retry into the cli"),
        date,
    )?;
    session_on(
        world,
        "--home-joe-notes--",
        "2026-02-26T11-00-00-000Z_c.jsonl",
        Transcript::with_header("c", "2026-02-26T11:00:00.000Z", "/home/joe/notes")
            .user_blocks(&["draft the release notes", "ok"]),
        date,
    )?;
    Ok(())
}

#[tokio::test]
async fn test_groups_by_project_basename() -> Result<()> {
    let world = StoreWorld::new();
    let date = day(2026, 2, 26);
    busy_day(&world, date)?;

    let recap = build_recap(world.root(), date, ExcerptRules::default()).await;

    assert_eq!(recap.date, "2026-02-26");
    let projects: Vec<&str> = recap.groups.iter().map(|g| g.project.as_str()).collect();
    assert_eq!(projects, vec!["proj", "notes"]);
    assert_eq!(recap.groups[0].cwd, "/home/a/proj");
    assert_eq!(
        recap.groups[0].user_messages,
        vec!["add retry to the uploader", "wire the retry into the cli"]
    );
    assert_eq!(recap.groups[1].user_messages, vec!["draft the release notes"]);
    Ok(())
}

#[tokio::test]
async fn test_payload_layout() -> Result<()> {
    let world = StoreWorld::new();
    let date = day(2026, 2, 26);
    busy_day(&world, date)?;

    let mut prompt = ScriptedPrompt::new();
    let mut outbound = CapturedOutbound::default();
    let request = RecapRequest {
        store_root: world.root().to_path_buf(),
        date: Some("2026-02-26".to_string()),
        rules: ExcerptRules::default(),
        header: DEFAULT_RECAP_HEADER,
    };

    let outcome = run_recap(request, &mut prompt, &mut outbound).await?;
    assert_eq!(outcome, RecapOutcome::Sent { projects: 2 });
    assert_eq!(outbound.sent.len(), 1);
    assert!(prompt.notifications.is_empty());

    insta::assert_snapshot!(outbound.sent[0], @r"
Summarize the following session activity into project-wise one-liners.
Format: **project**: <concise one-liner summary of ALL work done>
Group by project. Be specific about what was done (features, fixes, configs).

## proj (/home/a/proj)
User prompts:
- add retry to the uploader
- wire the retry into the cli

## notes (/home/joe/notes)
User prompts:
- draft the release notes
");
    Ok(())
}

#[tokio::test]
async fn test_selection_uses_modification_date_only() -> Result<()> {
    let world = StoreWorld::new();
    let date = day(2026, 2, 26);

    // filename says the 26th, file was last touched on the 25th
    session_on(
        &world,
        "--home-joe-api--",
        "2026-02-26T07-00-00-000Z_stale.jsonl",
        Transcript::with_header("stale", "2026-02-26T07:00:00.000Z", "/home/joe/api")
            .user_text("this should not appear"),
        day(2026, 2, 25),
    )?;
    // started days earlier, resumed on the 26th
    session_on(
        &world,
        "--home-joe-api--",
        "2026-02-20T07-00-00-000Z_resumed.jsonl",
        Transcript::with_header("resumed", "2026-02-20T07:00:00.000Z", "/home/joe/api")
            .user_text("pick the migration back up"),
        date,
    )?;

    let recap = build_recap(world.root(), date, ExcerptRules::default()).await;

    assert_eq!(recap.groups.len(), 1);
    assert_eq!(recap.groups[0].user_messages, vec!["pick the migration back up"]);
    Ok(())
}

#[tokio::test]
async fn test_files_fold_in_filename_order() -> Result<()> {
    let world = StoreWorld::new();
    let date = day(2026, 2, 26);

    let mut expected = Vec::new();
    for hour in 0..16u32 {
        let text = format!("prompt number {:02}", hour);
        // uneven sizes so reads finish out of order
        let filler = 2000 - hour as usize * 120;
        session_on(
            &world,
            "--home-joe-api--",
            &format!("2026-02-26T{:02}-00-00-000Z_s.jsonl", hour),
            Transcript::with_header("s", "2026-02-26T00:00:00.000Z", "/home/joe/api")
                .noise(filler)
                .user_text(&text),
            date,
        )?;
        expected.push(text);
    }

    let recap = build_recap(world.root(), date, ExcerptRules::default()).await;
    assert_eq!(recap.groups.len(), 1);
    assert_eq!(recap.groups[0].user_messages, expected);
    Ok(())
}

#[tokio::test]
async fn test_sessions_without_prompts_are_omitted() -> Result<()> {
    let world = StoreWorld::new();
    let date = day(2026, 2, 26);

    session_on(
        &world,
        "--home-joe-quiet--",
        "2026-02-26T07-00-00-000Z_q.jsonl",
        Transcript::with_header("q", "2026-02-26T07:00:00.000Z", "/home/joe/quiet")
            .user_text("yes")
            .assistant_text("Done."),
        date,
    )?;
    let noisy = world.add_file("--home-joe-quiet--", "2026-02-26T08-00-00-000Z_x.jsonl", "{{{{\n")?;
    world.set_modified_on(&noisy, date)?;

    let recap = build_recap(world.root(), date, ExcerptRules::default()).await;
    assert!(recap.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_excerpt_rules_are_applied() -> Result<()> {
    let world = StoreWorld::new();
    let date = day(2026, 2, 26);
    let long = "refactor ".repeat(10);

    session_on(
        &world,
        "--home-joe-api--",
        "2026-02-26T07-00-00-000Z_a.jsonl",
        Transcript::with_header("a", "2026-02-26T07:00:00.000Z", "/home/joe/api")
            .user_text("fix it")
            .user_text(&long),
        date,
    )?;

    let rules = ExcerptRules {
        short_cutoff: 6,
        max_chars: 20,
    };
    let recap = build_recap(world.root(), date, rules).await;
    assert_eq!(recap.groups[0].user_messages, vec![long[..20].to_string()]);
    Ok(())
}

#[tokio::test]
async fn test_prompt_just_over_cutoff_is_kept() -> Result<()> {
    let world = StoreWorld::new();
    let date = day(2026, 2, 26);

    session_on(
        &world,
        "--home-joe-api--",
        "2026-02-26T07-00-00-000Z_a.jsonl",
        Transcript::with_header("a", "2026-02-26T07:00:00.000Z", "/home/joe/api")
            .user_text("thanks")
            .user_text("fine!"),
        date,
    )?;

    let recap = build_recap(world.root(), date, ExcerptRules::default()).await;
    assert_eq!(recap.groups[0].user_messages, vec!["thanks"]);
    Ok(())
}

#[tokio::test]
async fn test_empty_day_warns_and_sends_nothing() -> Result<()> {
    let world = StoreWorld::new();
    busy_day(&world, day(2026, 2, 26))?;

    let mut prompt = ScriptedPrompt::new();
    let mut outbound = CapturedOutbound::default();
    let request = RecapRequest {
        store_root: world.root().to_path_buf(),
        date: Some("2026-01-01".to_string()),
        rules: ExcerptRules::default(),
        header: DEFAULT_RECAP_HEADER,
    };

    let outcome = run_recap(request, &mut prompt, &mut outbound).await?;
    assert_eq!(outcome, RecapOutcome::Empty);
    assert!(outbound.sent.is_empty());
    assert_eq!(
        prompt.notifications,
        vec![(
            "No sessions found for 2026-01-01.".to_string(),
            Severity::Warning
        )]
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_store_is_empty_recap() -> Result<()> {
    let world = StoreWorld::without_store();

    let mut prompt = ScriptedPrompt::new();
    let mut outbound = CapturedOutbound::default();
    let request = RecapRequest {
        store_root: world.root().to_path_buf(),
        date: None,
        rules: ExcerptRules::default(),
        header: DEFAULT_RECAP_HEADER,
    };

    let outcome = run_recap(request, &mut prompt, &mut outbound).await?;
    assert_eq!(outcome, RecapOutcome::Empty);
    assert!(prompt.notified("No sessions found for today.", Severity::Warning));
    assert!(!world.root().exists());
    Ok(())
}

#[tokio::test]
async fn test_invalid_date_is_reported() {
    let world = StoreWorld::new();

    let mut prompt = ScriptedPrompt::new();
    let mut outbound = CapturedOutbound::default();
    let request = RecapRequest {
        store_root: world.root().to_path_buf(),
        date: Some("yesterday".to_string()),
        rules: ExcerptRules::default(),
        header: DEFAULT_RECAP_HEADER,
    };

    let err = run_recap(request, &mut prompt, &mut outbound)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidDate(_)));
    assert!(outbound.sent.is_empty());
    assert_eq!(prompt.last_notification().unwrap().1, Severity::Error);
}

struct ClosedChannel;

impl Outbound for ClosedChannel {
    fn send(&mut self, _text: &str) -> sessionkit_runtime::Result<()> {
        Err(Error::Outbound("session is not accepting messages".to_string()))
    }
}

#[tokio::test]
async fn test_outbound_failure_is_reported() -> Result<()> {
    let world = StoreWorld::new();
    let date = day(2026, 2, 26);
    busy_day(&world, date)?;

    let mut prompt = ScriptedPrompt::new();
    let request = RecapRequest {
        store_root: world.root().to_path_buf(),
        date: Some("2026-02-26".to_string()),
        rules: ExcerptRules::default(),
        header: "Summarize briefly.",
    };

    let err = run_recap(request, &mut prompt, &mut ClosedChannel)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Outbound(_)));
    assert!(prompt.notified(
        "Failed to send recap: session is not accepting messages",
        Severity::Error
    ));
    Ok(())
}
