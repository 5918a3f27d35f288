// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use lh_core::JournalType;
use lh_storage::{FailingLabRepository, MemoryLabRepository};

type TestStore = LabStore<FailingLabRepository, MemoryLabRepository>;

fn store() -> TestStore {
    LabStore::new(FailingLabRepository::new(), MemoryLabRepository::new())
}

async fn run(store: &TestStore, command: JournalCommand) -> anyhow::Result<()> {
    handle(JournalArgs { command }, store, OutputFormat::Json).await
}

#[tokio::test]
async fn add_joins_message_words() {
    let store = store();
    run(
        &store,
        JournalCommand::Add {
            entry_type: "note".to_string(),
            message: vec!["rotated".to_string(), "keys".to_string()],
        },
    )
    .await
    .unwrap();

    let latest = store.list_journal(1).await.unwrap().remove(0);
    assert_eq!(latest.message, "rotated keys");
    assert_eq!(latest.entry_type, JournalType::Note);
}

#[tokio::test]
async fn add_rejects_unknown_type() {
    let err = run(
        &store(),
        JournalCommand::Add {
            entry_type: "alert".to_string(),
            message: vec!["x".to_string()],
        },
    )
    .await
    .unwrap_err();
    let err = err.downcast::<LhError>().unwrap();
    assert_eq!(err.message, "invalid journal type: alert");
}

#[tokio::test]
async fn add_rejects_blank_message() {
    let err = run(
        &store(),
        JournalCommand::Add {
            entry_type: "note".to_string(),
            message: vec!["  ".to_string()],
        },
    )
    .await
    .unwrap_err();
    assert_eq!(
        err.downcast::<LhError>().unwrap().message,
        "message is required"
    );
}

#[tokio::test]
async fn list_with_bad_limit_still_lists() {
    let store = store();
    run(
        &store,
        JournalCommand::List {
            limit: Some("0".to_string()),
        },
    )
    .await
    .unwrap();
    assert!(store
        .primary()
        .calls()
        .contains(&lh_storage::RepoCall::ListJournal { limit: 20 }));
}

#[tokio::test]
async fn view_renders_newest_first() {
    let entries = store().list_journal(20).await.unwrap();
    let text = JournalView { entries }.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("#3"));
    assert!(lines[0].contains("incident"));
}

#[test]
fn empty_view_says_so() {
    let text = JournalView { entries: vec![] }.to_string();
    assert_eq!(text, "No journal entries\n");
}

#[test]
fn entry_view_serializes_under_entry_key() {
    let entry = lh_core::seed::journal().remove(0);
    let json = serde_json::to_value(EntryView { entry }).unwrap();
    assert!(json["entry"]["type"].is_string());
    assert!(json["entry"]["createdAt"].is_string());
}
