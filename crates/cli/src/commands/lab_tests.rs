// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use lh_storage::{FailingLabRepository, MemoryLabRepository};
use yare::parameterized;

type TestStore = LabStore<FailingLabRepository, MemoryLabRepository>;

fn store() -> TestStore {
    LabStore::new(FailingLabRepository::new(), MemoryLabRepository::new())
}

async fn run(store: &TestStore, command: LabCommand) -> anyhow::Result<()> {
    handle(LabArgs { command }, store, OutputFormat::Json).await
}

fn message(err: anyhow::Error) -> String {
    err.downcast::<LhError>().unwrap().message
}

#[parameterized(
    zero = { "0", "Invalid module id '0'" },
    word = { "abc", "Invalid module id 'abc'" },
    unknown = { "99", "Module 99 not found" },
)]
#[test_macro(tokio::test)]
async fn module_status_errors(id: &str, expected: &str) {
    let err = run(
        &store(),
        LabCommand::ModuleStatus {
            id: id.to_string(),
            status: "blocked".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(message(err), expected);
}

#[tokio::test]
async fn invalid_status_is_reported_before_lookup() {
    let store = store();
    let err = run(
        &store,
        LabCommand::Checkpoint {
            id: "99".to_string(),
            status: "skipped".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(message(err), "invalid checkpoint status: skipped");
    assert!(store.primary().calls().is_empty());
}

#[tokio::test]
async fn unknown_checkpoint_is_not_found() {
    let err = run(
        &store(),
        LabCommand::Checkpoint {
            id: "7".to_string(),
            status: "done".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(message(err), "Checkpoint 7 not found");
}

#[tokio::test]
async fn checkpoint_update_lands_in_fallback() {
    let store = store();
    run(
        &store,
        LabCommand::Checkpoint {
            id: "202".to_string(),
            status: "done".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(store.overview().await.unwrap().completion_percent, 56);
}

#[tokio::test]
async fn modules_view_lists_checkpoints_and_totals() {
    let modules = store().list_modules().await.unwrap();
    let overview = LabOverview::compute(&modules);
    let text = ModulesView { modules, overview }.to_string();

    assert!(text.contains("LZ-NET"));
    assert!(text.contains("[x] 101"));
    assert!(text.contains("Checkpoints: 4/9 done (44%)"));
    assert!(text.contains("4 total, 1 completed, 1 blocked"));
}

#[tokio::test]
async fn overview_view_serializes_recent_journal() {
    let store = store();
    let view = OverviewView {
        overview: store.overview().await.unwrap(),
        recent_journal: store.list_journal(OVERVIEW_JOURNAL_LIMIT).await.unwrap(),
    };
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["overview"]["completionPercent"], 44);
    assert_eq!(json["recentJournal"].as_array().unwrap().len(), 3);
    assert!(view.to_string().contains("Recent journal"));
}

#[tokio::test]
async fn update_view_names_new_status() {
    let store = store();
    let module = store
        .update_module_status(3, "in_progress")
        .await
        .unwrap()
        .unwrap();
    let overview = store.overview().await.unwrap();
    let text = ModuleUpdateView { module, overview }.to_string();
    assert!(text.starts_with("Module 3 (IDENTITY) is now in_progress"));
}
