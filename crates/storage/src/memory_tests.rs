// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeDelta;
use lh_core::{FakeClock, JournalType};

fn repo() -> (MemoryLabRepository<FakeClock>, FakeClock) {
    let clock = FakeClock::new();
    (MemoryLabRepository::with_clock(clock.clone()), clock)
}

fn note(message: &str) -> NewJournalEntry {
    NewJournalEntry::parse("note", message).unwrap()
}

#[tokio::test]
async fn lists_seeded_modules_in_order() {
    let (repo, _) = repo();
    let modules = repo.list_modules().await.unwrap();
    let codes: Vec<&str> = modules.iter().map(|m| m.code.as_str()).collect();
    assert_eq!(codes, vec!["LZ-NET", "AKS-BASE", "IDENTITY", "OBS"]);
    assert_eq!(modules[1].checkpoints.len(), 3);
}

#[tokio::test]
async fn update_module_status_sets_fresh_timestamp() {
    let (repo, clock) = repo();
    let updated = repo
        .update_module_status(3, ModuleStatus::InProgress)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, ModuleStatus::InProgress);
    assert_eq!(updated.updated_at, clock.now());
    assert_eq!(updated.checkpoints.len(), 2);

    let listed = repo.list_modules().await.unwrap();
    assert_eq!(listed[2].status, ModuleStatus::InProgress);
}

#[tokio::test]
async fn unknown_module_is_none() {
    let (repo, _) = repo();
    let result = repo
        .update_module_status(999, ModuleStatus::Completed)
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn checkpoint_toggle_bumps_checkpoint_and_module() {
    let (repo, _) = repo();
    let before = repo.list_modules().await.unwrap();

    let done = repo
        .update_checkpoint_status(202, CheckpointStatus::Done)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(done.status, CheckpointStatus::Done);
    assert_eq!(done.module_id, 2);
    assert!(done.updated_at > before[1].checkpoints[1].updated_at);

    let after = repo.list_modules().await.unwrap();
    assert!(after[1].updated_at > before[1].updated_at);
    assert!(after[1].checkpoint(202).unwrap().is_done());
}

#[tokio::test]
async fn repeated_toggles_strictly_increase_updated_at() {
    // Clock does not move between writes
    let (repo, _) = repo();
    let first = repo
        .update_checkpoint_status(201, CheckpointStatus::Todo)
        .await
        .unwrap()
        .unwrap();
    let second = repo
        .update_checkpoint_status(201, CheckpointStatus::Done)
        .await
        .unwrap()
        .unwrap();
    assert!(second.updated_at > first.updated_at);
    assert_eq!(second.status, CheckpointStatus::Done);
}

#[tokio::test]
async fn rewound_clock_still_moves_updated_at_forward() {
    let (repo, clock) = repo();
    let first = repo
        .update_module_status(4, ModuleStatus::Blocked)
        .await
        .unwrap()
        .unwrap();
    clock.set(first.updated_at - TimeDelta::days(30));
    let second = repo
        .update_module_status(4, ModuleStatus::Planned)
        .await
        .unwrap()
        .unwrap();
    assert!(second.updated_at > first.updated_at);
}

#[tokio::test]
async fn unknown_checkpoint_is_none() {
    let (repo, _) = repo();
    assert!(repo
        .update_checkpoint_status(7, CheckpointStatus::Done)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn journal_lists_newest_first_with_limit() {
    let (repo, _) = repo();
    let all = repo.list_journal(20).await.unwrap();
    let ids: Vec<i64> = all.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);

    let one = repo.list_journal(1).await.unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].entry_type, JournalType::Incident);
}

#[tokio::test]
async fn created_entries_continue_ids_and_lead_the_journal() {
    let (repo, clock) = repo();
    let first = repo.create_journal_entry(note("first")).await.unwrap();
    assert_eq!(first.id, 4);
    assert_eq!(first.created_at, clock.now());

    let second = repo.create_journal_entry(note("second")).await.unwrap();
    assert_eq!(second.id, 5);

    // Same timestamp; id breaks the tie
    let listed = repo.list_journal(2).await.unwrap();
    assert_eq!(listed[0].id, 5);
    assert_eq!(listed[1].id, 4);
}

#[tokio::test]
async fn clones_share_state() {
    let (repo, clock) = repo();
    let other = repo.clone();
    clock.advance(TimeDelta::minutes(5));
    other.create_journal_entry(note("shared")).await.unwrap();
    assert_eq!(repo.list_journal(1).await.unwrap()[0].message, "shared");
}

#[tokio::test]
async fn fresh_repositories_do_not_share_state() {
    let (a, _) = repo();
    let (b, _) = repo();
    a.update_module_status(1, ModuleStatus::Blocked).await.unwrap();
    let modules = b.list_modules().await.unwrap();
    assert_eq!(modules[0].status, ModuleStatus::Completed);
}
