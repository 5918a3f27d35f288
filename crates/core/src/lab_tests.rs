// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::seed;
use crate::LabError;
use chrono::TimeDelta;

#[test]
fn new_journal_entry_trims_message() {
    let entry = NewJournalEntry::parse("deploy", "  rolled out v2  ").unwrap();
    assert_eq!(entry.entry_type, JournalType::Deploy);
    assert_eq!(entry.message, "rolled out v2");
}

#[test]
fn new_journal_entry_rejects_blank_message() {
    assert_eq!(NewJournalEntry::parse("note", "  "), Err(LabError::EmptyMessage));
    assert_eq!(NewJournalEntry::parse("note", ""), Err(LabError::EmptyMessage));
}

#[test]
fn new_journal_entry_checks_type_before_message() {
    assert_eq!(
        NewJournalEntry::parse("alert", ""),
        Err(LabError::InvalidJournalType("alert".to_string()))
    );
}

#[test]
fn sort_modules_orders_by_sort_order_then_id() {
    let mut modules = seed::modules();
    modules.reverse();
    modules[0].sort_order = 2; // OBS now ties with AKS-BASE
    for module in &mut modules {
        module.checkpoints.reverse();
    }

    sort_modules(&mut modules);

    let codes: Vec<_> = modules.iter().map(|m| m.code.as_str()).collect();
    assert_eq!(codes, vec!["LZ-NET", "AKS-BASE", "OBS", "IDENTITY"]);
    let aks: Vec<_> = modules[1].checkpoints.iter().map(|c| c.id).collect();
    assert_eq!(aks, vec![201, 202, 203]);
}

#[test]
fn sort_journal_is_newest_first_with_id_tiebreak() {
    let mut entries = seed::journal();
    let mut tied = entries[2].clone();
    tied.id = 9;
    entries.push(tied);

    sort_journal(&mut entries);

    let ids: Vec<_> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![9, 3, 2, 1]);
}

#[test]
fn module_finds_own_checkpoint() {
    let modules = seed::modules();
    assert!(modules[1].checkpoint(202).is_some());
    assert!(modules[1].checkpoint(101).is_none());
}

#[test]
fn journal_entry_serializes_type_key() {
    let mut entry = seed::journal().remove(0);
    entry.created_at += TimeDelta::seconds(1);
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["type"], "deploy");
    assert!(json.get("createdAt").is_some());
}
