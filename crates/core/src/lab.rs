// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lab records: modules, checkpoints, journal entries

use crate::status::{CheckpointStatus, JournalType, ModuleStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sub-task of a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabCheckpoint {
    pub id: i64,
    pub module_id: i64,
    pub title: String,
    pub status: CheckpointStatus,
    pub evidence: String,
    #[serde(skip)]
    pub sort_order: i64,
    pub updated_at: DateTime<Utc>,
}

impl LabCheckpoint {
    pub fn is_done(&self) -> bool {
        self.status == CheckpointStatus::Done
    }
}

/// Labeled unit of lab work, owning its checkpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabModule {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub objective: String,
    pub owner: String,
    pub status: ModuleStatus,
    pub sort_order: i64,
    pub updated_at: DateTime<Utc>,
    pub checkpoints: Vec<LabCheckpoint>,
}

impl LabModule {
    /// Find one of this module's checkpoints
    pub fn checkpoint(&self, id: i64) -> Option<&LabCheckpoint> {
        self.checkpoints.iter().find(|c| c.id == id)
    }
}

/// Append-only operational log record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabJournalEntry {
    pub id: i64,
    #[serde(rename = "type")]
    pub entry_type: JournalType,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A validated request to append to the journal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJournalEntry {
    pub entry_type: JournalType,
    /// Already trimmed and non-empty
    pub message: String,
}

impl NewJournalEntry {
    /// Validate raw caller input.
    ///
    /// The type is checked first, then the message is trimmed and must not be empty.
    pub fn parse(entry_type: &str, message: &str) -> Result<Self, crate::LabError> {
        let entry_type = entry_type.parse::<JournalType>()?;
        let message = message.trim();
        if message.is_empty() {
            return Err(crate::LabError::EmptyMessage);
        }
        Ok(Self {
            entry_type,
            message: message.to_string(),
        })
    }
}

/// Sort modules and their checkpoints into listing order: `sort_order`, then `id`.
pub fn sort_modules(modules: &mut [LabModule]) {
    modules.sort_by_key(|m| (m.sort_order, m.id));
    for module in modules.iter_mut() {
        module.checkpoints.sort_by_key(|c| (c.sort_order, c.id));
    }
}

/// Sort journal entries newest first, ties broken by id descending.
pub fn sort_journal(entries: &mut [LabJournalEntry]) {
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

#[cfg(test)]
#[path = "lab_tests.rs"]
mod tests;
