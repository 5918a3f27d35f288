// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Always-failing repository for exercising fallback paths
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::error::RepoError;
use crate::repo::LabRepository;
use async_trait::async_trait;
use lh_core::{
    CheckpointStatus, LabCheckpoint, LabJournalEntry, LabModule, ModuleStatus, NewJournalEntry,
};
use std::sync::{Arc, Mutex};

/// Recorded repository call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoCall {
    ListModules,
    UpdateModuleStatus { id: i64, status: ModuleStatus },
    UpdateCheckpointStatus { id: i64, status: CheckpointStatus },
    ListJournal { limit: usize },
    CreateJournalEntry { message: String },
    Health,
}

/// Repository whose every call fails with a corrupt-row error
#[derive(Clone, Default)]
pub struct FailingLabRepository {
    calls: Arc<Mutex<Vec<RepoCall>>>,
}

impl FailingLabRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<RepoCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn fail<T>(&self, call: RepoCall) -> Result<T, RepoError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
        Err(RepoError::Corrupt("injected failure".to_string()))
    }
}

#[async_trait]
impl LabRepository for FailingLabRepository {
    async fn list_modules(&self) -> Result<Vec<LabModule>, RepoError> {
        self.fail(RepoCall::ListModules)
    }

    async fn update_module_status(
        &self,
        id: i64,
        status: ModuleStatus,
    ) -> Result<Option<LabModule>, RepoError> {
        self.fail(RepoCall::UpdateModuleStatus { id, status })
    }

    async fn update_checkpoint_status(
        &self,
        id: i64,
        status: CheckpointStatus,
    ) -> Result<Option<LabCheckpoint>, RepoError> {
        self.fail(RepoCall::UpdateCheckpointStatus { id, status })
    }

    async fn list_journal(&self, limit: usize) -> Result<Vec<LabJournalEntry>, RepoError> {
        self.fail(RepoCall::ListJournal { limit })
    }

    async fn create_journal_entry(
        &self,
        entry: NewJournalEntry,
    ) -> Result<LabJournalEntry, RepoError> {
        self.fail(RepoCall::CreateJournalEntry {
            message: entry.message,
        })
    }

    async fn health(&self) -> Result<(), RepoError> {
        self.fail(RepoCall::Health)
    }
}
