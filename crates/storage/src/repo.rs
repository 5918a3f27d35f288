// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backend contract for lab state

use crate::error::RepoError;
use async_trait::async_trait;
use lh_core::{
    CheckpointStatus, LabCheckpoint, LabJournalEntry, LabModule, ModuleStatus, NewJournalEntry,
};

/// A source of lab modules, checkpoints and journal entries
///
/// Inputs are already validated; implementations only fail when the backend
/// itself is unavailable. Unknown ids are `Ok(None)`.
#[async_trait]
pub trait LabRepository: Clone + Send + Sync + 'static {
    /// Modules ordered by `(sort_order, id)`, each with ordered checkpoints
    async fn list_modules(&self) -> Result<Vec<LabModule>, RepoError>;

    async fn update_module_status(
        &self,
        id: i64,
        status: ModuleStatus,
    ) -> Result<Option<LabModule>, RepoError>;

    /// Also bumps the owning module's `updated_at`
    async fn update_checkpoint_status(
        &self,
        id: i64,
        status: CheckpointStatus,
    ) -> Result<Option<LabCheckpoint>, RepoError>;

    /// Up to `limit` entries, newest first
    async fn list_journal(&self, limit: usize) -> Result<Vec<LabJournalEntry>, RepoError>;

    async fn create_journal_entry(
        &self,
        entry: NewJournalEntry,
    ) -> Result<LabJournalEntry, RepoError>;

    /// Cheap connectivity probe
    async fn health(&self) -> Result<(), RepoError>;
}
