// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced repository wrapper for consistent observability

use crate::error::RepoError;
use crate::repo::LabRepository;
use async_trait::async_trait;
use lh_core::{
    CheckpointStatus, LabCheckpoint, LabJournalEntry, LabModule, ModuleStatus, NewJournalEntry,
};
use tracing::Instrument;

/// Wrapper that adds tracing to any LabRepository
#[derive(Clone)]
pub struct TracedLabRepository<R> {
    inner: R,
    backend: &'static str,
}

impl<R> TracedLabRepository<R> {
    pub fn new(inner: R, backend: &'static str) -> Self {
        Self { inner, backend }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

#[async_trait]
impl<R: LabRepository> LabRepository for TracedLabRepository<R> {
    async fn list_modules(&self) -> Result<Vec<LabModule>, RepoError> {
        let span = tracing::debug_span!("lab.list_modules", backend = self.backend);
        async {
            let start = std::time::Instant::now();
            let result = self.inner.list_modules().await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(modules) => tracing::debug!(count = modules.len(), elapsed_ms, "listed"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "list failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn update_module_status(
        &self,
        id: i64,
        status: ModuleStatus,
    ) -> Result<Option<LabModule>, RepoError> {
        let span = tracing::info_span!(
            "lab.update_module_status",
            backend = self.backend,
            id,
            status = %status
        );
        async {
            let start = std::time::Instant::now();
            let result = self.inner.update_module_status(id, status).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(Some(_)) => tracing::info!(elapsed_ms, "module updated"),
                Ok(None) => tracing::info!(elapsed_ms, "module not found"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "update failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn update_checkpoint_status(
        &self,
        id: i64,
        status: CheckpointStatus,
    ) -> Result<Option<LabCheckpoint>, RepoError> {
        let span = tracing::info_span!(
            "lab.update_checkpoint_status",
            backend = self.backend,
            id,
            status = %status
        );
        async {
            let start = std::time::Instant::now();
            let result = self.inner.update_checkpoint_status(id, status).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(Some(c)) => tracing::info!(elapsed_ms, module_id = c.module_id, "checkpoint updated"),
                Ok(None) => tracing::info!(elapsed_ms, "checkpoint not found"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "update failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn list_journal(&self, limit: usize) -> Result<Vec<LabJournalEntry>, RepoError> {
        let span = tracing::debug_span!("lab.list_journal", backend = self.backend, limit);
        async {
            let result = self.inner.list_journal(limit).await;
            tracing::trace!(count = result.as_ref().map(|v| v.len()).ok(), "listed journal");
            result
        }
        .instrument(span)
        .await
    }

    async fn create_journal_entry(
        &self,
        entry: NewJournalEntry,
    ) -> Result<LabJournalEntry, RepoError> {
        let span = tracing::info_span!(
            "lab.create_journal_entry",
            backend = self.backend,
            entry_type = %entry.entry_type
        );
        async {
            tracing::debug!(message_len = entry.message.len(), "appending");
            let start = std::time::Instant::now();
            let result = self.inner.create_journal_entry(entry).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(created) => tracing::info!(id = created.id, elapsed_ms, "entry created"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "append failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn health(&self) -> Result<(), RepoError> {
        let result = self.inner.health().await;
        tracing::trace!(backend = self.backend, ok = result.is_ok(), "health checked");
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
