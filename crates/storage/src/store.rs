// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Primary-with-fallback facade over two repositories
//!
//! Input is validated before any backend is touched. Each operation tries
//! the primary; on a backend error it logs a warning and answers from the
//! secondary instead. Writes made while the primary is down land only in
//! the secondary.

use crate::config::StoreConfig;
use crate::error::RepoError;
use crate::memory::MemoryLabRepository;
use crate::repo::LabRepository;
use crate::sql::{SqlLabRepository, SqlPool};
use crate::traced::TracedLabRepository;
use lh_core::{
    CheckpointStatus, LabCheckpoint, LabError, LabJournalEntry, LabModule, LabOverview,
    ModuleStatus, NewJournalEntry,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Invalid(#[from] LabError),
    /// Both backends failed
    #[error("lab state unavailable: {0}")]
    Unavailable(#[from] RepoError),
}

/// Primary backend state as seen by a health probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendStatus {
    Connected,
    NotConfigured,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendHealth {
    pub status: HealthStatus,
    pub sql: BackendStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BackendHealth {
    fn from_probe(result: Result<(), RepoError>) -> Self {
        match result {
            Ok(()) => Self {
                status: HealthStatus::Healthy,
                sql: BackendStatus::Connected,
                error: None,
            },
            Err(RepoError::NotConfigured) => Self {
                status: HealthStatus::Healthy,
                sql: BackendStatus::NotConfigured,
                error: None,
            },
            Err(e) => Self {
                status: HealthStatus::Degraded,
                sql: BackendStatus::Error,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

pub struct LabStore<P, S> {
    primary: P,
    secondary: S,
}

/// SQLite primary over an in-memory fallback, both traced
pub type DefaultLabStore = LabStore<
    TracedLabRepository<SqlLabRepository>,
    TracedLabRepository<MemoryLabRepository>,
>;

/// Build the standard store for a configuration
pub fn open_store(config: &StoreConfig) -> DefaultLabStore {
    let pool = Arc::new(SqlPool::new(config.database_path.clone()));
    LabStore::new(
        TracedLabRepository::new(SqlLabRepository::new(pool), "sql"),
        TracedLabRepository::new(MemoryLabRepository::new(), "memory"),
    )
}

fn fell_back(operation: &'static str, error: &RepoError) {
    match error {
        RepoError::NotConfigured => {
            tracing::debug!(operation, "database not configured, using fallback data")
        }
        _ => tracing::warn!(operation, error = %error, "primary backend failed, using fallback data"),
    }
}

impl<P: LabRepository, S: LabRepository> LabStore<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn secondary(&self) -> &S {
        &self.secondary
    }

    pub async fn list_modules(&self) -> Result<Vec<LabModule>, StoreError> {
        match self.primary.list_modules().await {
            Ok(modules) => Ok(modules),
            Err(e) => {
                fell_back("list_modules", &e);
                Ok(self.secondary.list_modules().await?)
            }
        }
    }

    /// Statistics over whichever data set answered; never cached
    pub async fn overview(&self) -> Result<LabOverview, StoreError> {
        let modules = self.list_modules().await?;
        Ok(LabOverview::compute(&modules))
    }

    pub async fn update_module_status(
        &self,
        id: i64,
        status: &str,
    ) -> Result<Option<LabModule>, StoreError> {
        let status: ModuleStatus = status.parse()?;
        match self.primary.update_module_status(id, status).await {
            Ok(module) => Ok(module),
            Err(e) => {
                fell_back("update_module_status", &e);
                Ok(self.secondary.update_module_status(id, status).await?)
            }
        }
    }

    pub async fn update_checkpoint_status(
        &self,
        id: i64,
        status: &str,
    ) -> Result<Option<LabCheckpoint>, StoreError> {
        let status: CheckpointStatus = status.parse()?;
        match self.primary.update_checkpoint_status(id, status).await {
            Ok(checkpoint) => Ok(checkpoint),
            Err(e) => {
                fell_back("update_checkpoint_status", &e);
                Ok(self.secondary.update_checkpoint_status(id, status).await?)
            }
        }
    }

    pub async fn list_journal(&self, limit: usize) -> Result<Vec<LabJournalEntry>, StoreError> {
        match self.primary.list_journal(limit).await {
            Ok(entries) => Ok(entries),
            Err(e) => {
                fell_back("list_journal", &e);
                Ok(self.secondary.list_journal(limit).await?)
            }
        }
    }

    pub async fn create_journal_entry(
        &self,
        entry_type: &str,
        message: &str,
    ) -> Result<LabJournalEntry, StoreError> {
        let entry = NewJournalEntry::parse(entry_type, message)?;
        match self.primary.create_journal_entry(entry.clone()).await {
            Ok(created) => Ok(created),
            Err(e) => {
                fell_back("create_journal_entry", &e);
                Ok(self.secondary.create_journal_entry(entry).await?)
            }
        }
    }

    /// Probe the primary backend; the only place degradation is reported
    pub async fn health(&self) -> BackendHealth {
        BackendHealth::from_probe(self.primary.health().await)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
