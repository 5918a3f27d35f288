// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process lab state seeded with the fixed fallback data
//!
//! Used when the database is unreachable. Writes live only as long as the
//! repository value (and its clones) do.

use crate::error::RepoError;
use crate::repo::LabRepository;
use async_trait::async_trait;
use chrono::SubsecRound;
use lh_core::{
    seed, sort_journal, sort_modules, stamp_after, CheckpointStatus, Clock, LabCheckpoint,
    LabJournalEntry, LabModule, ModuleStatus, NewJournalEntry, SystemClock,
};
use std::sync::{Arc, Mutex};

struct MemoryState {
    modules: Vec<LabModule>,
    journal: Vec<LabJournalEntry>,
    next_journal_id: i64,
}

impl MemoryState {
    fn seeded() -> Self {
        let mut modules = seed::modules();
        sort_modules(&mut modules);
        let journal = seed::journal();
        let next_journal_id = journal.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            modules,
            journal,
            next_journal_id,
        }
    }
}

#[derive(Clone)]
pub struct MemoryLabRepository<C: Clock = SystemClock> {
    state: Arc<Mutex<MemoryState>>,
    clock: C,
}

impl MemoryLabRepository<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MemoryLabRepository<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MemoryLabRepository<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: Arc::new(Mutex::new(MemoryState::seeded())),
            clock,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl<C: Clock> LabRepository for MemoryLabRepository<C> {
    async fn list_modules(&self) -> Result<Vec<LabModule>, RepoError> {
        Ok(self.lock().modules.clone())
    }

    async fn update_module_status(
        &self,
        id: i64,
        status: ModuleStatus,
    ) -> Result<Option<LabModule>, RepoError> {
        let mut state = self.lock();
        let Some(module) = state.modules.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        module.status = status;
        module.updated_at = stamp_after(&self.clock, module.updated_at);
        Ok(Some(module.clone()))
    }

    async fn update_checkpoint_status(
        &self,
        id: i64,
        status: CheckpointStatus,
    ) -> Result<Option<LabCheckpoint>, RepoError> {
        let mut state = self.lock();
        for module in state.modules.iter_mut() {
            let Some(checkpoint) = module.checkpoints.iter_mut().find(|c| c.id == id) else {
                continue;
            };
            checkpoint.status = status;
            checkpoint.updated_at = stamp_after(&self.clock, checkpoint.updated_at);
            let updated = checkpoint.clone();
            module.updated_at = stamp_after(&self.clock, module.updated_at);
            return Ok(Some(updated));
        }
        Ok(None)
    }

    async fn list_journal(&self, limit: usize) -> Result<Vec<LabJournalEntry>, RepoError> {
        let mut entries = self.lock().journal.clone();
        sort_journal(&mut entries);
        entries.truncate(limit);
        Ok(entries)
    }

    async fn create_journal_entry(
        &self,
        entry: NewJournalEntry,
    ) -> Result<LabJournalEntry, RepoError> {
        let mut state = self.lock();
        let created = LabJournalEntry {
            id: state.next_journal_id,
            entry_type: entry.entry_type,
            message: entry.message,
            created_at: self.clock.now().trunc_subsecs(6),
        };
        state.next_journal_id += 1;
        state.journal.push(created.clone());
        Ok(created)
    }

    async fn health(&self) -> Result<(), RepoError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
