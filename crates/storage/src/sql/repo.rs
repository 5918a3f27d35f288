// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{decode_time, encode_time, SqlPool};
use crate::error::RepoError;
use crate::repo::LabRepository;
use async_trait::async_trait;
use chrono::SubsecRound;
use lh_core::{
    stamp_after, CheckpointStatus, Clock, JournalType, LabCheckpoint, LabJournalEntry, LabModule,
    ModuleStatus, NewJournalEntry, SystemClock,
};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::HashMap;
use std::sync::Arc;

const MODULE_COLUMNS: &str =
    "id, code, title, objective, owner_name, status, sort_order, updated_at";
const CHECKPOINT_COLUMNS: &str = "id, module_id, title, status, evidence, sort_order, updated_at";

/// Lab repository over a shared [`SqlPool`]
#[derive(Clone)]
pub struct SqlLabRepository<C: Clock = SystemClock> {
    pool: Arc<SqlPool>,
    clock: C,
}

impl SqlLabRepository<SystemClock> {
    pub fn new(pool: Arc<SqlPool>) -> Self {
        Self::with_clock(pool, SystemClock)
    }
}

impl<C: Clock> SqlLabRepository<C> {
    pub fn with_clock(pool: Arc<SqlPool>, clock: C) -> Self {
        Self { pool, clock }
    }

    pub fn pool(&self) -> &Arc<SqlPool> {
        &self.pool
    }
}

fn module_from_row(row: &Row<'_>) -> rusqlite::Result<(LabModule, i64)> {
    let status: String = row.get(5)?;
    let updated_at: i64 = row.get(7)?;
    Ok((
        LabModule {
            id: row.get(0)?,
            code: row.get(1)?,
            title: row.get(2)?,
            objective: row.get(3)?,
            owner: row.get(4)?,
            status: ModuleStatus::from_stored(&status),
            sort_order: row.get(6)?,
            updated_at: Default::default(),
            checkpoints: Vec::new(),
        },
        updated_at,
    ))
}

fn checkpoint_from_row(row: &Row<'_>) -> rusqlite::Result<(LabCheckpoint, i64)> {
    let status: String = row.get(3)?;
    let updated_at: i64 = row.get(6)?;
    Ok((
        LabCheckpoint {
            id: row.get(0)?,
            module_id: row.get(1)?,
            title: row.get(2)?,
            status: CheckpointStatus::from_stored(&status),
            evidence: row.get(4)?,
            sort_order: row.get(5)?,
            updated_at: Default::default(),
        },
        updated_at,
    ))
}

fn journal_from_row(row: &Row<'_>) -> rusqlite::Result<(LabJournalEntry, i64)> {
    let entry_type: String = row.get(1)?;
    let created_at: i64 = row.get(3)?;
    Ok((
        LabJournalEntry {
            id: row.get(0)?,
            entry_type: JournalType::from_stored(&entry_type),
            message: row.get(2)?,
            created_at: Default::default(),
        },
        created_at,
    ))
}

fn with_time<T>(
    (mut value, micros): (T, i64),
    set: impl FnOnce(&mut T, chrono::DateTime<chrono::Utc>),
) -> Result<T, RepoError> {
    set(&mut value, decode_time(micros)?);
    Ok(value)
}

fn load_checkpoints(
    conn: &Connection,
    module_id: Option<i64>,
) -> Result<Vec<LabCheckpoint>, RepoError> {
    let mut checkpoints = Vec::new();
    let order = "ORDER BY module_id ASC, sort_order ASC, id ASC";
    let rows = match module_id {
        Some(id) => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM lab_checkpoints WHERE module_id = ?1 {}",
                CHECKPOINT_COLUMNS, order
            ))?;
            let rows = stmt
                .query_map([id], checkpoint_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows
        }
        None => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM lab_checkpoints {}",
                CHECKPOINT_COLUMNS, order
            ))?;
            let rows = stmt
                .query_map([], checkpoint_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows
        }
    };
    for row in rows {
        checkpoints.push(with_time(row, |c, at| c.updated_at = at)?);
    }
    Ok(checkpoints)
}

fn load_modules(conn: &Connection) -> Result<Vec<LabModule>, RepoError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM lab_modules ORDER BY sort_order ASC, id ASC",
        MODULE_COLUMNS
    ))?;
    let rows = stmt
        .query_map([], module_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut by_module: HashMap<i64, Vec<LabCheckpoint>> = HashMap::new();
    for checkpoint in load_checkpoints(conn, None)? {
        by_module
            .entry(checkpoint.module_id)
            .or_default()
            .push(checkpoint);
    }

    rows.into_iter()
        .map(|row| -> Result<LabModule, RepoError> {
            let mut module = with_time(row, |m, at| m.updated_at = at)?;
            module.checkpoints = by_module.remove(&module.id).unwrap_or_default();
            Ok(module)
        })
        .collect()
}

fn load_module(conn: &Connection, id: i64) -> Result<Option<LabModule>, RepoError> {
    let row = conn
        .query_row(
            &format!("SELECT {} FROM lab_modules WHERE id = ?1", MODULE_COLUMNS),
            [id],
            module_from_row,
        )
        .optional()?;
    let Some(row) = row else {
        return Ok(None);
    };
    let mut module = with_time(row, |m, at| m.updated_at = at)?;
    module.checkpoints = load_checkpoints(conn, Some(id))?;
    Ok(Some(module))
}

fn load_checkpoint(conn: &Connection, id: i64) -> Result<Option<LabCheckpoint>, RepoError> {
    let row = conn
        .query_row(
            &format!(
                "SELECT {} FROM lab_checkpoints WHERE id = ?1",
                CHECKPOINT_COLUMNS
            ),
            [id],
            checkpoint_from_row,
        )
        .optional()?;
    row.map(|row| with_time(row, |c, at| c.updated_at = at))
        .transpose()
}

#[async_trait]
impl<C: Clock> LabRepository for SqlLabRepository<C> {
    async fn list_modules(&self) -> Result<Vec<LabModule>, RepoError> {
        self.pool.with_conn(|conn| load_modules(conn)).await
    }

    async fn update_module_status(
        &self,
        id: i64,
        status: ModuleStatus,
    ) -> Result<Option<LabModule>, RepoError> {
        let clock = self.clock.clone();
        self.pool
            .with_conn(move |conn| {
                let tx = conn.transaction()?;
                let current: Option<i64> = tx
                    .query_row(
                        "SELECT updated_at FROM lab_modules WHERE id = ?1",
                        [id],
                        |row| row.get(0),
                    )
                    .optional()?;
                let Some(current) = current else {
                    return Ok(None);
                };
                let stamp = stamp_after(&clock, decode_time(current)?);
                tx.execute(
                    "UPDATE lab_modules SET status = ?1, updated_at = ?2 WHERE id = ?3",
                    params![status.as_str(), encode_time(stamp), id],
                )?;
                // Read back before commit so a failed read rolls the write back
                let module = load_module(&tx, id)?;
                tx.commit()?;
                Ok(module)
            })
            .await
    }

    async fn update_checkpoint_status(
        &self,
        id: i64,
        status: CheckpointStatus,
    ) -> Result<Option<LabCheckpoint>, RepoError> {
        let clock = self.clock.clone();
        self.pool
            .with_conn(move |conn| {
                let tx = conn.transaction()?;
                let current: Option<(i64, i64, i64)> = tx
                    .query_row(
                        "SELECT c.module_id, c.updated_at, m.updated_at
                         FROM lab_checkpoints AS c
                         JOIN lab_modules AS m ON m.id = c.module_id
                         WHERE c.id = ?1",
                        [id],
                        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
                    )
                    .optional()?;
                let Some((module_id, checkpoint_at, module_at)) = current else {
                    return Ok(None);
                };

                let checkpoint_stamp = stamp_after(&clock, decode_time(checkpoint_at)?);
                let module_stamp = stamp_after(&clock, decode_time(module_at)?);
                tx.execute(
                    "UPDATE lab_checkpoints SET status = ?1, updated_at = ?2 WHERE id = ?3",
                    params![status.as_str(), encode_time(checkpoint_stamp), id],
                )?;
                tx.execute(
                    "UPDATE lab_modules SET updated_at = ?1 WHERE id = ?2",
                    params![encode_time(module_stamp), module_id],
                )?;
                let checkpoint = load_checkpoint(&tx, id)?;
                tx.commit()?;
                Ok(checkpoint)
            })
            .await
    }

    async fn list_journal(&self, limit: usize) -> Result<Vec<LabJournalEntry>, RepoError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.pool
            .with_conn(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, entry_type, message, created_at
                     FROM lab_journal_entries
                     ORDER BY created_at DESC, id DESC
                     LIMIT ?1",
                )?;
                let rows = stmt
                    .query_map([limit], journal_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                rows.into_iter()
                    .map(|row| with_time(row, |e, at| e.created_at = at))
                    .collect()
            })
            .await
    }

    async fn create_journal_entry(
        &self,
        entry: NewJournalEntry,
    ) -> Result<LabJournalEntry, RepoError> {
        let created_at = self.clock.now().trunc_subsecs(6);
        self.pool
            .with_conn(move |conn| {
                conn.execute(
                    "INSERT INTO lab_journal_entries (entry_type, message, created_at)
                     VALUES (?1, ?2, ?3)",
                    params![
                        entry.entry_type.as_str(),
                        entry.message,
                        encode_time(created_at)
                    ],
                )?;
                Ok(LabJournalEntry {
                    id: conn.last_insert_rowid(),
                    entry_type: entry.entry_type,
                    message: entry.message,
                    created_at,
                })
            })
            .await
    }

    async fn health(&self) -> Result<(), RepoError> {
        self.pool
            .with_conn(|conn| {
                conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
#[path = "repo_tests.rs"]
mod tests;
