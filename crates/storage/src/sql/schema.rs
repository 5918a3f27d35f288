// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Table definitions and first-run seed

use super::encode_time;
use crate::error::RepoError;
use lh_core::seed;
use rusqlite::{params, Connection};

const TABLES: &str = "
CREATE TABLE IF NOT EXISTS lab_modules (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    code        TEXT NOT NULL UNIQUE,
    title       TEXT NOT NULL,
    objective   TEXT NOT NULL,
    owner_name  TEXT NOT NULL,
    status      TEXT NOT NULL,
    sort_order  INTEGER NOT NULL,
    updated_at  INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS lab_checkpoints (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    module_id   INTEGER NOT NULL REFERENCES lab_modules(id),
    title       TEXT NOT NULL,
    status      TEXT NOT NULL,
    evidence    TEXT NOT NULL,
    sort_order  INTEGER NOT NULL,
    updated_at  INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS lab_journal_entries (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    entry_type  TEXT NOT NULL,
    message     TEXT NOT NULL,
    created_at  INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_lab_checkpoints_module
    ON lab_checkpoints(module_id, sort_order, id);
CREATE INDEX IF NOT EXISTS idx_lab_journal_created
    ON lab_journal_entries(created_at, id);
";

/// Create the lab tables and seed any that are empty
pub fn init_schema(conn: &Connection) -> Result<(), RepoError> {
    conn.pragma_update(None, "foreign_keys", true)?;
    conn.execute_batch(TABLES)?;

    let tx = conn.unchecked_transaction()?;
    seed_modules(&tx)?;
    seed_checkpoints(&tx)?;
    seed_journal(&tx)?;
    tx.commit()?;
    Ok(())
}

fn is_empty(conn: &Connection, table: &str) -> Result<bool, RepoError> {
    let sql = format!("SELECT NOT EXISTS (SELECT 1 FROM {})", table);
    Ok(conn.query_row(&sql, [], |row| row.get(0))?)
}

fn seed_modules(conn: &Connection) -> Result<(), RepoError> {
    if !is_empty(conn, "lab_modules")? {
        return Ok(());
    }
    let mut stmt = conn.prepare(
        "INSERT INTO lab_modules (id, code, title, objective, owner_name, status, sort_order, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;
    for module in seed::modules() {
        stmt.execute(params![
            module.id,
            module.code,
            module.title,
            module.objective,
            module.owner,
            module.status.as_str(),
            module.sort_order,
            encode_time(module.updated_at),
        ])?;
    }
    tracing::info!("seeded lab_modules");
    Ok(())
}

// Checkpoints attach by module code so a table seeded out of band still links up
fn seed_checkpoints(conn: &Connection) -> Result<(), RepoError> {
    if !is_empty(conn, "lab_checkpoints")? {
        return Ok(());
    }
    let mut stmt = conn.prepare(
        "INSERT INTO lab_checkpoints (id, module_id, title, status, evidence, sort_order, updated_at)
         SELECT ?1, m.id, ?2, ?3, ?4, ?5, ?6 FROM lab_modules AS m WHERE m.code = ?7",
    )?;
    for module in seed::modules() {
        for checkpoint in &module.checkpoints {
            stmt.execute(params![
                checkpoint.id,
                checkpoint.title,
                checkpoint.status.as_str(),
                checkpoint.evidence,
                checkpoint.sort_order,
                encode_time(checkpoint.updated_at),
                module.code,
            ])?;
        }
    }
    tracing::info!("seeded lab_checkpoints");
    Ok(())
}

fn seed_journal(conn: &Connection) -> Result<(), RepoError> {
    if !is_empty(conn, "lab_journal_entries")? {
        return Ok(());
    }
    let mut stmt = conn.prepare(
        "INSERT INTO lab_journal_entries (id, entry_type, message, created_at)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    for entry in seed::journal() {
        stmt.execute(params![
            entry.id,
            entry.entry_type.as_str(),
            entry.message,
            encode_time(entry.created_at),
        ])?;
    }
    tracing::info!("seeded lab_journal_entries");
    Ok(())
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
