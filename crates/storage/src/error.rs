// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Backend unavailability. Never surfaced past `LabStore`, which falls back instead.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database path is not configured")]
    NotConfigured,
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("corrupt row: {0}")]
    Corrupt(String),
}
