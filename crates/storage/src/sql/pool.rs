// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lazily opened, provisioned-once SQLite connection

use super::schema;
use crate::error::RepoError;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::OnceCell;

/// Shared handle to the lab database
///
/// The file is opened and the schema provisioned on first use. Concurrent
/// first callers wait on the same initialization. A failed attempt leaves
/// the cell empty so the next call retries.
pub struct SqlPool {
    path: Option<PathBuf>,
    conn: OnceCell<Arc<Mutex<Connection>>>,
    provisions: AtomicUsize,
}

impl SqlPool {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            conn: OnceCell::new(),
            provisions: AtomicUsize::new(0),
        }
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(Some(path.into()))
    }

    /// A pool with no database; every call reports `NotConfigured`
    pub fn unconfigured() -> Self {
        Self::new(None)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.path.is_some()
    }

    /// Number of successful schema provisioning runs
    pub fn provision_count(&self) -> usize {
        self.provisions.load(Ordering::SeqCst)
    }

    async fn connection(&self) -> Result<Arc<Mutex<Connection>>, RepoError> {
        let Some(path) = self.path.clone() else {
            return Err(RepoError::NotConfigured);
        };

        let conn = self
            .conn
            .get_or_try_init(|| async move {
                tracing::info!(path = %path.display(), "opening lab database");
                let conn = tokio::task::spawn_blocking(move || -> Result<Connection, RepoError> {
                    let conn = Connection::open(&path)?;
                    schema::init_schema(&conn)?;
                    Ok(conn)
                })
                .await??;
                self.provisions.fetch_add(1, Ordering::SeqCst);
                Ok::<_, RepoError>(Arc::new(Mutex::new(conn)))
            })
            .await?;

        Ok(Arc::clone(conn))
    }

    /// Run blocking database work on the shared connection
    pub async fn with_conn<F, T>(&self, f: F) -> Result<T, RepoError>
    where
        F: FnOnce(&mut Connection) -> Result<T, RepoError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.connection().await?;
        tokio::task::spawn_blocking(move || {
            let mut guard = conn.lock().unwrap_or_else(|e| e.into_inner());
            f(&mut guard)
        })
        .await?
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
