// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Lab state persistence: SQLite primary, in-memory fallback

mod config;
mod error;
mod memory;
mod repo;
mod sql;
mod store;
mod traced;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FailingLabRepository, RepoCall};

pub use config::{ConfigError, StoreConfig, DATABASE_PATH_ENV};
pub use error::RepoError;
pub use memory::MemoryLabRepository;
pub use repo::LabRepository;
pub use sql::{SqlLabRepository, SqlPool};
pub use store::{
    open_store, BackendHealth, BackendStatus, DefaultLabStore, HealthStatus, LabStore, StoreError,
};
pub use traced::TracedLabRepository;
