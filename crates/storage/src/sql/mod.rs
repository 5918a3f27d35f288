// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed lab repository
//!
//! Timestamps are stored as INTEGER microseconds since the Unix epoch.

mod pool;
mod repo;
mod schema;

pub use pool::SqlPool;
pub use repo::SqlLabRepository;

use crate::error::RepoError;
use chrono::{DateTime, Utc};

pub(crate) fn encode_time(at: DateTime<Utc>) -> i64 {
    at.timestamp_micros()
}

pub(crate) fn decode_time(micros: i64) -> Result<DateTime<Utc>, RepoError> {
    DateTime::from_timestamp_micros(micros)
        .ok_or_else(|| RepoError::Corrupt(format!("timestamp out of range: {}", micros)))
}
