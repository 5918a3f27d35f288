// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Caller-visible lab errors

use thiserror::Error;

/// Rejected input, surfaced to callers of the lab store.
///
/// Backend failures never appear here; the store absorbs them by answering
/// from fallback data. "Not found" is an `Ok(None)`, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabError {
    #[error("invalid module status: {0}")]
    InvalidModuleStatus(String),
    #[error("invalid checkpoint status: {0}")]
    InvalidCheckpointStatus(String),
    #[error("invalid journal type: {0}")]
    InvalidJournalType(String),
    #[error("message is required")]
    EmptyMessage,
}
