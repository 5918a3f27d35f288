// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lh-core: lab domain types for the Learning Hub tracker
//!
//! This crate provides:
//! - Module, checkpoint and journal records with their status vocabularies
//! - Input validation shared by every storage backend
//! - The derived completion overview
//! - The fixed seed data used by both the database and the fallback store

pub mod clock;
pub mod error;
pub mod lab;
pub mod overview;
pub mod seed;
pub mod status;

pub use clock::{stamp_after, Clock, FakeClock, SystemClock};
pub use error::LabError;
pub use lab::{
    sort_journal, sort_modules, LabCheckpoint, LabJournalEntry, LabModule, NewJournalEntry,
};
pub use overview::LabOverview;
pub use status::{CheckpointStatus, JournalType, ModuleStatus};
