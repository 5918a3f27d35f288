// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod health;
pub mod journal;
pub mod lab;
pub mod wiki;
