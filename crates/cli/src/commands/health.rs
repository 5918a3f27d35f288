// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `lh health` - Probe the lab state backend

use crate::output::{self, OutputFormat};
use lh_storage::{BackendHealth, BackendStatus, LabRepository, LabStore};
use serde::Serialize;
use std::fmt;

/// Prints the probe result; returns whether the backend is healthy
pub async fn handle<P: LabRepository, S: LabRepository>(
    store: &LabStore<P, S>,
    format: OutputFormat,
) -> bool {
    let health = store.health().await;
    let healthy = health.is_healthy();
    output::print(&HealthView(health), format);
    healthy
}

#[derive(Serialize)]
#[serde(transparent)]
struct HealthView(BackendHealth);

impl fmt::Display for HealthView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let health = &self.0;
        let status = if health.is_healthy() {
            "healthy"
        } else {
            "degraded"
        };
        let sql = match health.sql {
            BackendStatus::Connected => "connected",
            BackendStatus::NotConfigured => "not configured (using fallback data)",
            BackendStatus::Error => "error",
        };
        writeln!(f, "status: {}", status)?;
        writeln!(f, "sql:    {}", sql)?;
        if let Some(error) = &health.error {
            writeln!(f, "error:  {}", error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "health_tests.rs"]
mod tests;
