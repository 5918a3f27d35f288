// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregate completion statistics

use crate::lab::LabModule;
use crate::status::ModuleStatus;
use serde::{Deserialize, Serialize};

/// Completion statistics derived from a module set.
///
/// Always computed from the modules just read; never stored or updated in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabOverview {
    pub total_modules: usize,
    pub completed_modules: usize,
    pub blocked_modules: usize,
    pub total_checkpoints: usize,
    pub completed_checkpoints: usize,
    pub completion_percent: u32,
}

impl LabOverview {
    pub fn compute(modules: &[LabModule]) -> Self {
        let count_status = |status: ModuleStatus| modules.iter().filter(|m| m.status == status).count();

        let checkpoints = modules.iter().flat_map(|m| m.checkpoints.iter());
        let (total_checkpoints, completed_checkpoints) =
            checkpoints.fold((0, 0), |(total, done), c| (total + 1, done + usize::from(c.is_done())));

        Self {
            total_modules: modules.len(),
            completed_modules: count_status(ModuleStatus::Completed),
            blocked_modules: count_status(ModuleStatus::Blocked),
            total_checkpoints,
            completed_checkpoints,
            completion_percent: completion_percent(completed_checkpoints, total_checkpoints),
        }
    }
}

/// `round(100 * done / total)`, half away from zero; 0 when there is nothing to complete.
pub fn completion_percent(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((done as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
#[path = "overview_tests.rs"]
mod tests;
