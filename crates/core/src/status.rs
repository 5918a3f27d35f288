// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status and type vocabularies for lab records

use crate::error::LabError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a lab module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    Planned,
    InProgress,
    Blocked,
    Completed,
}

impl ModuleStatus {
    pub const ALL: [ModuleStatus; 4] = [
        ModuleStatus::Planned,
        ModuleStatus::InProgress,
        ModuleStatus::Blocked,
        ModuleStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleStatus::Planned => "planned",
            ModuleStatus::InProgress => "in_progress",
            ModuleStatus::Blocked => "blocked",
            ModuleStatus::Completed => "completed",
        }
    }

    /// Lenient read for stored values: anything unknown is treated as planned.
    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or(ModuleStatus::Planned)
    }
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModuleStatus {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(ModuleStatus::Planned),
            "in_progress" => Ok(ModuleStatus::InProgress),
            "blocked" => Ok(ModuleStatus::Blocked),
            "completed" => Ok(ModuleStatus::Completed),
            other => Err(LabError::InvalidModuleStatus(other.to_string())),
        }
    }
}

/// Whether a checkpoint has been done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckpointStatus {
    Todo,
    Done,
}

impl CheckpointStatus {
    pub const ALL: [CheckpointStatus; 2] = [CheckpointStatus::Todo, CheckpointStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckpointStatus::Todo => "todo",
            CheckpointStatus::Done => "done",
        }
    }

    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or(CheckpointStatus::Todo)
    }
}

impl fmt::Display for CheckpointStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CheckpointStatus {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(CheckpointStatus::Todo),
            "done" => Ok(CheckpointStatus::Done),
            other => Err(LabError::InvalidCheckpointStatus(other.to_string())),
        }
    }
}

/// Category of a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalType {
    Deploy,
    Validate,
    Incident,
    Note,
}

impl JournalType {
    pub const ALL: [JournalType; 4] = [
        JournalType::Deploy,
        JournalType::Validate,
        JournalType::Incident,
        JournalType::Note,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JournalType::Deploy => "deploy",
            JournalType::Validate => "validate",
            JournalType::Incident => "incident",
            JournalType::Note => "note",
        }
    }

    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or(JournalType::Note)
    }
}

impl fmt::Display for JournalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JournalType {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deploy" => Ok(JournalType::Deploy),
            "validate" => Ok(JournalType::Validate),
            "incident" => Ok(JournalType::Incident),
            "note" => Ok(JournalType::Note),
            other => Err(LabError::InvalidJournalType(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
