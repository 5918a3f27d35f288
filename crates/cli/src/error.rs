// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing command errors

use lh_core::{CheckpointStatus, JournalType, LabError, ModuleStatus};
use lh_storage::StoreError;
use lh_wiki::TOTAL_WIKI_PAGES;
use std::fmt;

/// A failed command, rendered for the terminal.
///
/// ```text
/// error: Page '1001' not found
///   -> Pages are numbered 1 to 1000
/// hint: List every page: lh wiki pages
/// ```
#[derive(Debug)]
pub struct LhError {
    pub message: String,
    /// The rule the input broke, when there is one
    pub detail: Option<String>,
    /// Commands or values that would work instead
    pub hints: Vec<String>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl LhError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
            hints: Vec::new(),
            source: None,
        }
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    fn caused_by<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for LhError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;
        if let Some(detail) = &self.detail {
            writeln!(f, "  -> {}", detail)?;
        }
        for hint in &self.hints {
            writeln!(f, "hint: {}", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for LhError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

fn choices(values: impl Iterator<Item = &'static str>) -> String {
    format!("Use one of: {}", values.collect::<Vec<_>>().join(", "))
}

/// Common error builders
impl LhError {
    pub fn page_not_found(raw: &str) -> Self {
        LhError::new(format!("Page '{}' not found", raw))
            .detail(format!("Pages are numbered 1 to {}", TOTAL_WIKI_PAGES))
            .hint("List every page: lh wiki pages")
    }

    /// `kind` is "module" or "checkpoint"
    pub fn invalid_id(kind: &str, raw: &str) -> Self {
        LhError::new(format!("Invalid {} id '{}'", kind, raw))
            .detail("Ids are positive integers")
            .hint("List modules and checkpoints: lh lab modules")
    }

    pub fn module_not_found(id: i64) -> Self {
        LhError::new(format!("Module {} not found", id))
            .hint("List modules: lh lab modules")
    }

    pub fn checkpoint_not_found(id: i64) -> Self {
        LhError::new(format!("Checkpoint {} not found", id))
            .hint("List modules with their checkpoints: lh lab modules")
    }

    pub fn invalid_input(err: LabError) -> Self {
        let hint = match &err {
            LabError::InvalidModuleStatus(_) => {
                choices(ModuleStatus::ALL.iter().map(ModuleStatus::as_str))
            }
            LabError::InvalidCheckpointStatus(_) => {
                choices(CheckpointStatus::ALL.iter().map(CheckpointStatus::as_str))
            }
            LabError::InvalidJournalType(_) => {
                choices(JournalType::ALL.iter().map(JournalType::as_str))
            }
            LabError::EmptyMessage => "Pass a non-blank message".to_string(),
        };
        LhError::new(err.to_string()).hint(hint).caused_by(err)
    }
}

impl From<StoreError> for LhError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Invalid(e) => LhError::invalid_input(e),
            StoreError::Unavailable(_) => LhError::new("Lab state is unavailable")
                .detail("Both the database and the fallback store failed")
                .hint("Check the backend: lh health")
                .caused_by(err),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
