// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `lh lab` - Lab module and checkpoint tracking

use crate::commands::journal::write_entry;
use crate::error::LhError;
use crate::output::{self, OutputFormat};
use crate::parse::{parse_id, OVERVIEW_JOURNAL_LIMIT};
use clap::{Args, Subcommand};
use lh_core::{LabCheckpoint, LabJournalEntry, LabModule, LabOverview};
use lh_storage::{LabRepository, LabStore};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct LabArgs {
    #[command(subcommand)]
    pub command: LabCommand,
}

#[derive(Subcommand)]
pub enum LabCommand {
    /// List modules with their checkpoints
    Modules,
    /// Show completion statistics and recent journal entries
    Overview,
    /// Set a module's status (planned, in_progress, blocked, completed)
    ModuleStatus {
        /// Module id
        id: String,
        /// New status
        status: String,
    },
    /// Set a checkpoint's status (todo, done)
    Checkpoint {
        /// Checkpoint id
        id: String,
        /// New status
        status: String,
    },
}

pub async fn handle<P: LabRepository, S: LabRepository>(
    args: LabArgs,
    store: &LabStore<P, S>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match args.command {
        LabCommand::Modules => {
            let modules = store.list_modules().await.map_err(LhError::from)?;
            let overview = LabOverview::compute(&modules);
            output::print(&ModulesView { modules, overview }, format);
        }
        LabCommand::Overview => {
            let overview = store.overview().await.map_err(LhError::from)?;
            let recent_journal = store
                .list_journal(OVERVIEW_JOURNAL_LIMIT)
                .await
                .map_err(LhError::from)?;
            output::print(
                &OverviewView {
                    overview,
                    recent_journal,
                },
                format,
            );
        }
        LabCommand::ModuleStatus { id, status } => {
            let id = parse_id(&id).ok_or_else(|| LhError::invalid_id("module", &id))?;
            let module = store
                .update_module_status(id, &status)
                .await
                .map_err(LhError::from)?
                .ok_or_else(|| LhError::module_not_found(id))?;
            let overview = store.overview().await.map_err(LhError::from)?;
            output::print(&ModuleUpdateView { module, overview }, format);
        }
        LabCommand::Checkpoint { id, status } => {
            let id = parse_id(&id).ok_or_else(|| LhError::invalid_id("checkpoint", &id))?;
            let checkpoint = store
                .update_checkpoint_status(id, &status)
                .await
                .map_err(LhError::from)?
                .ok_or_else(|| LhError::checkpoint_not_found(id))?;
            let overview = store.overview().await.map_err(LhError::from)?;
            output::print(
                &CheckpointUpdateView {
                    checkpoint,
                    overview,
                },
                format,
            );
        }
    }
    Ok(())
}

fn write_overview(f: &mut fmt::Formatter<'_>, overview: &LabOverview) -> fmt::Result {
    writeln!(
        f,
        "Modules:     {} total, {} completed, {} blocked",
        overview.total_modules, overview.completed_modules, overview.blocked_modules
    )?;
    writeln!(
        f,
        "Checkpoints: {}/{} done ({}%)",
        overview.completed_checkpoints, overview.total_checkpoints, overview.completion_percent
    )
}

fn write_checkpoint(f: &mut fmt::Formatter<'_>, checkpoint: &LabCheckpoint) -> fmt::Result {
    let mark = if checkpoint.is_done() { "x" } else { " " };
    write!(f, "  [{}] {:<4} {}", mark, checkpoint.id, checkpoint.title)?;
    if !checkpoint.evidence.is_empty() {
        write!(f, " ({})", checkpoint.evidence)?;
    }
    writeln!(f)
}

fn write_module(f: &mut fmt::Formatter<'_>, module: &LabModule) -> fmt::Result {
    writeln!(
        f,
        "{:<2} {:<9} {:<12} {}  [{}]",
        module.id,
        module.code,
        module.status.as_str(),
        module.title,
        module.owner
    )?;
    writeln!(f, "   {}", module.objective)?;
    for checkpoint in &module.checkpoints {
        write!(f, " ")?;
        write_checkpoint(f, checkpoint)?;
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModulesView {
    modules: Vec<LabModule>,
    overview: LabOverview,
}

impl fmt::Display for ModulesView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for module in &self.modules {
            write_module(f, module)?;
            writeln!(f)?;
        }
        write_overview(f, &self.overview)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OverviewView {
    overview: LabOverview,
    recent_journal: Vec<LabJournalEntry>,
}

impl fmt::Display for OverviewView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_overview(f, &self.overview)?;
        writeln!(f)?;
        writeln!(f, "Recent journal")?;
        if self.recent_journal.is_empty() {
            writeln!(f, "  No journal entries")?;
        }
        for entry in &self.recent_journal {
            write!(f, "  ")?;
            write_entry(f, entry)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModuleUpdateView {
    module: LabModule,
    overview: LabOverview,
}

impl fmt::Display for ModuleUpdateView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Module {} ({}) is now {}",
            self.module.id, self.module.code, self.module.status
        )?;
        writeln!(f)?;
        write_overview(f, &self.overview)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckpointUpdateView {
    checkpoint: LabCheckpoint,
    overview: LabOverview,
}

impl fmt::Display for CheckpointUpdateView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Checkpoint {} is now {}: {}",
            self.checkpoint.id, self.checkpoint.status, self.checkpoint.title
        )?;
        writeln!(f)?;
        write_overview(f, &self.overview)
    }
}

#[cfg(test)]
#[path = "lab_tests.rs"]
mod tests;
