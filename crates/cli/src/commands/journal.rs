// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `lh journal` - Operational journal

use crate::error::LhError;
use crate::output::{self, OutputFormat};
use crate::parse::parse_limit;
use clap::{Args, Subcommand};
use lh_core::LabJournalEntry;
use lh_storage::{LabRepository, LabStore};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct JournalArgs {
    #[command(subcommand)]
    pub command: JournalCommand,
}

#[derive(Subcommand)]
pub enum JournalCommand {
    /// List entries, newest first
    List {
        /// Number of entries (default 20, at most 100)
        #[arg(long, allow_hyphen_values = true)]
        limit: Option<String>,
    },
    /// Record an entry
    Add {
        /// Entry type (deploy, validate, incident, note)
        #[arg(value_name = "TYPE")]
        entry_type: String,
        /// Message text
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
}

pub async fn handle<P: LabRepository, S: LabRepository>(
    args: JournalArgs,
    store: &LabStore<P, S>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match args.command {
        JournalCommand::List { limit } => {
            let limit = parse_limit(limit.as_deref());
            let entries = store.list_journal(limit).await.map_err(LhError::from)?;
            output::print(&JournalView { entries }, format);
        }
        JournalCommand::Add {
            entry_type,
            message,
        } => {
            let entry = store
                .create_journal_entry(&entry_type, &message.join(" "))
                .await
                .map_err(LhError::from)?;
            output::print(&EntryView { entry }, format);
        }
    }
    Ok(())
}

/// One-line form shared with `lab overview`
pub(crate) fn write_entry(f: &mut fmt::Formatter<'_>, entry: &LabJournalEntry) -> fmt::Result {
    write!(
        f,
        "#{:<4} {}  {:<8} {}",
        entry.id,
        entry.created_at.format("%Y-%m-%d %H:%M"),
        entry.entry_type.as_str(),
        entry.message
    )
}

#[derive(Serialize)]
struct JournalView {
    entries: Vec<LabJournalEntry>,
}

impl fmt::Display for JournalView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "No journal entries");
        }
        for entry in &self.entries {
            write_entry(f, entry)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct EntryView {
    entry: LabJournalEntry,
}

impl fmt::Display for EntryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Recorded ")?;
        write_entry(f, &self.entry)?;
        writeln!(f)
    }
}

#[cfg(test)]
#[path = "journal_tests.rs"]
mod tests;
