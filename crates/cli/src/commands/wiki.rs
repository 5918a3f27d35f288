// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `lh wiki` - Browse the generated runbook pages

use crate::error::LhError;
use crate::output::{self, OutputFormat};
use crate::parse::parse_number;
use clap::{Args, Subcommand};
use lh_wiki::{WikiModuleSummary, WikiPage, WikiPageSummary};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct WikiArgs {
    #[command(subcommand)]
    pub command: WikiCommand,
}

#[derive(Subcommand)]
pub enum WikiCommand {
    /// Show one page in full
    Page {
        /// Page number (1-1000)
        number: String,
    },
    /// List the pages of one module
    Module {
        /// Module number (1-50)
        number: String,
    },
    /// List every module with its theme
    Modules,
    /// List every page
    Pages,
}

pub fn handle(args: WikiArgs, format: OutputFormat) -> anyhow::Result<()> {
    match args.command {
        WikiCommand::Page { number } => {
            let page = parse_number(&number)
                .and_then(lh_wiki::get_page)
                .ok_or_else(|| LhError::page_not_found(&number))?;
            output::print(&PageView(page), format);
        }
        WikiCommand::Module { number } => {
            // Unknown modules are an empty listing, not an error
            let pages = parse_number(&number)
                .map(lh_wiki::get_module_pages)
                .unwrap_or_default();
            let rows: Vec<_> = pages.into_iter().map(PageRow).collect();
            output::print_list(&rows, format, &format!("No pages in module {}", number));
        }
        WikiCommand::Modules => {
            let rows: Vec<_> = lh_wiki::list_modules().into_iter().map(ModuleRow).collect();
            output::print_list(&rows, format, "No modules");
        }
        WikiCommand::Pages => {
            let rows: Vec<_> = lh_wiki::list_pages().into_iter().map(PageRow).collect();
            output::print_list(&rows, format, "No pages");
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(transparent)]
struct PageRow(WikiPageSummary);

impl fmt::Display for PageRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = &self.0;
        let difficulty = page.difficulty.to_string();
        write!(
            f,
            "{:>4}  {:<8} {:<10} {:<8} {:>3}m  {}",
            page.page_number,
            page.tab_label(),
            page.category_key.key(),
            difficulty,
            page.estimated_minutes,
            page.title
        )
    }
}

#[derive(Serialize)]
#[serde(transparent)]
struct ModuleRow(WikiModuleSummary);

impl fmt::Display for ModuleRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let module = &self.0;
        let first = module.pages.first().map(|p| p.page_number).unwrap_or(0);
        let last = module.pages.last().map(|p| p.page_number).unwrap_or(0);
        write!(
            f,
            "Module {:>2}  pages {:>4}-{:<4}  {}",
            module.module_number, first, last, module.module_theme
        )
    }
}

#[derive(Serialize)]
#[serde(transparent)]
struct PageView(WikiPage);

fn write_bullets(f: &mut fmt::Formatter<'_>, heading: &str, items: &[String]) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", heading)?;
    for item in items {
        writeln!(f, "  - {}", item)?;
    }
    Ok(())
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = &self.0;
        let summary = &page.summary;

        writeln!(f, "{}", summary.title)?;
        writeln!(
            f,
            "{}  Module {} ({})  {}  {}  ~{} min",
            summary.path,
            summary.module_number,
            page.module_theme,
            summary.category_full_label,
            summary.difficulty,
            summary.estimated_minutes
        )?;
        writeln!(f)?;
        writeln!(f, "{}", summary.summary)?;
        writeln!(f)?;
        writeln!(f, "Scenario")?;
        writeln!(f, "  {}", page.scenario)?;
        writeln!(f, "Objective")?;
        writeln!(f, "  {}", page.objective)?;

        write_bullets(f, "Prerequisites", &page.prerequisites)?;

        writeln!(f)?;
        writeln!(f, "Steps")?;
        for (i, step) in page.steps.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, step.title)?;
            writeln!(f, "     {}", step.description)?;
            if let Some(command) = &step.command {
                writeln!(f, "     $ {}", command)?;
            }
            writeln!(f, "     expect: {}", step.expected)?;
            writeln!(f, "     why: {}", step.why_it_matters)?;
        }

        write_bullets(f, "Verifications", &page.verifications)?;
        write_bullets(f, "Signals to watch", &page.signals_to_watch)?;

        writeln!(f)?;
        writeln!(f, "Common failures")?;
        for failure in &page.common_failures {
            writeln!(f, "  - {}", failure.symptom)?;
            writeln!(f, "    cause: {}", failure.likely_cause)?;
            writeln!(f, "    recovery: {}", failure.recovery)?;
        }

        writeln!(f)?;
        writeln!(f, "Notes")?;
        writeln!(f, "  {}", page.notes_prompt)?;

        let nav: Vec<String> = [
            page.previous_page().map(|n| format!("previous: {}", n)),
            page.next_page().map(|n| format!("next: {}", n)),
        ]
        .into_iter()
        .flatten()
        .collect();
        writeln!(f)?;
        writeln!(f, "{}", nav.join("  "))
    }
}

#[cfg(test)]
#[path = "wiki_tests.rs"]
mod tests;
