// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Generated page types

use crate::catalog::{WikiAccent, WikiCategory, WikiDifficulty, TOTAL_WIKI_PAGES};
use crate::content;
use crate::context::{self, PageContext};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WikiStep {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    pub expected: String,
    pub why_it_matters: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WikiFailurePattern {
    pub symptom: String,
    pub likely_cause: String,
    pub recovery: String,
}

/// Listing-level view of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WikiPageSummary {
    pub page_number: u32,
    pub path: String,
    pub module_number: u32,
    pub category_key: WikiCategory,
    pub category_short_label: &'static str,
    pub category_full_label: &'static str,
    pub category_accent: WikiAccent,
    pub title: String,
    pub summary: String,
    pub focus_area: &'static str,
    pub difficulty: WikiDifficulty,
    pub estimated_minutes: u32,
}

impl WikiPageSummary {
    pub(crate) fn build(ctx: &PageContext) -> Self {
        let category = ctx.category;
        Self {
            page_number: ctx.page_number,
            path: context::page_path(ctx.page_number),
            module_number: ctx.module_number,
            category_key: category,
            category_short_label: category.short_label(),
            category_full_label: category.full_label(),
            category_accent: category.accent(),
            title: format!(
                "Module {}.{}: {}",
                ctx.module_number,
                ctx.module_page_number,
                category.full_label()
            ),
            summary: content::summary(ctx),
            focus_area: ctx.focus_area,
            difficulty: context::difficulty(ctx.module_number, ctx.category_index),
            estimated_minutes: context::estimated_minutes(ctx.module_number, ctx.category_index),
        }
    }

    /// Compact label for page tabs, e.g. `P3 Security`
    pub fn tab_label(&self) -> String {
        let position = self.page_number.saturating_sub(1) % crate::catalog::PAGES_PER_MODULE + 1;
        format!("P{} {}", position, self.category_short_label)
    }
}

/// A full runbook page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WikiPage {
    #[serde(flatten)]
    pub summary: WikiPageSummary,
    pub scenario: String,
    pub objective: String,
    pub prerequisites: Vec<String>,
    pub steps: Vec<WikiStep>,
    pub verifications: Vec<String>,
    pub signals_to_watch: Vec<String>,
    pub common_failures: Vec<WikiFailurePattern>,
    pub notes_prompt: String,
    pub module_theme: &'static str,
    pub art_seed: u32,
}

impl WikiPage {
    pub(crate) fn build(ctx: &PageContext) -> Self {
        Self {
            summary: WikiPageSummary::build(ctx),
            scenario: content::scenario(ctx),
            objective: content::objective(ctx),
            prerequisites: content::prerequisites(ctx),
            steps: content::steps(ctx),
            verifications: content::verifications(ctx),
            signals_to_watch: content::signals_to_watch(ctx),
            common_failures: content::common_failures(ctx),
            notes_prompt: content::notes_prompt(ctx),
            module_theme: ctx.module_theme,
            art_seed: context::art_seed(ctx.page_number, ctx.module_number, ctx.category_index),
        }
    }

    pub fn page_number(&self) -> u32 {
        self.summary.page_number
    }

    pub fn previous_page(&self) -> Option<u32> {
        let n = self.page_number();
        (n > 1).then(|| n - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        let n = self.page_number();
        (n < TOTAL_WIKI_PAGES).then(|| n + 1)
    }
}

/// A module and its pages in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WikiModuleSummary {
    pub module_number: u32,
    pub module_theme: &'static str,
    pub pages: Vec<WikiPageSummary>,
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
