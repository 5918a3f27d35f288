// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Public lookups over the generated wiki
//!
//! Pages are rebuilt on every call; nothing is cached. Out-of-range input
//! yields `None` or an empty list rather than an error.

use crate::catalog::{PAGES_PER_MODULE, TOTAL_MODULES, TOTAL_WIKI_PAGES};
use crate::context::{self, PageContext};
use crate::page::{WikiModuleSummary, WikiPage, WikiPageSummary};

fn page_in_range(page_number: i64) -> Option<u32> {
    u32::try_from(page_number)
        .ok()
        .filter(|n| (1..=TOTAL_WIKI_PAGES).contains(n))
}

fn module_in_range(module_number: i64) -> Option<u32> {
    u32::try_from(module_number)
        .ok()
        .filter(|m| (1..=TOTAL_MODULES).contains(m))
}

fn summary(page_number: u32) -> WikiPageSummary {
    WikiPageSummary::build(&PageContext::new(page_number))
}

fn module_summaries(module_number: u32) -> Vec<WikiPageSummary> {
    let start = (module_number - 1) * PAGES_PER_MODULE + 1;
    (start..start + PAGES_PER_MODULE).map(summary).collect()
}

/// Full page for `page_number`, or `None` outside `1..=1000`
pub fn get_page(page_number: i64) -> Option<WikiPage> {
    page_in_range(page_number).map(|n| WikiPage::build(&PageContext::new(n)))
}

/// Summaries of every page in order
pub fn list_pages() -> Vec<WikiPageSummary> {
    (1..=TOTAL_WIKI_PAGES).map(summary).collect()
}

pub fn list_modules() -> Vec<WikiModuleSummary> {
    (1..=TOTAL_MODULES)
        .map(|m| WikiModuleSummary {
            module_number: m,
            module_theme: context::module_theme(m),
            pages: module_summaries(m),
        })
        .collect()
}

/// The twenty pages of a module, or empty for an unknown module
pub fn get_module_pages(module_number: i64) -> Vec<WikiPageSummary> {
    module_in_range(module_number)
        .map(module_summaries)
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
