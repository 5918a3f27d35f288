// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Procedural runbook wiki
//!
//! A thousand lab pages derived purely from their page number.

mod catalog;
mod content;
mod context;
mod generator;
mod page;
mod steps;
mod template;

pub use catalog::{
    WikiAccent, WikiCategory, WikiDifficulty, PAGES_PER_MODULE, TOTAL_MODULES, TOTAL_WIKI_PAGES,
};
pub use generator::{get_module_pages, get_page, list_modules, list_pages};
pub use page::{WikiFailurePattern, WikiModuleSummary, WikiPage, WikiPageSummary, WikiStep};
pub use template::interpolate;
