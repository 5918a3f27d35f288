// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Page-number arithmetic
//!
//! Everything about a page is derived from its number. The functions here
//! assume a number already checked to be in `1..=TOTAL_WIKI_PAGES`.

use crate::catalog::{
    WikiCategory, WikiDifficulty, DETAIL_FOCUSES, MODULE_THEMES, PAGES_PER_MODULE,
};
use std::collections::HashMap;

/// Zero-based position of a page within its module
pub fn page_index_in_module(page_number: u32) -> u32 {
    (page_number - 1) % PAGES_PER_MODULE
}

pub fn category_index(page_number: u32) -> u32 {
    page_index_in_module(page_number) % WikiCategory::ALL.len() as u32
}

pub fn module_number(page_number: u32) -> u32 {
    (page_number - 1) / PAGES_PER_MODULE + 1
}

pub fn module_theme(module_number: u32) -> &'static str {
    MODULE_THEMES[(module_number as usize - 1) % MODULE_THEMES.len()]
}

/// Which pass through the theme list a module belongs to (1 for modules 1-12)
pub fn module_cycle(module_number: u32) -> u32 {
    (module_number - 1) / MODULE_THEMES.len() as u32 + 1
}

pub fn focus_area(module_number: u32, page_index_in_module: u32) -> &'static str {
    DETAIL_FOCUSES[(module_number + page_index_in_module) as usize % DETAIL_FOCUSES.len()]
}

/// Difficulty tier.
///
/// The `module_number >= 70` arm cannot fire with 50 modules; it is kept so the
/// tiering stays correct if the page count grows.
pub fn difficulty(module_number: u32, category_index: u32) -> WikiDifficulty {
    if module_number >= 70 || category_index >= 3 {
        return WikiDifficulty::Expert;
    }
    if module_number >= 30 {
        return WikiDifficulty::Advanced;
    }
    WikiDifficulty::Core
}

pub fn estimated_minutes(module_number: u32, category_index: u32) -> u32 {
    let base = 14 + category_index * 2;
    let bonus = module_number.saturating_sub(1) / 10;
    (base + bonus).min(45)
}

/// Seed for the decorative page artwork; no meaning beyond being stable per page.
pub fn art_seed(page_number: u32, module_number: u32, category_index: u32) -> u32 {
    page_number * 17 + module_number * 11 + category_index * 7
}

pub fn page_path(page_number: u32) -> String {
    format!("/labs/{}", page_number)
}

/// All derived facts about one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub page_number: u32,
    pub module_number: u32,
    /// 1-based position within the module
    pub module_page_number: u32,
    pub category_index: u32,
    pub category: WikiCategory,
    pub module_theme: &'static str,
    pub focus_area: &'static str,
    pub module_cycle: u32,
}

impl PageContext {
    pub fn new(page_number: u32) -> Self {
        let index = page_index_in_module(page_number);
        let category_index = category_index(page_number);
        let module_number = module_number(page_number);

        Self {
            page_number,
            module_number,
            module_page_number: index + 1,
            category_index,
            category: WikiCategory::from_index(category_index),
            module_theme: module_theme(module_number),
            focus_area: focus_area(module_number, index),
            module_cycle: module_cycle(module_number),
        }
    }

    /// Template variables available to page text
    pub fn vars(&self) -> HashMap<String, String> {
        [
            ("page", self.page_number.to_string()),
            ("module", self.module_number.to_string()),
            ("theme", self.module_theme.to_string()),
            ("focus", self.focus_area.to_string()),
            ("category", self.category.key().to_string()),
            ("cycle", self.module_cycle.to_string()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
