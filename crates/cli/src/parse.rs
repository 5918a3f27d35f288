// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lenient argument parsing shared by the commands
//!
//! Arguments arrive as raw strings so that malformed values map onto the
//! documented fallbacks instead of clap usage errors.

pub const DEFAULT_JOURNAL_LIMIT: usize = 20;
pub const MAX_JOURNAL_LIMIT: usize = 100;

/// Recent journal entries shown by `lab overview`
pub const OVERVIEW_JOURNAL_LIMIT: usize = 5;

/// A record id: strictly positive integer
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Journal page size. Missing, malformed, or non-positive values fall back
/// to the default; larger values are capped.
pub fn parse_limit(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_JOURNAL_LIMIT;
    };
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n)
            .unwrap_or(MAX_JOURNAL_LIMIT)
            .min(MAX_JOURNAL_LIMIT),
        _ => DEFAULT_JOURNAL_LIMIT,
    }
}

/// Any integer; range checks belong to the wiki lookups
pub fn parse_number(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
