// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Placeholder interpolation for page text

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

// Regex pattern for {variable_name} - this is a constant valid pattern
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_]*)\}").expect("constant regex pattern is valid")
});

/// Interpolate `{name}` placeholders with values from the vars map
///
/// Unknown placeholders are left as-is, so shell fragments such as
/// `%{http_code}` in command templates pass through untouched.
/// Nothing is read from the environment: output depends only on the inputs.
pub fn interpolate(template: &str, vars: &HashMap<String, String>) -> String {
    if !template.contains('{') {
        return template.to_string();
    }

    VAR_PATTERN
        .replace_all(template, |caps: &regex::Captures| {
            let name = &caps[1];
            vars.get(name)
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .to_string()
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
