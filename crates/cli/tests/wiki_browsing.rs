// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for the runbook wiki

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::{json, lh};
use predicates::prelude::*;

#[test]
fn test_lh_help() {
    lh().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("wiki"))
        .stdout(predicate::str::contains("journal"));
}

#[test]
fn page_renders_in_text() {
    lh().args(["wiki", "page", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/labs/1"))
        .stdout(predicate::str::contains("Scenario"))
        .stdout(predicate::str::contains("Common failures"))
        .stdout(predicate::str::contains("next: 2"));
}

#[test]
fn page_json_carries_full_content() {
    let page = json(lh(), &["wiki", "page", "20"]);
    assert_eq!(page["pageNumber"], 20);
    assert_eq!(page["moduleNumber"], 1);
    assert_eq!(page["path"], "/labs/20");
    assert_eq!(page["steps"].as_array().unwrap().len(), 7);
    assert_eq!(page["commonFailures"].as_array().unwrap().len(), 2);
}

#[test]
fn pages_are_identical_across_runs() {
    let first = json(lh(), &["wiki", "page", "437"]);
    let second = json(lh(), &["wiki", "page", "437"]);
    assert_eq!(first, second);
}

#[test]
fn out_of_range_page_is_not_found() {
    lh().args(["wiki", "page", "1001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page '1001' not found"));

    lh().args(["wiki", "page", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn non_numeric_page_is_not_found() {
    lh().args(["wiki", "page", "intro"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page 'intro' not found"));
}

#[test]
fn module_lists_twenty_pages() {
    let pages = json(lh(), &["wiki", "module", "2"]);
    let pages = pages.as_array().unwrap();
    assert_eq!(pages.len(), 20);
    assert_eq!(pages[0]["pageNumber"], 21);
    assert_eq!(pages[19]["pageNumber"], 40);
}

#[test]
fn unknown_module_is_empty_not_an_error() {
    let pages = json(lh(), &["wiki", "module", "51"]);
    assert_eq!(pages, serde_json::json!([]));

    lh().args(["wiki", "module", "0"])
        .assert()
        .success()
        .stdout("No pages in module 0\n");
}

#[test]
fn catalogue_sizes() {
    let modules = json(lh(), &["wiki", "modules"]);
    assert_eq!(modules.as_array().unwrap().len(), 50);

    let pages = json(lh(), &["wiki", "pages"]);
    assert_eq!(pages.as_array().unwrap().len(), 1000);
}

#[test]
fn wiki_ignores_a_broken_database() {
    let dir = tempfile::TempDir::new().unwrap();
    // A directory cannot be opened as a database
    lh().env("LH_DATABASE_PATH", dir.path())
        .args(["wiki", "page", "5"])
        .assert()
        .success();
}
