// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// `lh` with a clean environment: no database, no log filter
pub fn lh() -> Command {
    let mut cmd = Command::cargo_bin("lh").expect("lh binary");
    cmd.env_remove("LH_DATABASE_PATH").env_remove("RUST_LOG");
    cmd
}

/// `lh` backed by a SQLite file inside `dir`
pub fn lh_with_db(dir: &TempDir) -> Command {
    let mut cmd = lh();
    cmd.env("LH_DATABASE_PATH", db_path(dir));
    cmd
}

pub fn db_path(dir: &TempDir) -> PathBuf {
    dir.path().join("lab.db")
}

/// Run with `--format json` appended and parse stdout
pub fn json(mut cmd: Command, args: &[&str]) -> serde_json::Value {
    let output = cmd
        .args(args)
        .args(["--format", "json"])
        .output()
        .expect("run lh");
    assert!(
        output.status.success(),
        "lh {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("json stdout")
}
