// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `pkgq` with no user config or log directive leaking in.
pub fn pkgq() -> Command {
    let mut cmd = cargo_bin_cmd!("pkgq");
    cmd.env_remove("PKGQ_LOG")
        .env("XDG_CONFIG_HOME", "/nonexistent/pkgq-tests");
    cmd
}

/// Writes `contents` to a config file in a fresh temp directory.
pub fn config_file(contents: &str) -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    (temp, path)
}

/// Runs `pkgq` with `args` and parses stdout as JSON.
pub fn json_output(args: &[&str]) -> serde_json::Value {
    let output = pkgq().args(args).output().unwrap();
    assert!(output.status.success(), "pkgq {:?} failed", args);
    serde_json::from_slice(&output.stdout).unwrap()
}
