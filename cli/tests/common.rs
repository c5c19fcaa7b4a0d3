//! # CyberBot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each `.rs` file
//! in that directory (other than this module) is compiled as a separate test
//! crate.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::collections::VecDeque;
use std::fs;
use tempfile::TempDir;

/// # Get CyberBot Command (`cyberbot_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `cyberbot` binary.
///
/// ## Panics
/// Panics if the `cyberbot` binary cannot be found via `Command::cargo_bin`.
pub fn cyberbot_cmd() -> Command {
    Command::cargo_bin("cyberbot").expect("Failed to find cyberbot binary for testing")
}

/// Writes a config file into a fresh temp dir so tests never pick up a
/// user or project configuration. Keep the `TempDir` alive for the test.
pub fn isolated_config(contents: &str) -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("cyberbot.toml");
    fs::write(&path, contents).expect("Failed to write config file");
    let path = path.to_string_lossy().into_owned();
    (dir, path)
}

/// Config without banner or typing delay, fixed seed.
pub const QUIET_CONFIG: &str = "[chat]\nshow_banner = false\ntyping_delay_ms = 0\nseed = 1\n";

/// Scripted input for driving the library conversation directly.
pub fn lines(input: &[&str]) -> VecDeque<String> {
    input.iter().map(|s| s.to_string()).collect()
}
