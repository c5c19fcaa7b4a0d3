//! # CyberBot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! ## Overview
//!
//! Shared utilities that sit between the command handlers (`commands::`) and
//! the conversation engine (`dialogue::`).
//!
//! - **`ui`**: terminal presentation (banner, stdin/stdout console adapter).
//!

/// Terminal presentation: banner and the console adapter used by `chat`.
pub mod ui;
