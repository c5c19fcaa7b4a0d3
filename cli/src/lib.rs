//! # CyberBot Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! ## Overview
//!
//! CyberBot is a terminal chatbot that answers questions about staying safe
//! online. The library half of the crate holds everything the `cyberbot`
//! binary runs, so integration tests (and other front ends) can drive the
//! conversation engine directly.
//!
//! - `dialogue`: The conversation engine (classification, tips, session state)
//! - `commands`: Handlers for the `chat` and `topics` subcommands
//! - `common`: Terminal presentation (banner, console adapter)
//! - `core`: Configuration and error types
//!
pub mod commands;
pub mod common;
pub mod core;
pub mod dialogue;
