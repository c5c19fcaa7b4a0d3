//! # CyberBot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the CyberBot CLI. Each
//! command defines its own `clap` arguments struct and a handler function
//! that `main.rs` routes to.
//!
//! ## Commands
//!
//! - `chat`: Interactive conversation on stdin/stdout
//! - `topics`: Lists the topics and tips the bot knows
//!

/// The interactive chat session.
pub mod chat;
/// Read-only listing of the knowledge base.
pub mod topics;
