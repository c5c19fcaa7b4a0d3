//! # CyberBot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//!
//! The conversation engine lives in `crate::dialogue` and does not depend on
//! either of these; it has no configuration of its own and cannot fail.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{CyberbotError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
