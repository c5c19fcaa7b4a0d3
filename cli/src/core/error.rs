//! # CyberBot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! ## Overview
//!
//! This module defines the error types used by the outer shell of CyberBot:
//! configuration loading, command-line handling, and the terminal console.
//! The conversation engine itself (`crate::dialogue`) has no failure surface;
//! empty input, unrecognized questions and end-of-input are all ordinary turns.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `CyberbotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust,ignore
//! use anyhow::Context;
//!
//! // Return a specific error type
//! let topic: TopicId = name.parse()?; // CyberbotError::UnknownTopic on failure
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the CyberBot application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CyberbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown topic '{name}'. Run `cyberbot topics` to see the available topics.")]
    UnknownTopic { name: String },

    #[error("Console error: {0}")]
    Console(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
