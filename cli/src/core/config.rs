//! # CyberBot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! ## Overview
//!
//! This module implements the configuration system for CyberBot, handling
//! loading, merging, and validation of the settings that shape a chat session
//! (bot name, typing animation, banner, random seed).
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config <PATH>` (replaces the two below)
//! 2. Project-specific `.cyberbot.toml` in current directory or ancestors
//! 3. User-specific `<config dir>/cyberbot/config.toml`
//! 4. Default values defined in the code
//!
//! Command-line flags of the `chat` command are applied on top of the loaded
//! configuration by the command handler.
//!
//! ## Examples
//!
//! ```toml
//! [chat]
//! bot_name = "CyberBot"
//! typing_delay_ms = 20
//! show_banner = true
//! seed = 42
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config(None)?;
//! println!("Chatting as {}", cfg.chat.bot_name);
//! ```
//!
use crate::core::error::{CyberbotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Settings for `cyberbot chat`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Name the bot introduces itself with and prefixes its lines with.
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
    /// Per-character delay of the typing animation. Only applied on a terminal.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,
    /// Print the ASCII banner before the conversation starts.
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
    /// Fixed seed for tip selection. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            typing_delay_ms: default_typing_delay_ms(),
            show_banner: default_show_banner(),
            seed: None,
        }
    }
}

fn default_bot_name() -> String {
    "CyberBot".to_string()
}
fn default_typing_delay_ms() -> u64 {
    15
}
fn default_show_banner() -> bool {
    true
}

/// Upper bound for `typing_delay_ms`; anything slower makes long tips unreadable.
pub const MAX_TYPING_DELAY_MS: u64 = 200;

const PROJECT_CONFIG_FILENAME: &str = ".cyberbot.toml";

/// # Load Configuration (`load_config`)
///
/// Loads, merges and validates the configuration.
///
/// ## Arguments
///
/// * `explicit_path` - Optional path given with `--config`. `~` is expanded.
///   When present, only this file is read and it must exist.
///
/// ## Returns
///
/// * `Result<Config>` - The validated configuration.
pub fn load_config(explicit_path: Option<&str>) -> Result<Config> {
    let config = match explicit_path {
        Some(raw) => {
            let path = expand_path(raw);
            info!("Loading configuration from: {}", path.display());
            if !path.is_file() {
                return Err(anyhow!(CyberbotError::Config(format!(
                    "Configuration file '{}' does not exist.",
                    path.display()
                ))));
            }
            load_config_from_path(&path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "CyberBot", "cyberbot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.cyberbot.toml) found.");
        Ok(None)
    }
}

/// Walks from `start` up to the filesystem root, stopping at a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.chat.bot_name = if project_cfg.chat.bot_name != default_bot_name() {
        project_cfg.chat.bot_name
    } else {
        user.chat.bot_name
    };
    merged.chat.typing_delay_ms = if project_cfg.chat.typing_delay_ms != default_typing_delay_ms()
    {
        project_cfg.chat.typing_delay_ms
    } else {
        user.chat.typing_delay_ms
    };
    merged.chat.show_banner = if project_cfg.chat.show_banner != default_show_banner() {
        project_cfg.chat.show_banner
    } else {
        user.chat.show_banner
    };
    merged.chat.seed = project_cfg.chat.seed.or(user.chat.seed);
    merged
}

/// Checks values that deserialize fine but make no sense for a session.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.chat.bot_name.trim().is_empty() {
        return Err(anyhow!(CyberbotError::Config(
            "Bot name cannot be empty.".to_string()
        )));
    }
    if config.chat.typing_delay_ms > MAX_TYPING_DELAY_MS {
        return Err(anyhow!(CyberbotError::Config(format!(
            "Typing delay of {} ms exceeds the maximum of {} ms.",
            config.chat.typing_delay_ms, MAX_TYPING_DELAY_MS
        ))));
    }
    debug!("Configuration validation successful.");
    Ok(())
}
