//! # CyberBot Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! ## Overview
//!
//! Implements `cyberbot chat`, the interactive session. The handler:
//! 1. Loads configuration (`core::config`) and applies command-line overrides
//! 2. Prints the banner (unless disabled)
//! 3. Builds a [`Conversation`] and the stdin/stdout console halves
//! 4. Runs the conversation until the user types `exit` or input ends
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting
//! cyberbot chat
//!
//! # Skip the name prompt and make tip selection reproducible
//! cyberbot chat --name Ada --seed 42
//!
//! # Script a session
//! printf 'Ada\nhappy\n\nWhat is phishing?\nexit\n' | cyberbot chat --no-banner
//! ```
//!
use crate::common::ui::{self, console};
use crate::core::config::{self, ChatConfig};
use crate::core::error::Result;
use crate::dialogue::Conversation;
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

/// # Chat Arguments (`ChatArgs`)
///
/// Flags given here override the values from the configuration file.
#[derive(Parser, Debug, Default)]
pub struct ChatArgs {
    /// Your name. When given, the bot does not ask for it.
    #[arg(long, short)]
    pub name: Option<String>,

    /// Seed for tip selection, for reproducible sessions.
    #[arg(long, env = "CYBERBOT_SEED")]
    pub seed: Option<u64>,

    /// Per-character typing delay in milliseconds (0 disables the animation).
    #[arg(long)]
    pub typing_delay: Option<u64>,

    /// Do not print the startup banner.
    #[arg(long)]
    pub no_banner: bool,
}

/// # Handle Chat Command (`handle_chat`)
///
/// ## Arguments
///
/// * `args` - Parsed `ChatArgs`.
/// * `config_path` - Value of the global `--config` flag, if any.
///
/// ## Returns
///
/// * `Result<()>` - Errors only come from configuration loading or printing
///   the banner; the conversation itself cannot fail.
pub fn handle_chat(args: ChatArgs, config_path: Option<&str>) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);

    let cfg = config::load_config(config_path).context("Failed to load CyberBot configuration")?;
    let settings = apply_overrides(cfg.chat, &args);
    config::validate_config(&config::Config {
        chat: settings.clone(),
    })
    .context("Invalid chat options")?;
    debug!("Effective chat settings: {:?}", settings);

    if settings.show_banner {
        ui::print_banner(&mut std::io::stdout(), &settings.bot_name)?;
    }

    let mut conversation = Conversation::new(&settings.bot_name, settings.seed);
    if let Some(name) = args.name.as_deref() {
        conversation = conversation.with_user_name(name);
    }

    let (mut input, mut output) = console::stdio(&settings.bot_name, settings.typing_delay_ms);
    conversation.run(&mut input, &mut output);
    Ok(())
}

fn apply_overrides(mut settings: ChatConfig, args: &ChatArgs) -> ChatConfig {
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(delay) = args.typing_delay {
        settings.typing_delay_ms = delay;
    }
    if args.no_banner {
        settings.show_banner = false;
    }
    settings
}
