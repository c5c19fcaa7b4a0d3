//! # CyberBot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! ## Overview
//!
//! This file serves as the main entry point for the CyberBot CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! Logs are written to stderr so they never mix with the conversation on stdout.
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! cyberbot --help
//!
//! # Chat with debug logging
//! cyberbot -vv chat
//! ```
//!
use clap::Parser;
use cyberbot::commands;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "cyberbot",
    about = "CyberBot: Cybersecurity awareness tips in a friendly chat",
    long_about = "Chat with a bot that answers questions about passwords, phishing, privacy\n\
                  and other everyday online-safety topics.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Read configuration from this file instead of the default locations.
    #[arg(long, global = true, env = "CYBERBOT_CONFIG")]
    config: Option<String>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Start an interactive conversation.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// List the topics the bot can talk about.
    #[command(alias = "t")]
    Topics(commands::topics::TopicsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args, cli.config.as_deref()),
        Commands::Topics(args) => commands::topics::handle_topics(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
