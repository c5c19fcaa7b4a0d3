//! # CyberBot Topics Command
//!
//! File: cli/src/commands/topics.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! ## Overview
//!
//! Implements `cyberbot topics`, which prints what the bot knows about
//! without starting a conversation:
//! - with no arguments, a table of every topic, its tip count and the
//!   phrases that trigger it
//! - with `--show <TOPIC>`, every response stored for that topic
//!
//! ## Examples
//!
//! ```bash
//! cyberbot topics
//! cyberbot topics --show phishing
//! ```
//!
//! Example output:
//!
//! ```text
//! Topic           | Tips | Triggers
//! ----------------+------+--------------------------------------------------
//! password        |    5 | "password"
//! phishing        |    5 | "phishing"
//! ...
//! ```
//!
use crate::core::error::Result;
use crate::dialogue::intent;
use crate::dialogue::knowledge::{self, TopicId};
use clap::Parser;
use std::fmt::Write;
use tracing::info;

/// # Topics Arguments (`TopicsArgs`)
#[derive(Parser, Debug)]
pub struct TopicsArgs {
    /// Print every tip for one topic (e.g. `phishing`, `social_media`).
    #[arg(long, short)]
    pub show: Option<String>,
}

/// # Handle Topics Command (`handle_topics`)
///
/// ## Returns
///
/// * `Result<()>` - `Err(CyberbotError::UnknownTopic)` if `--show` names a
///   topic that does not exist.
pub fn handle_topics(args: TopicsArgs) -> Result<()> {
    info!("Handling topics command with args: {:?}", args);
    match args.show {
        Some(name) => {
            let topic: TopicId = name.parse()?;
            print!("{}", format_topic_tips(topic));
        }
        None => print!("{}", format_topic_table()),
    }
    Ok(())
}

/// All phrases that lead to `topic`, joined for display.
fn describe_triggers(topic: TopicId) -> String {
    let mut parts: Vec<String> = intent::triggers_for(topic)
        .map(|trigger| trigger.describe())
        .collect();
    parts.extend(knowledge::keywords_for(topic).map(|key| format!("\"{key}\"")));
    parts.join(" | ")
}

fn format_topic_table() -> String {
    let name_width = TopicId::ALL
        .iter()
        .map(|topic| topic.name().len())
        .max()
        .unwrap_or(10)
        .clamp(10, 30);

    let mut out = String::new();
    let _ = writeln!(out, "\nTopics CyberBot can talk about:\n");
    let _ = writeln!(out, "{:<width$} | Tips | Triggers", "Topic", width = name_width);
    let _ = writeln!(out, "{:-<width$}-+------+-{:-<50}", "", "", width = name_width);
    for topic in TopicId::ALL {
        let _ = writeln!(
            out,
            "{:<width$} | {:>4} | {}",
            topic.name(),
            knowledge::lookup(topic).len(),
            describe_triggers(topic),
            width = name_width
        );
    }
    let _ = writeln!(out, "\nFound {} topic(s).", TopicId::ALL.len());
    let _ = writeln!(
        out,
        "Use 'cyberbot topics --show <Topic>' to read every tip, or 'cyberbot chat' to start talking."
    );
    out
}

fn format_topic_tips(topic: TopicId) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{} ({}):\n", topic.label(), topic.name());
    for (i, tip) in knowledge::lookup(topic).iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {}", i + 1, tip);
    }
    out
}
