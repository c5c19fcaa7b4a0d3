//! # CyberBot UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! ## Overview
//!
//! Terminal presentation for the chat command: the startup banner and the
//! [`console`] adapter that plugs stdin/stdout into the dialogue
//! engine. Nothing in here knows about topics or session state.
//!
use crate::core::error::{CyberbotError, Result};
use std::io::Write;

pub mod console;

/// # Print Banner (`print_banner`)
///
/// Writes the ASCII-art banner shown before a chat session starts.
///
/// ## Errors
///
/// Returns `CyberbotError::Console` if the writer fails.
pub fn print_banner(out: &mut impl Write, bot_name: &str) -> Result<()> {
    let banner = format!(
        r#"
      ______
     |      |
     | Cyber|
     |______|
      ||  ||
      ||  ||
     (__) (__)

  {bot_name}: Cybersecurity Awareness Bot
  Helping you stay safe online!
"#
    );
    writeln!(out, "{banner}")
        .and_then(|_| out.flush())
        .map_err(|e| CyberbotError::Console(format!("Failed to print banner: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_names_the_bot() {
        let mut out = Vec::new();
        print_banner(&mut out, "Sentinel").unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Sentinel: Cybersecurity Awareness Bot"));
        assert!(printed.contains("Helping you stay safe online!"));
    }
}
