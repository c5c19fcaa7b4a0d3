//! # CyberBot Dialogue Engine
//!
//! File: cli/src/dialogue/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! ## Overview
//!
//! The conversation engine: everything between a raw line of user text and
//! the messages the bot sends back. It is synchronous, owns no I/O, and has
//! no error states.
//!
//! ## Architecture
//!
//! Leaves first:
//! - `knowledge`: topics and their canned responses
//! - `normalize`: input clean-up and interest extraction
//! - `intent`: mood, interest and topic classification
//! - `selector`: random tip selection without immediate repeats
//! - `session`: per-conversation memory
//! - `conversation`: the stage machine and turn loop tying it all together
//!
//! ## Usage
//!
//! ```rust
//! use cyberbot::dialogue::{Conversation, Stage};
//! use std::collections::VecDeque;
//!
//! let mut convo = Conversation::new("CyberBot", Some(7)).skip_onboarding();
//! let mut input: VecDeque<String> = ["What is phishing?", "exit"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let mut output: Vec<String> = Vec::new();
//!
//! convo.run(&mut input, &mut output);
//! assert_eq!(convo.stage(), Stage::Exited);
//! assert!(output.iter().any(|m| m.contains("know more about phishing")));
//! ```
//!
pub mod conversation;
pub mod intent;
pub mod knowledge;
pub mod normalize;
pub mod selector;
pub mod session;

pub use conversation::{Conversation, LineSource, MessageSink, Stage};
pub use intent::{Classification, Intent, Mood, SmallTalk};
pub use knowledge::TopicId;
pub use selector::{ResponseSelector, Selection, SelectionKey};
pub use session::{InterestOutcome, Interests, SessionState};
