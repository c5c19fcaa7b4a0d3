//! # Session State
//!
//! File: cli/src/dialogue/session.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! The per-conversation memory: the user's name and mood, the interests they
//! declared, the last topic answered and an open follow-up offer. Read access
//! is public; only the conversation in this module tree mutates it.
//!
use super::intent::Mood;
use super::knowledge::TopicId;

/// Interests in insertion order, unique under case-insensitive comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interests(Vec<String>);

/// What happened when an interest was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterestOutcome {
    Added(String),
    /// Carries the stored (first-seen) spelling.
    AlreadyKnown(String),
}

impl Interests {
    /// Adds `interest` unless an entry equal ignoring case already exists.
    pub fn add(&mut self, interest: &str) -> InterestOutcome {
        let wanted = interest.to_lowercase();
        match self.0.iter().find(|known| known.to_lowercase() == wanted) {
            Some(known) => InterestOutcome::AlreadyKnown(known.clone()),
            None => {
                self.0.push(interest.to_string());
                InterestOutcome::Added(interest.to_string())
            }
        }
    }

    pub fn contains(&self, interest: &str) -> bool {
        let wanted = interest.to_lowercase();
        self.0.iter().any(|known| known.to_lowercase() == wanted)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Comma-joined, in insertion order.
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

/// Memory for one conversation. Discarded when the process exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub(super) user_name: Option<String>,
    pub(super) mood: Option<Mood>,
    pub(super) interests: Interests,
    pub(super) last_topic: Option<TopicId>,
    pub(super) pending_follow_up: Option<TopicId>,
}

impl SessionState {
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn interests(&self) -> &Interests {
        &self.interests
    }

    pub fn last_topic(&self) -> Option<TopicId> {
        self.last_topic
    }

    pub fn pending_follow_up(&self) -> Option<TopicId> {
        self.pending_follow_up
    }
}
