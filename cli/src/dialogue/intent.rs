//! # Intent Classification
//!
//! File: cli/src/dialogue/intent.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! ## Overview
//!
//! Turns one line of normalized text into a [`Classification`]: an optional
//! mood signal, an optional interest declaration, and exactly one primary
//! [`Intent`].
//!
//! ## Priority
//!
//! 1. `exit` (exact) ends the conversation.
//! 2. Empty text.
//! 3. Mood words (side channel, fires alongside anything below).
//! 4. `yes`/`sure`/`yeah` while a follow-up is pending.
//! 5. Interest declarations (side channel; topic matching still runs).
//! 6. Tip-pool topics via [`TOPIC_RULES`], first match wins.
//! 7. The knowledge base keyword table.
//! 8. Fixed second-tier answers via [`SECOND_TIER_RULES`].
//! 9. Unrecognized.
//!
//! Order matters because some triggers are substrings of others and because
//! tip-pool topics must win over single-line keyword answers.
//!
use super::knowledge::{self, TopicId};
use super::normalize;
use std::fmt;

/// Sentiment words the bot reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Worried,
    Scared,
    Nervous,
    Confused,
    Frustrated,
    Curious,
    Happy,
    Upset,
}

impl Mood {
    /// Scan order; the first word found in the text wins.
    pub const ALL: [Mood; 8] = [
        Mood::Worried,
        Mood::Scared,
        Mood::Nervous,
        Mood::Confused,
        Mood::Frustrated,
        Mood::Curious,
        Mood::Happy,
        Mood::Upset,
    ];

    pub fn word(self) -> &'static str {
        match self {
            Mood::Worried => "worried",
            Mood::Scared => "scared",
            Mood::Nervous => "nervous",
            Mood::Confused => "confused",
            Mood::Frustrated => "frustrated",
            Mood::Curious => "curious",
            Mood::Happy => "happy",
            Mood::Upset => "upset",
        }
    }

    /// What the bot says when it notices this mood.
    pub fn acknowledgment(self) -> &'static str {
        match self {
            Mood::Worried => "It's completely understandable to feel worried. Let's go through it together so you feel more in control.",
            Mood::Scared => "Feeling scared about online threats is normal. A few simple habits go a long way, and I'm here to help.",
            Mood::Nervous => "No need to be nervous. Staying safe online is a skill, and you're already learning it.",
            Mood::Confused => "Cybersecurity can be confusing. I'll keep my answers short and clear.",
            Mood::Frustrated => "I'm sorry you're feeling frustrated. Let's take it one step at a time.",
            Mood::Curious => "Curiosity is the best defence! Ask me anything about staying safe online.",
            Mood::Happy => "Glad to hear you're feeling happy! Let's keep you safe online too.",
            Mood::Upset => "I'm sorry you're upset. If something went wrong online, we can work out what to do next.",
        }
    }

    /// First mood word contained in `text`.
    pub fn scan(text: &str) -> Option<Mood> {
        Mood::ALL.into_iter().find(|mood| text.contains(mood.word()))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// Conversational questions with one fixed, non-topical answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmallTalk {
    HowAreYou,
    Purpose,
    WhatCanIAsk,
}

impl SmallTalk {
    pub fn answer(self) -> &'static str {
        match self {
            SmallTalk::HowAreYou => "I'm just code, but I'm running smoothly and ready to help you stay safe online!",
            SmallTalk::Purpose => "My purpose is to help you learn how to protect yourself online with practical cybersecurity tips.",
            SmallTalk::WhatCanIAsk => "You can ask me about passwords, phishing, privacy, antivirus, social media, software updates, firewalls, safe browsing, two-factor authentication, public Wi-Fi, and more.",
        }
    }
}

/// One recognised signal in a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    MoodDeclared(Mood),
    InterestDeclared(String),
    TopicMatch(TopicId),
    SmallTalk(SmallTalk),
    FollowUpConfirmation,
    ExitRequested,
    Empty,
    Unrecognized,
}

/// Result of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub mood: Option<Mood>,
    pub interest: Option<String>,
    pub primary: Intent,
}

impl Classification {
    fn only(primary: Intent) -> Self {
        Self {
            mood: None,
            interest: None,
            primary,
        }
    }

    /// All intents that fired, in priority order.
    pub fn intents(&self) -> Vec<Intent> {
        let mut intents = Vec::with_capacity(3);
        if let Some(mood) = self.mood {
            intents.push(Intent::MoodDeclared(mood));
        }
        if let Some(interest) = &self.interest {
            intents.push(Intent::InterestDeclared(interest.clone()));
        }
        intents.push(self.primary.clone());
        intents
    }
}

/// Substring test over normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Any one of the phrases occurs.
    Any(&'static [&'static str]),
    /// Every phrase occurs.
    All(&'static [&'static str]),
}

impl Trigger {
    pub fn matches(self, text: &str) -> bool {
        match self {
            Trigger::Any(phrases) => phrases.iter().any(|p| text.contains(p)),
            Trigger::All(phrases) => phrases.iter().all(|p| text.contains(p)),
        }
    }

    /// Human-readable form, e.g. `"wifi" | "public network"`.
    pub fn describe(self) -> String {
        let (phrases, joiner) = match self {
            Trigger::Any(phrases) => (phrases, " | "),
            Trigger::All(phrases) => (phrases, " + "),
        };
        phrases
            .iter()
            .map(|p| format!("\"{p}\""))
            .collect::<Vec<_>>()
            .join(joiner)
    }
}

/// Tip-pool topics, in priority order.
pub const TOPIC_RULES: &[(Trigger, TopicId)] = &[
    (Trigger::Any(&["phishing"]), TopicId::Phishing),
    (Trigger::Any(&["password"]), TopicId::Password),
    (Trigger::Any(&["privacy"]), TopicId::Privacy),
    (Trigger::Any(&["antivirus"]), TopicId::Antivirus),
    (Trigger::Any(&["social media"]), TopicId::SocialMedia),
    (
        Trigger::Any(&["software update", "updates"]),
        TopicId::SoftwareUpdate,
    ),
    (Trigger::Any(&["firewall"]), TopicId::Firewall),
];

/// Outcome of a second-tier rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedAnswer {
    Topic(TopicId),
    SmallTalk(SmallTalk),
}

/// Fixed answers tried after the keyword table, in priority order.
pub const SECOND_TIER_RULES: &[(Trigger, FixedAnswer)] = &[
    (
        Trigger::Any(&["how are you"]),
        FixedAnswer::SmallTalk(SmallTalk::HowAreYou),
    ),
    (
        Trigger::Any(&["purpose"]),
        FixedAnswer::SmallTalk(SmallTalk::Purpose),
    ),
    (
        Trigger::All(&["what can", "ask"]),
        FixedAnswer::SmallTalk(SmallTalk::WhatCanIAsk),
    ),
    (
        Trigger::Any(&["browsing"]),
        FixedAnswer::Topic(TopicId::SafeBrowsing),
    ),
    (
        Trigger::Any(&["2fa", "two-factor", "multi-factor"]),
        FixedAnswer::Topic(TopicId::TwoFactor),
    ),
    (
        Trigger::Any(&["wifi", "wi-fi", "public network"]),
        FixedAnswer::Topic(TopicId::PublicWifi),
    ),
];

/// Phrase triggers that lead to `topic` (tip-pool and second-tier rules).
pub fn triggers_for(topic: TopicId) -> impl Iterator<Item = Trigger> {
    let from_topics = TOPIC_RULES
        .iter()
        .filter(move |(_, t)| *t == topic)
        .map(|&(trigger, _)| trigger);
    let from_second_tier = SECOND_TIER_RULES
        .iter()
        .filter(move |(_, answer)| *answer == FixedAnswer::Topic(topic))
        .map(|&(trigger, _)| trigger);
    from_topics.chain(from_second_tier)
}

const CONFIRMATIONS: &[&str] = &["yes", "sure", "yeah"];

/// # Classify (`classify`)
///
/// ## Arguments
///
/// * `normalized` - Output of [`normalize::normalize`].
/// * `follow_up_pending` - Whether the previous turn left a follow-up offer open.
pub fn classify(normalized: &str, follow_up_pending: bool) -> Classification {
    if normalized == "exit" {
        return Classification::only(Intent::ExitRequested);
    }
    if normalized.is_empty() {
        return Classification::only(Intent::Empty);
    }

    let mood = Mood::scan(normalized);

    if follow_up_pending && CONFIRMATIONS.contains(&normalized) {
        return Classification {
            mood,
            interest: None,
            primary: Intent::FollowUpConfirmation,
        };
    }

    Classification {
        mood,
        interest: normalize::extract_interest(normalized),
        primary: classify_topic(normalized),
    }
}

/// Topic, keyword and fixed-answer matching only (priority steps 6 to 9).
pub fn classify_topic(normalized: &str) -> Intent {
    if let Some(&(_, topic)) = TOPIC_RULES
        .iter()
        .find(|(trigger, _)| trigger.matches(normalized))
    {
        return Intent::TopicMatch(topic);
    }
    if let Some(topic) = knowledge::match_keyword(normalized) {
        return Intent::TopicMatch(topic);
    }
    match SECOND_TIER_RULES
        .iter()
        .find(|(trigger, _)| trigger.matches(normalized))
    {
        Some(&(_, FixedAnswer::Topic(topic))) => Intent::TopicMatch(topic),
        Some(&(_, FixedAnswer::SmallTalk(talk))) => Intent::SmallTalk(talk),
        None => Intent::Unrecognized,
    }
}
