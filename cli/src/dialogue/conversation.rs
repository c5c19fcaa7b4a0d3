//! # Conversation Loop
//!
//! File: cli/src/dialogue/conversation.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! ## Overview
//!
//! Drives a session through its stages:
//!
//! ```text
//! Greeting -> AwaitingMood -> AwaitingInterest -> Chatting -> Exited
//! ```
//!
//! The first three stages run once and seed the [`SessionState`] with the
//! user's name, mood and an initial interest. `Chatting` repeats one turn per
//! line of input until the user types `exit` or the input ends.
//!
//! ## Boundary
//!
//! The conversation never touches a terminal. It reads through a
//! [`LineSource`] and writes through a [`MessageSink`]; the order of `emit`
//! calls within a turn is part of the behaviour. `VecDeque<String>` and
//! `Vec<String>` implement the two traits so sessions can be scripted.
//!
//! ## Turn order (`Chatting`)
//!
//! 1. Read a line; end of input exits.
//! 2. Empty line: re-prompt, nothing else changes.
//! 3. `exit`: farewell, stop.
//! 4. Mood word: remember it, acknowledge it.
//! 5. Interest declaration: remember it, acknowledge it.
//! 6. Follow-up confirmation: answer the pending topic and end the turn.
//! 7. Otherwise answer the topic, small talk or fallback.
//! 8. Offer a follow-up on the topic just answered.
//! 9. Remind the user of their interests.
//!
use super::intent::{self, Intent, Mood};
use super::knowledge::TopicId;
use super::normalize;
use super::selector::ResponseSelector;
use super::session::{InterestOutcome, SessionState};
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::VecDeque;
use tracing::{debug, info};

/// Where text comes from. `None` means the input has ended.
pub trait LineSource {
    fn read_line(&mut self) -> Option<String>;
}

/// Where text goes.
pub trait MessageSink {
    fn emit(&mut self, message: &str);
}

impl LineSource for VecDeque<String> {
    fn read_line(&mut self) -> Option<String> {
        self.pop_front()
    }
}

impl MessageSink for Vec<String> {
    fn emit(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Position in the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Greeting,
    AwaitingMood,
    AwaitingInterest,
    Chatting,
    Exited,
}

pub const REPROMPT: &str = "Please type a question, or 'exit' to leave.";
pub const NAME_REQUIRED: &str = "Name cannot be empty. Please enter your name.";

/// One user's conversation with the bot.
#[derive(Debug)]
pub struct Conversation<R = StdRng> {
    bot_name: String,
    state: SessionState,
    selector: ResponseSelector<R>,
    stage: Stage,
}

impl Conversation<StdRng> {
    /// A fresh session. `seed` fixes tip selection for reproducible runs.
    pub fn new(bot_name: &str, seed: Option<u64>) -> Self {
        Self::with_selector(bot_name, ResponseSelector::seeded(seed))
    }
}

impl<R: Rng> Conversation<R> {
    pub fn with_selector(bot_name: &str, selector: ResponseSelector<R>) -> Self {
        Self {
            bot_name: bot_name.to_string(),
            state: SessionState::default(),
            selector,
            stage: Stage::Greeting,
        }
    }

    /// Supplies the user's name up front; the greeting then skips the name prompt.
    pub fn with_user_name(mut self, name: &str) -> Self {
        let name = name.trim();
        if !name.is_empty() {
            self.state.user_name = Some(name.to_string());
        }
        self
    }

    /// Jumps straight to `Chatting` with an empty session.
    pub fn skip_onboarding(mut self) -> Self {
        self.stage = Stage::Chatting;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Runs every remaining stage until the session has exited.
    pub fn run(&mut self, input: &mut impl LineSource, output: &mut impl MessageSink) {
        info!("Starting conversation as {}", self.bot_name);
        while self.step(input, output) != Stage::Exited {}
        info!(
            "Conversation ended ({} interest(s) recorded)",
            self.state.interests.len()
        );
    }

    /// Advances the state machine by one stage or one chat turn.
    pub fn step(&mut self, input: &mut impl LineSource, output: &mut impl MessageSink) -> Stage {
        self.stage = match self.stage {
            Stage::Greeting => self.greet(input, output),
            Stage::AwaitingMood => self.ask_mood(input, output),
            Stage::AwaitingInterest => self.ask_interest(input, output),
            Stage::Chatting => {
                let line = input.read_line();
                self.handle_line(line.as_deref(), output)
            }
            Stage::Exited => Stage::Exited,
        };
        self.stage
    }

    fn greet(&mut self, input: &mut impl LineSource, output: &mut impl MessageSink) -> Stage {
        if self.state.user_name.is_none() {
            output.emit("Before we begin, what's your name?");
            loop {
                let Some(line) = input.read_line() else {
                    return self.farewell(output);
                };
                let name = line.trim();
                if name.eq_ignore_ascii_case("exit") {
                    return self.farewell(output);
                }
                if !name.is_empty() {
                    self.state.user_name = Some(name.to_string());
                    break;
                }
                output.emit(NAME_REQUIRED);
            }
        }
        let name = self.state.user_name.as_deref().unwrap_or_default();
        output.emit(&format!(
            "Nice to meet you, {name}! I'm {}, your cybersecurity awareness assistant.",
            self.bot_name
        ));
        Stage::AwaitingMood
    }

    fn ask_mood(&mut self, input: &mut impl LineSource, output: &mut impl MessageSink) -> Stage {
        output.emit("How are you feeling today?");
        let Some(line) = input.read_line() else {
            return self.farewell(output);
        };
        let text = normalize::normalize(Some(&line));
        if text == "exit" {
            return self.farewell(output);
        }
        match Mood::scan(&text) {
            Some(mood) => {
                self.state.mood = Some(mood);
                output.emit(mood.acknowledgment());
            }
            None if text.is_empty() => output.emit("No problem, let's get started."),
            None => output.emit("Thanks for sharing."),
        }
        Stage::AwaitingInterest
    }

    fn ask_interest(&mut self, input: &mut impl LineSource, output: &mut impl MessageSink) -> Stage {
        output.emit(
            "Is there a cybersecurity topic you're especially interested in? (Press Enter to skip.)",
        );
        let Some(line) = input.read_line() else {
            return self.farewell(output);
        };
        let text = normalize::normalize(Some(&line));
        if text == "exit" {
            return self.farewell(output);
        }
        let interest = if normalize::is_interest_declaration(&text) {
            normalize::extract_interest(&text)
        } else {
            Some(line.trim().to_string()).filter(|raw| !raw.is_empty())
        };
        match interest {
            Some(interest) => self.remember_interest(&interest, output),
            None => output.emit(
                "No worries. You can tell me later by saying \"I'm interested in ...\".",
            ),
        }
        output.emit(
            "Ask me about passwords, phishing, privacy, antivirus, social media, software updates, \
             firewalls and more. Type 'exit' anytime to leave.",
        );
        Stage::Chatting
    }

    /// # Handle Line (`handle_line`)
    ///
    /// Processes one chat turn for `line` (`None` = end of input) and returns
    /// the resulting stage: `Chatting`, or `Exited` after a farewell.
    pub fn handle_line(&mut self, line: Option<&str>, output: &mut impl MessageSink) -> Stage {
        let Some(raw) = line else {
            debug!("Input ended; treating as exit.");
            return self.farewell(output);
        };
        let text = normalize::normalize(Some(raw));
        let classification = intent::classify(&text, self.state.pending_follow_up.is_some());
        debug!("Classified {:?} as {:?}", text, classification.intents());

        match classification.primary {
            Intent::ExitRequested => return self.farewell(output),
            Intent::Empty => {
                output.emit(REPROMPT);
                return Stage::Chatting;
            }
            _ => {}
        }

        if let Some(mood) = classification.mood {
            self.state.mood = Some(mood);
            output.emit(mood.acknowledgment());
        }
        if let Some(interest) = &classification.interest {
            self.remember_interest(interest, output);
        }

        match classification.primary {
            Intent::FollowUpConfirmation => self.confirm_follow_up(output),
            Intent::TopicMatch(topic) => {
                output.emit(self.selector.select_tip(topic).text);
                self.answered(Some(topic), output);
            }
            Intent::SmallTalk(talk) => {
                output.emit(talk.answer());
                self.answered(None, output);
            }
            _ => {
                let fallback = self.selector.fallback();
                output.emit(fallback);
                self.answered(None, output);
            }
        }
        Stage::Chatting
    }

    /// Steps 8 and 9: record the topic, offer a follow-up, remind of interests.
    fn answered(&mut self, topic: Option<TopicId>, output: &mut impl MessageSink) {
        self.state.last_topic = topic;
        self.state.pending_follow_up = topic;
        if let Some(topic) = topic {
            output.emit(&format!(
                "Would you like to know more about {}? Type 'yes' if you do.",
                topic.label()
            ));
        }
        self.remind_interests(output);
    }

    fn confirm_follow_up(&mut self, output: &mut impl MessageSink) {
        // Only classified as a confirmation while a follow-up is pending.
        let Some(topic) = self.state.pending_follow_up.take() else {
            return;
        };
        output.emit(self.selector.select_tip(topic).text);
        self.state.last_topic = Some(topic);
        output.emit(&format!(
            "If you have more questions about {}, just ask!",
            topic.label()
        ));
        self.remind_interests(output);
    }

    fn remember_interest(&mut self, interest: &str, output: &mut impl MessageSink) {
        match self.state.interests.add(interest) {
            InterestOutcome::Added(added) => {
                debug!("Recorded interest {:?}", added);
                output.emit(&format!(
                    "Great! I'll remember that you're interested in {added}."
                ));
            }
            InterestOutcome::AlreadyKnown(known) => {
                output.emit(&format!("I already know you're interested in {known}."));
            }
        }
    }

    fn remind_interests(&self, output: &mut impl MessageSink) {
        if !self.state.interests.is_empty() {
            output.emit(&format!(
                "Remember, you're interested in: {}.",
                self.state.interests.joined()
            ));
        }
    }

    fn farewell(&mut self, output: &mut impl MessageSink) -> Stage {
        match self.state.user_name.as_deref() {
            Some(name) => output.emit(&format!("Goodbye, {name}! Stay safe online.")),
            None => output.emit("Goodbye! Stay safe online."),
        }
        self.stage = Stage::Exited;
        Stage::Exited
    }
}
