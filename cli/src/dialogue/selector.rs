//! # Response Selection
//!
//! File: cli/src/dialogue/selector.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! ## Overview
//!
//! Picks which canned response to show. Tip pools are sampled uniformly at
//! random, excluding whatever was shown last time for the same topic, so
//! asking about one topic twice in a row never repeats a tip verbatim.
//! Single-answer topics are returned as-is. The fallback message for
//! unrecognized input is drawn from a small pool with no repeat rule.
//!
//! The random source is generic over [`rand::Rng`]. Sessions use
//! [`StdRng`], seeded from a fixed value when one is configured so a run can
//! be reproduced.
//!
use super::knowledge::{self, TopicId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use tracing::trace;

const FALLBACK_RESPONSES: &[&str] = &[
    "I didn't quite understand that. Could you rephrase?",
    "Hmm, I'm not sure about that one. Try asking about passwords, phishing or privacy.",
    "I'm still learning! Could you ask that in a different way?",
    "That's outside what I know. Type 'what can I ask' to see the topics I cover.",
];

/// Identifies one selected response: the topic and its index in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionKey {
    pub topic: TopicId,
    pub index: usize,
}

/// A chosen response together with the key it was chosen under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub text: &'static str,
    pub key: SelectionKey,
}

/// # Pick Excluding (`pick_excluding`)
///
/// Draws a uniformly random index in `[0, len)` that differs from `exclude`.
///
/// Exactly one draw is made: a value in `[0, len - 1)` is taken and shifted up
/// by one if it lands on or past the excluded index, which is uniform over the
/// remaining indices and cannot loop. When `len == 1` (or `exclude` is out of
/// range) there is nothing to exclude and a plain draw is returned.
///
/// ## Panics
///
/// Panics if `len == 0`. Every knowledge base pool is non-empty.
pub fn pick_excluding<R: Rng + ?Sized>(rng: &mut R, len: usize, exclude: Option<usize>) -> usize {
    match exclude {
        Some(excluded) if len > 1 && excluded < len => {
            let drawn = rng.gen_range(0..len - 1);
            if drawn >= excluded {
                drawn + 1
            } else {
                drawn
            }
        }
        _ => rng.gen_range(0..len),
    }
}

/// Chooses responses and remembers the last pick per topic.
#[derive(Debug)]
pub struct ResponseSelector<R = StdRng> {
    rng: R,
    previous: HashMap<TopicId, SelectionKey>,
}

impl ResponseSelector<StdRng> {
    /// Seeded when `seed` is given, otherwise seeded from OS entropy.
    pub fn seeded(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng)
    }
}

impl<R: Rng> ResponseSelector<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            previous: HashMap::new(),
        }
    }

    /// Key of the last tip shown for `topic`, if any.
    pub fn previous_selection(&self, topic: TopicId) -> Option<SelectionKey> {
        self.previous.get(&topic).copied()
    }

    /// Selects a response for `topic`, avoiding the previous selection for it.
    pub fn select_tip(&mut self, topic: TopicId) -> Selection {
        let pool = knowledge::lookup(topic);
        let index = if pool.len() == 1 {
            0
        } else {
            let exclude = self.previous_selection(topic).map(|key| key.index);
            pick_excluding(&mut self.rng, pool.len(), exclude)
        };
        let key = SelectionKey { topic, index };
        self.previous.insert(topic, key);
        trace!("Selected tip {} of {} for {}", index, pool.len(), topic);
        Selection {
            text: pool[index],
            key,
        }
    }

    /// A random fallback message for input that matched nothing.
    pub fn fallback(&mut self) -> &'static str {
        FALLBACK_RESPONSES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(FALLBACK_RESPONSES[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_excluding_never_returns_excluded_index() {
        let mut rng = StdRng::seed_from_u64(1);
        for len in 2..6 {
            for excluded in 0..len {
                for _ in 0..200 {
                    let picked = pick_excluding(&mut rng, len, Some(excluded));
                    assert!(picked < len);
                    assert_ne!(picked, excluded);
                }
            }
        }
    }

    #[test]
    fn pick_excluding_covers_all_other_indices() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut seen = [false; 4];
        for _ in 0..500 {
            seen[pick_excluding(&mut rng, 4, Some(2))] = true;
        }
        assert_eq!(seen, [true, true, false, true]);
    }

    #[test]
    fn pick_excluding_single_element_terminates() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pick_excluding(&mut rng, 1, Some(0)), 0);
        assert_eq!(pick_excluding(&mut rng, 1, None), 0);
    }

    #[test]
    fn consecutive_tips_for_same_topic_differ() {
        let mut selector = ResponseSelector::seeded(Some(42));
        for topic in TopicId::ALL {
            if knowledge::lookup(topic).len() < 2 {
                continue;
            }
            let mut last = selector.select_tip(topic);
            for _ in 0..50 {
                let next = selector.select_tip(topic);
                assert_ne!(next.text, last.text, "{topic} repeated a tip");
                last = next;
            }
        }
    }

    #[test]
    fn repeat_avoidance_is_per_topic() {
        let mut selector = ResponseSelector::seeded(Some(9));
        let first = selector.select_tip(TopicId::Phishing);
        selector.select_tip(TopicId::Password);
        assert_eq!(selector.previous_selection(TopicId::Phishing), Some(first.key));
        let again = selector.select_tip(TopicId::Phishing);
        assert_ne!(again.key, first.key);
    }

    #[test]
    fn single_answer_topic_returns_constant_key() {
        let mut selector = ResponseSelector::seeded(Some(5));
        let a = selector.select_tip(TopicId::Vpn);
        let b = selector.select_tip(TopicId::Vpn);
        assert_eq!(a, b);
        assert_eq!(a.key.index, 0);
        assert_eq!(a.text, knowledge::lookup(TopicId::Vpn)[0]);
    }

    #[test]
    fn selections_come_from_the_topic_pool() {
        let mut selector = ResponseSelector::seeded(None);
        let selection = selector.select_tip(TopicId::Firewall);
        assert!(knowledge::lookup(TopicId::Firewall).contains(&selection.text));
        assert_eq!(selection.key.topic, TopicId::Firewall);
    }

    #[test]
    fn fallback_comes_from_fallback_pool() {
        let mut selector = ResponseSelector::seeded(Some(11));
        for _ in 0..20 {
            assert!(FALLBACK_RESPONSES.contains(&selector.fallback()));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ResponseSelector::seeded(Some(77));
        let mut b = ResponseSelector::seeded(Some(77));
        for _ in 0..10 {
            assert_eq!(a.select_tip(TopicId::Privacy), b.select_tip(TopicId::Privacy));
        }
    }
}
