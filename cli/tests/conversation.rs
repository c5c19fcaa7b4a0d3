//! # CyberBot Conversation Engine Tests
//!
//! File: cli/tests/conversation.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! ## Overview
//!
//! Drives the public `cyberbot::dialogue` API with scripted input, without
//! the binary. These tests treat the engine as a black box: only the emitted
//! messages and the read-only session state are inspected.
//!

mod common;
use common::lines;
use cyberbot::dialogue::knowledge;
use cyberbot::dialogue::normalize::normalize;
use cyberbot::dialogue::{Conversation, Stage, TopicId};

fn chatting(seed: u64) -> Conversation {
    Conversation::new("CyberBot", Some(seed)).skip_onboarding()
}

#[test]
fn test_phishing_question() {
    let mut convo = chatting(1);
    let mut out = Vec::new();

    convo.handle_line(Some("What is phishing?"), &mut out);

    assert!(knowledge::lookup(TopicId::Phishing).contains(&out[0].as_str()));
    assert!(out[1].contains("phishing"));
    assert_eq!(convo.state().last_topic(), Some(TopicId::Phishing));
}

#[test]
fn test_follow_up_state_machine() {
    let mut convo = chatting(2);
    let mut out = Vec::new();

    for question in ["passwords?", "tell me about social media", "is a vpn safe", "2fa"] {
        convo.handle_line(Some(question), &mut out);
        let state = convo.state();
        assert!(state.last_topic().is_some(), "{question} should be topical");
        assert_eq!(state.pending_follow_up(), state.last_topic());
    }

    let pending = convo.state().pending_follow_up();
    convo.handle_line(Some("sure"), &mut out);
    assert_eq!(convo.state().pending_follow_up(), None);
    assert_eq!(convo.state().last_topic(), pending);
}

#[test]
fn test_consecutive_answers_never_repeat() {
    let mut convo = chatting(3);
    let mut previous: Option<String> = None;

    for _ in 0..30 {
        let mut out = Vec::new();
        convo.handle_line(Some("Any password tips?"), &mut out);
        let tip = out[0].clone();
        assert!(knowledge::lookup(TopicId::Password).contains(&tip.as_str()));
        if let Some(prev) = &previous {
            assert_ne!(prev, &tip);
        }
        previous = Some(tip);
    }
}

#[test]
fn test_follow_up_confirmation_does_not_repeat_tip() {
    let mut convo = chatting(4);
    let mut out = Vec::new();

    convo.handle_line(Some("firewall"), &mut out);
    let first = out[0].clone();
    out.clear();
    convo.handle_line(Some("yeah"), &mut out);

    assert_ne!(out[0], first);
}

#[test]
fn test_interest_then_topic_scenario() {
    let mut convo = chatting(5);
    let mut input = lines(&["I'm interested in privacy", "privacy", "exit"]);
    let mut out = Vec::new();

    convo.run(&mut input, &mut out);

    assert!(out.contains(&"Great! I'll remember that you're interested in privacy.".to_string()));
    assert_eq!(
        out.iter()
            .filter(|m| m.as_str() == "Remember, you're interested in: privacy.")
            .count(),
        2
    );
    assert_eq!(convo.state().interests().len(), 1);
    assert_eq!(convo.stage(), Stage::Exited);
}

#[test]
fn test_case_insensitive_interests() {
    let mut convo = Conversation::new("CyberBot", Some(6));
    let mut input = lines(&["Ada", "", "Privacy", "add interest privacy", "exit"]);
    let mut out = Vec::new();

    convo.run(&mut input, &mut out);

    assert_eq!(
        convo.state().interests().iter().collect::<Vec<_>>(),
        vec!["Privacy"]
    );
    assert!(out.contains(&"I already know you're interested in Privacy.".to_string()));
}

#[test]
fn test_empty_lines_only_reprompt() {
    let mut convo = chatting(7);
    let mut input = lines(&["", "   ", "exit"]);
    let mut out = Vec::new();

    convo.run(&mut input, &mut out);

    assert_eq!(
        out,
        vec![
            "Please type a question, or 'exit' to leave.".to_string(),
            "Please type a question, or 'exit' to leave.".to_string(),
            "Goodbye! Stay safe online.".to_string(),
        ]
    );
}

#[test]
fn test_normalize_idempotent() {
    for raw in ["  MiXeD Case  ", "\tyes\n", "", "already normal"] {
        let once = normalize(Some(raw));
        assert_eq!(normalize(Some(&once)), once);
    }
}
