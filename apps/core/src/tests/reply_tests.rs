//! Reply Engine Tests
//!
//! Covers the observable contract: exact strings for fixed replies,
//! membership for the random greeting pick, format and fixed-clock checks
//! for the time intent, precedence, and the fallback chain ordering.

use crate::brain::clock::Clock;
use crate::brain::intent::{FAREWELL_REPLY, GREETING_REPLIES, WEATHER_REPLY};
use crate::brain::reply::{
    RandomSource, ReplyEngine, EMPTY_INPUT_PROMPT, QUESTION_FOLLOW_UP, SHORT_INPUT_PROMPT,
};
use chrono::{DateTime, Local, TimeZone};

/// Clock pinned to one instant.
struct FixedClock {
    at: DateTime<Local>,
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.at
    }
}

/// Random source that always picks the same index.
struct FixedPick(usize);

impl RandomSource for FixedPick {
    fn pick_index(&self, len: usize) -> usize {
        self.0 % len
    }
}

fn engine_with_pick(index: usize) -> ReplyEngine {
    let at = Local.with_ymd_and_hms(2024, 5, 4, 15, 4, 5).unwrap();
    ReplyEngine::with_sources(Box::new(FixedClock { at }), Box::new(FixedPick(index)))
}

#[test]
fn test_whitespace_only_input() {
    let engine = ReplyEngine::new();

    for input in ["", " ", "   ", "\t", "\n", " \t \n "] {
        assert_eq!(
            engine.generate(input),
            EMPTY_INPUT_PROMPT,
            "Expected empty-input prompt for {:?}",
            input
        );
    }
}

#[test]
fn test_greeting_reply_membership() {
    let engine = ReplyEngine::new();

    for input in ["hello", "Hi there", "NAMASTE", "hey, got a minute"] {
        let reply = engine.generate(input);
        assert!(
            GREETING_REPLIES.contains(&reply.as_str()),
            "Reply '{}' for '{}' not in the greeting set",
            reply,
            input
        );
    }
}

#[test]
fn test_greeting_pick_is_deterministic_under_fixed_source() {
    for index in 0..GREETING_REPLIES.len() {
        let engine = engine_with_pick(index);
        assert_eq!(engine.generate("hello"), GREETING_REPLIES[index]);
    }
}

#[test]
fn test_time_reply_under_fixed_clock() {
    let engine = engine_with_pick(0);
    assert_eq!(engine.generate("what time is it"), "2024-05-04 15:04:05");
}

#[test]
fn test_time_reply_format() {
    let engine = ReplyEngine::new();
    let reply = engine.generate("check the clock");
    let format = regex::Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap();
    assert!(format.is_match(&reply), "Unexpected time format: {}", reply);
}

#[test]
fn test_weather_reply_exact() {
    let engine = ReplyEngine::new();
    assert_eq!(engine.generate("will it rain today"), WEATHER_REPLY);
    assert_eq!(engine.generate("what's the temperature"), WEATHER_REPLY);
}

#[test]
fn test_farewell_reply_exact() {
    let engine = ReplyEngine::new();
    assert_eq!(engine.generate("goodbye"), FAREWELL_REPLY);
    assert_eq!(engine.generate("see you tomorrow"), FAREWELL_REPLY);
}

#[test]
fn test_precedence_greeting_over_time() {
    let engine = ReplyEngine::new();
    let reply = engine.generate("hi, what time is it?");
    assert!(GREETING_REPLIES.contains(&reply.as_str()), "got: {}", reply);
}

#[test]
fn test_precedence_time_over_weather() {
    let engine = engine_with_pick(0);
    assert_eq!(engine.generate("time to talk weather"), "2024-05-04 15:04:05");
}

#[test]
fn test_precedence_weather_over_farewell() {
    let engine = ReplyEngine::new();
    assert_eq!(engine.generate("will it rain later"), WEATHER_REPLY);
}

#[test]
fn test_unmatched_question_follow_up() {
    let engine = ReplyEngine::new();
    assert_eq!(engine.generate("ok?"), QUESTION_FOLLOW_UP);
    assert_eq!(engine.generate("are we there yet?"), QUESTION_FOLLOW_UP);
}

#[test]
fn test_unmatched_short_input() {
    let engine = ReplyEngine::new();
    assert_eq!(engine.generate("ok"), SHORT_INPUT_PROMPT);
    assert_eq!(engine.generate("go on"), SHORT_INPUT_PROMPT);
}

#[test]
fn test_reflective_reply_exact() {
    let engine = ReplyEngine::new();
    assert_eq!(
        engine.generate("this is a long message"),
        "I'm hearing: \"this is a long message\". What part matters most to you right now?"
    );
}

#[test]
fn test_reflective_reply_embeds_trimmed_input() {
    let engine = ReplyEngine::new();
    let reply = engine.generate("  thinking about changing jobs  ");
    assert!(
        reply.contains("\"thinking about changing jobs\""),
        "got: {}",
        reply
    );
}

#[test]
fn test_surrounding_whitespace_is_trimmed_before_matching() {
    let engine = ReplyEngine::new();
    let reply = engine.generate("   hello   ");
    assert!(GREETING_REPLIES.contains(&reply.as_str()), "got: {}", reply);
}
