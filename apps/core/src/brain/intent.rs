//! Intent matching using regex patterns.
//!
//! Fast pattern-based intent detection. No ML model required - pure Rust
//! regex matching over a fixed table. Registration order is precedence:
//! the first rule whose pattern matches wins, and at most one rule fires
//! per input.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Detected intent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Greeting (hi, hello, hey, namaste, vanakkam)
    Greeting,
    /// Request for the current time (time, clock, "what...time")
    Time,
    /// Weather talk (weather, rain, sunny, temperature)
    Weather,
    /// Farewell (bye, goodbye, "see you", later)
    Farewell,
}

impl Intent {
    /// Returns a human-readable label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Time => "time",
            Intent::Weather => "weather",
            Intent::Farewell => "farewell",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What a rule answers with once its pattern matches.
#[derive(Debug, Clone, Copy)]
pub enum ReplyAction {
    /// A single fixed string.
    Canned(&'static str),
    /// A uniform random pick from a fixed set.
    PickOne(&'static [&'static str]),
    /// The current local date-time, formatted.
    LocalTime,
}

/// A single (pattern, reply) rule in the intent table.
pub struct IntentRule {
    /// The intent this rule detects.
    pub intent: Intent,
    pattern: &'static LazyLock<Regex>,
    /// How to answer when the pattern matches.
    pub action: ReplyAction,
}

impl IntentRule {
    /// Tests the rule's pattern against (already trimmed) input text.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

// Compile patterns once at startup
static GREETING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(hi|hello|hey|namaste|vanakkam)\b").expect("Invalid regex: greeting pattern")
});

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(time|clock|what.*time)\b").expect("Invalid regex: time pattern")
});

static WEATHER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(weather|rain|sunny|temperature)\b").expect("Invalid regex: weather pattern")
});

static FAREWELL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(bye|goodbye|see you|later)\b").expect("Invalid regex: farewell pattern")
});

/// Fixed set the greeting reply is drawn from, uniformly at random.
pub const GREETING_REPLIES: &[&str] = &[
    "Hey! What are you curious about today?",
    "Hello there — ready when you are.",
    "Hi! Ask me anything.",
];

/// Fixed disclaimer for weather talk.
pub const WEATHER_REPLY: &str =
    "I can't fetch live weather here, but you can tell me your city and what you're seeing.";

/// Fixed farewell line.
pub const FAREWELL_REPLY: &str = "Take care. Come back when you want to explore more.";

/// The ordered intent table. Read-only after construction.
pub struct IntentMatcher {
    rules: Vec<IntentRule>,
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentMatcher {
    /// Creates the matcher with the full rule table, in precedence order:
    /// greeting, time, weather, farewell.
    pub fn new() -> Self {
        let rules = vec![
            IntentRule {
                intent: Intent::Greeting,
                pattern: &GREETING_PATTERN,
                action: ReplyAction::PickOne(GREETING_REPLIES),
            },
            IntentRule {
                intent: Intent::Time,
                pattern: &TIME_PATTERN,
                action: ReplyAction::LocalTime,
            },
            IntentRule {
                intent: Intent::Weather,
                pattern: &WEATHER_PATTERN,
                action: ReplyAction::Canned(WEATHER_REPLY),
            },
            IntentRule {
                intent: Intent::Farewell,
                pattern: &FAREWELL_PATTERN,
                action: ReplyAction::Canned(FAREWELL_REPLY),
            },
        ];

        Self { rules }
    }

    /// Returns the first rule whose pattern matches, or `None`.
    pub fn find(&self, text: &str) -> Option<&IntentRule> {
        self.rules.iter().find(|rule| rule.is_match(text))
    }
}
