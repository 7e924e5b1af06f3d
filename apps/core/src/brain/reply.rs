//! Reply generation.
//!
//! The engine tries the intent table first (first match wins), then a short
//! heuristic chain: question follow-up, then a "tell me more" nudge for
//! short input, then a reflective template that echoes the input back.

use crate::brain::clock::{Clock, SystemClock};
use crate::brain::intent::{IntentMatcher, ReplyAction};
use rand::Rng;
use tracing::debug;

/// Reply for empty or whitespace-only input.
pub const EMPTY_INPUT_PROMPT: &str = "Say something and I'll follow.";

/// Reply for unmatched input ending in a question mark.
pub const QUESTION_FOLLOW_UP: &str = "Good question. What makes you ask that?";

/// Reply for unmatched input shorter than [`SHORT_INPUT_MAX_CHARS`].
pub const SHORT_INPUT_PROMPT: &str = "Tell me a bit more so I can be useful.";

/// Inputs below this many characters get the "tell me more" nudge.
const SHORT_INPUT_MAX_CHARS: usize = 10;

/// Format for the time intent's reply.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Uniform random source used for pick-one replies.
///
/// Injected rather than read ambiently, so tests can pin the pick.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&self, len: usize) -> usize;
}

/// Default source backed by the thread-local generator.
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// The reply engine: intent table plus fallback chain.
///
/// `generate` never fails - every input, including empty text, maps to a
/// defined output string.
pub struct ReplyEngine {
    matcher: IntentMatcher,
    clock: Box<dyn Clock>,
    random: Box<dyn RandomSource>,
}

impl Default for ReplyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyEngine {
    /// Creates an engine on the system clock and thread-local randomness.
    pub fn new() -> Self {
        Self::with_sources(Box::new(SystemClock), Box::new(ThreadRngSource))
    }

    /// Creates an engine with explicit clock and random sources.
    pub fn with_sources(clock: Box<dyn Clock>, random: Box<dyn RandomSource>) -> Self {
        Self {
            matcher: IntentMatcher::new(),
            clock,
            random,
        }
    }

    /// Produces a reply for raw user input.
    pub fn generate(&self, input: &str) -> String {
        let text = input.trim();

        if text.is_empty() {
            return EMPTY_INPUT_PROMPT.to_string();
        }

        if let Some(rule) = self.matcher.find(text) {
            debug!("Intent matched: {}", rule.intent);
            return self.run_action(rule.action);
        }

        // Fallback chain. The question check runs before the length check,
        // so a short question like "ok?" still gets the follow-up.
        if text.ends_with('?') {
            return QUESTION_FOLLOW_UP.to_string();
        }
        if text.chars().count() < SHORT_INPUT_MAX_CHARS {
            return SHORT_INPUT_PROMPT.to_string();
        }

        format!(
            "I'm hearing: \"{}\". What part matters most to you right now?",
            text
        )
    }

    fn run_action(&self, action: ReplyAction) -> String {
        match action {
            ReplyAction::Canned(reply) => reply.to_string(),
            ReplyAction::PickOne(choices) => {
                choices[self.random.pick_index(choices.len())].to_string()
            }
            ReplyAction::LocalTime => self.clock.now().format(TIME_FORMAT).to_string(),
        }
    }
}
