//! # Brain Module
//!
//! Rule-based reply generation for Nova.
//! Matches user input against a fixed, ordered intent table and falls back
//! to a small heuristic chain when nothing matches. No ML model required -
//! pure Rust regex matching.
//!
//! ## Components
//! - `intent`: ordered regex intent table (first match wins)
//! - `reply`: reply engine and fallback chain
//! - `clock`: clock abstraction behind the time intent

pub mod clock;
pub mod intent;
pub mod reply;

// Re-export main types for convenience
#[allow(unused_imports)]
pub use clock::{Clock, SystemClock};
#[allow(unused_imports)]
pub use intent::{Intent, IntentMatcher, IntentRule, ReplyAction};
#[allow(unused_imports)]
pub use reply::{RandomSource, ReplyEngine, ThreadRngSource};
