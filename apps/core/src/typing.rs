//! Typing simulation.
//!
//! An artificial "thinking" pause before a reply is shown, purely for pacing.
//! The wait is randomized, non-cancelable, and has no timeout or retry
//! semantics.

use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

// --- Constants ---
const MIN_THINKING_MS: u64 = 300;
const THINKING_JITTER_MS: u64 = 400;

/// Picks one randomized thinking pause, in the 300-700 ms range.
pub fn thinking_delay() -> Duration {
    let jitter = rand::thread_rng().gen_range(0..THINKING_JITTER_MS);
    Duration::from_millis(MIN_THINKING_MS + jitter)
}

/// Waits out one thinking pause.
pub async fn simulate_thinking() {
    sleep(thinking_delay()).await;
}
