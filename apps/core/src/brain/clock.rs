use chrono::{DateTime, Local};

/// Source of the current time for time-based replies.
///
/// Injected into the reply engine rather than read ambiently, so tests can
/// pin the clock and assert exact output.
pub trait Clock: Send + Sync {
    /// Returns the current local date-time.
    fn now(&self) -> DateTime<Local>;
}

/// The real system clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
