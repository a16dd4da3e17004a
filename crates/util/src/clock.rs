//! Time sources for interaction timestamps.
//!
//! Timestamps are integer milliseconds since the Unix epoch. Components read
//! the time through [`Clock`] so tests and replays can pin it.

use std::cell::Cell;

use chrono::Utc;

pub trait Clock {
    /// Current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Manually driven clock for tests and deterministic replays.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    pub fn new(start_millis: i64) -> Self {
        Self {
            now: Cell::new(start_millis),
        }
    }

    pub fn set(&self, millis: i64) {
        self.now.set(millis);
    }

    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get().saturating_add(millis));
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}

/// Timestamp for the next occurrence of an event last seen at `previous`.
///
/// Never earlier than `previous`, so timestamps stay monotonic even when the
/// wall clock steps backwards.
pub fn next_timestamp(clock: &dyn Clock, previous: i64) -> i64 {
    let now = clock.now_millis();
    if now < previous {
        tracing::debug!(now, previous, "clock behind previous timestamp; reusing previous");
        previous
    } else {
        now
    }
}
