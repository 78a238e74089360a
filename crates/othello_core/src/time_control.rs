//! Wall-clock budget and search limits.
//!
//! The search polls the clock before every node; once the budget is spent
//! the clock latches as expired and the current iteration unwinds.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Search limits handed to an [`Engine`](crate::Engine).
///
/// The engine deepens until either `depth` is reached or the clock runs out.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies
    pub depth: u8,
    /// Time allowed for this position (None = no limit)
    pub move_time: Option<Duration>,
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Create limits with only depth constraint (no time limit).
    pub fn depth(depth: u8) -> Self {
        Self::new(depth, None)
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self::new(depth, Some(move_time))
    }

    pub fn new(depth: u8, move_time: Option<Duration>) -> Self {
        Self {
            depth,
            move_time,
            time_control: TimeControl::new(move_time),
        }
    }

    /// Start the clock. Call this when search begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Single-owner clock for one search.
#[derive(Debug, Clone)]
pub struct TimeControl {
    start_time: Cell<Option<Instant>>,
    time_limit: Option<Duration>,
    expired: Cell<bool>,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            start_time: Cell::new(None),
            time_limit,
            expired: Cell::new(false),
        }
    }

    /// Start (or restart) the clock.
    pub fn start(&self) {
        self.start_time.set(Some(Instant::now()));
        self.expired.set(false);
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// True once a previous `check_time` saw the budget exceeded.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.expired.get()
    }

    /// Reads the clock and latches `expired` when the budget is exceeded.
    ///
    /// A clock that was never started, or has no limit, never expires.
    pub fn check_time(&self) -> bool {
        if self.expired.get() {
            return true;
        }

        if let Some(limit) = self.time_limit
            && let Some(start) = self.start_time.get()
            && start.elapsed() > limit
        {
            self.expired.set(true);
            return true;
        }

        false
    }

    /// Elapsed time since `start`, zero if not started.
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .get()
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Get remaining time (None if no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
