//! Time sources for the countdown

use std::fmt::Debug;

use chrono::Utc;
use tokio::time::Instant;

/// Source of "now" as epoch milliseconds
pub trait Clock: Send + Sync + Debug {
    fn now_millis(&self) -> i64;
}

/// Wall clock, read through chrono
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Wall clock anchored once, then advanced by tokio's monotonic instant
///
/// Immune to wall-clock steps while running, and follows paused tokio time.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    anchor_millis: i64,
    anchor: Instant,
}

impl MonotonicClock {
    /// Clock anchored at the current wall-clock time
    pub fn new() -> Self {
        Self::anchored_at(Utc::now().timestamp_millis())
    }

    /// Anchor the clock at a known epoch millis value
    pub fn anchored_at(anchor_millis: i64) -> Self {
        Self {
            anchor_millis,
            anchor: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_millis(&self) -> i64 {
        let elapsed = i64::try_from(self.anchor.elapsed().as_millis()).unwrap_or(i64::MAX);
        self.anchor_millis.saturating_add(elapsed)
    }
}
