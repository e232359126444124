//! Timer state structure and remaining-time arithmetic

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default countdown allowance: 2 minutes
pub const DEFAULT_ALLOWED_SECONDS: u64 = 120;

/// Text shown once the countdown has run out
pub const EXPIRED_TEXT: &str = "0";

/// Lifecycle of a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    #[default]
    Idle,
    Running,
    Ended,
}

/// How the seconds part of the remaining time is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    /// `2:5`, seconds without a leading zero
    #[default]
    Compact,
    /// `2:05`
    Padded,
}

impl DisplayFormat {
    /// Render a positive number of remaining seconds as `minutes:seconds`
    pub fn render(self, remaining_seconds: u64) -> String {
        let minutes = remaining_seconds / 60;
        let seconds = remaining_seconds % 60;
        match self {
            DisplayFormat::Compact => format!("{}:{}", minutes, seconds),
            DisplayFormat::Padded => format!("{}:{:02}", minutes, seconds),
        }
    }
}

/// Observable countdown state, published to subscribers on every change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Epoch millis recorded by the last `start` or `init`
    pub start_epoch_millis: i64,
    /// Human readable remaining time, `"0"` once expired
    pub remaining_text: String,
    pub status: TimerStatus,
    /// Fixed budget for the countdown
    pub allowed_seconds: u64,
    /// When this snapshot was last modified
    pub updated_at: DateTime<Utc>,
}

impl TimerState {
    /// Create an idle timer state with the given allowance
    pub fn new(allowed_seconds: u64) -> Self {
        Self {
            start_epoch_millis: 0,
            remaining_text: String::new(),
            status: TimerStatus::Idle,
            allowed_seconds,
            updated_at: Utc::now(),
        }
    }

    /// Whole seconds left at `now_millis`, negative once the allowance is overrun
    pub fn remaining_seconds(&self, now_millis: i64) -> i64 {
        remaining_seconds(self.allowed_seconds, self.start_epoch_millis, now_millis)
    }

    /// Check if the countdown is ticking
    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    /// Check if the countdown has expired or been stopped
    pub fn is_ended(&self) -> bool {
        self.status == TimerStatus::Ended
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_SECONDS)
    }
}

/// `allowed - floor((now - start) / 1000)`, in whole seconds
pub fn remaining_seconds(allowed_seconds: u64, start_epoch_millis: i64, now_millis: i64) -> i64 {
    let elapsed = now_millis.saturating_sub(start_epoch_millis).div_euclid(1000);
    i64::try_from(allowed_seconds)
        .unwrap_or(i64::MAX)
        .saturating_sub(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_format_does_not_pad_seconds() {
        assert_eq!(DisplayFormat::Compact.render(120), "2:0");
        assert_eq!(DisplayFormat::Compact.render(125), "2:5");
        assert_eq!(DisplayFormat::Compact.render(59), "0:59");
        assert_eq!(DisplayFormat::Compact.render(1), "0:1");
    }

    #[test]
    fn padded_format() {
        assert_eq!(DisplayFormat::Padded.render(120), "2:00");
        assert_eq!(DisplayFormat::Padded.render(65), "1:05");
        assert_eq!(DisplayFormat::Padded.render(600), "10:00");
    }

    #[test]
    fn remaining_floors_elapsed_millis() {
        assert_eq!(remaining_seconds(120, 1_000, 1_000), 120);
        assert_eq!(remaining_seconds(120, 1_000, 1_999), 120);
        assert_eq!(remaining_seconds(120, 1_000, 2_000), 119);
        assert_eq!(remaining_seconds(120, 0, 60_500), 60);
        assert_eq!(remaining_seconds(120, 0, 120_000), 0);
        assert_eq!(remaining_seconds(120, 0, 200_000), -80);
    }

    #[test]
    fn clock_behind_start_does_not_underflow() {
        // A wall clock stepping backwards yields more time, not a panic
        assert_eq!(remaining_seconds(120, 10_000, 9_000), 121);
    }

    #[test]
    fn new_state_is_idle() {
        let state = TimerState::default();
        assert_eq!(state.status, TimerStatus::Idle);
        assert_eq!(state.allowed_seconds, DEFAULT_ALLOWED_SECONDS);
        assert!(state.remaining_text.is_empty());
        assert!(!state.is_running());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&TimerStatus::Running).unwrap();
        assert_eq!(json, "\"running\"");
        let status: TimerStatus = serde_json::from_str("\"ended\"").unwrap();
        assert_eq!(status, TimerStatus::Ended);
    }
}
