//! Scheduled tasks module
//! 
//! This module contains the countdown tick chain and the scheduler it runs on.

pub mod countdown;
pub mod scheduler;

// Re-export main types
pub use countdown::{Countdown, TICK_INTERVAL};
pub use scheduler::{TickHandle, TickId, TickScheduler};
