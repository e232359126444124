//! Countdown Kit - a cancellable countdown timer and a shuffle helper
//! 
//! The countdown keeps plain state that UI layers observe through a watch
//! channel, and re-schedules itself once a second until the allowance runs out.

pub mod config;
pub mod error;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, TimerConfig};
pub use error::CountdownError;
pub use state::{DisplayFormat, TimerState, TimerStatus};
pub use tasks::Countdown;
pub use utils::{shuffle, shuffle_with, shutdown_signal};
