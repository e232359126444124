//! Utility functions module
//! 
//! This module contains clocks, shuffling and signal handling.

pub mod clock;
pub mod shuffle;
pub mod signals;

// Re-export main functions
pub use clock::{Clock, MonotonicClock, SystemClock};
pub use shuffle::{shuffle, shuffle_in_place, shuffle_with};
pub use signals::{shutdown_signal, signal_name};
