//! State management module
//! 
//! This module contains the observable countdown state and its formatting rules.

pub mod timer_state;

// Re-export main types
pub use timer_state::{DisplayFormat, TimerState, TimerStatus};
