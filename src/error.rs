//! Error types for countdown construction

use thiserror::Error;

/// Errors raised while building a countdown
///
/// Once built, every countdown operation is total.
#[derive(Debug, Error)]
pub enum CountdownError {
    #[error("no tokio runtime available to schedule ticks: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    #[error("countdown allowance must be at least one second")]
    ZeroAllowance,
}

pub type Result<T> = std::result::Result<T, CountdownError>;
