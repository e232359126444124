//! Signal handling for stopping a running countdown

use std::io;

use futures::stream::StreamExt;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::debug;

/// Signals that stop a running countdown
pub const SHUTDOWN_SIGNALS: [i32; 2] = [SIGTERM, SIGINT];

/// Wait for the first of SIGTERM or SIGINT and return its number
///
/// Resolves to `None` if the signal stream closes before any signal arrives.
pub async fn shutdown_signal() -> io::Result<Option<i32>> {
    let mut signals = Signals::new(SHUTDOWN_SIGNALS)?;
    debug!("Listening for shutdown signals {:?}", SHUTDOWN_SIGNALS);

    let received = signals.next().await;
    signals.handle().close();
    Ok(received)
}

/// Human readable name for a shutdown signal
pub fn signal_name(signal: i32) -> &'static str {
    match signal {
        SIGINT => "SIGINT",
        SIGTERM => "SIGTERM",
        _ => "unknown signal",
    }
}
