//! Countdown Kit - a cancellable countdown timer and a shuffle helper
//!
//! This is the main entry point for the countdown-kit application.

use std::sync::Arc;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

use countdown_kit::{
    config::{Command, Config, TimerConfig},
    state::{DisplayFormat, TimerState},
    tasks::Countdown,
    utils::{shuffle, shuffle_with, shutdown_signal, signal_name, MonotonicClock},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout only carries state lines
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_kit={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    match config.command {
        Command::Run { allowed, padded, init_only } => {
            let format = if padded { DisplayFormat::Padded } else { DisplayFormat::Compact };
            run_countdown(TimerConfig::new(allowed).with_format(format), init_only).await
        }
        Command::Shuffle { seed, items } => {
            let shuffled = match seed {
                Some(seed) => {
                    debug!("Shuffling {} items with seed {}", items.len(), seed);
                    shuffle_with(&items, &mut StdRng::seed_from_u64(seed))
                }
                None => shuffle(&items),
            };
            for item in shuffled {
                println!("{}", item);
            }
            Ok(())
        }
    }
}

/// Drive a countdown to its end, printing every state change as JSON
async fn run_countdown(timer_config: TimerConfig, init_only: bool) -> anyhow::Result<()> {
    let countdown = Countdown::new(timer_config, Arc::new(MonotonicClock::new()))?;
    let mut updates = countdown.subscribe();

    countdown.init();
    print_state(&countdown.snapshot())?;
    if init_only {
        return Ok(());
    }

    countdown.start();
    info!("Counting down {}s, press Ctrl-C to stop", timer_config.allowed_seconds);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);
    let mut shutdown_done = false;

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                print_state(&state)?;
                if state.is_ended() {
                    break;
                }
            }
            result = &mut shutdown, if !shutdown_done => {
                shutdown_done = true;
                match result? {
                    Some(signal) => {
                        info!("Received {}, stopping countdown", signal_name(signal));
                        countdown.stop();
                    }
                    None => warn!("Signal stream closed, countdown keeps running"),
                }
            }
        }
    }

    info!("Countdown finished");
    Ok(())
}

fn print_state(state: &TimerState) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(state)?);
    Ok(())
}
