//! Countdown timer driven by a self-rescheduling one-second tick

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
    time::Duration,
};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::{
    config::TimerConfig,
    error::{CountdownError, Result},
    state::{timer_state::EXPIRED_TEXT, DisplayFormat, TimerState, TimerStatus},
    tasks::scheduler::{TickHandle, TickId, TickScheduler},
    utils::clock::Clock,
};

/// Delay between two ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Cloneable handle to a countdown
///
/// All clones share one state and one tick chain. At most one tick is
/// pending at any time.
#[derive(Debug, Clone)]
pub struct Countdown {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    inner: Mutex<Inner>,
    clock: Arc<dyn Clock>,
    scheduler: TickScheduler,
    format: DisplayFormat,
    updates: watch::Sender<TimerState>,
}

#[derive(Debug)]
struct Inner {
    state: TimerState,
    pending: Option<TickHandle>,
}

impl Countdown {
    /// Create an idle countdown scheduling ticks on the current tokio runtime
    pub fn new(config: TimerConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        Self::with_scheduler(config, clock, TickScheduler::current()?)
    }

    /// Create an idle countdown scheduling ticks through `scheduler`
    pub fn with_scheduler(
        config: TimerConfig,
        clock: Arc<dyn Clock>,
        scheduler: TickScheduler,
    ) -> Result<Self> {
        if config.allowed_seconds == 0 {
            return Err(CountdownError::ZeroAllowance);
        }

        let state = TimerState::new(config.allowed_seconds);
        let (updates, _) = watch::channel(state.clone());

        Ok(Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner { state, pending: None }),
                clock,
                scheduler,
                format: config.format,
                updates,
            }),
        })
    }

    /// Begin counting down from the full allowance
    ///
    /// Restarting a running countdown replaces its tick chain.
    pub fn start(&self) {
        let mut inner = self.lock();
        inner.state.start_epoch_millis = self.shared.clock.now_millis();
        inner.state.status = TimerStatus::Running;
        info!(
            "Countdown started with {}s allowed",
            inner.state.allowed_seconds
        );
        self.tick_locked(&mut inner);
    }

    /// End the countdown now, cancelling any pending tick
    pub fn stop(&self) {
        let mut inner = self.lock();
        self.stop_locked(&mut inner);
    }

    /// Recompute the remaining time and schedule the next tick
    ///
    /// Only a running countdown schedules another tick. An idle countdown
    /// refreshes its text in place and an ended one is left untouched.
    pub fn tick(&self) {
        let mut inner = self.lock();
        self.tick_locked(&mut inner);
    }

    /// Reset the start time and render the initial display without ticking
    pub fn init(&self) {
        let mut inner = self.lock();
        inner.state.start_epoch_millis = self.shared.clock.now_millis();
        let remaining = inner.state.remaining_seconds(inner.state.start_epoch_millis);
        inner.state.remaining_text = self.render(remaining);
        debug!("Countdown initialised at {}", inner.state.remaining_text);
        self.publish(&mut inner);
    }

    /// Observe every state change
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.shared.updates.subscribe()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> TimerState {
        self.lock().state.clone()
    }

    /// Seconds left right now, negative once overrun
    pub fn remaining_seconds(&self) -> i64 {
        let now = self.shared.clock.now_millis();
        self.lock().state.remaining_seconds(now)
    }

    /// Current lifecycle status
    pub fn status(&self) -> TimerStatus {
        self.lock().state.status
    }

    /// Whether a tick is scheduled and not yet run or cancelled
    pub fn has_pending_tick(&self) -> bool {
        self.lock().pending.is_some()
    }

    fn tick_locked(&self, inner: &mut Inner) {
        if let Some(handle) = inner.pending.take() {
            handle.cancel();
        }
        // An ended countdown keeps showing the expired text until restarted
        if inner.state.is_ended() {
            return;
        }

        let remaining = inner.state.remaining_seconds(self.shared.clock.now_millis());
        if remaining <= 0 {
            info!("Countdown expired");
            self.stop_locked(inner);
            return;
        }

        inner.state.remaining_text = self.render(remaining);
        debug!("Countdown tick: {}", inner.state.remaining_text);

        if inner.state.is_running() {
            let weak = Arc::downgrade(&self.shared);
            inner.pending = Some(
                self.shared
                    .scheduler
                    .schedule(TICK_INTERVAL, move |id| Self::fire(weak, id)),
            );
        }

        self.publish(inner);
    }

    fn stop_locked(&self, inner: &mut Inner) {
        if let Some(handle) = inner.pending.take() {
            handle.cancel();
        }
        inner.state.remaining_text = EXPIRED_TEXT.to_string();
        if inner.state.status != TimerStatus::Ended {
            info!("Countdown ended");
        }
        inner.state.status = TimerStatus::Ended;
        self.publish(inner);
    }

    /// Entry point of a scheduled tick
    fn fire(shared: Weak<Shared>, id: TickId) {
        let Some(shared) = shared.upgrade() else {
            return;
        };
        let countdown = Countdown { shared };
        let mut inner = countdown.lock();

        // A handle replaced or cancelled after this task woke up is stale
        match inner.pending.as_ref() {
            Some(handle) if handle.id() == id => {}
            _ => return,
        }
        // The running task is this one; drop its handle instead of aborting it
        inner.pending = None;
        countdown.tick_locked(&mut inner);
    }

    fn render(&self, remaining: i64) -> String {
        match u64::try_from(remaining) {
            Ok(secs) if secs > 0 => self.shared.format.render(secs),
            _ => EXPIRED_TEXT.to_string(),
        }
    }

    fn publish(&self, inner: &mut Inner) {
        inner.state.touch();
        self.shared.updates.send_replace(inner.state.clone());
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.shared
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}
