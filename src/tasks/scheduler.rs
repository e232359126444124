//! Deferred, cancellable callbacks on the tokio runtime

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{runtime::Handle, task::AbortHandle, time::Instant};
use tracing::trace;

use crate::error::Result;

/// Identifies one scheduled callback
pub type TickId = u64;

/// Handle to a scheduled callback
///
/// Dropping the handle leaves the callback scheduled; call `cancel` to stop it.
#[derive(Debug)]
pub struct TickHandle {
    id: TickId,
    task: AbortHandle,
}

impl TickHandle {
    /// Id passed to the callback when it runs
    pub fn id(&self) -> TickId {
        self.id
    }

    /// Abort the callback. Has no effect if it already ran.
    pub fn cancel(self) {
        trace!("Cancelling tick {}", self.id);
        self.task.abort();
    }
}

/// Schedules callbacks after a delay on a tokio runtime
#[derive(Debug, Clone)]
pub struct TickScheduler {
    runtime: Handle,
    next_id: Arc<AtomicU64>,
}

impl TickScheduler {
    /// Scheduler bound to the runtime of the calling context
    pub fn current() -> Result<Self> {
        Ok(Self::new(Handle::try_current()?))
    }

    /// Scheduler spawning onto the given runtime
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Run `callback` once `delay` has passed, measured from now
    ///
    /// The callback receives the id of the handle returned here.
    pub fn schedule<F>(&self, delay: Duration, callback: F) -> TickHandle
    where
        F: FnOnce(TickId) + Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let deadline = Instant::now() + delay;
        let task = self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            callback(id);
        });

        TickHandle {
            id,
            task: task.abort_handle(),
        }
    }
}
