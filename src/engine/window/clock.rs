use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

use super::interval::WindowInterval;
use crate::engine::errors::EngineError;

/// Background timer that fires once per window boundary.
///
/// Boundaries are `origin + n * interval`; a tick that runs late does not push
/// later boundaries back, and missed boundaries are still delivered.
pub struct WindowClock {
    handle: JoinHandle<()>,
    shutdown: Option<oneshot::Sender<()>>,
    ticks: Arc<AtomicU64>,
}

impl WindowClock {
    /// Spawns the clock on the current Tokio runtime. `on_tick` receives the
    /// zero-based tick number.
    pub fn spawn<F>(
        interval: WindowInterval,
        origin: Instant,
        mut on_tick: F,
    ) -> Result<Self, EngineError>
    where
        F: FnMut(u64) + Send + 'static,
    {
        let first_boundary = interval.first_boundary(origin)?;
        let runtime = Handle::try_current().map_err(|_| EngineError::NoRuntime)?;
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();
        let ticks = Arc::new(AtomicU64::new(0));
        let tick_counter = Arc::clone(&ticks);
        let period = interval.as_duration();

        let handle = runtime.spawn(async move {
            let mut timer = interval_at(first_boundary, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Burst);

            loop {
                tokio::select! {
                    biased;
                    _ = &mut shutdown_rx => break,
                    _ = timer.tick() => {
                        let tick = tick_counter.fetch_add(1, Ordering::Relaxed);
                        on_tick(tick);
                    }
                }
            }
            debug!(target: "snel_tally::clock", "Window clock stopped");
        });

        Ok(Self {
            handle,
            shutdown: Some(shutdown_tx),
            ticks,
        })
    }

    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    pub fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.abort();
    }
}

impl Drop for WindowClock {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
