use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::{debug, error, info};

use super::metrics::StatementMetrics;
use super::state::WindowState;
use crate::engine::errors::EngineError;
use crate::engine::event::Event;
use crate::engine::listener::BatchListener;
use crate::engine::window::{ColumnSpec, GroupKey, WindowBatch, WindowClock, WindowInterval};
use crate::shared::config::StatementConfig;

/// What `stop` does with events counted in the still-open window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopMode {
    /// Drop them; no partial batch is emitted.
    #[default]
    Discard,
    /// Emit one final batch before releasing state.
    FlushRemaining,
}

/// Continuous `select <group>, count(*) ... group by <group> order by <group>`
/// over a tumbling time-batch window.
///
/// Every flush reports all groups seen since `start`, with a zero count for
/// groups that had no events in the closed window. Ingestion may happen from
/// any thread; the clock runs on the Tokio runtime that was current at
/// `start`.
pub struct WindowedCountStatement {
    core: Arc<StatementCore>,
    clock: Mutex<Option<WindowClock>>,
}

struct StatementCore {
    config: StatementConfig,
    listener: Arc<dyn BatchListener>,
    state: Mutex<Option<WindowState>>,
    // Serializes listener deliveries so batches arrive in sequence order.
    delivery: Mutex<()>,
    epochs: AtomicU64,
    metrics: Arc<StatementMetrics>,
}

impl WindowedCountStatement {
    pub fn new(
        config: StatementConfig,
        listener: Arc<dyn BatchListener>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            core: Arc::new(StatementCore {
                config,
                listener,
                state: Mutex::new(None),
                delivery: Mutex::new(()),
                epochs: AtomicU64::new(0),
                metrics: StatementMetrics::new(),
            }),
            clock: Mutex::new(None),
        })
    }

    /// Creates the statement and starts it with the configured interval.
    pub fn launch(
        config: StatementConfig,
        listener: Arc<dyn BatchListener>,
    ) -> Result<Self, EngineError> {
        let interval_secs = config.interval_secs;
        let statement = Self::new(config, listener)?;
        statement.start(interval_secs)?;
        Ok(statement)
    }

    /// Activates the window clock against empty group state. The first
    /// boundary is one interval from now.
    pub fn start(&self, interval_secs: f64) -> Result<(), EngineError> {
        let interval = WindowInterval::from_secs_f64(interval_secs)?;

        let mut clock_slot = self.clock.lock();
        if clock_slot.is_some() {
            return Err(EngineError::AlreadyRunning);
        }

        let epoch = self.core.epochs.fetch_add(1, Ordering::Relaxed) + 1;
        *self.core.state.lock() = Some(WindowState::new(epoch));
        self.core.metrics.set_known_groups(0);

        let core = Arc::clone(&self.core);
        let origin = Instant::now();
        let clock = match WindowClock::spawn(interval, origin, move |_tick| {
            core.flush_scheduled(epoch)
        }) {
            Ok(clock) => clock,
            Err(e) => {
                *self.core.state.lock() = None;
                return Err(e);
            }
        };
        *clock_slot = Some(clock);

        info!(
            target: "snel_tally::statement",
            event_type = %self.core.config.event_type,
            group_by = %self.core.config.group_by,
            interval_ms = interval.as_duration().as_millis() as u64,
            "Statement started"
        );
        Ok(())
    }

    /// Disables the clock and releases group state. Must not be called from
    /// inside a listener.
    pub fn stop(&self, mode: StopMode) -> Result<(), EngineError> {
        let clock = self.clock.lock().take().ok_or(EngineError::NotRunning)?;
        let ticks = clock.ticks();
        clock.stop();

        // Waits for a flush that is already delivering.
        let _delivery = self.core.delivery.lock();
        let state = self.core.state.lock().take();
        if let (StopMode::FlushRemaining, Some(mut state)) = (mode, state) {
            let batch = state.close_window();
            self.core.deliver(&batch);
        }

        info!(target: "snel_tally::statement", ticks, ?mode, "Statement stopped");
        Ok(())
    }

    /// Counts one event into the open window.
    pub fn ingest(&self, event: &Event) -> Result<(), EngineError> {
        let key = self.core.extract_key(event).inspect_err(|e| {
            if e.is_event_rejection() {
                self.core.metrics.on_rejected();
            }
        })?;

        let mut guard = self.core.state.lock();
        let state = guard.as_mut().ok_or(EngineError::NotRunning)?;
        if state.record(&key) {
            self.core
                .metrics
                .set_known_groups(state.group_count() as u64);
            debug!(target: "snel_tally::statement", group = %key, "New group observed");
        }
        self.core.metrics.on_ingested();
        Ok(())
    }

    /// Closes the open window immediately, outside the clock schedule.
    /// Must not be called from inside a listener.
    pub fn flush_now(&self) -> Result<WindowBatch, EngineError> {
        self.core.flush(None)
    }

    pub fn is_running(&self) -> bool {
        self.clock.lock().is_some()
    }

    pub fn config(&self) -> &StatementConfig {
        &self.core.config
    }

    pub fn output_columns(&self) -> Vec<ColumnSpec> {
        self.core.config.output_columns()
    }

    pub fn metrics(&self) -> Arc<StatementMetrics> {
        Arc::clone(&self.core.metrics)
    }

    /// Groups seen since `start`, in output order.
    pub fn known_groups(&self) -> Vec<GroupKey> {
        self.core
            .state
            .lock()
            .as_ref()
            .map(|state| state.known_groups())
            .unwrap_or_default()
    }

    /// Events counted for `key` in the open window.
    pub fn pending_count(&self, key: &GroupKey) -> u64 {
        self.core
            .state
            .lock()
            .as_ref()
            .map(|state| state.pending_count(key))
            .unwrap_or(0)
    }

    pub fn ticks(&self) -> u64 {
        self.clock.lock().as_ref().map(|c| c.ticks()).unwrap_or(0)
    }
}

impl StatementCore {
    fn extract_key(&self, event: &Event) -> Result<GroupKey, EngineError> {
        if event.event_type != self.config.event_type {
            return Err(EngineError::EventTypeMismatch {
                expected: self.config.event_type.clone(),
                actual: event.event_type.clone(),
            });
        }
        event.group_key(&self.config.group_by)
    }

    fn flush_scheduled(&self, epoch: u64) {
        match self.flush(Some(epoch)) {
            Ok(batch) => {
                debug!(
                    target: "snel_tally::statement",
                    sequence = batch.sequence,
                    rows = batch.len(),
                    "Window flushed"
                );
            }
            Err(e) => {
                debug!(target: "snel_tally::statement", epoch, error = %e, "Skipped stale tick");
            }
        }
    }

    /// Snapshot-and-clear under the state lock, then deliver outside it.
    /// `expected_epoch` filters out ticks from a previous run.
    fn flush(&self, expected_epoch: Option<u64>) -> Result<WindowBatch, EngineError> {
        let _delivery = self.delivery.lock();
        let batch = {
            let mut guard = self.state.lock();
            let state = guard.as_mut().ok_or(EngineError::NotRunning)?;
            if expected_epoch.is_some_and(|epoch| epoch != state.epoch()) {
                return Err(EngineError::NotRunning);
            }
            state.close_window()
        };
        self.deliver(&batch);
        Ok(batch)
    }

    fn deliver(&self, batch: &WindowBatch) {
        self.metrics.on_batch(batch.len() as u64);

        let outcome = catch_unwind(AssertUnwindSafe(|| self.listener.on_batch(batch)));
        let failure = match outcome {
            Ok(Ok(())) => return,
            Ok(Err(e)) => e.to_string(),
            Err(panic) => format!("listener panicked: {}", panic_message(panic.as_ref())),
        };

        self.metrics.record_listener_failure();
        error!(
            target: "snel_tally::statement",
            sequence = batch.sequence,
            error = %failure,
            "Batch listener failed"
        );
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
