use chrono::{DateTime, Utc};

use crate::engine::window::{GroupKey, GroupRegistry, ResultRow, WindowAccumulator, WindowBatch};

/// Mutable state of one statement run. Lives from `start` until `stop`.
#[derive(Debug)]
pub(crate) struct WindowState {
    epoch: u64,
    registry: GroupRegistry,
    accumulator: WindowAccumulator,
    next_sequence: u64,
    window_start: DateTime<Utc>,
}

impl WindowState {
    pub(crate) fn new(epoch: u64) -> Self {
        Self {
            epoch,
            registry: GroupRegistry::new(),
            accumulator: WindowAccumulator::new(),
            next_sequence: 0,
            window_start: Utc::now(),
        }
    }

    pub(crate) fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Counts one event for `key`; true when the group is new.
    pub(crate) fn record(&mut self, key: &GroupKey) -> bool {
        let is_new = self.registry.observe(key);
        self.accumulator.increment(key);
        is_new
    }

    /// Snapshots every known group and resets the open window.
    pub(crate) fn close_window(&mut self) -> WindowBatch {
        let counts = self.accumulator.snapshot(self.registry.keys());
        let rows = self
            .registry
            .keys()
            .cloned()
            .zip(counts)
            .map(|(key, count)| ResultRow::new(key, count))
            .collect();
        self.accumulator.clear();

        let window_end = Utc::now();
        let batch = WindowBatch {
            sequence: self.next_sequence,
            window_start: self.window_start,
            window_end,
            rows,
        };
        self.next_sequence += 1;
        self.window_start = window_end;
        batch
    }

    pub(crate) fn known_groups(&self) -> Vec<GroupKey> {
        self.registry.keys().cloned().collect()
    }

    pub(crate) fn group_count(&self) -> usize {
        self.registry.len()
    }

    pub(crate) fn pending_count(&self, key: &GroupKey) -> u64 {
        self.accumulator.count(key)
    }

    pub(crate) fn pending_total(&self) -> u64 {
        self.accumulator.total()
    }
}
