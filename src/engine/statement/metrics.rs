use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct StatementMetrics {
    events_ingested: AtomicU64,
    events_rejected: AtomicU64,
    batches_emitted: AtomicU64,
    rows_emitted: AtomicU64,
    listener_failures: AtomicU64,
    known_groups: AtomicU64,
}

impl StatementMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn on_ingested(&self) {
        self.events_ingested.fetch_add(1, Ordering::Relaxed);
    }

    pub fn on_rejected(&self) {
        self.events_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn on_batch(&self, rows: u64) {
        self.batches_emitted.fetch_add(1, Ordering::Relaxed);
        self.rows_emitted.fetch_add(rows, Ordering::Relaxed);
    }

    pub fn record_listener_failure(&self) {
        self.listener_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn set_known_groups(&self, groups: u64) {
        self.known_groups.store(groups, Ordering::Relaxed);
    }

    pub fn events_ingested(&self) -> u64 {
        self.events_ingested.load(Ordering::Relaxed)
    }

    pub fn events_rejected(&self) -> u64 {
        self.events_rejected.load(Ordering::Relaxed)
    }

    pub fn batches_emitted(&self) -> u64 {
        self.batches_emitted.load(Ordering::Relaxed)
    }

    pub fn rows_emitted(&self) -> u64 {
        self.rows_emitted.load(Ordering::Relaxed)
    }

    pub fn listener_failures(&self) -> u64 {
        self.listener_failures.load(Ordering::Relaxed)
    }

    pub fn known_groups(&self) -> u64 {
        self.known_groups.load(Ordering::Relaxed)
    }
}
