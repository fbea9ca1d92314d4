use std::sync::Arc;

use anyhow::anyhow;
use parking_lot::Mutex;

use crate::engine::listener::BatchListener;
use crate::engine::window::WindowBatch;

/// Keeps every delivered batch; can be told to fail or panic on one sequence.
#[derive(Default)]
pub struct RecordingListener {
    batches: Mutex<Vec<WindowBatch>>,
    fail_on: Option<u64>,
    panic_on: Option<u64>,
}

impl RecordingListener {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_on(sequence: u64) -> Arc<Self> {
        Arc::new(Self {
            fail_on: Some(sequence),
            ..Self::default()
        })
    }

    pub fn panicking_on(sequence: u64) -> Arc<Self> {
        Arc::new(Self {
            panic_on: Some(sequence),
            ..Self::default()
        })
    }

    pub fn batches(&self) -> Vec<WindowBatch> {
        self.batches.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.batches.lock().len()
    }

    /// Row pairs of every batch, owned for easy comparison.
    pub fn pairs(&self) -> Vec<Vec<(Option<String>, u64)>> {
        self.batches
            .lock()
            .iter()
            .map(|b| {
                b.rows
                    .iter()
                    .map(|r| (r.key.as_str().map(str::to_string), r.count))
                    .collect()
            })
            .collect()
    }
}

impl BatchListener for RecordingListener {
    fn on_batch(&self, batch: &WindowBatch) -> anyhow::Result<()> {
        self.batches.lock().push(batch.clone());
        if self.panic_on == Some(batch.sequence) {
            panic!("listener exploded on batch #{}", batch.sequence);
        }
        if self.fail_on == Some(batch.sequence) {
            return Err(anyhow!("listener rejected batch #{}", batch.sequence));
        }
        Ok(())
    }
}
