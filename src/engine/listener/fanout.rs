use std::sync::Arc;

use anyhow::anyhow;

use super::listener::BatchListener;
use crate::engine::window::WindowBatch;

/// Delivers each batch to several listeners in registration order.
///
/// Every listener is called even when an earlier one fails; failures are
/// reported together.
#[derive(Default, Clone)]
pub struct FanoutListener {
    listeners: Vec<Arc<dyn BatchListener>>,
}

impl FanoutListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, listener: Arc<dyn BatchListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn push(&mut self, listener: Arc<dyn BatchListener>) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl BatchListener for FanoutListener {
    fn on_batch(&self, batch: &WindowBatch) -> anyhow::Result<()> {
        let failures: Vec<String> = self
            .listeners
            .iter()
            .enumerate()
            .filter_map(|(idx, listener)| {
                listener
                    .on_batch(batch)
                    .err()
                    .map(|e| format!("listener {}: {}", idx, e))
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(anyhow!(
                "{} of {} listeners failed: {}",
                failures.len(),
                self.listeners.len(),
                failures.join("; ")
            ))
        }
    }
}
