use anyhow::anyhow;
use tokio::sync::mpsc;

use super::listener::BatchListener;
use crate::engine::window::WindowBatch;

/// Hands batches to an asynchronous consumer through a bounded queue.
///
/// The flush path never waits on the consumer: a full queue is reported as a
/// listener failure and that batch is dropped.
pub struct ChannelListener {
    inner: mpsc::Sender<WindowBatch>,
}

impl ChannelListener {
    pub fn bounded(capacity: usize) -> (ChannelListener, BatchStream) {
        let (tx, rx) = mpsc::channel(capacity);
        (ChannelListener { inner: tx }, BatchStream { inner: rx })
    }

    pub fn capacity(&self) -> usize {
        self.inner.max_capacity()
    }
}

impl BatchListener for ChannelListener {
    fn on_batch(&self, batch: &WindowBatch) -> anyhow::Result<()> {
        match self.inner.try_send(batch.clone()) {
            Ok(()) => Ok(()),
            Err(mpsc::error::TrySendError::Full(dropped)) => Err(anyhow!(
                "batch consumer lagging, dropped batch #{}",
                dropped.sequence
            )),
            Err(mpsc::error::TrySendError::Closed(dropped)) => Err(anyhow!(
                "batch consumer closed, dropped batch #{}",
                dropped.sequence
            )),
        }
    }
}

/// Receiving half of a `ChannelListener`.
pub struct BatchStream {
    inner: mpsc::Receiver<WindowBatch>,
}

impl BatchStream {
    pub async fn recv(&mut self) -> Option<WindowBatch> {
        self.inner.recv().await
    }

    pub fn try_recv(&mut self) -> Option<WindowBatch> {
        self.inner.try_recv().ok()
    }

    pub fn close(&mut self) {
        self.inner.close();
    }
}
