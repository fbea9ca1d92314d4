use crate::engine::window::WindowBatch;

/// Receives the rows of every flushed window.
///
/// Called synchronously from the flush path, once per window, including
/// windows with no rows. Implementations should return quickly; a consumer
/// that needs to do slow work should queue the batch (see `ChannelListener`).
/// Errors are logged and counted by the statement but never stop the clock.
pub trait BatchListener: Send + Sync {
    fn on_batch(&self, batch: &WindowBatch) -> anyhow::Result<()>;
}

impl<F> BatchListener for F
where
    F: Fn(&WindowBatch) -> anyhow::Result<()> + Send + Sync,
{
    fn on_batch(&self, batch: &WindowBatch) -> anyhow::Result<()> {
        self(batch)
    }
}
