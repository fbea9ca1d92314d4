pub use super::factories::{EventFactory, RecordingListener, StatementConfigFactory};

use std::sync::Arc;

pub struct Factory;

impl Factory {
    pub fn event() -> EventFactory {
        EventFactory::new()
    }

    pub fn statement_config() -> StatementConfigFactory {
        StatementConfigFactory::new()
    }

    pub fn recording_listener() -> Arc<RecordingListener> {
        RecordingListener::new()
    }
}
