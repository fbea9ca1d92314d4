pub mod event_factory;
pub mod recording_listener;
pub mod statement_config_factory;

pub use event_factory::EventFactory;
pub use recording_listener::RecordingListener;
pub use statement_config_factory::StatementConfigFactory;

#[cfg(test)]
mod event_factory_test;
