use crate::shared::config::StatementConfig;

pub struct StatementConfigFactory {
    config: StatementConfig,
}

impl StatementConfigFactory {
    pub fn new() -> Self {
        Self {
            config: StatementConfig::new(1.0),
        }
    }

    pub fn with_interval(mut self, secs: f64) -> Self {
        self.config.interval_secs = secs;
        self
    }

    pub fn with_group_by(mut self, field: &str) -> Self {
        self.config.group_by = field.to_string();
        self
    }

    pub fn with_event_type(mut self, event_type: &str) -> Self {
        self.config.event_type = event_type.to_string();
        self
    }

    pub fn create(self) -> StatementConfig {
        self.config
    }
}
