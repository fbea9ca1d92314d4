use serde::Deserialize;
use tracing_subscriber::filter::{LevelFilter, LevelParseError as ParseLevelFilterError};

use crate::engine::errors::EngineError;
use crate::engine::event::{SERVICE_EVENT_TYPE, SERVICE_FIELD};
use crate::engine::window::ColumnSpec;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub statement: StatementConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
    /// Prefix of the daily rolled log files
    #[serde(default = "default_log_file_name")]
    pub file_name: String,
}

fn default_log_file_name() -> String {
    "snel_tally.log".to_string()
}

impl LoggingConfig {
    pub fn stdout_filter(&self) -> Result<LevelFilter, ParseLevelFilterError> {
        self.stdout_level.parse()
    }

    pub fn file_filter(&self) -> Result<LevelFilter, ParseLevelFilterError> {
        self.file_level.parse()
    }
}

/// A `select <group_by>, count(*) as <count_alias> from <event_type>` statement
/// over a tumbling window of `interval_secs`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StatementConfig {
    #[serde(default = "default_event_type")]
    pub event_type: String,
    #[serde(default = "default_group_by")]
    pub group_by: String,
    #[serde(default = "default_count_alias")]
    pub count_alias: String,
    /// Window length in seconds; fractions are allowed
    pub interval_secs: f64,
}

fn default_event_type() -> String {
    SERVICE_EVENT_TYPE.to_string()
}

fn default_group_by() -> String {
    SERVICE_FIELD.to_string()
}

fn default_count_alias() -> String {
    "value".to_string()
}

impl StatementConfig {
    pub fn new(interval_secs: f64) -> Self {
        Self {
            event_type: default_event_type(),
            group_by: default_group_by(),
            count_alias: default_count_alias(),
            interval_secs,
        }
    }

    pub fn with_event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    pub fn with_group_by(mut self, group_by: impl Into<String>) -> Self {
        self.group_by = group_by.into();
        self
    }

    pub fn with_count_alias(mut self, count_alias: impl Into<String>) -> Self {
        self.count_alias = count_alias.into();
        self
    }

    /// Checks the naming fields. The interval is validated when the statement
    /// starts.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.event_type.trim().is_empty() {
            return Err(EngineError::InvalidConfig("event_type is empty".into()));
        }
        if self.group_by.trim().is_empty() {
            return Err(EngineError::InvalidConfig("group_by is empty".into()));
        }
        if self.count_alias.trim().is_empty() {
            return Err(EngineError::InvalidConfig("count_alias is empty".into()));
        }
        if self.group_by == self.count_alias {
            return Err(EngineError::InvalidConfig(format!(
                "count_alias '{}' collides with the group attribute",
                self.count_alias
            )));
        }
        Ok(())
    }

    /// Columns of every emitted row: the group attribute, then the count.
    pub fn output_columns(&self) -> Vec<ColumnSpec> {
        vec![
            ColumnSpec {
                name: self.group_by.clone(),
                logical_type: "String".into(),
            },
            ColumnSpec {
                name: self.count_alias.clone(),
                logical_type: "Long".into(),
            },
        ]
    }
}

/// Env var naming the settings file (without extension).
pub const CONFIG_PATH_ENV: &str = "SNEL_TALLY_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config";

pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

/// Loads the settings file named by `SNEL_TALLY_CONFIG`. Individual values can
/// be overridden with `SNEL_TALLY__<SECTION>__<KEY>` variables, e.g.
/// `SNEL_TALLY__STATEMENT__INTERVAL_SECS=5`.
pub fn load_settings() -> Result<Settings, config::ConfigError> {
    load_settings_from(&config_path())
}

pub fn load_settings_from(path: &str) -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name(path))
        .add_source(
            config::Environment::with_prefix("SNEL_TALLY")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}

pub fn settings_from_toml(text: &str) -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::from_str(text, config::FileFormat::Toml))
        .build()?
        .try_deserialize()
}
