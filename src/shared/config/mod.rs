mod global;
mod model;

pub use global::CONFIG;
pub use model::{
    CONFIG_PATH_ENV, LoggingConfig, Settings, StatementConfig, config_path, load_settings,
    load_settings_from, settings_from_toml,
};
