use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::shared::config::model::{Settings, config_path, load_settings};

/// Process-wide settings for the binary. Library callers pass a
/// `StatementConfig` explicitly instead.
pub static CONFIG: Lazy<Arc<Settings>> = Lazy::new(|| {
    let settings = load_settings().unwrap_or_else(|e| {
        panic!("Failed to load configuration from '{}': {}", config_path(), e)
    });
    Arc::new(settings)
});
