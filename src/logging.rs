use tracing::info;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::shared::config::LoggingConfig;

/// Installs the global subscriber: ANSI stdout plus a daily rolled file under
/// `log_dir`, each with its own level.
pub fn init(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let stdout_layer = fmt::layer()
        .with_ansi(true)
        .with_filter(cfg.stdout_filter()?);

    let file_appender = tracing_appender::rolling::daily(&cfg.log_dir, &cfg.file_name);
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(file_appender)
        .with_filter(cfg.file_filter()?);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    info!(log_dir = %cfg.log_dir, file = %cfg.file_name, "Logging initialized");
    Ok(())
}

#[cfg(test)]
pub fn init_for_tests() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let directive = concat!(env!("CARGO_CRATE_NAME"), "=debug");
        let filter = EnvFilter::from_default_env().add_directive(directive.parse().unwrap());

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
