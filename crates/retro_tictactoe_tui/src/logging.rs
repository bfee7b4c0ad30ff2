//! Tracing subscriber setup.

use crate::settings::LoggingSettings;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Sends logs to the configured file so they don't interfere with the TUI.
pub fn init_file_logging(settings: &LoggingSettings) -> Result<()> {
    let log_file = std::fs::File::create(settings.file())
        .with_context(|| format!("Failed to create log file {}", settings.file().display()))?;

    // Don't panic if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings.filter()))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

/// Sends logs to stderr, keeping stdout for command output.
pub fn init_stderr_logging(fallback: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .with_writer(std::io::stderr)
        .try_init();
}
