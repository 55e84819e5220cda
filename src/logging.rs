//! File logging
//!
//! The terminal belongs to the UI while a puzzle is being played, so log
//! output only ever goes to a file.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "puzterm.log";

/// Directory the log file is written to
#[must_use]
pub fn log_directory() -> PathBuf {
    dirs::cache_dir().map_or_else(
        || PathBuf::from(".puzterm").join("logs"),
        |dir| dir.join("puzterm").join("logs"),
    )
}

/// Build the filter: `RUST_LOG` if set, otherwise `default_level`
///
/// Directives that fail to parse fall through to the next source, ending at `info`.
fn env_filter(env: Option<&str>, default_level: &str) -> EnvFilter {
    env.filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(default_level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Install the global subscriber writing to the log file
///
/// Keep the returned guard alive until exit; dropping it flushes and
/// stops the background writer.
///
/// # Errors
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init(default_level: &str) -> Result<WorkerGuard> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter(env.as_deref(), default_level))
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Log file: {}",
        log_dir.join(LOG_FILE_NAME).display()
    );
    Ok(guard)
}
