//! File logging for chipfield.
//!
//! The terminal belongs to the widget, so every `tracing` event is written to
//! `<data_local_dir>/chipfield/logs/chipfield.log.<date>` instead. Set
//! `RUST_LOG=chipfield=trace` to follow each controller transition.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "chipfield.log";

/// Used when `RUST_LOG` is unset or unparsable.
const FALLBACK_FILTER: &str = "chipfield=info,warn";

/// Install the global subscriber.
///
/// Fails when there is no local data dir, the log dir can't be created, or
/// a subscriber is already set. Callers treat that as a warning and run
/// without logs.
pub fn init() -> anyhow::Result<()> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let writer = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE_PREFIX);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing::subscriber::set_global_default(
        tracing_subscriber::registry().with(file_layer).with(filter),
    )?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %dir.display(),
        "chipfield started"
    );
    Ok(())
}

fn log_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("chipfield").join("logs"))
}

/// Mark the end of the session in the log.
pub fn shutdown() {
    tracing::info!("chipfield exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_layout() {
        if let Ok(dir) = log_dir() {
            assert!(dir.ends_with("chipfield/logs"));
        }
    }

    #[test]
    fn test_fallback_filter_parses() {
        assert!(EnvFilter::try_new(FALLBACK_FILTER).is_ok());
    }
}
