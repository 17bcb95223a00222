//! Logging initialization
//!
//! Configures tracing with an env-filter and bridges `log` crate events into
//! tracing so both macro families in `logging_macros` land in one place.
//! Hosts embedding this crate normally install their own subscriber; these
//! helpers cover standalone use and tests.

use std::path::Path;

use anyhow::{Context as _, Result};
use tracing_subscriber::prelude::*;

/// Default filter directives when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "dashexplore=info";

/// Initialize console logging with the standard filter.
///
/// Safe to call more than once; subsequent calls are no-ops because a global
/// subscriber can only be installed once per process.
pub fn init_logging() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        // Bridge log crate events to tracing. Must happen AFTER the
        // subscriber is installed; ignore the error if a bridge exists.
        let _ = tracing_log::LogTracer::init();
        tracing::info!("Logging initialized with filter: {}", DEFAULT_FILTER);
    }

    Ok(())
}

/// Initialize logging to a file under the given directory.
///
/// Writes `dashexplore.log` with ANSI colors disabled. Returns an error if
/// the directory cannot be created or the file cannot be opened.
pub fn init_logging_to(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;

    let log_path = log_dir.join("dashexplore.log");
    let file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(move || file.try_clone().expect("Failed to clone file handle"))
            .with_ansi(false), // No ANSI colors in file
    );

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        let _ = tracing_log::LogTracer::init();
        tracing::info!("Logging initialized to: {:?}", log_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_to_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        init_logging_to(&log_dir).unwrap();

        assert!(log_dir.join("dashexplore.log").exists());
    }

    #[test]
    fn test_init_logging_idempotent() {
        // Second call must not fail even if a subscriber is installed
        init_logging().unwrap();
        init_logging().unwrap();
    }
}
