//! Tracing setup.
//!
//! The interactive UI owns the terminal, so its logs go to
//! `${TALLY_HOME}/logs/tally.log` through a non-blocking appender. Headless
//! commands log to stderr instead. `RUST_LOG` overrides the configured filter.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogConfig, paths};

/// File name inside the logs directory.
pub const LOG_FILE_NAME: &str = "tally.log";

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to the log file (interactive mode).
    File,
    /// Compact lines on stderr (headless commands).
    Stderr,
}

/// Installs the global subscriber.
///
/// Returns the appender guard for file logging; keep it alive until exit so
/// buffered lines are flushed. Returns `None` for stderr logging. With
/// `log.enabled = false` no subscriber is installed for either target.
///
/// # Errors
/// Returns an error if the logs directory cannot be created or a subscriber
/// is already installed.
pub fn init(config: &LogConfig, target: LogTarget) -> Result<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }
    let filter = build_filter(&config.filter);

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr).compact())
                .try_init()
                .context("Failed to install tracing subscriber")?;
            Ok(None)
        }
        LogTarget::File => {
            let dir = paths::logs_dir();
            let (writer, guard) = file_writer(&dir)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .try_init()
                .context("Failed to install tracing subscriber")?;
            Ok(Some(guard))
        }
    }
}

fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn file_writer(dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let appender = rolling::never(dir, LOG_FILE_NAME);
    Ok(non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_file_writer_creates_directory_and_file() {
        let dir = tempdir().unwrap();
        let logs = dir.path().join("nested").join("logs");

        let (mut writer, guard) = file_writer(&logs).unwrap();
        writer.write_all(b"hello\n").unwrap();
        drop(guard);

        let contents = fs::read_to_string(logs.join(LOG_FILE_NAME)).unwrap();
        assert_eq!(contents, "hello\n");
    }

    #[test]
    fn test_disabled_installs_nothing() {
        let config = LogConfig {
            enabled: false,
            ..LogConfig::default()
        };
        // A second install would fail if the first had set a subscriber.
        for target in [LogTarget::Stderr, LogTarget::File, LogTarget::Stderr] {
            assert!(init(&config, target).unwrap().is_none());
        }
    }
}
