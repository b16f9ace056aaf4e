//! Configuration management for Tally.
//!
//! Loads configuration from `${TALLY_HOME}/config.toml` with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Log file configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Write `${TALLY_HOME}/logs/tally.log`.
    pub enabled: bool,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            filter: Config::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Username shown in the login form on startup
    pub prefill_username: Option<String>,

    /// Terminal poll timeout while idle, in milliseconds
    pub idle_poll_ms: u64,

    /// Log file settings
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefill_username: None,
            idle_poll_ms: Self::DEFAULT_IDLE_POLL_MS,
            log: LogConfig::default(),
        }
    }
}

/// Default config file contents, embedded at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for Tally configuration and log directories.
    //!
    //! `TALLY_HOME` resolution order:
    //! 1. `TALLY_HOME` environment variable (if set)
    //! 2. `~/.config/tally` (default)
    //! 3. `./.tally` when no home directory can be determined

    use std::env;
    use std::path::PathBuf;

    pub fn tally_home() -> PathBuf {
        if let Ok(home) = env::var("TALLY_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".tally"),
            |h| h.join(".config").join("tally"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        tally_home().join("config.toml")
    }

    /// Returns the directory holding log files.
    pub fn logs_dir() -> PathBuf {
        tally_home().join("logs")
    }
}

impl Config {
    const DEFAULT_IDLE_POLL_MS: u64 = 100;
    const DEFAULT_LOG_FILTER: &str = "warn";
    /// Lower bound so a zero value cannot spin the UI loop.
    const MIN_IDLE_POLL_MS: u64 = 10;

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    ///
    /// # Errors
    /// Returns an error if the file exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Poll timeout for the UI loop, clamped to a sane minimum.
    pub fn idle_poll_duration(&self) -> Duration {
        Duration::from_millis(self.idle_poll_ms.max(Self::MIN_IDLE_POLL_MS))
    }

    /// Prefilled username, ignoring empty strings.
    pub fn prefill_username(&self) -> Option<&str> {
        self.prefill_username.as_deref().filter(|u| !u.is_empty())
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}
