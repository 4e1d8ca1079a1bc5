//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default config file looked up when none is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Pause before the computer answers, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// File the terminal UI logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_computer_delay_ms() -> u64 {
    500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            computer_delay_ms: default_computer_delay_ms(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Pause before the computer answers.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(delay_ms = config.computer_delay_ms, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else the defaults.
    ///
    /// A path given explicitly must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
