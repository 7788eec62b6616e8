//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `nesthub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Poll-cycle settings.
    pub poll: PollConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Poll-cycle configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Seconds between provider refreshes.
    pub interval_secs: u64,
}

impl Config {
    /// Load configuration from `nesthub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("nesthub.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("NESTHUB_POLL_INTERVAL") {
            if let Ok(secs) = val.parse() {
                self.poll.interval_secs = secs;
            }
        }
        if let Ok(val) = std::env::var("NESTHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.poll.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "poll interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "nesthubd=info,nesthub=info".to_string(),
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { interval_secs: 30 }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
