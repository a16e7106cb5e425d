//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `labvoice.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use labvoice_app::registry::DEFAULT_ROOMS;
use labvoice_app::responder::DEFAULT_RESPONSES;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Room registry settings.
    pub rooms: RoomsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Mock assistant settings.
    pub chat: ChatConfig,
}

/// Room registry configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RoomsConfig {
    /// Ordered room display names.
    pub names: Vec<String>,
    /// Seed every circuit with a coin-flip state at startup.
    pub random_init: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Mock assistant configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Reply literals the canned responder picks from.
    pub responses: Vec<String>,
}

impl Config {
    /// Load configuration from `labvoice.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("labvoice.toml")?;
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
        if let Ok(val) = std::env::var("LABVOICE_ROOMS") {
            self.rooms.names = val.split(',').map(|name| name.trim().to_string()).collect();
        }
        if let Ok(val) = std::env::var("LABVOICE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rooms.names.is_empty() {
            return Err(ConfigError::Validation(
                "room list must not be empty".to_string(),
            ));
        }
        if self.rooms.names.iter().any(String::is_empty) {
            return Err(ConfigError::Validation(
                "room names must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RoomsConfig {
    fn default() -> Self {
        Self {
            names: DEFAULT_ROOMS.iter().map(ToString::to_string).collect(),
            random_init: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "labvoice=info".to_string(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            responses: DEFAULT_RESPONSES.iter().map(ToString::to_string).collect(),
        }
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
