//! Configuration management
//!
//! Configuration is read from environment variables (and an optional `.env`
//! file) once, and validated before anything uses it.

use std::env;
use std::sync::LazyLock;

use crate::constants::{CENTISECOND_DECIMALS, DEFAULT_DISPLAY_DECIMALS, DEFAULT_LOG_FILTER};

/// Global configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Top-level configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub results: ResultsConfig,
}

/// Tracing output configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not picked up by the subscriber
    pub rust_log: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

/// Result presentation configuration
#[derive(Debug, Clone)]
pub struct ResultsConfig {
    /// Subsecond digits rendered for timed results (0..=2)
    pub display_decimals: u8,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            display_decimals: DEFAULT_DISPLAY_DECIMALS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            logging: LoggingConfig::from_lookup(&lookup)?,
            results: ResultsConfig::from_lookup(&lookup)?,
        })
    }
}

impl LoggingConfig {
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let json = match lookup("LOG_FORMAT") {
            Some(format) => parse_log_format(&format)?,
            None => false,
        };

        Ok(Self {
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            json,
        })
    }
}

impl ResultsConfig {
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let display_decimals = match lookup("RESULT_DISPLAY_DECIMALS") {
            Some(value) => parse_display_decimals(&value)?,
            None => DEFAULT_DISPLAY_DECIMALS,
        };

        Ok(Self { display_decimals })
    }
}

fn parse_log_format(value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "json" => Ok(true),
        "text" | "pretty" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
    }
}

fn parse_display_decimals(value: &str) -> Result<u8, ConfigError> {
    let decimals: u8 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue("RESULT_DISPLAY_DECIMALS".to_string()))?;

    // Stored values are centiseconds, there is nothing finer to show.
    if decimals > CENTISECOND_DECIMALS {
        return Err(ConfigError::InvalidValue(
            "RESULT_DISPLAY_DECIMALS".to_string(),
        ));
    }
    Ok(decimals)
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
