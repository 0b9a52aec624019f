//! Configuration management for testing-vial.
//!
//! Configuration only covers diagnostics; it never changes how vials are
//! built or validated.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "VIAL_LOG_LEVEL";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for testing-vial diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `VIAL_LOG_LEVEL`: one of trace, debug, info, warn, error, off
    ///   (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let log_level = match env::var(LOG_LEVEL_VAR) {
            Ok(val) => Self::parse_log_level(&val)?,
            Err(_) => Config::default().log_level,
        };

        Ok(Config { log_level })
    }

    /// Normalize and check a log level.
    fn parse_log_level(val: &str) -> ConfigResult<String> {
        let level = val.trim().to_ascii_lowercase();

        if level.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: LOG_LEVEL_VAR.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: LOG_LEVEL_VAR.to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), val),
            });
        }

        Ok(level)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
        }
    }
}
