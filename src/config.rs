//! Runtime configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `HOST`: bind host (default `0.0.0.0`)
//! - `PORT`: bind port (default `3000`)
//! - `SEED_DEFAULT_CONTEXTS`: `true` (default) | `false`
//! - `LOG_FORMAT`: `pretty` (default) | `json`
//!
//! Empty or whitespace-only values count as unset.

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::server::ServerConfig;

// =============================================================================
// Configuration Types
// =============================================================================

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "pretty" | "text" | "fmt" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigurationError::InvalidLogFormat(value.to_string())),
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listener address.
    pub server: ServerConfig,
    /// Whether the store starts with the default contexts.
    pub seed_default_contexts: bool,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            seed_default_contexts: true,
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if any variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Reads the configuration through `lookup`, which behaves like
    /// [`std::env::var`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if any variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let read = |key: &'static str| -> Result<Option<String>, ConfigurationError> {
            match lookup(key) {
                Ok(value) => {
                    let trimmed = value.trim();
                    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
                }
                Err(env::VarError::NotPresent) => Ok(None),
                Err(env::VarError::NotUnicode(_)) => Err(ConfigurationError::NotUnicode(key)),
            }
        };

        let host = read("HOST")?.unwrap_or_else(|| ServerConfig::DEFAULT_HOST.to_string());

        let port = match read("PORT")? {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigurationError::InvalidPort(value))?,
            None => ServerConfig::DEFAULT_PORT,
        };

        let seed_default_contexts = match read("SEED_DEFAULT_CONTEXTS")? {
            Some(value) => parse_flag(&value)
                .ok_or(ConfigurationError::InvalidFlag("SEED_DEFAULT_CONTEXTS", value))?,
            None => true,
        };

        let log_format = match read("LOG_FORMAT")? {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            server: ServerConfig::new(host, port),
            seed_default_contexts,
            log_format,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors raised while reading the configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Invalid PORT: '{0}'. Expected an integer between 0 and 65535")]
    InvalidPort(String),

    #[error("Invalid {0}: '{1}'. Expected 'true' or 'false'")]
    InvalidFlag(&'static str, String),

    #[error("Invalid LOG_FORMAT: '{0}'. Expected 'pretty' or 'json'")]
    InvalidLogFormat(String),

    #[error("{0} contains non-UTF-8 data")]
    NotUnicode(&'static str),
}

// =============================================================================
// Tests
// =============================================================================
