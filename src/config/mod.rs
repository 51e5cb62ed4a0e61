//! Configuration management for cardex
//!
//! This module handles loading, parsing, and managing configuration from:
//! - Configuration file (TOML format)
//! - Command-line arguments
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values
//!
//! The defaults reproduce the export target the tool was built for, so a
//! run with no arguments and no config file is fully specified.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection configuration
    #[serde(default)]
    pub connection: ConnectionConfig,

    /// Export configuration
    #[serde(default)]
    pub export: ExportConfig,

    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// MongoDB connection URI
    #[serde(default = "default_uri")]
    pub uri: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

/// Export target configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Database holding the card collection
    #[serde(default = "default_database")]
    pub database: String,

    /// Collection to export
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Output file path, overwritten on each run
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
}

/// Display and output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Enable colored output for the sample document
    #[serde(default = "default_color_output")]
    pub color_output: bool,

    /// Report elapsed time after a completed export
    #[serde(default = "default_show_timing")]
    pub show_timing: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

// Default value functions
fn default_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_database() -> String {
    "Empire-Deckbuilder".to_string()
}

fn default_collection() -> String {
    "CardsForGame".to_string()
}

fn default_output_file() -> PathBuf {
    PathBuf::from("empire_cards.json")
}

fn default_color_output() -> bool {
    true
}

fn default_show_timing() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connection: ConnectionConfig::default(),
            export: ExportConfig::default(),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            timeout: default_timeout(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            collection: default_collection(),
            output_file: default_output_file(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: default_color_output(),
            show_timing: default_show_timing(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file, or defaults when no file exists
    ///
    /// # Arguments
    /// * `path` - Explicit config file path, or None for the default path
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// An explicit path that does not exist is an error; a missing file at
    /// the default path just means the user never wrote one.
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_config_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::FileNotFound(path.display().to_string()).into());
            }
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        Ok(config)
    }

    /// Get the default configuration file path
    ///
    /// # Returns
    /// * `PathBuf` - Path to default configuration file
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cardex")
            .join("config.toml")
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        if self.connection.uri.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "connection.uri".to_string(),
                value: self.connection.uri.clone(),
            }
            .into());
        }

        if self.connection.timeout == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connection.timeout".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        if self.export.database.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "export.database".to_string(),
                value: self.export.database.clone(),
            }
            .into());
        }

        if self.export.collection.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "export.collection".to_string(),
                value: self.export.collection.clone(),
            }
            .into());
        }

        if self.export.output_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "export.output_file".to_string(),
                value: String::new(),
            }
            .into());
        }

        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidFormat(e.to_string()).into())
    }

    /// Get connection timeout as Duration
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection.timeout)
    }
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.connection.uri, "mongodb://localhost:27017");
        assert_eq!(config.export.database, "Empire-Deckbuilder");
        assert_eq!(config.export.collection, "CardsForGame");
        assert_eq!(config.export.output_file, PathBuf::from("empire_cards.json"));
        assert!(config.display.color_output);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_collection() {
        let mut config = Config::default();
        config.export.collection = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.connection.timeout = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let toml_str = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.connection.uri, config.connection.uri);
        assert_eq!(parsed.export.collection, config.export.collection);
        assert_eq!(parsed.logging.level, config.logging.level);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
            [export]
            collection = "OtherCards"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.export.collection, "OtherCards");
        // Unset fields fall back to defaults
        assert_eq!(config.export.database, "Empire-Deckbuilder");
        assert_eq!(config.connection.timeout, 30);
    }

    #[test]
    fn test_load_missing_explicit_path_is_error() {
        let result = Config::load_from_file(Some(Path::new("/nonexistent/cardex.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_connection_timeout() {
        let config = Config::default();
        assert_eq!(config.connection_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Debug.to_tracing_level(), tracing::Level::DEBUG);
        assert_eq!(LogLevel::Error.to_tracing_level(), tracing::Level::ERROR);
    }
}
