//! Facade configuration

use crate::core::{LogLevel, LoggerError, Result, TimestampFormat, DEFAULT_VERBOSITY_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logger name used when none is configured
pub const DEFAULT_LOGGER_NAME: &str = "lifecycle_logging";

/// Construction parameters for [`Logging`](crate::Logging)
///
/// Every field has a default, so partial JSON documents deserialize:
///
/// ```
/// use lifecycle_logging::LoggingConfig;
///
/// let config = LoggingConfig::from_json_str(r#"{"enable_verbose_output": true}"#).unwrap();
/// assert!(config.enable_verbose_output);
/// assert_eq!(config.verbosity_threshold, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Attach a console handler (default: `true`)
    pub enable_console: bool,

    /// Attach a file handler (default: `false`)
    pub enable_file: bool,

    /// Log file name before sanitization; falls back to `logger_name`
    pub log_file_name: Option<String>,

    /// Directory the log file is created in (default: current directory)
    pub log_dir: Option<PathBuf>,

    /// Backend logger name (default: [`DEFAULT_LOGGER_NAME`])
    pub logger_name: String,

    /// Minimum level the backend writes (default: debug)
    pub log_level: LogLevel,

    /// Emit statements flagged as verbose (default: `false`)
    pub enable_verbose_output: bool,

    /// Highest verbosity emitted (default: [`DEFAULT_VERBOSITY_THRESHOLD`])
    pub verbosity_threshold: u32,

    /// Context markers that bypass verbosity checks
    pub verbosity_bypass_markers: Vec<String>,

    /// Console line timestamps (default: `HH:MM:SS` clock time)
    pub console_timestamp_format: TimestampFormat,

    /// File line timestamps (default: Unix seconds)
    pub file_timestamp_format: TimestampFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_console: true,
            enable_file: false,
            log_file_name: None,
            log_dir: None,
            logger_name: DEFAULT_LOGGER_NAME.to_string(),
            log_level: LogLevel::Debug,
            enable_verbose_output: false,
            verbosity_threshold: DEFAULT_VERBOSITY_THRESHOLD,
            verbosity_bypass_markers: Vec::new(),
            console_timestamp_format: TimestampFormat::Clock,
            file_timestamp_format: TimestampFormat::Unix,
        }
    }
}

impl LoggingConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LoggingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.logger_name.trim().is_empty() {
            return Err(LoggerError::config(
                "LoggingConfig",
                "logger_name must not be empty",
            ));
        }
        Ok(())
    }

    /// File name handed to the file handler
    pub fn effective_log_file_name(&self) -> &str {
        self.log_file_name.as_deref().unwrap_or(&self.logger_name)
    }

    /// Directory the file handler writes into
    pub fn effective_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
