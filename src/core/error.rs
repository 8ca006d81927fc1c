//! Error types for lifecycle logging

use super::DataValue;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Log file name without a single ASCII alphanumeric character
    #[error("Malformed log file name: {name} must contain at least one ASCII character")]
    MalformedFileName { name: String },

}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a malformed file name error
    pub fn malformed_file_name(name: impl Into<String>) -> Self {
        LoggerError::MalformedFileName { name: name.into() }
    }

    /// Whether this error came from configuring a handler or the facade
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LoggerError::InvalidConfiguration { .. } | LoggerError::MalformedFileName { .. }
        )
    }
}

/// Outcome of [`Logging::exit_run`](crate::Logging::exit_run) when the run
/// cannot be reported as clean
#[derive(Debug, thiserror::Error)]
pub enum ExitRunError {
    /// Errors were collected during the run and never handled
    #[error("run finished with {} unhandled error(s)", .errors.len())]
    UnhandledErrors {
        errors: Vec<String>,
        /// Results after key transformation, as they were logged
        results: DataValue,
    },

    /// The final flush failed
    #[error(transparent)]
    Logger(#[from] LoggerError),
}
