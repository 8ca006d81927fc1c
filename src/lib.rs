//! # Lifecycle Logging
//!
//! A thin convenience layer for application lifecycle logging.
//!
//! ## Features
//!
//! - **Console and file output**: handlers attached from a single config
//! - **Structured payloads**: labeled and unlabeled JSON blocks appended to
//!   messages, sanitized so large integers survive double-precision readers
//! - **Verbosity gating**: thresholds with per-context bypass markers
//! - **Stored messages**: copies of selected messages kept under markers
//!   for later retrieval
//! - **Clean exit**: a final report of results and stored messages that
//!   fails when unhandled errors were collected

pub mod appenders;
pub mod config;
pub mod core;
pub mod handlers;
pub mod logging;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender};
    pub use crate::config::LoggingConfig;
    pub use crate::core::{
        Appender, DataValue, ExitRunError, KeyTransform, LogEntry, LogLevel, Logger,
        LoggerError, LoggerMetrics, LoggerRegistry, Result, StatementMetrics,
    };
    pub use crate::logging::{ExitRun, Logging, LoggingBuilder, Statement};
}

pub use appenders::{ConsoleAppender, FileAppender, MemoryAppender};
pub use config::{LoggingConfig, DEFAULT_LOGGER_NAME};
pub use core::{
    Appender, DataValue, ExitRunError, KeyTransform, LogEntry, LogLevel, Logger, LoggerError,
    LoggerMetrics, LoggerRegistry, Result, StatementMetrics, StoredMessages, TimestampFormat,
    VerbosityState, DEFAULT_LOG_LEVEL, DEFAULT_VERBOSITY_THRESHOLD, SAFE_INTEGER_LIMIT,
};
pub use logging::{ExitRun, Logging, LoggingBuilder, Statement, ERRORS_MARKER};
