//! Core types: levels, entries, the backend logger, the message composer
//! and the gating state used by the facade

pub mod appender;
pub mod composer;
pub mod data_value;
pub mod error;
pub mod key_transform;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod registry;
pub mod stored_messages;
pub mod timestamp;
pub mod verbosity;

pub use appender::Appender;
pub use composer::SAFE_INTEGER_LIMIT;
pub use data_value::DataValue;
pub use error::{ExitRunError, LoggerError, Result};
pub use key_transform::KeyTransform;
pub use log_entry::LogEntry;
pub use log_level::{LogLevel, DEFAULT_LOG_LEVEL};
pub use logger::Logger;
pub use metrics::{LoggerMetrics, StatementMetrics};
pub use registry::LoggerRegistry;
pub use stored_messages::StoredMessages;
pub use timestamp::TimestampFormat;
pub use verbosity::{VerbosityState, DEFAULT_VERBOSITY_THRESHOLD};
