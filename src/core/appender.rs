//! Sink trait implemented by every output handler

use super::{error::Result, log_entry::LogEntry};

/// An output handler attached to a [`Logger`](super::Logger).
///
/// `name` identifies the kind of sink ("console", "file", "memory") and is
/// what handler setup and tests use to count attached sinks.
pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
