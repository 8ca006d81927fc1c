//! Handler setup: attaching console and file output to a backend logger

use crate::appenders::{ConsoleAppender, FileAppender};
use crate::core::{Logger, LoggerError, Result, TimestampFormat};
use std::path::{Path, PathBuf};

/// Turn a caller-supplied log file name into a safe file stem.
///
/// A trailing `.log` is dropped, every run of characters outside
/// `[0-9A-Za-z]` becomes `_`, and anything before the first ASCII
/// alphanumeric character is cut off.
///
/// ```
/// use lifecycle_logging::handlers::sanitize_log_file_name;
///
/// assert_eq!(sanitize_log_file_name("test_file.log").unwrap(), "test_file");
/// assert_eq!(sanitize_log_file_name("../my app").unwrap(), "my_app");
/// assert!(sanitize_log_file_name("!@#$%^").is_err());
/// ```
pub fn sanitize_log_file_name(log_file_name: &str) -> Result<String> {
    let stem = log_file_name.strip_suffix(".log").unwrap_or(log_file_name);

    let mut sanitized = String::with_capacity(stem.len());
    let mut in_run = false;
    for c in stem.chars() {
        if c.is_ascii_alphanumeric() {
            sanitized.push(c);
            in_run = false;
        } else if !in_run {
            sanitized.push('_');
            in_run = true;
        }
    }

    match sanitized.find(|c: char| c.is_ascii_alphanumeric()) {
        Some(start) => Ok(sanitized[start..].to_string()),
        None => Err(LoggerError::malformed_file_name(sanitized)),
    }
}

/// Attach a file handler writing to `<dir>/<sanitized name>.log`.
///
/// Returns the path of the log file.
pub fn add_file_handler(
    logger: &Logger,
    dir: impl AsRef<Path>,
    log_file_name: &str,
    timestamp_format: TimestampFormat,
) -> Result<PathBuf> {
    let stem = sanitize_log_file_name(log_file_name)?;
    let path = dir.as_ref().join(format!("{}.log", stem));

    let appender = FileAppender::new(&path)?.with_timestamp_format(timestamp_format);
    logger.add_appender(Box::new(appender));
    Ok(path)
}

/// Attach a console handler; the facade passes `[HH:MM:SS]` clock time by default
pub fn add_console_handler(logger: &Logger, timestamp_format: TimestampFormat) {
    logger.add_appender(Box::new(
        ConsoleAppender::new().with_timestamp_format(timestamp_format),
    ));
}

/// Flush and remove every handler attached to the logger
pub fn clear_existing_handlers(logger: &Logger) -> usize {
    logger.clear_appenders()
}
