//! Timestamp formats used by the console and file handlers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format options for appenders
///
/// # Examples
///
/// ```
/// use lifecycle_logging::core::TimestampFormat;
/// use chrono::Utc;
///
/// let stamp = TimestampFormat::Unix.format(&Utc::now());
/// assert!(stamp.parse::<i64>().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in whole seconds: `1736332245`
    ///
    /// Used by the file handler.
    Unix,

    /// Wall clock time of day: `10:30:45`
    ///
    /// Used by the console handler.
    Clock,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::Clock => datetime.format("%H:%M:%S").to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}
