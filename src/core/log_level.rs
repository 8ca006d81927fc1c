//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Level used when a name or ordinal cannot be resolved
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
    Critical,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Critical,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Severity ordinal used by the backend for filtering.
    ///
    /// Fatal and Critical share the highest ordinal.
    pub fn severity(&self) -> u8 {
        match self {
            LogLevel::Debug => 10,
            LogLevel::Info => 20,
            LogLevel::Warning => 30,
            LogLevel::Error => 40,
            LogLevel::Fatal | LogLevel::Critical => 50,
        }
    }

    /// Resolve a level name to its severity ordinal, falling back to
    /// [`DEFAULT_LOG_LEVEL`] for unknown names
    ///
    /// ```
    /// use lifecycle_logging::LogLevel;
    ///
    /// assert_eq!(LogLevel::severity_of("info"), 20);
    /// assert_eq!(LogLevel::severity_of("INVALID"), 10);
    /// ```
    pub fn severity_of(name: &str) -> u8 {
        name.parse::<LogLevel>()
            .unwrap_or(DEFAULT_LOG_LEVEL)
            .severity()
    }

    /// Map a severity ordinal back to a level. Unknown ordinals resolve to
    /// [`DEFAULT_LOG_LEVEL`].
    pub fn from_severity(severity: u8) -> LogLevel {
        match severity {
            10 => LogLevel::Debug,
            20 => LogLevel::Info,
            30 => LogLevel::Warning,
            40 => LogLevel::Error,
            50 => LogLevel::Critical,
            _ => DEFAULT_LOG_LEVEL,
        }
    }

    /// Whether console output for this level goes to stderr
    pub fn is_error(&self) -> bool {
        self.severity() >= LogLevel::Error.severity()
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal | LogLevel::Critical => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            "CRITICAL" => Ok(LogLevel::Critical),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
