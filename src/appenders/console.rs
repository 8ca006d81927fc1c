//! Console appender implementation

use crate::core::{Appender, LogEntry, Result, TimestampFormat};
#[cfg(feature = "console")]
use colored::Colorize;

pub struct ConsoleAppender {
    use_colors: bool,
    timestamp_format: TimestampFormat,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: cfg!(feature = "console"),
            timestamp_format: TimestampFormat::Clock,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors: use_colors && cfg!(feature = "console"),
            timestamp_format: TimestampFormat::Clock,
        }
    }

    /// Set the timestamp format for this appender
    ///
    /// # Examples
    ///
    /// ```
    /// use lifecycle_logging::appenders::ConsoleAppender;
    /// use lifecycle_logging::core::TimestampFormat;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_timestamp_format(TimestampFormat::Iso8601);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Render an entry as `[time] LEVEL    message`
    pub fn format(&self, entry: &LogEntry) -> String {
        let timestamp_str = self.timestamp_format.format(&entry.timestamp);
        format!(
            "[{}] {} {}",
            timestamp_str,
            self.level_label(entry),
            entry.message
        )
    }

    #[cfg(feature = "console")]
    fn level_label(&self, entry: &LogEntry) -> String {
        let label = format!("{:8}", entry.level);
        if self.use_colors {
            label.color(entry.level.color_code()).to_string()
        } else {
            label
        }
    }

    #[cfg(not(feature = "console"))]
    fn level_label(&self, entry: &LogEntry) -> String {
        format!("{:8}", entry.level)
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.format(entry);

        // Error and above go to stderr
        if entry.level.is_error() {
            eprintln!("{}", output);
        } else {
            println!("{}", output);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
