//! Formatting macros for the logging facade.
//!
//! Each macro formats its arguments like `format!` and logs the result
//! through [`Logging::log`](crate::Logging::log), evaluating to the
//! `Option<String>` the facade returns.
//!
//! # Examples
//!
//! ```
//! use lifecycle_logging::prelude::*;
//! use lifecycle_logging::info;
//!
//! let logging = Logging::builder().console(false).build().unwrap();
//!
//! let port = 8080;
//! let logged = info!(logging, "Server listening on port {}", port);
//! assert_eq!(logged.as_deref(), Some("Server listening on port 8080"));
//! ```

/// Log a formatted message at an explicit level.
///
/// ```
/// # use lifecycle_logging::prelude::*;
/// # let logging = Logging::builder().console(false).build().unwrap();
/// use lifecycle_logging::logged;
/// logged!(logging, LogLevel::Warning, "Retry {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! logged {
    ($logging:expr, $level:expr, $($arg:tt)+) => {
        $logging.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logging:expr, $($arg:tt)+) => {
        $crate::logged!($logging, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logging:expr, $($arg:tt)+) => {
        $crate::logged!($logging, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logging:expr, $($arg:tt)+) => {
        $crate::logged!($logging, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use lifecycle_logging::prelude::*;
/// # let logging = Logging::builder().console(false).build().unwrap();
/// use lifecycle_logging::error;
/// error!(logging, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logging:expr, $($arg:tt)+) => {
        $crate::logged!($logging, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logging:expr, $($arg:tt)+) => {
        $crate::logged!($logging, $crate::LogLevel::Critical, $($arg)+)
    };
}
