//! The logging facade: composes statements, applies verbosity and level
//! gating, retains stored messages and dispatches to the backend

use crate::config::LoggingConfig;
use crate::core::{
    composer, Appender, DataValue, ExitRunError, KeyTransform, LogLevel, Logger, LoggerRegistry,
    Result, StatementMetrics, StoredMessages, TimestampFormat, VerbosityState,
};
use crate::handlers;
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A single statement to log, built fluently
///
/// ```
/// use lifecycle_logging::{DataValue, LogLevel, Statement};
///
/// let statement = Statement::new("Synced accounts")
///     .level(LogLevel::Info)
///     .context_marker("sync")
///     .storage_marker("summary")
///     .labeled_json("stats", DataValue::map().entry("accounts", 12));
/// assert_eq!(statement.message(), "Synced accounts");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Statement {
    message: String,
    level: LogLevel,
    json_data: Option<DataValue>,
    labeled_json_data: Vec<(String, DataValue)>,
    identifiers: Vec<String>,
    context_marker: Option<String>,
    storage_marker: Option<String>,
    verbose: bool,
    verbosity: Option<u32>,
    allowed_levels: Vec<LogLevel>,
    denied_levels: Vec<LogLevel>,
}

impl Statement {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Unlabeled payload: a single map, or a sequence of maps written as one
    /// block each
    #[must_use]
    pub fn json(mut self, data: impl Into<DataValue>) -> Self {
        self.json_data = Some(data.into());
        self
    }

    /// Add a labeled payload. Labels are written in the order added.
    #[must_use]
    pub fn labeled_json(mut self, label: impl Into<String>, data: impl Into<DataValue>) -> Self {
        self.labeled_json_data.push((label.into(), data.into()));
        self
    }

    /// Identifiers appended to the message as `(a, b)`
    #[must_use]
    pub fn identifiers<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.identifiers.extend(identifiers.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn context_marker(mut self, marker: impl Into<String>) -> Self {
        self.context_marker = Some(marker.into());
        self
    }

    #[must_use]
    pub fn storage_marker(mut self, marker: impl Into<String>) -> Self {
        self.storage_marker = Some(marker.into());
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn verbosity(mut self, verbosity: u32) -> Self {
        self.verbosity = Some(verbosity);
        self
    }

    /// Only emit when the statement's level is one of these
    #[must_use]
    pub fn allowed_levels(mut self, levels: impl IntoIterator<Item = LogLevel>) -> Self {
        self.allowed_levels.extend(levels);
        self
    }

    /// Never emit when the statement's level is one of these
    #[must_use]
    pub fn denied_levels(mut self, levels: impl IntoIterator<Item = LogLevel>) -> Self {
        self.denied_levels.extend(levels);
        self
    }

    fn level_permitted(&self) -> bool {
        if !self.allowed_levels.is_empty() && !self.allowed_levels.contains(&self.level) {
            return false;
        }
        !self.denied_levels.contains(&self.level)
    }

    /// Message with identifiers and context marker applied, before payloads
    fn annotated_message(&self) -> String {
        let mut msg = self.message.clone();
        if !self.identifiers.is_empty() {
            msg = format!("{} ({})", msg, self.identifiers.join(", "));
        }
        if let Some(ref marker) = self.context_marker {
            msg = format!("[{}] {}", marker, msg);
        }
        msg
    }
}

impl From<&str> for Statement {
    fn from(message: &str) -> Self {
        Statement::new(message)
    }
}

impl From<String> for Statement {
    fn from(message: String) -> Self {
        Statement::new(message)
    }
}

/// Stored-message marker whose messages count as unhandled errors at exit
pub const ERRORS_MARKER: &str = "errors";

/// Final report handed to [`Logging::exit_run`]
///
/// ```
/// use lifecycle_logging::{DataValue, ExitRun, KeyTransform};
///
/// let run = ExitRun::new()
///     .results(DataValue::map().entry("accountsSynced", 12))
///     .key_transform(KeyTransform::SnakeCase);
/// ```
#[derive(Debug, Clone)]
pub struct ExitRun {
    results: DataValue,
    key_transform: KeyTransform,
    errors: Vec<String>,
    errors_marker: String,
}

impl ExitRun {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn results(mut self, results: impl Into<DataValue>) -> Self {
        self.results = results.into();
        self
    }

    #[must_use]
    pub fn key_transform(mut self, transform: KeyTransform) -> Self {
        self.key_transform = transform;
        self
    }

    /// Record an unhandled error alongside those stored under the errors marker
    #[must_use]
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.errors.push(error.into());
        self
    }

    /// Stored-message marker collected as unhandled errors (default: [`ERRORS_MARKER`])
    #[must_use]
    pub fn errors_marker(mut self, marker: impl Into<String>) -> Self {
        self.errors_marker = marker.into();
        self
    }
}

impl Default for ExitRun {
    fn default() -> Self {
        Self {
            results: DataValue::Null,
            key_transform: KeyTransform::default(),
            errors: Vec::new(),
            errors_marker: ERRORS_MARKER.to_string(),
        }
    }
}

/// Logging facade
///
/// # Example
///
/// ```
/// use lifecycle_logging::{Logging, Statement};
///
/// let logging = Logging::builder().console(false).build().unwrap();
/// logging.set_verbose_output(true);
/// logging.set_verbosity_threshold(2);
///
/// let shown = logging.logged_statement(Statement::new("step 2").verbose(true).verbosity(2));
/// assert_eq!(shown.as_deref(), Some("step 2"));
///
/// let hidden = logging.logged_statement(Statement::new("step 3").verbose(true).verbosity(3));
/// assert!(hidden.is_none());
/// ```
pub struct Logging {
    logger: Arc<Logger>,
    verbosity: RwLock<VerbosityState>,
    stored: StoredMessages,
    metrics: StatementMetrics,
    log_file: Option<PathBuf>,
}

impl Logging {
    /// Create a facade that owns its backend logger
    pub fn new(config: LoggingConfig) -> Result<Self> {
        let logger = Arc::new(Logger::new(config.logger_name.clone()));
        Self::with_logger(config, logger)
    }

    /// Create a facade over the registry's logger named `config.logger_name`.
    ///
    /// Handlers already attached to that logger are cleared first.
    pub fn with_registry(config: LoggingConfig, registry: &LoggerRegistry) -> Result<Self> {
        let logger = registry.get_or_create(&config.logger_name);
        Self::with_logger(config, logger)
    }

    fn with_logger(config: LoggingConfig, logger: Arc<Logger>) -> Result<Self> {
        config.validate()?;

        handlers::clear_existing_handlers(&logger);
        logger.set_min_level(config.log_level);

        let log_file = if config.enable_file {
            Some(handlers::add_file_handler(
                &logger,
                config.effective_log_dir(),
                config.effective_log_file_name(),
                config.file_timestamp_format.clone(),
            )?)
        } else {
            None
        };

        if config.enable_console {
            handlers::add_console_handler(&logger, config.console_timestamp_format.clone());
        }

        let mut verbosity =
            VerbosityState::new(config.enable_verbose_output, config.verbosity_threshold);
        for marker in config.verbosity_bypass_markers {
            verbosity.add_bypass_marker(marker);
        }

        Ok(Self {
            logger,
            verbosity: RwLock::new(verbosity),
            stored: StoredMessages::new(),
            metrics: StatementMetrics::new(),
            log_file,
        })
    }

    #[must_use]
    pub fn builder() -> LoggingBuilder {
        LoggingBuilder::new()
    }

    /// Log a statement.
    ///
    /// Returns the composed text when the statement was emitted and `None`
    /// when verbosity or level filters suppressed it. A storage marker
    /// records the plain message either way.
    pub fn logged_statement(&self, statement: impl Into<Statement>) -> Option<String> {
        let statement = statement.into();

        if let Some(ref marker) = statement.storage_marker {
            self.stored.store(marker.as_str(), statement.message.as_str());
            self.metrics.record_stored();
        }

        let permitted = self.verbosity.read().permits(
            statement.verbose,
            statement.verbosity,
            statement.context_marker.as_deref(),
        ) && statement.level_permitted();

        if !permitted {
            self.metrics.record_suppressed();
            return None;
        }

        let msg = composer::add_json_data(
            statement.annotated_message(),
            statement.json_data.as_ref(),
            &statement.labeled_json_data,
        );

        self.logger.log(statement.level, msg.as_str());
        self.metrics.record_emitted();
        Some(msg)
    }

    /// Log a plain message at the given level
    pub fn log(&self, level: LogLevel, message: impl Into<String>) -> Option<String> {
        self.logged_statement(Statement::new(message).level(level))
    }

    pub fn debug(&self, message: impl Into<String>) -> Option<String> {
        self.log(LogLevel::Debug, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Option<String> {
        self.log(LogLevel::Info, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> Option<String> {
        self.log(LogLevel::Warning, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Option<String> {
        self.log(LogLevel::Error, message)
    }

    pub fn critical(&self, message: impl Into<String>) -> Option<String> {
        self.log(LogLevel::Critical, message)
    }

    // Verbosity state

    pub fn set_verbose_output(&self, enabled: bool) {
        self.verbosity.write().set_enabled(enabled);
    }

    pub fn verbose_output_enabled(&self) -> bool {
        self.verbosity.read().enabled()
    }

    pub fn set_verbosity_threshold(&self, threshold: u32) {
        self.verbosity.write().set_threshold(threshold);
    }

    pub fn verbosity_threshold(&self) -> u32 {
        self.verbosity.read().threshold()
    }

    /// Returns `false` if the marker was already a bypass marker
    pub fn add_bypass_marker(&self, marker: impl Into<String>) -> bool {
        self.verbosity.write().add_bypass_marker(marker)
    }

    pub fn remove_bypass_marker(&self, marker: &str) -> bool {
        self.verbosity.write().remove_bypass_marker(marker)
    }

    pub fn bypass_markers(&self) -> Vec<String> {
        self.verbosity.read().bypass_markers().to_vec()
    }

    // Stored messages

    pub fn stored_messages(&self, marker: &str) -> Option<Vec<String>> {
        self.stored.get(marker)
    }

    pub fn stored_markers(&self) -> Vec<String> {
        self.stored.markers()
    }

    pub fn take_stored_messages(&self, marker: &str) -> Option<Vec<String>> {
        self.stored.take(marker)
    }

    pub fn clear_stored_messages(&self) {
        self.stored.clear();
    }

    // Backend

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    /// Path of the log file when file output is enabled
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    pub fn metrics(&self) -> &StatementMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.logger.flush()
    }

    /// Report the end of a run and flush the backend.
    ///
    /// Results are logged with their keys transformed, followed by every
    /// stored marker except the errors marker. Messages stored under the
    /// errors marker join the run's own errors; if there are any they are
    /// logged at critical level and returned as
    /// [`ExitRunError::UnhandledErrors`]. Otherwise the transformed results
    /// are returned.
    pub fn exit_run(&self, run: ExitRun) -> std::result::Result<DataValue, ExitRunError> {
        let results = run.key_transform.transform_keys(run.results);

        self.logged_statement(
            Statement::new("Run results")
                .level(LogLevel::Info)
                .labeled_json("results", results.clone()),
        );

        let mut stored = DataValue::map();
        for marker in self.stored.markers() {
            if marker == run.errors_marker {
                continue;
            }
            if let Some(messages) = self.stored.get(&marker) {
                stored = stored.entry(marker, messages);
            }
        }
        if !stored.is_empty() {
            self.logged_statement(
                Statement::new("Stored messages")
                    .level(LogLevel::Info)
                    .labeled_json("stored_messages", stored),
            );
        }

        let mut errors = self.stored.get(&run.errors_marker).unwrap_or_default();
        errors.extend(run.errors);

        if errors.is_empty() {
            self.logged_statement(Statement::new("Run completed").level(LogLevel::Info));
            self.flush()?;
            return Ok(results);
        }

        self.logged_statement(
            Statement::new(format!("Run finished with {} unhandled error(s)", errors.len()))
                .level(LogLevel::Critical)
                .json(DataValue::map().entry("errors", errors.clone())),
        );
        self.flush()?;
        Err(ExitRunError::UnhandledErrors { errors, results })
    }
}

impl std::fmt::Debug for Logging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logging")
            .field("logger", &self.logger)
            .field("verbosity", &*self.verbosity.read())
            .field("log_file", &self.log_file)
            .finish()
    }
}

/// Builder for [`Logging`] with a fluent API
///
/// # Example
/// ```
/// use lifecycle_logging::prelude::*;
///
/// let memory = MemoryAppender::new();
/// let logging = Logging::builder()
///     .console(false)
///     .logger_name("worker")
///     .verbose_output(true)
///     .verbosity_threshold(3)
///     .bypass_marker("startup")
///     .appender(memory.clone())
///     .build()
///     .unwrap();
///
/// logging.info("ready");
/// assert_eq!(memory.messages(), vec!["ready"]);
/// ```
pub struct LoggingBuilder {
    config: LoggingConfig,
    appenders: Vec<Box<dyn Appender>>,
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self::from_config(LoggingConfig::default())
    }

    pub fn from_config(config: LoggingConfig) -> Self {
        Self {
            config,
            appenders: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, enabled: bool) -> Self {
        self.config.enable_console = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, enabled: bool) -> Self {
        self.config.enable_file = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_file_name(mut self, name: impl Into<String>) -> Self {
        self.config.log_file_name = Some(name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.log_dir = Some(dir.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn logger_name(mut self, name: impl Into<String>) -> Self {
        self.config.logger_name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.config.log_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn verbose_output(mut self, enabled: bool) -> Self {
        self.config.enable_verbose_output = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn verbosity_threshold(mut self, threshold: u32) -> Self {
        self.config.verbosity_threshold = threshold;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn bypass_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.verbosity_bypass_markers.push(marker.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn console_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.console_timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.file_timestamp_format = format;
        self
    }

    /// Attach an extra appender after the configured handlers
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    pub fn build(self) -> Result<Logging> {
        let logging = Logging::new(self.config)?;
        for appender in self.appenders {
            logging.logger.add_appender(appender);
        }
        Ok(logging)
    }

    pub fn build_with_registry(self, registry: &LoggerRegistry) -> Result<Logging> {
        let logging = Logging::with_registry(self.config, registry)?;
        for appender in self.appenders {
            logging.logger.add_appender(appender);
        }
        Ok(logging)
    }
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}
