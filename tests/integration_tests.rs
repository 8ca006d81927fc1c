//! Integration tests for lifecycle logging
//!
//! These tests verify:
//! - The full statement lifecycle with file output
//! - Verbosity gating and bypass markers
//! - Stored messages alongside context markers
//! - Structured payloads in the written log
//! - Handler setup errors
//! - Thread safety of the facade
//! - Clean exit reporting

use lifecycle_logging::appenders::MemoryAppender;
use lifecycle_logging::core::LoggerError;
use lifecycle_logging::{
    DataValue, ExitRun, ExitRunError, KeyTransform, LogLevel, Logging, LoggingConfig,
    LoggerRegistry, Statement, ERRORS_MARKER,
};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn file_logging(temp_dir: &TempDir) -> Logging {
    Logging::builder()
        .console(false)
        .file(true)
        .log_dir(temp_dir.path())
        .log_file_name("test_app.log")
        .logger_name("integration_test")
        .build()
        .expect("Failed to build logging")
}

#[test]
fn test_full_logging_lifecycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logging = file_logging(&temp_dir);

    let basic_msg = "Basic message";
    let basic_result = logging.logged_statement(Statement::new(basic_msg).level(LogLevel::Info));
    assert_eq!(basic_result.as_deref(), Some(basic_msg));

    let context_msg = "Context message";
    let context_result = logging
        .logged_statement(
            Statement::new(context_msg)
                .context_marker("test_context")
                .level(LogLevel::Info),
        )
        .expect("context statement emitted");
    assert!(context_result.contains("[test_context]"));

    let storage_msg = "Storage message";
    let storage_result = logging.logged_statement(
        Statement::new(storage_msg)
            .storage_marker("test_storage")
            .level(LogLevel::Info),
    );
    assert!(storage_result.is_some());
    let stored = logging
        .stored_messages("test_storage")
        .expect("storage marker present");
    assert!(stored.iter().any(|m| m == storage_msg));

    logging.flush().expect("Failed to flush");

    let log_path = temp_dir.path().join("test_app.log");
    assert_eq!(logging.log_file(), Some(log_path.as_path()));
    assert!(log_path.exists());

    let content = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert!(content.contains(basic_msg));
    assert!(content.contains(context_msg));
    assert!(content.contains(storage_msg));
    assert!(content.contains("[INFO    ]"));
}

#[test]
fn test_verbosity_integration() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logging = file_logging(&temp_dir);
    logging.set_verbose_output(true);
    logging.set_verbosity_threshold(2);

    let messages = [
        (1, "Normal verbosity"),
        (2, "High verbosity"),
        (3, "Excessive verbosity"),
    ];

    for (verbosity, msg) in messages {
        let result = logging.logged_statement(
            Statement::new(msg)
                .verbose(true)
                .verbosity(verbosity)
                .level(LogLevel::Debug),
        );

        if verbosity <= logging.verbosity_threshold() {
            assert_eq!(result.as_deref(), Some(msg));
        } else {
            assert!(result.is_none());
        }
    }

    logging.flush().expect("Failed to flush");
    let content = fs::read_to_string(temp_dir.path().join("test_app.log")).unwrap();
    assert!(content.contains("High verbosity"));
    assert!(!content.contains("Excessive verbosity"));
}

#[test]
fn test_marker_integration() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logging = file_logging(&temp_dir);
    logging.set_verbose_output(true);

    let context_marker = "context_test";
    let storage_marker = "storage_test";
    logging.add_bypass_marker(context_marker);

    // verbosity 5 is far above the threshold, the bypass marker wins
    let msg = "Test message";
    let result = logging.logged_statement(
        Statement::new(msg)
            .context_marker(context_marker)
            .storage_marker(storage_marker)
            .verbose(true)
            .verbosity(5)
            .level(LogLevel::Debug),
    );

    let result = result.expect("bypass marker forces emission");
    assert!(result.contains(&format!("[{}]", context_marker)));

    let stored = logging.stored_messages(storage_marker).unwrap();
    assert!(stored.first().unwrap().contains(msg));
}

#[test]
fn test_structured_payload_written_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logging = file_logging(&temp_dir);

    let big: u64 = 1 << 60;
    let result = logging
        .logged_statement(
            Statement::new("Account snapshot")
                .level(LogLevel::Info)
                .labeled_json(
                    "account",
                    DataValue::map().entry("id", big).entry("active", true),
                )
                .json(vec![
                    DataValue::map().entry("region", "eu"),
                    DataValue::map().entry("region", "us"),
                ]),
        )
        .unwrap();

    assert!(result.starts_with("Account snapshot\naccount:\n{"));
    assert!(result.contains(&format!("\"id\": \"{}\"", big)));
    assert_eq!(result.matches("\n:{").count(), 2);

    logging.flush().unwrap();
    let content = fs::read_to_string(temp_dir.path().join("test_app.log")).unwrap();
    assert!(content.contains(&format!("\"{}\"", big)));
    assert!(content.contains("\"region\": \"us\""));
}

#[test]
fn test_malformed_log_file_name_fails_setup() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = Logging::builder()
        .console(false)
        .file(true)
        .log_dir(temp_dir.path())
        .log_file_name("!@#$%^")
        .build();

    match result {
        Err(LoggerError::MalformedFileName { .. }) => {}
        other => panic!("expected malformed file name error, got {:?}", other),
    }
}

#[test]
fn test_log_file_name_defaults_to_logger_name() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = LoggingConfig {
        enable_console: false,
        enable_file: true,
        log_dir: Some(temp_dir.path().to_path_buf()),
        logger_name: "billing.worker".to_string(),
        ..LoggingConfig::default()
    };

    let logging = Logging::new(config).unwrap();
    assert_eq!(
        logging.log_file(),
        Some(temp_dir.path().join("billing_worker.log").as_path())
    );
    assert_eq!(logging.logger().appender_names(), vec!["file"]);
}

#[test]
fn test_registry_shares_backend_between_facades() {
    let registry = LoggerRegistry::new();
    let memory = MemoryAppender::new();

    let logging = Logging::builder()
        .console(false)
        .logger_name("shared")
        .appender(memory.clone())
        .build_with_registry(&registry)
        .unwrap();

    let backend = registry.find("shared").expect("registered by the facade");
    backend.info("direct backend call");
    logging.info("through the facade");

    assert_eq!(
        memory.messages(),
        vec!["direct backend call", "through the facade"]
    );
}

#[test]
fn test_concurrent_statements() {
    let memory = MemoryAppender::new();
    let logging = Arc::new(
        Logging::builder()
            .console(false)
            .appender(memory.clone())
            .build()
            .unwrap(),
    );

    let mut handles = vec![];
    for thread_id in 0..5 {
        let logging = Arc::clone(&logging);
        handles.push(std::thread::spawn(move || {
            for i in 0..10 {
                logging.logged_statement(
                    Statement::new(format!("Thread {} - Message {}", thread_id, i))
                        .storage_marker("all")
                        .level(LogLevel::Info),
                );
                if i == 0 {
                    logging.add_bypass_marker(format!("thread-{}", thread_id));
                }
            }
        }));
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert_eq!(memory.len(), 50);
    assert_eq!(logging.stored_messages("all").map(|m| m.len()), Some(50));
    assert_eq!(logging.bypass_markers().len(), 5);
    assert_eq!(logging.metrics().emitted(), 50);
}

#[test]
fn test_take_and_clear_stored_messages() {
    let logging = Logging::builder().console(false).build().unwrap();

    logging.logged_statement(Statement::new("one").storage_marker("a"));
    logging.logged_statement(Statement::new("two").storage_marker("b"));
    assert_eq!(logging.stored_markers(), vec!["a".to_string(), "b".to_string()]);

    assert_eq!(logging.take_stored_messages("a"), Some(vec!["one".to_string()]));
    assert!(logging.stored_messages("a").is_none());

    logging.clear_stored_messages();
    assert!(logging.stored_markers().is_empty());
}

#[test]
fn test_exit_run_reports_results_and_stored_messages() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logging = file_logging(&temp_dir);

    logging.logged_statement(Statement::new("synced 12 accounts").storage_marker("summary"));

    let results = logging
        .exit_run(
            ExitRun::new()
                .results(
                    DataValue::map()
                        .entry("accountsSynced", 12)
                        .entry("lastAccount", DataValue::map().entry("accountId", "a-12")),
                )
                .key_transform(KeyTransform::SnakeCase),
        )
        .expect("clean run");

    assert_eq!(
        results,
        DataValue::map()
            .entry("accounts_synced", 12)
            .entry("last_account", DataValue::map().entry("account_id", "a-12"))
    );

    let content = fs::read_to_string(temp_dir.path().join("test_app.log")).unwrap();
    assert!(content.contains("Run results"));
    assert!(content.contains("\"accounts_synced\": 12"));
    assert!(content.contains("stored_messages:"));
    assert!(content.contains("synced 12 accounts"));
    assert!(content.contains("Run completed"));
}

#[test]
fn test_exit_run_fails_on_stored_errors() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logging = file_logging(&temp_dir);

    logging.logged_statement(
        Statement::new("account a-3 rejected")
            .level(LogLevel::Error)
            .storage_marker(ERRORS_MARKER),
    );

    let result = logging.exit_run(
        ExitRun::new()
            .results(DataValue::map().entry("processed", 3))
            .error("timeout talking to billing"),
    );

    match result {
        Err(ExitRunError::UnhandledErrors { errors, results }) => {
            assert_eq!(
                errors,
                vec![
                    "account a-3 rejected".to_string(),
                    "timeout talking to billing".to_string()
                ]
            );
            assert_eq!(results, DataValue::map().entry("processed", 3));
        }
        other => panic!("expected unhandled errors, got {:?}", other),
    }

    let content = fs::read_to_string(temp_dir.path().join("test_app.log")).unwrap();
    assert!(content.contains("[CRITICAL] Run finished with 2 unhandled error(s)"));
    assert!(!content.contains("stored_messages:"));
    assert!(!content.contains("Run completed"));
}

#[test]
fn test_exit_run_custom_errors_marker() {
    let memory = MemoryAppender::new();
    let logging = Logging::builder()
        .console(false)
        .appender(memory.clone())
        .build()
        .unwrap();

    logging.logged_statement(Statement::new("not an error").storage_marker(ERRORS_MARKER));
    logging.logged_statement(Statement::new("disk quota hit").storage_marker("failures"));

    let err = logging
        .exit_run(ExitRun::new().errors_marker("failures"))
        .unwrap_err();
    assert_eq!(err.to_string(), "run finished with 1 unhandled error(s)");

    let messages = memory.messages();
    assert!(messages.iter().any(|m| m.contains("not an error")));
    assert_eq!(
        messages.last().map(|m| m.starts_with("Run finished with 1")),
        Some(true)
    );
}
