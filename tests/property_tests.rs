//! Property-based tests for lifecycle_logging using proptest

use lifecycle_logging::core::composer::sanitize;
use lifecycle_logging::prelude::*;
use lifecycle_logging::{DEFAULT_LOG_LEVEL, SAFE_INTEGER_LIMIT};
use proptest::prelude::*;
use serde_json::Value;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
        Just(LogLevel::Critical),
    ]
}

fn quiet_logging() -> Logging {
    Logging::builder()
        .console(false)
        .build()
        .expect("logging without handlers builds")
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    #[test]
    fn test_log_level_parse_case_insensitive(level in any_level()) {
        let lower = level.to_str().to_lowercase();
        prop_assert_eq!(LogLevel::severity_of(&lower), level.severity());
    }

    #[test]
    fn test_unknown_level_names_fall_back(name in "[a-z]{1,12}") {
        prop_assume!(name.parse::<LogLevel>().is_err());
        prop_assert_eq!(LogLevel::severity_of(&name), DEFAULT_LOG_LEVEL.severity());
    }
}

// ============================================================================
// Sanitization Tests
// ============================================================================

proptest! {
    #[test]
    fn test_integers_beyond_limit_become_strings(v in any::<i64>()) {
        let sanitized = sanitize(&DataValue::from(v));
        if v.unsigned_abs() > SAFE_INTEGER_LIMIT {
            prop_assert_eq!(sanitized, Value::String(v.to_string()));
        } else {
            prop_assert_eq!(sanitized, Value::from(v));
        }
    }

    #[test]
    fn test_floats_beyond_limit_become_strings(v in any::<f64>()) {
        let sanitized = sanitize(&DataValue::from(v));
        if v.is_finite() && v.abs() <= SAFE_INTEGER_LIMIT as f64 {
            prop_assert_eq!(sanitized.as_f64(), Some(v));
        } else {
            prop_assert_eq!(sanitized, Value::String(v.to_string()));
        }
    }

    #[test]
    fn test_sequences_keep_order_and_length(items in prop::collection::vec(any::<i64>(), 0..20)) {
        let sanitized = sanitize(&DataValue::from(items.clone()));
        let array = sanitized.as_array().expect("sequence becomes array");
        prop_assert_eq!(array.len(), items.len());
        for (value, original) in array.iter().zip(&items) {
            prop_assert_eq!(value, &sanitize(&DataValue::from(*original)));
        }
    }

    #[test]
    fn test_map_keys_become_text(keys in prop::collection::vec(any::<u16>(), 1..10)) {
        let mut map = DataValue::map();
        for key in &keys {
            map = map.entry(*key, *key);
        }
        let sanitized = sanitize(&map);
        let object = sanitized.as_object().expect("map becomes object");
        for key in &keys {
            prop_assert_eq!(object.get(&key.to_string()), Some(&Value::from(*key)));
        }
    }

    #[test]
    fn test_other_values_use_display_text(text in ".*") {
        prop_assert_eq!(sanitize(&DataValue::other(&text)), Value::String(text));
    }
}

// ============================================================================
// Emission Gate Tests
// ============================================================================

proptest! {
    #[test]
    fn test_gate_emits_iff_within_threshold_or_bypassed(
        verbosity in 0u32..10,
        threshold in 0u32..10,
        bypassed in any::<bool>(),
    ) {
        let logging = quiet_logging();
        logging.set_verbose_output(true);
        logging.set_verbosity_threshold(threshold);
        if bypassed {
            logging.add_bypass_marker("ctx");
        }

        let result = logging.logged_statement(
            Statement::new("hello")
                .context_marker("ctx")
                .verbose(true)
                .verbosity(verbosity),
        );

        prop_assert_eq!(result.is_some(), verbosity <= threshold || bypassed);
        if let Some(text) = result {
            prop_assert!(text.contains("[ctx]"));
        }
    }

    #[test]
    fn test_storage_regardless_of_verdict(
        verbosity in 0u32..10,
        threshold in 0u32..10,
        message in "[a-zA-Z0-9 ]{1,40}",
    ) {
        let logging = quiet_logging();
        logging.set_verbose_output(true);
        logging.set_verbosity_threshold(threshold);

        logging.logged_statement(
            Statement::new(message.clone())
                .storage_marker("m")
                .verbose(true)
                .verbosity(verbosity),
        );

        prop_assert_eq!(logging.stored_messages("m"), Some(vec![message]));
    }

    #[test]
    fn test_non_verbose_statements_always_emit(level in any_level(), verbosity in 0u32..100) {
        let logging = quiet_logging();
        logging.set_verbosity_threshold(0);

        let result = logging.logged_statement(
            Statement::new("plain").level(level).verbosity(verbosity),
        );
        prop_assert_eq!(result.as_deref(), Some("plain"));
    }
}
