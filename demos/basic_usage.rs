//! Basic lifecycle logging example
//!
//! Demonstrates context and storage markers, verbosity gating, structured
//! payloads and the clean exit report.
//!
//! Run with: cargo run --example basic_usage

use lifecycle_logging::prelude::*;

fn main() -> Result<()> {
    println!("=== Lifecycle Logging - Basic Usage Example ===\n");

    let logging = Logging::builder()
        .logger_name("basic_usage")
        .verbose_output(true)
        .verbosity_threshold(2)
        .bypass_marker("startup")
        .build()?;

    println!("1. Plain and annotated statements:");
    logging.info("Service starting");
    logging.logged_statement(
        Statement::new("Loaded accounts")
            .level(LogLevel::Info)
            .context_marker("sync")
            .identifiers(["acct-1", "acct-2"]),
    );

    println!("\n2. Verbosity gating:");
    for verbosity in 1..=3 {
        let shown = logging.logged_statement(
            Statement::new(format!("Detail at verbosity {}", verbosity))
                .verbose(true)
                .verbosity(verbosity),
        );
        if shown.is_none() {
            println!("   verbosity {} suppressed", verbosity);
        }
    }
    logging.logged_statement(
        Statement::new("Startup detail (bypass marker)")
            .context_marker("startup")
            .verbose(true)
            .verbosity(9),
    );

    println!("\n3. Structured payloads:");
    logging.logged_statement(
        Statement::new("Account snapshot")
            .level(LogLevel::Info)
            .labeled_json(
                "account",
                DataValue::map()
                    .entry("id", 1_u64 << 60)
                    .entry("active", true),
            )
            .json(vec![
                DataValue::map().entry("region", "eu"),
                DataValue::map().entry("region", "us"),
            ]),
    );

    println!("\n4. Stored messages:");
    logging.logged_statement(Statement::new("Synced 2 accounts").storage_marker("summary"));
    println!("   summary: {:?}", logging.stored_messages("summary"));

    println!("\n5. Clean exit:");
    match logging.exit_run(
        ExitRun::new()
            .results(DataValue::map().entry("accountsSynced", 2))
            .key_transform(KeyTransform::SnakeCase),
    ) {
        Ok(results) => println!("   results: {}", results),
        Err(err) => println!("   run failed: {}", err),
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
