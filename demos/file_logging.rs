//! File logging example
//!
//! Demonstrates building file-backed loggers from configuration maps, in text
//! and JSON layouts.
//!
//! Run with: cargo run --example file_logging

use logface::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== logface - File Logging Example ===\n");

    let mut config = ConfigMap::new();
    config.insert("provider".to_string(), json!("console"));
    config.insert("level".to_string(), json!("debug"));
    config.insert("outputPath".to_string(), json!("application.log"));
    let logger = logface::logger_with_config("app", &config);

    println!("1. Logging to application.log:");
    logger.info("Application started", &[]);
    logger.debug("Loading configuration...", &[]);
    logger.warn("Using default settings for some options", &[]);
    logger.error("Failed to load optional plugin", &[Field::new("plugin", "metrics")]);

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        logger.infof(format_args!("Processing item {}/5", i));
        if i == 3 {
            logger.warn("Item 3 took longer than expected", &[Field::new("item", i)]);
        }
    }
    logger.sync()?;

    println!("\n3. Same records as JSON lines in application.json:");
    let json_config = LoggerConfig::from_json_str(
        r#"{"format": "json", "outputPath": "application.json", "timestamp_format": "rfc3339"}"#,
    );
    let json_logger = ConsoleLogger::with_options("app", json_config.options);
    json_logger
        .with_value("worker", 1)
        .info("All operations completed", &[Field::new("items", 5)]);
    json_logger.sync()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' and 'application.json' for the output");

    Ok(())
}
