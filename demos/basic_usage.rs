//! Basic logger usage example
//!
//! Demonstrates leveled logging, structured fields and enrichment through the
//! process-wide default logger and a console logger.
//!
//! Run with: cargo run --example basic_usage

use logface::prelude::*;
use logface::{fields, infof, with_level};

fn main() -> Result<()> {
    println!("=== logface - Basic Usage Example ===\n");

    // The default logger is created on first use from the `console` provider
    println!("1. Free functions on the default logger:");
    logface::info("service starting", &[Field::new("version", "0.1.0")]);
    logface::warnf(format_args!("{} config keys ignored", 2));

    // A dedicated logger with a lower threshold
    let logger = ConsoleLogger::with_options("basic", LoggerOptions::from_options(vec![with_level(LogLevel::Debug)]));

    println!("\n2. Logging at different levels:");
    logger.debug("This is a debug message", &[]);
    logger.info("This is an info message", &[]);
    logger.warn("This is a warning message", &[]);
    logger.error("This is an error message", &[]);

    println!("\n3. Raising the threshold:");
    logger.set_level(LogLevel::Warn);
    println!("   Threshold set to WARN - debug and info won't show:");
    logger.debug("Debug message (hidden)", &[]);
    logger.info("Info message (hidden)", &[]);
    logger.warn("Warning message (visible)", &[]);

    println!("\n4. Enrichment:");
    let request = logger
        .with_value("request_id", "req-42")
        .with_context(LogContext::new().with_value("tenant", "acme"));
    request.set_level(LogLevel::Info);
    request.info("request accepted", &fields!["method" => "GET", "path" => "/orders"]);
    infof!(request, "served in {}ms", 12);

    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "order 7 not found");
    request.with_error(&err).error("lookup failed", &[]);

    // The parent is unchanged by enrichment
    logger.warn("parent has no request fields", &[]);

    logger.sync()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
