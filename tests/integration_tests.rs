//! Integration tests for the logging facade
//!
//! These tests verify:
//! - Log injection prevention
//! - File output configured through a config map
//! - Structured fields, context and enrichment
//! - Registry fallback chain
//! - Sink-open fallback to stdout

use logface::prelude::*;
use logface::{
    with_exit_hook, with_level, with_output_path, ConsoleLoggerProvider, MemoryBuffer, Sink,
    StdLoggerProvider,
};
use serde_json::json;
use std::fs;
use std::io;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

fn config(value: serde_json::Value) -> ConfigMap {
    serde_json::from_value(value).expect("config object")
}

fn memory_logger(name: &str, options: LoggerOptions) -> (ConsoleLogger, MemoryBuffer) {
    let buffer = MemoryBuffer::new();
    let logger = ConsoleLogger::with_sink(name, options, Sink::from_writer(buffer.clone()));
    (logger, buffer)
}

#[test]
fn test_log_injection_prevention() {
    let (logger, buffer) = memory_logger("auth", LoggerOptions::default());

    let malicious_message = "User login\nERROR [2024-10-17] Fake error injected\nINFO Continuation";
    logger.info(malicious_message, &[]);

    let content = buffer.contents();
    assert!(content.contains("\\n"));
    assert!(!content.contains("\nERROR [2024-10-17] Fake error injected\n"));
    assert_eq!(buffer.lines().len(), 1, "Log should be a single line, not multiple");
}

#[test]
fn test_field_value_injection_prevention() {
    let (logger, buffer) = memory_logger("auth", LoggerOptions::default());

    logger
        .with_value("user", "eve\nINFO [auth] admin login")
        .info("login attempt", &[Field::new("agent", "curl\r\nWARN spoofed")]);

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1, "Field values must not start a new record");
    assert!(lines[0].contains("user=eve\\nINFO [auth] admin login"));
    assert!(lines[0].contains("agent=curl\\r\\nWARN spoofed"));
}

#[test]
fn test_malformed_timestamp_format_does_not_panic() {
    let factory = LogFactory::with_builtin_providers();
    let logger = factory.create_logger_with_config(
        "clock",
        &config(json!({ "provider": "console", "timestamp_format": "%Q" })),
    );

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        logger.info("tick", &[]);
    }));

    assert!(result.is_ok(), "Emission must not panic on a bad timestamp pattern");
}

#[cfg(feature = "tracing-backend")]
#[test]
fn test_tracing_backend_writes_to_output_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("tracing.json");
    let factory = LogFactory::with_builtin_providers();

    let logger = factory.create_logger_with_config(
        "events",
        &config(json!({
            "provider": "tracing",
            "format": "json",
            "outputPath": log_file.to_str().unwrap(),
        })),
    );
    logger.info("hello", &[Field::new("attempt", 2)]);
    logger.sync().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let record: serde_json::Value = serde_json::from_str(content.trim()).expect("valid JSON line");
    assert_eq!(record["level"], "INFO");
    assert_eq!(record["target"], "logface");
    assert_eq!(record["fields"]["message"], "hello");
    assert_eq!(record["fields"]["logger"], "events");
    assert_eq!(record["fields"]["fields"], "attempt=2");
}

#[test]
fn test_file_output_from_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("service.log");

    let logger = ConsoleLoggerProvider.create_with_config(
        "service",
        &config(json!({
            "level": "debug",
            "outputPath": log_file.to_str().unwrap(),
        })),
    );
    logger.debug("starting", &[Field::new("pid", 42)]);
    logger.info("ready", &[]);
    logger.sync().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[DEBUG] [service] starting pid=42"));
    assert!(lines[1].contains("[INFO] [service] ready"));
}

#[test]
fn test_json_file_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("service.json");

    let logger = ConsoleLoggerProvider.create_with_config(
        "api",
        &config(json!({
            "format": "json",
            "outputPath": log_file.to_str().unwrap(),
        })),
    );
    logger
        .with_context(LogContext::new().with_value("tenant", "acme"))
        .warn("quota near limit", &[Field::new("used", 0.93)]);
    logger.sync().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let record: serde_json::Value = serde_json::from_str(content.trim()).expect("valid JSON line");
    assert_eq!(record["level"], "WARN");
    assert_eq!(record["logger"], "api");
    assert_eq!(record["msg"], "quota near limit");
    assert_eq!(record["used"], 0.93);
    assert_eq!(record["tenant"], "acme");
}

#[test]
fn test_file_appends_across_loggers() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("shared.log");
    let path = log_file.to_str().unwrap().to_string();

    for name in ["first", "second"] {
        let logger = StdLogger::with_options(
            name,
            LoggerOptions::from_options(vec![with_output_path(path.clone())]),
        );
        logger.info("hello", &[]);
        logger.sync().expect("Failed to flush");
    }

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("[first] hello"));
    assert!(content.contains("[second] hello"));
}

#[test]
fn test_unopenable_output_falls_back_to_stdout() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("no-such-dir").join("app.log");

    let logger = ConsoleLogger::with_options(
        "fallback",
        LoggerOptions::from_options(vec![with_output_path(missing.to_str().unwrap())]),
    );

    assert!(logger.sink().is_stdout());
    logger.info("still emitted", &[]);
    assert!(logger.sync().is_ok());
    assert!(!missing.exists());
}

#[test]
fn test_error_and_time_enrichment() {
    let (logger, buffer) = memory_logger("db", LoggerOptions::default());
    let err = io::Error::new(io::ErrorKind::TimedOut, "connection timed out");
    let at = chrono::DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
        .unwrap()
        .with_timezone(&chrono::Utc);

    logger.with_error(&err).with_time(at).error("query failed", &[]);

    let line = &buffer.lines()[0];
    assert!(line.contains("error=connection timed out"), "{}", line);
    assert!(line.contains("time=2024-05-01"), "{}", line);
}

#[test]
fn test_chained_enrichment_keeps_order_and_parents() {
    let (root, buffer) = memory_logger("chain", LoggerOptions::default());
    let a = root.with_field("a", FieldValue::from(1));
    let ab = a.with_fields(vec![Field::new("b", 2)]);
    let abc = ab.with_field("c", FieldValue::from(3));

    abc.info("deep", &[Field::new("d", 4)]);
    a.info("shallow", &[]);
    root.info("root", &[]);

    let lines = buffer.lines();
    assert!(lines[0].ends_with("deep a=1 b=2 c=3 d=4"), "{}", lines[0]);
    assert!(lines[1].ends_with("shallow a=1"), "{}", lines[1]);
    assert!(lines[2].ends_with("root"), "{}", lines[2]);
}

#[test]
fn test_with_context_replaces_previous_context() {
    let (logger, buffer) = memory_logger("ctx", LoggerOptions::default());
    let first = logger.with_context(LogContext::new().with_value("trace", "t-1"));
    let second = first.with_context(LogContext::new().with_value("span", "s-2"));

    first.info("one", &[]);
    second.info("two", &[]);

    let lines = buffer.lines();
    assert!(lines[0].ends_with("one trace=t-1"), "{}", lines[0]);
    assert!(lines[1].ends_with("two span=s-2"), "{}", lines[1]);
}

#[test]
fn test_level_queries_follow_threshold() {
    let logger = StdLogger::with_sink(
        "levels",
        LoggerOptions::from_options(vec![with_level(LogLevel::Error)]),
        Sink::from_writer(MemoryBuffer::new()),
    );

    assert!(!logger.is_debug_enabled());
    assert!(!logger.is_info_enabled());
    assert!(!logger.is_warn_enabled());
    assert!(logger.is_error_enabled());
    assert!(logger.is_fatal_enabled());
    assert!(logger.is_panic_enabled());

    logger.set_level(LogLevel::Debug);
    assert!(logger.is_debug_enabled());
}

#[test]
fn test_gated_fatal_does_not_terminate() {
    let code = Arc::new(AtomicI32::new(-1));
    let code_clone = Arc::clone(&code);
    let (logger, buffer) = memory_logger(
        "gated",
        LoggerOptions::from_options(vec![with_exit_hook(Arc::new(move |c| {
            code_clone.store(c, Ordering::SeqCst)
        }))]),
    );

    logger.set_level(LogLevel::Panic);
    logger.fatal("filtered", &[]);

    assert!(buffer.contents().is_empty());
    assert_eq!(code.load(Ordering::SeqCst), -1);
}

#[test]
fn test_registry_fallback_chain() {
    let factory = LogFactory::new();

    // empty registry: hard-coded console fallback
    let logger = factory.create_logger_with_provider("svc", "missing");
    assert_eq!(logger.name(), "svc");
    assert_eq!(logger.level(), LogLevel::Info);

    // unknown provider: default provider
    factory.register_provider("plain", StdLoggerProvider);
    factory.set_default_provider("plain");
    let logger = factory.create_logger_with_config("svc", &config(json!({ "provider": "missing" })));
    assert_eq!(logger.name(), "svc");
}

#[test]
fn test_factory_builds_configured_level() {
    let factory = LogFactory::with_builtin_providers();
    let logger = factory.create_logger_with_config(
        "svc",
        &config(json!({ "provider": "std", "level": 3 })),
    );

    assert_eq!(logger.level(), LogLevel::Error);
    assert!(!logger.is_warn_enabled());
}

#[test]
fn test_logger_config_from_json_text() {
    let parsed = LoggerConfig::from_json_str(r#"{"provider": "std", "level": "warn", "format": "json"}"#);

    assert_eq!(parsed.provider.as_deref(), Some("std"));
    assert_eq!(parsed.options.level, LogLevel::Warn);
    assert_eq!(parsed.options.format, OutputFormat::Json);
}
