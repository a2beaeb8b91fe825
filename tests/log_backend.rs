//! Tests for the `log` crate backend
//!
//! `log::set_logger` can only succeed once per process, so these tests share a
//! single capturing implementation and tell their records apart by target.

#![cfg(feature = "log-backend")]

use logface::prelude::*;
use logface::{with_exit_hook, LogCrateLogger, LogCrateLoggerProvider};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
struct Captured {
    level: log::Level,
    target: String,
    message: String,
    key_values: Vec<(String, String)>,
}

struct CapturingLog {
    records: Mutex<Vec<Captured>>,
}

struct Collector(Vec<(String, String)>);

impl<'kvs> log::kv::VisitSource<'kvs> for Collector {
    fn visit_pair(
        &mut self,
        key: log::kv::Key<'kvs>,
        value: log::kv::Value<'kvs>,
    ) -> std::result::Result<(), log::kv::Error> {
        self.0.push((key.to_string(), value.to_string()));
        Ok(())
    }
}

impl log::Log for CapturingLog {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let mut collector = Collector(Vec::new());
        record
            .key_values()
            .visit(&mut collector)
            .expect("visit key-values");
        self.records.lock().push(Captured {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
            key_values: collector.0,
        });
    }

    fn flush(&self) {}
}

static CAPTURE: Lazy<&'static CapturingLog> = Lazy::new(|| {
    let capture: &'static CapturingLog = Box::leak(Box::new(CapturingLog {
        records: Mutex::new(Vec::new()),
    }));
    log::set_logger(capture).expect("logger installed once");
    log::set_max_level(log::LevelFilter::Trace);
    capture
});

fn records_for(target: &str) -> Vec<Captured> {
    CAPTURE
        .records
        .lock()
        .iter()
        .filter(|r| r.target == target)
        .cloned()
        .collect()
}

#[test]
fn test_forwards_message_level_and_target() {
    Lazy::force(&CAPTURE);
    let logger = LogCrateLogger::new("log-basic");

    logger.info("hello", &[]);
    logger.warn("careful", &[]);
    logger.debug("gated", &[]);

    let records = records_for("log-basic");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].level, log::Level::Info);
    assert_eq!(records[0].message, "hello");
    assert_eq!(records[1].level, log::Level::Warn);
}

#[test]
fn test_fields_become_key_values() {
    Lazy::force(&CAPTURE);
    let logger = LogCrateLogger::new("log-fields");

    logger
        .with_value("request_id", "r-7")
        .with_context(LogContext::new().with_value("tenant", "acme"))
        .error("failed", &[Field::new("status", 503)]);

    let records = records_for("log-fields");
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].key_values,
        vec![
            ("request_id".to_string(), "r-7".to_string()),
            ("status".to_string(), "503".to_string()),
            ("tenant".to_string(), "acme".to_string()),
        ]
    );
}

#[test]
fn test_fatal_maps_to_error_and_terminates() {
    Lazy::force(&CAPTURE);
    let code = Arc::new(AtomicI32::new(-1));
    let code_clone = Arc::clone(&code);
    let logger = LogCrateLogger::with_options(
        "log-fatal",
        LoggerOptions::from_options(vec![with_exit_hook(Arc::new(move |c| {
            code_clone.store(c, Ordering::SeqCst)
        }))]),
    );

    logger.fatal("gone", &[]);

    let records = records_for("log-fatal");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, log::Level::Error);
    assert_eq!(code.load(Ordering::SeqCst), 1);
}

#[test]
fn test_provider_applies_level() {
    Lazy::force(&CAPTURE);
    let mut config = ConfigMap::new();
    config.insert("level".to_string(), serde_json::json!("error"));

    let logger = LogCrateLoggerProvider.create_with_config("log-config", &config);
    logger.warn("dropped", &[]);
    logger.error("kept", &[]);
    assert!(logger.sync().is_ok());

    let records = records_for("log-config");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "kept");
}

#[test]
fn test_output_options_left_to_installed_logger() {
    Lazy::force(&CAPTURE);
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("ignored.log");
    let mut config = ConfigMap::new();
    config.insert("format".to_string(), serde_json::json!("json"));
    config.insert("outputPath".to_string(), serde_json::json!(path.to_str().unwrap()));

    let logger = LogCrateLoggerProvider.create_with_config("log-output", &config);
    logger.info("plain record", &[]);
    assert!(logger.sync().is_ok());

    let records = records_for("log-output");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "plain record");
    assert!(!path.exists());
}

#[test]
fn test_registered_as_log_provider() {
    Lazy::force(&CAPTURE);
    let factory = LogFactory::with_builtin_providers();

    factory.create_logger_with_provider("log-registry", "log").info("via registry", &[]);

    let records = records_for("log-registry");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "via registry");
}
