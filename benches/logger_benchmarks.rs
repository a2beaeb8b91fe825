//! Criterion benchmarks for logface

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use logface::prelude::*;
use logface::{Sink, StdLoggerProvider};
use std::io;
use std::sync::Arc;
use std::thread;

fn discard_logger(name: &str, format: OutputFormat) -> ConsoleLogger {
    let options = LoggerOptions {
        format,
        ..LoggerOptions::default()
    };
    ConsoleLogger::with_sink(name, options, Sink::from_writer(io::sink()))
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    let factory = LogFactory::with_builtin_providers();
    factory.register_provider("plain", StdLoggerProvider);

    group.bench_function("factory_default", |b| {
        b.iter(|| black_box(factory.create_logger(black_box("bench"))));
    });

    group.bench_function("factory_named_provider", |b| {
        b.iter(|| black_box(factory.create_logger_with_provider("bench", black_box("plain"))));
    });

    group.bench_function("factory_unknown_provider", |b| {
        b.iter(|| black_box(factory.create_logger_with_provider("bench", black_box("missing"))));
    });

    let mut config = ConfigMap::new();
    config.insert("provider".to_string(), serde_json::json!("std"));
    config.insert("level".to_string(), serde_json::json!("warn"));
    group.bench_function("factory_with_config", |b| {
        b.iter(|| black_box(factory.create_logger_with_config("bench", black_box(&config))));
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let text = discard_logger("bench", OutputFormat::Text);
    let json = discard_logger("bench", OutputFormat::Json);

    group.bench_function("text_no_fields", |b| {
        b.iter(|| text.info(black_box("Info message"), &[]));
    });

    group.bench_function("text_with_fields", |b| {
        b.iter(|| {
            text.info(
                black_box("Info message"),
                &[Field::new("user_id", 12345), Field::new("action", "login")],
            )
        });
    });

    group.bench_function("json_with_fields", |b| {
        b.iter(|| {
            json.info(
                black_box("Info message"),
                &[Field::new("user_id", 12345), Field::new("action", "login")],
            )
        });
    });

    group.bench_function("formatted", |b| {
        b.iter(|| text.infof(format_args!("processed {} items", black_box(42))));
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");

    let logger = discard_logger("bench", OutputFormat::Text);
    logger.set_level(LogLevel::Error);

    group.bench_function("gated_debug", |b| {
        b.iter(|| logger.debug(black_box("Filtered message"), &[Field::new("k", 1)]));
    });

    group.bench_function("gated_formatted", |b| {
        b.iter(|| logger.debugf(format_args!("Filtered {}", black_box(1))));
    });

    group.bench_function("is_enabled_guard", |b| {
        b.iter(|| {
            if logger.is_debug_enabled() {
                logger.debug("never", &[]);
            }
        });
    });

    group.bench_function("emitted_error", |b| {
        b.iter(|| logger.error(black_box("Error message"), &[]));
    });

    group.finish();
}

// ============================================================================
// Enrichment Benchmarks
// ============================================================================

fn bench_enrichment(c: &mut Criterion) {
    let mut group = c.benchmark_group("enrichment");

    let logger = discard_logger("bench", OutputFormat::Text);
    let enriched = logger
        .with_value("service", "api")
        .with_value("region", "eu-west-1");

    group.bench_function("with_field", |b| {
        b.iter(|| black_box(logger.with_field("request_id", FieldValue::from(black_box("r-1")))));
    });

    group.bench_function("with_context", |b| {
        b.iter(|| {
            let ctx = LogContext::new().with_value("trace_id", "abc").with_value("span_id", 7);
            black_box(logger.with_context(ctx))
        });
    });

    group.bench_function("emit_through_enriched", |b| {
        b.iter(|| enriched.info(black_box("request served"), &[Field::new("status", 200)]));
    });

    group.finish();
}

// ============================================================================
// Concurrency Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * 100) as u64));
        group.bench_function(format!("threads_{}", threads), |b| {
            let logger: Arc<dyn Logger> = Arc::new(discard_logger("bench", OutputFormat::Text));
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        thread::spawn(move || {
                            for i in 0..100 {
                                logger.info("Concurrent message", &[Field::new("i", i)]);
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    let _ = handle.join();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_emission,
    bench_level_filtering,
    bench_enrichment,
    bench_concurrent_logging,
);

criterion_main!(benches);
