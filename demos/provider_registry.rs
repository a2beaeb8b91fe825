//! Provider registry example
//!
//! Demonstrates registering a custom backend, switching the default provider,
//! the fallback chain and replacing the process-wide default logger.
//!
//! Run with: cargo run --example provider_registry

use logface::prelude::*;
use logface::{MemoryBuffer, Sink, StdLoggerProvider};

/// Backend that keeps records in memory under an `audit:` logger name
struct AuditProvider {
    buffer: MemoryBuffer,
}

impl LoggerProvider for AuditProvider {
    fn create(&self, name: &str) -> Box<dyn Logger> {
        Box::new(ConsoleLogger::with_sink(
            &format!("audit:{}", name),
            LoggerOptions::default(),
            Sink::from_writer(self.buffer.clone()),
        ))
    }

    fn create_with_config(&self, name: &str, config: &ConfigMap) -> Box<dyn Logger> {
        Box::new(ConsoleLogger::with_sink(
            &format!("audit:{}", name),
            LoggerConfig::from_map(config).options,
            Sink::from_writer(self.buffer.clone()),
        ))
    }
}

fn main() {
    println!("=== logface - Provider Registry Example ===\n");

    let factory = global_factory();
    let audit_buffer = MemoryBuffer::new();
    factory.register_provider(
        "audit",
        AuditProvider {
            buffer: audit_buffer.clone(),
        },
    );
    println!("Registered providers: {:?}", factory.provider_names());

    println!("\n1. Explicit provider selection:");
    logface::logger_with_provider("billing", "std").info("written by the std backend", &[]);
    logface::logger_with_provider("billing", "audit").info("captured by the audit backend", &[]);

    println!("\n2. Unknown provider falls back to the default ({}):", factory.default_provider());
    logface::logger_with_provider("billing", "no-such-backend").warn("still delivered", &[]);

    println!("\n3. Switching the default provider:");
    factory.set_default_provider("audit");
    logface::logger_named("inventory").info("default is now audit", &[]);
    logface::reset_global_logger();
    logface::info("global logger rebuilt from the audit backend", &[]);

    println!("\n4. Replacing the global logger directly:");
    factory.register_provider("plain", StdLoggerProvider);
    set_global_logger(logface::logger_with_provider("main", "plain"));
    logface::info("free functions now use the plain backend", &[]);

    println!("\nCaptured audit records:");
    for line in audit_buffer.lines() {
        println!("  {}", line);
    }

    factory.reset();
    println!("\nAfter reset: {:?}", factory.provider_names());
    println!("\n=== Example completed successfully! ===");
}
