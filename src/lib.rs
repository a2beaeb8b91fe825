//! # logface
//!
//! A logging facade: one [`Logger`] contract over interchangeable backends,
//! a [`LogFactory`] that selects and builds backends by name or configuration,
//! and a process-wide default logger reachable through free functions.
//!
//! ## Features
//!
//! - **Uniform contract**: leveled and formatted emission, copy-on-write
//!   enrichment, level queries and flushing, identical for every backend
//! - **Provider registry**: thread-safe, with a total fallback chain so logger
//!   creation never fails
//! - **Bundled backends**: console, minimal `std` writer, `tracing` and `log`
//! - **Global logger**: lazily created, atomically replaceable
//!
//! ```
//! use logface::prelude::*;
//!
//! let logger = logface::logger_with_provider("payments", "std");
//! logger
//!     .with_field("merchant", FieldValue::from("acme"))
//!     .info("charge accepted", &[Field::new("amount", 12.5)]);
//! ```

pub mod adapters;
pub mod core;
pub mod factory;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::adapters::{ConsoleLogger, StdLogger};
    pub use crate::core::{
        ConfigMap, Field, FieldValue, LogContext, LogLevel, Logger, LoggerConfig, LoggerError,
        LoggerExt, LoggerOptions, LoggerProvider, OutputFormat, OutputTarget, Result,
    };
    pub use crate::factory::{global_factory, LogFactory};
    pub use crate::global::{get_logger, set_global_logger};
}

pub use crate::adapters::{
    ConsoleLogger, ConsoleLoggerProvider, MemoryBuffer, Sink, StdLogger, StdLoggerProvider,
};
#[cfg(feature = "log-backend")]
pub use crate::adapters::{LogCrateLogger, LogCrateLoggerProvider};
#[cfg(feature = "tracing-backend")]
pub use crate::adapters::{TracingLogger, TracingLoggerProvider};
pub use crate::core::{
    with_config, with_exit_hook, with_format, with_level, with_output_path, ConfigMap, ExitHook,
    Field, FieldValue, LogContext, LogEntry, LogLevel, LogOption, Logger, LoggerConfig,
    LoggerError, LoggerExt, LoggerOptions, LoggerProvider, OutputFormat, OutputTarget, Result,
    TimestampFormat,
};
pub use crate::factory::{global_factory, LogFactory, DEFAULT_PROVIDER};
pub use crate::global::{
    debug, debugf, error, errorf, fatal, fatalf, get_logger, info, infof, logger_named,
    logger_with_config, logger_with_provider, panic, panicf, reset_global_logger,
    set_global_logger, warn, warnf,
};
