//! Backend adapters
//!
//! Each adapter implements [`Logger`](crate::Logger) over one logging
//! mechanism and ships a [`LoggerProvider`](crate::LoggerProvider) for the
//! registry.

pub mod console;
pub mod sink;
pub mod standard;

#[cfg(feature = "log-backend")]
pub mod log_backend;
#[cfg(feature = "tracing-backend")]
pub mod tracing_backend;

pub use console::{ConsoleLogger, ConsoleLoggerProvider};
pub use sink::{MemoryBuffer, Sink};
pub use standard::{StdLogger, StdLoggerProvider};

#[cfg(feature = "log-backend")]
pub use log_backend::{LogCrateLogger, LogCrateLoggerProvider};
#[cfg(feature = "tracing-backend")]
pub use tracing_backend::{TracingLogger, TracingLoggerProvider};
