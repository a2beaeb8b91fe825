//! Core logger types and traits

pub mod error;
pub mod field;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod options;
pub mod output_format;
pub mod provider;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use field::{format_fields, Field, FieldValue, ERROR_KEY, TIME_KEY};
pub use log_context::LogContext;
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{AtomicLevel, HandleState, Logger, LoggerExt, FATAL_EXIT_CODE};
pub use options::{
    with_config, with_exit_hook, with_format, with_level, with_output_path, ConfigMap, ExitHook,
    LogOption, LoggerConfig, LoggerOptions, OutputTarget,
};
pub use output_format::OutputFormat;
pub use provider::LoggerProvider;
pub use timestamp::TimestampFormat;
