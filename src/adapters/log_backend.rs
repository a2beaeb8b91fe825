//! `log` crate backend
//!
//! Forwards each record to whatever implementation is installed behind the
//! `log` facade, with the handle's fields as structured key-values. The record
//! target is the logger name. Fatal and panic records use `log::Level::Error`.
//!
//! `format` and `outputPath` are not applied here. `log` routes every record
//! through the single implementation installed with `log::set_logger`, which
//! can be set once per process and cannot be scoped to a handle, so layout and
//! destination belong to that implementation. Use the `tracing` backend for a
//! handle that owns its output.

use crate::core::{
    ConfigMap, Field, FieldValue, HandleState, LogContext, LogLevel, Logger, LoggerConfig,
    LoggerOptions, LoggerProvider, Result,
};
use log::kv::Value;

#[derive(Clone)]
pub struct LogCrateLogger {
    state: HandleState,
}

impl LogCrateLogger {
    pub fn new(name: &str) -> Self {
        Self::with_options(name, LoggerOptions::default())
    }

    pub fn with_options(name: &str, options: LoggerOptions) -> Self {
        Self {
            state: HandleState::new(name, &options),
        }
    }

    fn map_level(level: LogLevel) -> log::Level {
        match level {
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error | LogLevel::Fatal | LogLevel::Panic => log::Level::Error,
        }
    }
}

fn to_kv_value(value: &FieldValue) -> Value<'_> {
    match value {
        FieldValue::String(s) => Value::from(s.as_str()),
        FieldValue::Int(i) => Value::from(*i),
        FieldValue::UInt(u) => Value::from(*u),
        FieldValue::Float(f) => Value::from(*f),
        FieldValue::Bool(b) => Value::from(*b),
        FieldValue::Null => Value::null(),
        FieldValue::Time(_) | FieldValue::Error(_) => Value::from_display(value),
    }
}

impl Logger for LogCrateLogger {
    fn name(&self) -> &str {
        self.state.name()
    }

    fn level(&self) -> LogLevel {
        self.state.level()
    }

    fn set_level(&self, level: LogLevel) {
        self.state.set_level(level);
    }

    fn write_entry(&self, level: LogLevel, message: &str, fields: &[Field]) {
        let entry = self.state.entry(level, message, fields);
        let key_values: Vec<(&str, Value<'_>)> = entry
            .all_fields()
            .map(|field| (field.key.as_str(), to_kv_value(&field.value)))
            .collect();

        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{}", entry.message))
                .level(Self::map_level(level))
                .target(&entry.logger)
                .key_values(&key_values)
                .build(),
        );
    }

    fn with_fields(&self, fields: Vec<Field>) -> Box<dyn Logger> {
        Box::new(Self {
            state: self.state.with_fields(fields),
        })
    }

    fn with_context(&self, context: LogContext) -> Box<dyn Logger> {
        Box::new(Self {
            state: self.state.with_context(context),
        })
    }

    fn sync(&self) -> Result<()> {
        log::logger().flush();
        Ok(())
    }

    fn terminate(&self) {
        self.state.terminate();
    }
}

/// Provider for [`LogCrateLogger`], registered as `log`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateLoggerProvider;

impl LogCrateLoggerProvider {
    pub fn new() -> Self {
        Self
    }
}

impl LoggerProvider for LogCrateLoggerProvider {
    fn create(&self, name: &str) -> Box<dyn Logger> {
        Box::new(LogCrateLogger::new(name))
    }

    fn create_with_config(&self, name: &str, config: &ConfigMap) -> Box<dyn Logger> {
        Box::new(LogCrateLogger::with_options(
            name,
            LoggerConfig::from_map(config).options,
        ))
    }
}
