//! Minimal standard backend
//!
//! Plain text lines in the classic `date time message` layout. The `format`
//! option is ignored.

use super::sink::Sink;
use crate::core::timestamp::STD_TIMESTAMP;
use crate::core::{
    ConfigMap, Field, HandleState, LogContext, LogLevel, Logger, LoggerConfig, LoggerOptions,
    LoggerProvider, OutputFormat, Result, TimestampFormat,
};

#[derive(Clone)]
pub struct StdLogger {
    state: HandleState,
    sink: Sink,
    timestamp_format: TimestampFormat,
}

impl StdLogger {
    pub fn new(name: &str) -> Self {
        Self::with_options(name, LoggerOptions::default())
    }

    pub fn with_options(name: &str, options: LoggerOptions) -> Self {
        let sink = Sink::open(&options.output);
        Self::with_sink(name, options, sink)
    }

    pub fn with_sink(name: &str, options: LoggerOptions, sink: Sink) -> Self {
        Self {
            state: HandleState::new(name, &options),
            sink,
            timestamp_format: TimestampFormat::Custom(STD_TIMESTAMP.to_string()),
        }
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    fn derive(&self, state: HandleState) -> Self {
        Self {
            state,
            sink: self.sink.clone(),
            timestamp_format: self.timestamp_format.clone(),
        }
    }
}

impl Logger for StdLogger {
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
        let line = OutputFormat::format_text(&entry, &self.timestamp_format, level.to_str());
        if let Err(e) = self.sink.write_line(&line) {
            eprintln!(
                "[LOGGER ERROR] Std logger '{}' failed to write to {}: {}",
                self.state.name(),
                self.sink.target(),
                e
            );
        }
    }

    fn with_fields(&self, fields: Vec<Field>) -> Box<dyn Logger> {
        Box::new(self.derive(self.state.with_fields(fields)))
    }

    fn with_context(&self, context: LogContext) -> Box<dyn Logger> {
        Box::new(self.derive(self.state.with_context(context)))
    }

    fn sync(&self) -> Result<()> {
        self.sink.flush()
    }

    fn terminate(&self) {
        self.state.terminate();
    }
}

/// Provider for [`StdLogger`], registered as `std`
#[derive(Debug, Clone, Copy, Default)]
pub struct StdLoggerProvider;

impl StdLoggerProvider {
    pub fn new() -> Self {
        Self
    }
}

impl LoggerProvider for StdLoggerProvider {
    fn create(&self, name: &str) -> Box<dyn Logger> {
        Box::new(StdLogger::new(name))
    }

    fn create_with_config(&self, name: &str, config: &ConfigMap) -> Box<dyn Logger> {
        Box::new(StdLogger::with_options(name, LoggerConfig::from_map(config).options))
    }
}
