//! Console backend
//!
//! The reference adapter: writes one line per record to stdout or a file, as
//! text or JSON. It is also the hard-coded fallback of the registry.

use super::sink::Sink;
use crate::core::timestamp::CONSOLE_TIMESTAMP;
use crate::core::{
    ConfigMap, Field, HandleState, LogContext, LogEntry, LogLevel, Logger, LoggerConfig,
    LoggerOptions, LoggerProvider, OutputFormat, Result, TimestampFormat,
};
#[cfg(feature = "colors")]
use colored::Colorize;

/// Backend setting: colorize the level label when writing to stdout
pub const EXTRA_COLORS: &str = "colors";

/// Backend setting: timestamp layout (`iso8601`, `rfc3339`, `unix_millis` or strftime)
pub const EXTRA_TIMESTAMP_FORMAT: &str = "timestamp_format";

#[derive(Clone)]
pub struct ConsoleLogger {
    state: HandleState,
    sink: Sink,
    format: OutputFormat,
    timestamp_format: TimestampFormat,
    use_colors: bool,
}

impl ConsoleLogger {
    /// Logger with default options writing to stdout
    pub fn new(name: &str) -> Self {
        Self::with_options(name, LoggerOptions::default())
    }

    pub fn with_options(name: &str, options: LoggerOptions) -> Self {
        let sink = Sink::open(&options.output);
        Self::with_sink(name, options, sink)
    }

    /// Logger writing to an explicit sink; `options.output` is ignored
    pub fn with_sink(name: &str, options: LoggerOptions, sink: Sink) -> Self {
        let timestamp_format = options
            .extra_str(EXTRA_TIMESTAMP_FORMAT)
            .and_then(TimestampFormat::from_config)
            .unwrap_or_else(|| TimestampFormat::Custom(CONSOLE_TIMESTAMP.to_string()));
        let use_colors = options.extra_bool(EXTRA_COLORS).unwrap_or(false) && sink.is_stdout();

        Self {
            state: HandleState::new(name, &options),
            sink,
            format: options.format,
            timestamp_format,
            use_colors,
        }
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Fields bound to this handle
    pub fn fields(&self) -> &[Field] {
        self.state.fields()
    }

    fn derive(&self, state: HandleState) -> Self {
        Self {
            state,
            sink: self.sink.clone(),
            format: self.format,
            timestamp_format: self.timestamp_format.clone(),
            use_colors: self.use_colors,
        }
    }

    fn format_entry(&self, entry: &LogEntry) -> String {
        match self.format {
            OutputFormat::Json => OutputFormat::format_json(entry, &self.timestamp_format),
            OutputFormat::Text => {
                OutputFormat::format_text(entry, &self.timestamp_format, &self.level_label(entry.level))
            }
        }
    }

    #[cfg(feature = "colors")]
    fn level_label(&self, level: LogLevel) -> String {
        if self.use_colors {
            level.to_str().color(level.color_code()).to_string()
        } else {
            level.to_str().to_string()
        }
    }

    #[cfg(not(feature = "colors"))]
    fn level_label(&self, level: LogLevel) -> String {
        level.to_str().to_string()
    }
}

impl Logger for ConsoleLogger {
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
        if let Err(e) = self.sink.write_line(&self.format_entry(&entry)) {
            eprintln!(
                "[LOGGER ERROR] Console logger '{}' failed to write to {}: {}",
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

/// Provider for [`ConsoleLogger`], registered as `console`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLoggerProvider;

impl ConsoleLoggerProvider {
    pub fn new() -> Self {
        Self
    }
}

impl LoggerProvider for ConsoleLoggerProvider {
    fn create(&self, name: &str) -> Box<dyn Logger> {
        Box::new(ConsoleLogger::new(name))
    }

    fn create_with_config(&self, name: &str, config: &ConfigMap) -> Box<dyn Logger> {
        Box::new(ConsoleLogger::with_options(
            name,
            LoggerConfig::from_map(config).options,
        ))
    }
}
