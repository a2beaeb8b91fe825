//! `tracing` backend
//!
//! Emits each record as a `tracing` event with target `logface`. A handle owns
//! a `tracing_subscriber` fmt subscriber writing to its sink, so `format` and
//! `outputPath` apply as they do for the console backend. With the backend
//! setting `global_subscriber: true`, or through [`TracingLogger::forwarding`],
//! events go to whatever subscriber is current at the call site instead.
//!
//! `tracing` has no fatal or panic level; those records are emitted as `ERROR`
//! events and keep their own severity in the `severity` field.

use super::console::EXTRA_COLORS;
use super::sink::Sink;
use crate::core::{
    format_fields, ConfigMap, Field, HandleState, LogContext, LogEntry, LogLevel, Logger,
    LoggerConfig, LoggerOptions, LoggerProvider, OutputFormat, Result,
};
use tracing::Dispatch;

/// Backend setting: forward to the current subscriber instead of owning one
pub const EXTRA_GLOBAL_SUBSCRIBER: &str = "global_subscriber";

macro_rules! forward_event {
    ($level:expr, $entry:ident, $fields:ident) => {
        tracing::event!(
            target: "logface",
            $level,
            logger = %$entry.logger,
            severity = $entry.level.to_str(),
            fields = %$fields,
            "{}",
            $entry.message
        )
    };
}

#[derive(Clone)]
enum Route {
    /// Private subscriber writing to a sink
    Owned { dispatch: Dispatch, sink: Sink },
    /// The subscriber current where the record is emitted
    Ambient,
}

#[derive(Clone)]
pub struct TracingLogger {
    state: HandleState,
    route: Route,
}

impl TracingLogger {
    /// Logger with its own subscriber on stdout
    pub fn new(name: &str) -> Self {
        Self::with_options(name, LoggerOptions::default())
    }

    pub fn with_options(name: &str, options: LoggerOptions) -> Self {
        if options.extra_bool(EXTRA_GLOBAL_SUBSCRIBER).unwrap_or(false) {
            return Self::forwarding(name, options);
        }
        let sink = Sink::open(&options.output);
        Self::with_sink(name, options, sink)
    }

    /// Logger with its own subscriber over an explicit sink; `options.output` is ignored
    pub fn with_sink(name: &str, options: LoggerOptions, sink: Sink) -> Self {
        let dispatch = build_dispatch(&options, &sink);
        Self {
            state: HandleState::new(name, &options),
            route: Route::Owned { dispatch, sink },
        }
    }

    /// Logger emitting to the subscriber current at each call site
    pub fn forwarding(name: &str, options: LoggerOptions) -> Self {
        Self {
            state: HandleState::new(name, &options),
            route: Route::Ambient,
        }
    }

    /// Whether this handle owns its subscriber
    pub fn owns_subscriber(&self) -> bool {
        matches!(self.route, Route::Owned { .. })
    }

    fn derive(&self, state: HandleState) -> Self {
        Self {
            state,
            route: self.route.clone(),
        }
    }
}

fn build_dispatch(options: &LoggerOptions, sink: &Sink) -> Dispatch {
    let writer = sink.clone();
    let ansi = options.extra_bool(EXTRA_COLORS).unwrap_or(false) && sink.is_stdout();
    let builder = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(ansi)
        .with_max_level(tracing::Level::TRACE);

    match options.format {
        OutputFormat::Json => Dispatch::new(builder.json().finish()),
        OutputFormat::Text => Dispatch::new(builder.finish()),
    }
}

fn emit_event(entry: &LogEntry, fields: &str) {
    match entry.level {
        LogLevel::Debug => forward_event!(tracing::Level::DEBUG, entry, fields),
        LogLevel::Info => forward_event!(tracing::Level::INFO, entry, fields),
        LogLevel::Warn => forward_event!(tracing::Level::WARN, entry, fields),
        LogLevel::Error | LogLevel::Fatal | LogLevel::Panic => {
            forward_event!(tracing::Level::ERROR, entry, fields)
        }
    }
}

impl Logger for TracingLogger {
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
        let rendered = LogEntry::sanitize_message(&format_fields(entry.all_fields()));

        match &self.route {
            Route::Owned { dispatch, .. } => {
                tracing::dispatcher::with_default(dispatch, || emit_event(&entry, &rendered))
            }
            Route::Ambient => emit_event(&entry, &rendered),
        }
    }

    fn with_fields(&self, fields: Vec<Field>) -> Box<dyn Logger> {
        Box::new(self.derive(self.state.with_fields(fields)))
    }

    fn with_context(&self, context: LogContext) -> Box<dyn Logger> {
        Box::new(self.derive(self.state.with_context(context)))
    }

    fn sync(&self) -> Result<()> {
        match &self.route {
            Route::Owned { sink, .. } => sink.flush(),
            Route::Ambient => Ok(()),
        }
    }

    fn terminate(&self) {
        self.state.terminate();
    }
}

/// Provider for [`TracingLogger`], registered as `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLoggerProvider;

impl TracingLoggerProvider {
    pub fn new() -> Self {
        Self
    }
}

impl LoggerProvider for TracingLoggerProvider {
    fn create(&self, name: &str) -> Box<dyn Logger> {
        Box::new(TracingLogger::new(name))
    }

    fn create_with_config(&self, name: &str, config: &ConfigMap) -> Box<dyn Logger> {
        Box::new(TracingLogger::with_options(
            name,
            LoggerConfig::from_map(config).options,
        ))
    }
}
