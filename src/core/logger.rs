//! The logger contract shared by every backend

use super::{
    error::Result,
    field::{Field, FieldValue},
    log_context::LogContext,
    log_entry::LogEntry,
    log_level::LogLevel,
    options::{ExitHook, LoggerOptions},
};
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Exit code used when a fatal record terminates the process
pub const FATAL_EXIT_CODE: i32 = 1;

/// Uniform interface over interchangeable logging backends.
///
/// Backends implement the required methods; gating, the level helpers,
/// formatted variants and the conventional enrichments are provided on top.
/// Enrichment never mutates the receiver: every `with_*` call returns a new
/// handle that shares the receiver's sink but owns its field list.
///
/// # Example
///
/// ```
/// use logface::prelude::*;
///
/// let logger = ConsoleLogger::new("billing");
/// let scoped = logger.with_field("invoice", FieldValue::from(42));
///
/// scoped.info("invoice created", &[Field::new("amount", 19.99)]);
/// assert!(!scoped.is_debug_enabled());
/// ```
pub trait Logger: Send + Sync {
    /// Name the handle was created with
    fn name(&self) -> &str;

    /// Current gating threshold
    fn level(&self) -> LogLevel;

    /// Change the gating threshold of this handle in place
    fn set_level(&self, level: LogLevel);

    /// Emit a record without gating
    ///
    /// `fields` are the call-site fields; the handle's bound fields come first.
    fn write_entry(&self, level: LogLevel, message: &str, fields: &[Field]);

    /// New handle with `fields` appended to the bound fields
    fn with_fields(&self, fields: Vec<Field>) -> Box<dyn Logger>;

    /// New handle bound to `context`
    fn with_context(&self, context: LogContext) -> Box<dyn Logger>;

    /// Flush buffered output
    fn sync(&self) -> Result<()>;

    /// Called after a fatal record has been emitted and flushed
    fn terminate(&self) {
        std::process::exit(FATAL_EXIT_CODE);
    }

    #[inline]
    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Gated emission
    ///
    /// `Fatal` flushes and then calls [`terminate`](Self::terminate); `Panic`
    /// flushes and then unwinds with the message as a `String` payload, so it
    /// escapes to the nearest `catch_unwind` or ends the thread.
    fn log(&self, level: LogLevel, message: &str, fields: &[Field]) {
        if !self.is_enabled(level) {
            return;
        }

        self.write_entry(level, message, fields);

        match level {
            LogLevel::Fatal => {
                if let Err(e) = self.sync() {
                    eprintln!("[LOGGER ERROR] Flush before exit failed: {}", e);
                }
                self.terminate();
            }
            LogLevel::Panic => {
                if let Err(e) = self.sync() {
                    eprintln!("[LOGGER ERROR] Flush before panic failed: {}", e);
                }
                std::panic::panic_any(message.to_string());
            }
            _ => {}
        }
    }

    /// Gated emission of a formatted message, without fields
    fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if self.is_enabled(level) {
            self.log(level, &fmt::format(args), &[]);
        }
    }

    #[inline]
    fn debug(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Debug, message, fields);
    }

    #[inline]
    fn info(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Info, message, fields);
    }

    #[inline]
    fn warn(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Warn, message, fields);
    }

    #[inline]
    fn error(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Error, message, fields);
    }

    #[inline]
    fn fatal(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Fatal, message, fields);
    }

    #[inline]
    fn panic(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Panic, message, fields);
    }

    #[inline]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Debug, args);
    }

    #[inline]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Info, args);
    }

    #[inline]
    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Warn, args);
    }

    #[inline]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Error, args);
    }

    #[inline]
    fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Fatal, args);
    }

    #[inline]
    fn panicf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Panic, args);
    }

    fn with_field(&self, key: &str, value: FieldValue) -> Box<dyn Logger> {
        self.with_fields(vec![Field::new(key, value)])
    }

    /// Bind `err` under the `"error"` key
    fn with_error(&self, err: &dyn std::error::Error) -> Box<dyn Logger> {
        self.with_fields(vec![Field::error(err)])
    }

    /// Bind `time` under the `"time"` key
    fn with_time(&self, time: DateTime<Utc>) -> Box<dyn Logger> {
        self.with_fields(vec![Field::time(time)])
    }

    fn is_debug_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Debug)
    }

    fn is_info_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Info)
    }

    fn is_warn_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Warn)
    }

    fn is_error_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Error)
    }

    fn is_fatal_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Fatal)
    }

    fn is_panic_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Panic)
    }
}

/// Enrichment with any value convertible to a [`FieldValue`], for concrete
/// loggers and `dyn Logger` alike.
///
/// ```
/// use logface::prelude::*;
///
/// let logger = StdLogger::new("svc").with_value("attempt", 3).with_value("user", "bob");
/// logger.info("retrying", &[]);
/// ```
pub trait LoggerExt: Logger {
    fn with_value(&self, key: &str, value: impl Into<FieldValue>) -> Box<dyn Logger> {
        self.with_fields(vec![Field::new(key, value)])
    }
}

impl<L: Logger + ?Sized> LoggerExt for L {}

/// Gating threshold owned by a single handle.
///
/// Reads and writes are relaxed atomics: a concurrent `set` may or may not be
/// observed by an in-flight emission, but a torn value is impossible. Cloning
/// produces an independent threshold with the current value.
#[derive(Debug)]
pub struct AtomicLevel(AtomicU8);

impl AtomicLevel {
    pub fn new(level: LogLevel) -> Self {
        Self(AtomicU8::new(level as u8))
    }

    #[inline]
    pub fn get(&self) -> LogLevel {
        LogLevel::from_i64(i64::from(self.0.load(Ordering::Relaxed))).unwrap_or_default()
    }

    #[inline]
    pub fn set(&self, level: LogLevel) {
        self.0.store(level as u8, Ordering::Relaxed);
    }
}

impl Clone for AtomicLevel {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl Default for AtomicLevel {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

/// Per-handle state shared by the bundled backends.
///
/// Holds everything a handle owns by value (threshold, bound fields, bound
/// context) plus the shared name and exit strategy. Backends keep their sink
/// next to it and clone both when enriching.
#[derive(Clone)]
pub struct HandleState {
    name: Arc<str>,
    level: AtomicLevel,
    fields: Vec<Field>,
    context: Option<LogContext>,
    exit_hook: Option<ExitHook>,
}

impl HandleState {
    pub fn new(name: &str, options: &LoggerOptions) -> Self {
        Self {
            name: Arc::from(name),
            level: AtomicLevel::new(options.level),
            fields: Vec::new(),
            context: None,
            exit_hook: options.exit_hook.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        self.level.get()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.set(level);
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn context(&self) -> Option<&LogContext> {
        self.context.as_ref()
    }

    /// Copy of this state with `fields` appended
    #[must_use]
    pub fn with_fields(&self, fields: Vec<Field>) -> Self {
        let mut next = self.clone();
        next.fields.extend(fields);
        next
    }

    /// Copy of this state bound to `context`
    #[must_use]
    pub fn with_context(&self, context: LogContext) -> Self {
        let mut next = self.clone();
        next.context = Some(context);
        next
    }

    /// Build the record for an emission through this handle
    pub fn entry(&self, level: LogLevel, message: &str, fields: &[Field]) -> LogEntry {
        LogEntry::new(level, &*self.name, message)
            .with_fields(&self.fields, fields)
            .with_context(self.context.as_ref())
    }

    /// Run the configured exit strategy, or exit the process
    pub fn terminate(&self) {
        match &self.exit_hook {
            Some(hook) => hook(FATAL_EXIT_CODE),
            None => std::process::exit(FATAL_EXIT_CODE),
        }
    }
}
