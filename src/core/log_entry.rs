//! Log entry structure

use super::field::Field;
use super::log_context::LogContext;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

// Thread-local cache for the thread id to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Get cached thread ID, computing and caching it on first access
fn get_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

/// A single record ready to be rendered by a backend.
///
/// `fields` holds the handle's bound fields followed by the call-site fields,
/// in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub logger: String,
    pub timestamp: DateTime<Utc>,
    pub thread_id: String,
    pub fields: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<LogContext>,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    pub fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, logger: impl Into<String>, message: &str) -> Self {
        Self {
            level,
            message: Self::sanitize_message(message),
            logger: logger.into(),
            timestamp: Utc::now(),
            thread_id: get_thread_id(),
            fields: Vec::new(),
            context: None,
        }
    }

    /// Append bound fields and call-site fields, preserving their order
    #[must_use]
    pub fn with_fields(mut self, bound: &[Field], call_site: &[Field]) -> Self {
        self.fields.reserve(bound.len() + call_site.len());
        self.fields.extend_from_slice(bound);
        self.fields.extend_from_slice(call_site);
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: Option<&LogContext>) -> Self {
        self.context = context.filter(|ctx| !ctx.is_empty()).cloned();
        self
    }

    /// Iterate over record fields followed by context values
    pub fn all_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .chain(self.context.iter().flat_map(|ctx| ctx.entries().iter()))
    }
}
