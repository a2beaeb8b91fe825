//! Request-scoped context bound to a logger handle
//!
//! A [`LogContext`] carries values that describe the surrounding operation
//! (request id, trace id, tenant...) rather than the record itself. It is
//! attached with [`Logger::with_context`](crate::Logger::with_context) and
//! replaces any context the handle carried before.

use super::field::{format_fields, Field, FieldValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Context for structured logging with key-value fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogContext {
    entries: Vec<Field>,
}

impl LogContext {
    /// Create a new empty log context
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a value to the context
    #[must_use]
    pub fn with_value<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.entries.push(Field::new(key, value));
        self
    }

    /// Look up the most recently added value for `key`
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .rev()
            .find(|field| field.key == key)
            .map(|field| &field.value)
    }

    pub fn entries(&self) -> &[Field] {
        &self.entries
    }

    /// Check if context has any values
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_fields(&self.entries))
    }
}
