//! Timestamp formatting utilities
//!
//! Provides the timestamp layouts used by the text backends. Supports ISO 8601,
//! RFC 3339, Unix milliseconds and custom strftime formats.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Layout used by the console backend: `2025-01-08 10:30:45.123`
pub const CONSOLE_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Layout used by the minimal `std` backend: `2025/01/08 10:30:45`
pub const STD_TIMESTAMP: &str = "%Y/%m/%d %H:%M:%S";

const ISO8601_TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Standardized timestamp format options
///
/// # Examples
///
/// ```
/// use logface::core::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Iso8601;
/// let timestamp = format.format(&Utc::now());
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// ```
    /// use logface::core::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format(ISO8601_TIMESTAMP).to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                // A pattern chrono cannot render degrades to ISO 8601.
                let mut rendered = String::new();
                match write!(rendered, "{}", datetime.format(format_str)) {
                    Ok(()) => rendered,
                    Err(_) => datetime.format(ISO8601_TIMESTAMP).to_string(),
                }
            }
        }
    }

    /// Parse a format name as accepted in backend configuration.
    ///
    /// Known names are `iso8601`, `rfc3339` and `unix_millis`; anything else is
    /// treated as a strftime pattern. Returns `None` for a pattern chrono
    /// rejects, so callers keep their preset.
    pub fn from_config(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "iso8601" => Some(TimestampFormat::Iso8601),
            "rfc3339" => Some(TimestampFormat::Rfc3339),
            "unix_millis" => Some(TimestampFormat::UnixMillis),
            _ if Self::is_valid_pattern(value) => Some(TimestampFormat::Custom(value.to_string())),
            _ => None,
        }
    }

    /// Whether every strftime specifier in `pattern` is known to chrono
    pub fn is_valid_pattern(pattern: &str) -> bool {
        !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::UnixMillis)
    }
}
