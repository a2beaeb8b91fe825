//! Output format configuration for log entries
//!
//! Provides the two renderings understood by the `format` option:
//! - Text: Human-readable format (default)
//! - Json: One JSON object per line

use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output format for log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text format (default)
    ///
    /// Example: `2025-01-08 10:30:45.123 [INFO] [api] Request processed status=200`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"time":"2025-01-08T10:30:45.123Z","level":"INFO","logger":"api","msg":"Request processed","status":200}`
    Json,
}

impl OutputFormat {
    /// Interpret a configuration value; anything other than `json` is text.
    pub fn from_config(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// Format as human-readable text with a caller supplied level label
    ///
    /// The label lets backends decorate the level (padding, colors) without
    /// duplicating the rest of the layout.
    pub fn format_text(entry: &LogEntry, timestamp_format: &TimestampFormat, level: &str) -> String {
        let mut line = format!(
            "{} [{}] [{}] {}",
            timestamp_format.format(&entry.timestamp),
            level,
            entry.logger,
            entry.message
        );

        // Fields are escaped like the message so a value cannot start a new record.
        for field in entry.all_fields() {
            line.push(' ');
            line.push_str(&LogEntry::sanitize_message(&field.to_string()));
        }

        line
    }

    /// Format as JSON
    ///
    /// Record keys come first, then fields in order. A field whose key repeats
    /// an earlier key replaces that value in the object.
    pub fn format_json(entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert("time".to_string(), Self::format_timestamp_json(entry, timestamp_format));
        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(entry.level.to_str().to_string()),
        );
        json_obj.insert(
            "logger".to_string(),
            serde_json::Value::String(entry.logger.clone()),
        );
        json_obj.insert(
            "msg".to_string(),
            serde_json::Value::String(entry.message.clone()),
        );

        for field in entry.all_fields() {
            json_obj.insert(field.key.clone(), field.value.to_json_value());
        }

        serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
    }

    /// Format timestamp for JSON output
    fn format_timestamp_json(entry: &LogEntry, timestamp_format: &TimestampFormat) -> serde_json::Value {
        if timestamp_format.is_numeric() {
            serde_json::Value::Number(entry.timestamp.timestamp_millis().into())
        } else {
            serde_json::Value::String(timestamp_format.format(&entry.timestamp))
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
