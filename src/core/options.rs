//! Logger options and configuration parsing
//!
//! Options are built by applying an ordered list of [`LogOption`] mutators to
//! the defaults; later mutators win. The loosely typed [`ConfigMap`] accepted
//! by the registry is parsed into a [`LoggerConfig`] here. Parsing never fails:
//! missing or mistyped values fall back to the documented defaults.

use super::log_level::LogLevel;
use super::output_format::OutputFormat;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Dynamically typed configuration accepted by the registry.
pub type ConfigMap = HashMap<String, Value>;

/// Strategy invoked after a fatal record has been emitted, with the exit code.
pub type ExitHook = Arc<dyn Fn(i32) + Send + Sync>;

/// A single option mutator.
pub type LogOption = Box<dyn FnOnce(&mut LoggerOptions) + Send>;

pub const KEY_PROVIDER: &str = "provider";
pub const KEY_LEVEL: &str = "level";
pub const KEY_FORMAT: &str = "format";
pub const KEY_OUTPUT_PATH: &str = "outputPath";

const STDOUT_TARGET: &str = "stdout";

/// Where a backend writes its records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `"stdout"` and the empty string select standard output, anything else is a path.
    pub fn from_config(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(STDOUT_TARGET) {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str(STDOUT_TARGET),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Recognized logger options plus an open map for backend-specific settings
#[derive(Clone, Default)]
pub struct LoggerOptions {
    pub level: LogLevel,
    pub format: OutputFormat,
    pub output: OutputTarget,
    pub extra: ConfigMap,
    /// Replaces process termination after a fatal record when set
    pub exit_hook: Option<ExitHook>,
}

impl LoggerOptions {
    /// Apply mutators in order on top of the defaults
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = LogOption>,
    {
        let mut resolved = Self::default();
        for option in options {
            option(&mut resolved);
        }
        resolved
    }

    /// Read a boolean backend setting
    pub fn extra_bool(&self, key: &str) -> Option<bool> {
        self.extra.get(key).and_then(Value::as_bool)
    }

    /// Read a string backend setting
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

impl fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("level", &self.level)
            .field("format", &self.format)
            .field("output", &self.output)
            .field("extra", &self.extra)
            .field("exit_hook", &self.exit_hook.is_some())
            .finish()
    }
}

pub fn with_level(level: LogLevel) -> LogOption {
    Box::new(move |options| options.level = level)
}

pub fn with_format(format: OutputFormat) -> LogOption {
    Box::new(move |options| options.format = format)
}

pub fn with_output_path(path: impl Into<String>) -> LogOption {
    let target = OutputTarget::from_config(&path.into());
    Box::new(move |options| options.output = target)
}

/// Replace the backend-specific settings
pub fn with_config(config: ConfigMap) -> LogOption {
    Box::new(move |options| options.extra = config)
}

pub fn with_exit_hook(hook: ExitHook) -> LogOption {
    Box::new(move |options| options.exit_hook = Some(hook))
}

/// Strongly typed view of a [`ConfigMap`]
#[derive(Debug, Clone, Default)]
pub struct LoggerConfig {
    /// Requested provider, if the map named one
    pub provider: Option<String>,
    pub options: LoggerOptions,
}

impl LoggerConfig {
    /// Parse the recognized keys and pass every other key through as `extra`
    pub fn from_map(map: &ConfigMap) -> Self {
        let mut config = Self::default();

        for (key, value) in map {
            match key.as_str() {
                KEY_PROVIDER => config.provider = value.as_str().map(str::to_string),
                KEY_LEVEL => config.options.level = parse_level(value).unwrap_or_default(),
                KEY_FORMAT => {
                    config.options.format =
                        value.as_str().map(OutputFormat::from_config).unwrap_or_default()
                }
                KEY_OUTPUT_PATH => {
                    config.options.output =
                        value.as_str().map(OutputTarget::from_config).unwrap_or_default()
                }
                _ => {
                    config.options.extra.insert(key.clone(), value.clone());
                }
            }
        }

        config
    }

    /// Parse a JSON object with the same rules as [`from_map`](Self::from_map)
    ///
    /// Text that is not a JSON object yields the defaults.
    pub fn from_json_str(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(object)) => Self::from_map(&object.into_iter().collect()),
            _ => Self::default(),
        }
    }
}

/// Levels may be given by name or by their numeric discriminant
fn parse_level(value: &Value) -> Option<LogLevel> {
    match value {
        Value::String(name) => name.parse().ok(),
        Value::Number(number) => number.as_i64().and_then(LogLevel::from_i64),
        _ => None,
    }
}
