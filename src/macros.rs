//! Logging macros for ergonomic log message formatting.
//!
//! The `*f!` macros wrap `format_args!` and call the formatted variants of
//! [`Logger`](crate::Logger), similar to `println!` and `format!`. [`fields!`]
//! builds a field array for the structured variants.
//!
//! # Examples
//!
//! ```
//! use logface::prelude::*;
//! use logface::{fields, infof};
//!
//! let logger = ConsoleLogger::new("server");
//!
//! // Formatted logging
//! let port = 8080;
//! infof!(logger, "Server listening on port {}", port);
//!
//! // Structured logging
//! logger.info("request served", &fields!["status" => 200, "path" => "/health"]);
//! ```

/// Log a formatted message at an explicit level.
///
/// # Examples
///
/// ```
/// # use logface::prelude::*;
/// # let logger = ConsoleLogger::new("demo");
/// use logface::logf;
/// logf!(logger, LogLevel::Info, "Simple message");
/// logf!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

/// Log a formatted debug-level message.
///
/// # Examples
///
/// ```
/// # use logface::prelude::*;
/// # let logger = ConsoleLogger::new("demo");
/// # logger.set_level(LogLevel::Debug);
/// use logface::debugf;
/// debugf!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a formatted info-level message.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a formatted warning-level message.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log a formatted error-level message.
///
/// # Examples
///
/// ```
/// # use logface::prelude::*;
/// # let logger = ConsoleLogger::new("demo");
/// use logface::errorf;
/// errorf!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a formatted fatal-level message, then terminate.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log a formatted panic-level message, then unwind.
#[macro_export]
macro_rules! panicf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Panic, $($arg)+)
    };
}

/// Build an array of [`Field`](crate::Field)s from `key => value` pairs.
///
/// ```
/// use logface::fields;
///
/// let fields = fields!["user" => "alice", "attempt" => 3];
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields[0].key, "user");
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        [] as [$crate::Field; 0]
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        [$($crate::Field::new($key, $value)),+]
    };
}
