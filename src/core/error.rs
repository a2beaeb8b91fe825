//! Error types for the logging facade
//!
//! Construction and configuration never fail the caller; these errors surface
//! only through [`Logger::sync`](crate::Logger::sync) and through the internal
//! fallback paths, which report them as diagnostics on stderr.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Sink could not be opened
    #[error("Failed to open sink '{target}': {message}")]
    SinkOpen { target: String, message: String },

    /// Flushing buffered output failed
    #[error("Flush failed for sink '{target}': {message}")]
    Flush { target: String, message: String },
}

impl LoggerError {
    /// Create a sink open error
    pub fn sink_open(target: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SinkOpen {
            target: target.into(),
            message: message.into(),
        }
    }

    /// Create a flush error
    pub fn flush(target: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Flush {
            target: target.into(),
            message: message.into(),
        }
    }
}
