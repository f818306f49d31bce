//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Rate-limit key was not supplied and could not be derived from the call site
    #[error("Invalid rate-limit key: {reason}")]
    InvalidKey { reason: String },

    /// Severity outside the recognized 0-9 range
    #[error("Invalid severity: '{value}'")]
    InvalidSeverity { value: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Sink error with sink name
    #[error("Sink '{sink}' failed: {message}")]
    SinkError { sink: String, message: String },

    /// Pretty-printer failure
    #[error("Inspect error: {message}")]
    InspectError { message: String },
}

impl LoggerError {
    /// Create an invalid key error
    pub fn invalid_key(reason: impl Into<String>) -> Self {
        LoggerError::InvalidKey {
            reason: reason.into(),
        }
    }

    /// Create an invalid severity error
    pub fn invalid_severity(value: impl ToString) -> Self {
        LoggerError::InvalidSeverity {
            value: value.to_string(),
        }
    }

    /// Create a sink error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SinkError {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create an inspect error
    pub fn inspect(message: impl Into<String>) -> Self {
        LoggerError::InspectError {
            message: message.into(),
        }
    }
}
