//! Error types for the log line formatters

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// An extra field value has no JSON representation
    #[error("Cannot serialize field '{key}': {message}")]
    Serialization { key: String, message: String },

    /// JSON encoder failure
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The fixed-width format needs a non-empty level
    #[error("Invalid log level: '{level}'")]
    InvalidLevel { level: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create a serialization error for the given field
    pub fn serialization(key: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Serialization {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create an invalid level error
    pub fn invalid_level(level: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            level: level.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}
