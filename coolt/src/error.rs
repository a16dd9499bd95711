//! Error handling module for the coolt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application. Lexical errors are not listed
//! here: they are ordinary tokens in the scanned stream.

use thiserror::Error;

/// Main error type for the coolt CLI application.
#[derive(Error, Debug)]
pub enum CooltError {
    /// Error when the configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when reading input or writing output fails.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CooltError.
pub type Result<T> = std::result::Result<T, CooltError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = CooltError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = CooltError::FileOperation("cannot read main.cl".to_string());
        assert_eq!(err.to_string(), "File operation failed: cannot read main.cl");
    }

    #[test]
    fn test_validation_error_display() {
        let err = CooltError::Validation("max string length must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: max string length must be positive"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CooltError = io.into();
        assert!(matches!(err, CooltError::Io(_)));
        assert_eq!(err.to_string(), "IO error: gone");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CooltError = json_err.into();
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
