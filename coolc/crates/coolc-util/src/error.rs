//! Core error types for coolc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source map operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// No file registered under this id
    #[error("Unknown file id: {0}")]
    UnknownFileId(usize),

    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        file_len: usize,
        span_start: usize,
        span_end: usize,
    },

    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },
}

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_map_error_display() {
        let err = SourceMapError::InvalidLineNumber { line: 9, max_lines: 3 };
        assert_eq!(err.to_string(), "Invalid line number: 9 (file has 3 lines)");

        let err = SourceMapError::SpanOutOfBounds {
            file_len: 4,
            span_start: 2,
            span_end: 10,
        };
        assert_eq!(
            err.to_string(),
            "Span out of bounds: file has 4 bytes, span is 2..10"
        );
    }
}
