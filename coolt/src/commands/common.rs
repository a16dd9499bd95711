//! Common types and utilities for coolt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use coolc_lex::{LexerConfig, Separator};
use serde::{Deserialize, Serialize};

use crate::error::{CooltError, Result};

/// Display name used for source read from standard input.
pub const STDIN_NAME: &str = "<stdin>";

// ============================================================================
// Output Format
// ============================================================================

/// Supported renderings of a token stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Lines,
    /// All tokens on one line, space separated
    Spaced,
    /// JSON array of `{kind, value, line, column}` records
    Json,
}

impl OutputFormat {
    /// Text separator for the plain formats; `None` for JSON.
    pub fn separator(&self) -> Option<Separator> {
        match self {
            Self::Lines => Some(Separator::Newline),
            Self::Spaced => Some(Separator::Space),
            Self::Json => None,
        }
    }
}

// ============================================================================
// Lexer Options
// ============================================================================

/// Lexer options given on the command line.
///
/// Each set option overrides the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerOverrides {
    /// Force `--` line comments on.
    pub line_comments: bool,
    /// Replace the string length limit.
    pub max_string_length: Option<usize>,
}

impl LexerOverrides {
    /// Merge these overrides over `base`.
    pub fn apply(&self, base: &LexerConfig) -> Result<LexerConfig> {
        let mut config = base.clone();
        if self.line_comments {
            config.line_comments = true;
        }
        if let Some(max) = self.max_string_length {
            if max == 0 {
                return Err(CooltError::Validation(
                    error_messages::ZERO_STRING_LENGTH.to_string(),
                ));
            }
            config.max_string_length = max;
        }
        Ok(config)
    }
}

// ============================================================================
// I/O Utilities
// ============================================================================

/// Read the whole source, from `path` or standard input.
///
/// Returns the display name together with the text.
pub fn read_source(path: Option<&Path>) -> Result<(String, String)> {
    match path {
        Some(path) if path != Path::new("-") => {
            let text = std::fs::read_to_string(path).map_err(|e| {
                CooltError::FileOperation(format!("Cannot read {}: {}", path.display(), e))
            })?;
            Ok((path.display().to_string(), text))
        },
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok((STDIN_NAME.to_string(), text))
        },
    }
}

/// Write `content` to `path`, or to standard output when absent.
pub fn write_output(path: Option<&PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content).map_err(|e| {
            CooltError::FileOperation(format!("Cannot write {}: {}", path.display(), e))
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        },
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when a zero string length limit is requested.
    pub const ZERO_STRING_LENGTH: &str = "--max-string-length must be at least 1";
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_format_separator() {
        assert_eq!(OutputFormat::Lines.separator(), Some(Separator::Newline));
        assert_eq!(OutputFormat::Spaced.separator(), Some(Separator::Space));
        assert_eq!(OutputFormat::Json.separator(), None);
    }

    #[test]
    fn test_overrides_apply() {
        let base = LexerConfig::default();
        let overrides = LexerOverrides {
            line_comments: true,
            max_string_length: Some(10),
        };
        let merged = overrides.apply(&base).unwrap();
        assert!(merged.line_comments);
        assert_eq!(merged.max_string_length, 10);

        let untouched = LexerOverrides::default().apply(&base).unwrap();
        assert_eq!(untouched, base);
    }

    #[test]
    fn test_overrides_reject_zero() {
        let overrides = LexerOverrides {
            line_comments: false,
            max_string_length: Some(0),
        };
        assert!(matches!(
            overrides.apply(&LexerConfig::default()),
            Err(CooltError::Validation(_))
        ));
    }

    #[test]
    fn test_read_source_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.cl");
        std::fs::write(&path, "class A {};").unwrap();

        let (name, text) = read_source(Some(&path)).unwrap();
        assert!(name.ends_with("a.cl"));
        assert_eq!(text, "class A {};");
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Some(Path::new("/nonexistent/x.cl"))).unwrap_err();
        assert!(matches!(err, CooltError::FileOperation(_)));
    }

    #[test]
    fn test_write_output_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        write_output(Some(&path), "END\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "END\n");
    }
}
