//! Lexer configuration.

use serde::{Deserialize, Serialize};

/// Default limit on decoded string literal length, in characters.
pub const DEFAULT_MAX_STRING_LENGTH: usize = 1024;

/// Options that change how source text is scanned.
///
/// The defaults give standard Cool lexing. The struct is deserializable so
/// that tools can embed it under a `[lexer]` table.
///
/// # Examples
///
/// ```
/// use coolc_lex::LexerConfig;
///
/// let config = LexerConfig::default();
/// assert_eq!(config.max_string_length, 1024);
/// assert!(!config.line_comments);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Longest accepted string literal, counted in decoded characters.
    pub max_string_length: usize,

    /// Treat `--` as the start of a comment running to end of line.
    pub line_comments: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
            line_comments: false,
        }
    }
}

impl LexerConfig {
    /// Set the string length limit.
    pub fn with_max_string_length(mut self, max: usize) -> Self {
        self.max_string_length = max;
        self
    }

    /// Enable or disable `--` line comments.
    pub fn with_line_comments(mut self, enabled: bool) -> Self {
        self.line_comments = enabled;
        self
    }
}
