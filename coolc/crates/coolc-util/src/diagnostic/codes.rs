//! Diagnostic codes for categorizing compiler errors and warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, enabling users to look up documentation and filter
//! specific diagnostics.
//!
//! # Examples
//!
//! ```
//! use coolc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_ILLEGAL_CHAR;
//! assert_eq!(code.number, 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors
/// - `number` is a 4-digit number (padded with zeros)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    #[inline]
    const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXICAL ERROR CODES (E1001-E1099)
    // =========================================================================

    /// E1001: Character that cannot start any token
    pub const E_LEX_ILLEGAL_CHAR: Self = Self::new("E", 1001);
    /// E1002: String literal longer than the configured maximum
    pub const E_LEX_STRING_TOO_LONG: Self = Self::new("E", 1002);
    /// E1003: String literal containing a null character
    pub const E_LEX_STRING_NULL: Self = Self::new("E", 1003);
    /// E1004: String literal broken by an unescaped newline
    pub const E_LEX_UNTERMINATED_STRING: Self = Self::new("E", 1004);
    /// E1005: End of input inside a string literal
    pub const E_LEX_EOF_IN_STRING: Self = Self::new("E", 1005);
    /// E1006: `*)` outside of any comment
    pub const E_LEX_UNMATCHED_COMMENT: Self = Self::new("E", 1006);
    /// E1007: End of input inside a block comment
    pub const E_LEX_EOF_IN_COMMENT: Self = Self::new("E", 1007);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
