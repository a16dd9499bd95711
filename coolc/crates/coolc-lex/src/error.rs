//! Error types for the Cool lexer.
//!
//! Lexical errors are never fatal to the caller: each one travels inside an
//! `ILLEGAL` token and is also reported to the diagnostic handler.

use std::str::FromStr;

use coolc_util::DiagnosticCode;
use thiserror::Error;

/// A lexical error carried by an `ILLEGAL` token.
///
/// The `Display` text is exactly the message rendered between the parentheses
/// of `ILLEGAL(...)`.
///
/// # Examples
///
/// ```
/// use coolc_lex::LexError;
///
/// assert_eq!(LexError::IllegalCharacter('#').to_string(), "Illegal character #");
/// assert_eq!("EOF in comment".parse::<LexError>().unwrap(), LexError::EofInComment);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LexError {
    /// A character that cannot begin any token.
    #[error("Illegal character {0}")]
    IllegalCharacter(char),

    /// A string literal whose decoded content exceeds the length limit.
    #[error("String constant too long")]
    StringTooLong,

    /// A string literal containing a NUL character, raw or escaped.
    #[error("String contains null character")]
    StringContainsNull,

    /// A string literal broken by an unescaped newline.
    #[error("Unterminated string constant")]
    UnterminatedString,

    /// End of input inside a string literal.
    #[error("EOF in string constant")]
    EofInString,

    /// A `*)` with no open comment.
    #[error("Unmatched *)")]
    UnmatchedCommentClose,

    /// End of input inside a block comment.
    #[error("EOF in comment")]
    EofInComment,
}

impl LexError {
    /// Returns true if scanning stops after this error.
    ///
    /// Both end-of-input errors consume the rest of the source, so the only
    /// token that can follow them is `END`.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, LexError::EofInString | LexError::EofInComment)
    }

    /// Diagnostic code used when this error is reported.
    pub const fn code(&self) -> DiagnosticCode {
        match self {
            LexError::IllegalCharacter(_) => DiagnosticCode::E_LEX_ILLEGAL_CHAR,
            LexError::StringTooLong => DiagnosticCode::E_LEX_STRING_TOO_LONG,
            LexError::StringContainsNull => DiagnosticCode::E_LEX_STRING_NULL,
            LexError::UnterminatedString => DiagnosticCode::E_LEX_UNTERMINATED_STRING,
            LexError::EofInString => DiagnosticCode::E_LEX_EOF_IN_STRING,
            LexError::UnmatchedCommentClose => DiagnosticCode::E_LEX_UNMATCHED_COMMENT,
            LexError::EofInComment => DiagnosticCode::E_LEX_EOF_IN_COMMENT,
        }
    }
}

impl FromStr for LexError {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix("Illegal character ") {
            let mut chars = rest.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(LexError::IllegalCharacter(c)),
                _ => Err(RenderError::UnknownErrorMessage(s.to_string())),
            };
        }

        match s {
            "String constant too long" => Ok(LexError::StringTooLong),
            "String contains null character" => Ok(LexError::StringContainsNull),
            "Unterminated string constant" => Ok(LexError::UnterminatedString),
            "EOF in string constant" => Ok(LexError::EofInString),
            "Unmatched *)" => Ok(LexError::UnmatchedCommentClose),
            "EOF in comment" => Ok(LexError::EofInComment),
            _ => Err(RenderError::UnknownErrorMessage(s.to_string())),
        }
    }
}

/// Errors produced while reading a rendered token stream back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A line did not start with a known token kind name.
    #[error("token {index}: unknown token kind `{name}`")]
    UnknownKind {
        /// Zero-based token position
        index: usize,
        /// The text found where a kind name was expected
        name: String,
    },

    /// A valued kind was rendered without its `(value)`.
    #[error("token {index}: {kind} requires a value")]
    MissingValue {
        /// Zero-based token position
        index: usize,
        /// Kind name
        kind: &'static str,
    },

    /// A value-less kind was followed by `(`.
    #[error("token {index}: {kind} does not take a value")]
    UnexpectedValue {
        /// Zero-based token position
        index: usize,
        /// Kind name
        kind: &'static str,
    },

    /// A value could not be decoded for its kind.
    #[error("token {index}: invalid {kind} value `{value}`")]
    InvalidValue {
        /// Zero-based token position
        index: usize,
        /// Kind name
        kind: &'static str,
        /// The offending value text
        value: String,
    },

    /// An opening `(` with no acceptable closing `)`.
    #[error("token {index}: unterminated value for {kind}")]
    UnterminatedValue {
        /// Zero-based token position
        index: usize,
        /// Kind name
        kind: &'static str,
    },

    /// Garbage after a token on the same line.
    #[error("token {index}: expected a line break after the token")]
    MissingSeparator {
        /// Zero-based token position
        index: usize,
    },

    /// An `ILLEGAL` payload that is not a known lexical error message.
    #[error("unknown lexical error message `{0}`")]
    UnknownErrorMessage(String),

    /// The text ended without an `END` token.
    #[error("token stream does not end with END")]
    MissingEnd,

    /// Something followed the `END` token.
    #[error("unexpected text after END")]
    TrailingAfterEnd,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FIXED: [LexError; 6] = [
        LexError::StringTooLong,
        LexError::StringContainsNull,
        LexError::UnterminatedString,
        LexError::EofInString,
        LexError::UnmatchedCommentClose,
        LexError::EofInComment,
    ];

    #[test]
    fn test_messages() {
        assert_eq!(LexError::IllegalCharacter('_').to_string(), "Illegal character _");
        assert_eq!(LexError::StringTooLong.to_string(), "String constant too long");
        assert_eq!(
            LexError::StringContainsNull.to_string(),
            "String contains null character"
        );
        assert_eq!(
            LexError::UnterminatedString.to_string(),
            "Unterminated string constant"
        );
        assert_eq!(LexError::EofInString.to_string(), "EOF in string constant");
        assert_eq!(LexError::UnmatchedCommentClose.to_string(), "Unmatched *)");
        assert_eq!(LexError::EofInComment.to_string(), "EOF in comment");
    }

    #[test]
    fn test_message_parses_back() {
        for err in ALL_FIXED {
            assert_eq!(err.to_string().parse::<LexError>(), Ok(err));
        }
        assert_eq!(
            "Illegal character é".parse::<LexError>(),
            Ok(LexError::IllegalCharacter('é'))
        );
    }

    #[test]
    fn test_unknown_message_rejected() {
        assert!("Illegal character ab".parse::<LexError>().is_err());
        assert!("Illegal character ".parse::<LexError>().is_err());
        assert!("something else".parse::<LexError>().is_err());
    }

    #[test]
    fn test_terminal_errors() {
        assert!(LexError::EofInString.is_terminal());
        assert!(LexError::EofInComment.is_terminal());
        assert!(!LexError::UnterminatedString.is_terminal());
        assert!(!LexError::IllegalCharacter('$').is_terminal());
    }

    #[test]
    fn test_codes() {
        assert_eq!(LexError::IllegalCharacter('$').code().as_str(), "E1001");
        assert_eq!(LexError::EofInComment.code().as_str(), "E1007");
    }
}
