//! String literal lexing.
//!
//! This module handles lexing of string literals and their escape sequences.

use crate::error::LexError;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal starting at the opening `"`.
    ///
    /// Produces exactly one token. On success the value is the decoded
    /// content without quotes.
    ///
    /// A NUL character or an over-long literal records an error; scanning
    /// then keeps consuming up to the closing quote so the rest of the
    /// literal does not leak out as tokens. While resynchronizing, escapes
    /// still pair up and newlines do not end the literal.
    ///
    /// An unescaped newline ends the literal with an error and is consumed.
    /// End of input inside the literal is terminal.
    pub fn lex_string(&mut self) -> Token {
        self.cursor.advance(); // opening quote

        let max_len = self.config.max_string_length;
        let mut value = String::new();
        let mut len = 0usize;
        let mut error: Option<LexError> = None;

        loop {
            let Some(c) = self.cursor.advance() else {
                return Token::Illegal(error.unwrap_or(LexError::EofInString));
            };

            let decoded = match c {
                '"' => break,
                '\n' if error.is_none() => return Token::Illegal(LexError::UnterminatedString),
                '\\' => match self.cursor.advance() {
                    Some(escaped) => unescape(escaped),
                    None => return Token::Illegal(error.unwrap_or(LexError::EofInString)),
                },
                c => c,
            };

            if error.is_some() {
                continue;
            }

            if decoded == '\0' {
                error = Some(LexError::StringContainsNull);
            } else if len >= max_len {
                error = Some(LexError::StringTooLong);
            } else {
                value.push(decoded);
                len += 1;
            }
        }

        match error {
            Some(err) => Token::Illegal(err),
            None => Token::StringLiteral(value),
        }
    }
}

/// Maps the character after a backslash to the character it stands for.
///
/// `\n`, `\t`, `\b` and `\f` are control characters. Anything else,
/// including `"`, `\` and a literal newline, stands for itself.
fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'b' => '\x08',
        'f' => '\x0C',
        other => other,
    }
}
