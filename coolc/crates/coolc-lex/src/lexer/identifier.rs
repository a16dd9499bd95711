//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, keyword, or boolean literal.
    ///
    /// A word is an ASCII letter followed by ASCII letters, digits and
    /// underscores. Reserved words and `true`/`false` match case-sensitively.
    /// Any other word is a `CLASS_NAME` when it starts upper-case and an
    /// `IDENT` otherwise.
    pub fn lex_identifier(&mut self) -> Token {
        let word = self
            .cursor
            .eat_while(|c| c.is_ascii_alphanumeric() || c == '_');

        if let Some(keyword) = keyword_from_ident(word) {
            return keyword;
        }

        if word.starts_with(|c: char| c.is_ascii_uppercase()) {
            Token::ClassName(word.to_string())
        } else {
            Token::Ident(word.to_string())
        }
    }
}
