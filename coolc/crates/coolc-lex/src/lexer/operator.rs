//! Operator lexing.
//!
//! This module handles the operators that need one character of lookahead.
//! Single-character punctuation is dispatched directly from `next_token`.

use crate::error::LexError;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes less-than, less-or-equal, or assignment.
    ///
    /// Handles: `<`, `<=`, `<-`
    pub fn lex_less(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Token::LessThanEq
        } else if self.cursor.match_char('-') {
            Token::Assign
        } else {
            Token::LessThan
        }
    }

    /// Lexes equals or arrow.
    ///
    /// Handles: `=`, `=>`
    pub fn lex_equals(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('>') {
            Token::Arrow
        } else {
            Token::Equal
        }
    }

    /// Lexes `*` or a stray comment terminator `*)`.
    pub fn lex_star(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char(')') {
            Token::Illegal(LexError::UnmatchedCommentClose)
        } else {
            Token::Multiply
        }
    }
}
