//! Number literal lexing.

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer literal.
    ///
    /// Cool integers are unsigned runs of decimal digits. The text is kept
    /// verbatim, leading zeros included; range checking belongs to later
    /// phases.
    pub fn lex_number(&mut self) -> Token {
        let digits = self.cursor.eat_while(|c| c.is_ascii_digit());
        Token::IntLiteral(digits.to_string())
    }
}
