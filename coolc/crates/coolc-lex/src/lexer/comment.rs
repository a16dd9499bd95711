//! Comment lexing.
//!
//! This module handles skipping nested block comments and, when enabled,
//! `--` line comments.

use crate::error::LexError;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a block comment starting at `(*`.
    ///
    /// Comments nest: every `(*` inside must be closed by its own `*)`.
    /// Running out of input before the outermost comment closes is an error.
    pub fn skip_block_comment(&mut self) -> Result<(), LexError> {
        self.cursor.advance_n(2);
        let mut depth: usize = 1;

        while !self.cursor.is_at_end() {
            if self.cursor.at_pair('(', '*') {
                self.cursor.advance_n(2);
                depth += 1;
            } else if self.cursor.at_pair('*', ')') {
                self.cursor.advance_n(2);
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            } else {
                self.cursor.advance();
            }
        }

        Err(LexError::EofInComment)
    }

    /// Skips a line comment (from `--` to end of line).
    ///
    /// The newline itself is left for whitespace skipping.
    pub(crate) fn skip_line_comment(&mut self) {
        self.cursor.advance_n(2);
        self.cursor.eat_while(|c| c != '\n');
    }
}

#[cfg(test)]
mod tests {
    use crate::config::LexerConfig;
    use crate::error::LexError;
    use crate::token::Token;
    use crate::Lexer;
    use coolc_util::Handler;

    fn lex_all(source: &str) -> Vec<Token> {
        lex_with(source, LexerConfig::default())
    }

    fn lex_with(source: &str, config: LexerConfig) -> Vec<Token> {
        let mut handler = Handler::new();
        Lexer::with_config(source, &mut handler, config)
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_skip_block_comment() {
        assert_eq!(
            lex_all("a (* comment *) b"),
            vec![
                Token::Ident("a".into()),
                Token::Ident("b".into()),
                Token::End
            ]
        );
    }

    #[test]
    fn test_nested_block_comment() {
        assert_eq!(
            lex_all("(* outer (* inner *) still outer *) x"),
            vec![Token::Ident("x".into()), Token::End]
        );
    }

    #[test]
    fn test_comment_swallows_everything() {
        assert_eq!(lex_all("(* \"quote # \0 \n *)"), vec![Token::End]);
    }

    #[test]
    fn test_unterminated_comment() {
        assert_eq!(
            lex_all("x (* never closed"),
            vec![
                Token::Ident("x".into()),
                Token::Illegal(LexError::EofInComment),
                Token::End
            ]
        );
    }

    #[test]
    fn test_unterminated_nested_comment() {
        assert_eq!(
            lex_all("(* (* *)"),
            vec![Token::Illegal(LexError::EofInComment), Token::End]
        );
    }

    #[test]
    fn test_open_paren_star_close_paren_opens_comment() {
        assert_eq!(
            lex_all("(*)"),
            vec![Token::Illegal(LexError::EofInComment), Token::End]
        );
    }

    #[test]
    fn test_unmatched_close() {
        assert_eq!(
            lex_all("*)"),
            vec![Token::Illegal(LexError::UnmatchedCommentClose), Token::End]
        );
        assert_eq!(
            lex_all("(* a *) *)"),
            vec![Token::Illegal(LexError::UnmatchedCommentClose), Token::End]
        );
    }

    #[test]
    fn test_star_alone() {
        assert_eq!(
            lex_all("2 * 3"),
            vec![
                Token::IntLiteral("2".into()),
                Token::Multiply,
                Token::IntLiteral("3".into()),
                Token::End
            ]
        );
    }

    #[test]
    fn test_line_comments_off_by_default() {
        assert_eq!(lex_all("--"), vec![Token::Minus, Token::Minus, Token::End]);
    }

    #[test]
    fn test_line_comments_when_enabled() {
        let config = LexerConfig::default().with_line_comments(true);
        assert_eq!(
            lex_with("a -- rest (* of line\nb - c", config),
            vec![
                Token::Ident("a".into()),
                Token::Ident("b".into()),
                Token::Minus,
                Token::Ident("c".into()),
                Token::End
            ]
        );
    }
}
