//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use coolc_util::{DiagnosticBuilder, FileId, Handler, Span};
use tracing::{debug, trace};

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::stream::TokenStream;
use crate::token::{SpannedToken, Token};

/// Lexer for the Cool programming language.
///
/// The lexer transforms source code text into a stream of tokens. It
/// handles whitespace, nested comments, identifiers, keywords, operators,
/// and literals. Lexical errors become `ILLEGAL` tokens and are also
/// reported to the handler; scanning always continues until `END`.
///
/// # Example
///
/// ```
/// use coolc_lex::{Lexer, Token};
/// use coolc_util::Handler;
///
/// let mut handler = Handler::new();
/// let mut lexer = Lexer::new("x <- 1", &mut handler);
///
/// assert_eq!(lexer.next_token(), Token::Ident("x".to_string()));
/// assert_eq!(lexer.next_token(), Token::Assign);
/// assert_eq!(lexer.next_token(), Token::IntLiteral("1".to_string()));
/// assert_eq!(lexer.next_token(), Token::End);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    handler: &'a mut Handler,

    /// Scanning options.
    pub(crate) config: LexerConfig,

    /// File the spans are attributed to.
    file_id: FileId,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Set once an end-of-input error has consumed the rest of the source.
    halted: bool,

    /// Set once the iterator has yielded `END`.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer with the default configuration.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self::with_config(source, handler, LexerConfig::default())
    }

    /// Creates a new lexer with explicit options.
    pub fn with_config(source: &'a str, handler: &'a mut Handler, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            config,
            file_id: FileId::DUMMY,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            halted: false,
            finished: false,
        }
    }

    /// Attribute every produced span to `file_id`.
    pub fn with_file_id(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }

    /// Returns the next token from the source code.
    ///
    /// This is the main entry point for tokenization. It skips whitespace
    /// and comments, then dispatches to the appropriate lexing method
    /// based on the current character. Once the input is exhausted every
    /// call returns [`Token::End`].
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();
            self.token_start_column = self.cursor.column();

            if self.halted {
                return Token::End;
            }

            let Some(c) = self.cursor.current() else {
                return Token::End;
            };

            let token = match c {
                '(' if self.cursor.peek_char(1) == Some('*') => match self.skip_block_comment() {
                    Ok(()) => continue,
                    Err(err) => Token::Illegal(err),
                },
                '(' => {
                    self.cursor.advance();
                    Token::LParen
                },
                ')' => {
                    self.cursor.advance();
                    Token::RParen
                },
                '{' => {
                    self.cursor.advance();
                    Token::LBrace
                },
                '}' => {
                    self.cursor.advance();
                    Token::RBrace
                },
                ':' => {
                    self.cursor.advance();
                    Token::Colon
                },
                ',' => {
                    self.cursor.advance();
                    Token::Comma
                },
                ';' => {
                    self.cursor.advance();
                    Token::Semicolon
                },
                '.' => {
                    self.cursor.advance();
                    Token::Dot
                },
                '@' => {
                    self.cursor.advance();
                    Token::At
                },
                '~' => {
                    self.cursor.advance();
                    Token::Tilde
                },
                '+' => {
                    self.cursor.advance();
                    Token::Plus
                },
                '/' => {
                    self.cursor.advance();
                    Token::Divide
                },
                '-' if self.config.line_comments && self.cursor.peek_char(1) == Some('-') => {
                    self.skip_line_comment();
                    continue;
                },
                '-' => {
                    self.cursor.advance();
                    Token::Minus
                },
                '*' => self.lex_star(),
                '<' => self.lex_less(),
                '=' => self.lex_equals(),
                '"' => self.lex_string(),
                c if c.is_ascii_alphabetic() => self.lex_identifier(),
                c if c.is_ascii_digit() => self.lex_number(),
                c => {
                    self.cursor.advance();
                    Token::Illegal(LexError::IllegalCharacter(c))
                },
            };

            if let Token::Illegal(err) = &token {
                self.report_error(err);
                if err.is_terminal() {
                    trace!(line = self.cursor.line(), "scan halted at end of input");
                    self.halted = true;
                }
            }
            return token;
        }
    }

    /// Returns the next token paired with its span.
    pub fn next_spanned(&mut self) -> SpannedToken {
        let token = self.next_token();
        SpannedToken::new(token, self.token_span())
    }

    /// Skips whitespace characters.
    ///
    /// Whitespace is space, tab, newline, carriage return, form feed and
    /// vertical tab.
    pub(crate) fn skip_whitespace(&mut self) {
        self.cursor
            .eat_while(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C' | '\x0B'));
    }

    /// Reports a lexical error at the current token position.
    fn report_error(&mut self, err: &LexError) {
        let span = self.token_span();
        trace!(line = span.line, column = span.column, error = %err, "lexical error");
        DiagnosticBuilder::error(err.to_string())
            .code(err.code())
            .span(span)
            .emit(self.handler);
    }

    /// Span from the start of the current token to the cursor.
    pub fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
        .with_file_id(self.file_id)
    }

    /// Scans the whole input into a [`TokenStream`].
    ///
    /// The stream always ends with exactly one `END` token.
    pub fn tokenize(mut self) -> TokenStream {
        debug!(bytes = self.cursor.source().len(), "scanning source");
        let mut stream = TokenStream::new();
        loop {
            let spanned = self.next_spanned();
            let done = spanned.token.is_end();
            stream.push(spanned);
            if done {
                break;
            }
        }
        self.finished = true;
        debug!(
            tokens = stream.len(),
            errors = stream.error_count(),
            "scan complete"
        );
        stream
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

/// Yields every token up to and including `END`, then stops.
impl<'a> Iterator for Lexer<'a> {
    type Item = SpannedToken;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let spanned = self.next_spanned();
        if spanned.token.is_end() {
            self.finished = true;
        }
        Some(spanned)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
