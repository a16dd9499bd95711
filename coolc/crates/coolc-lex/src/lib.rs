//! coolc-lex - Lexical Analyzer for the Cool Programming Language
//!
//! This crate provides a complete lexer (tokenizer) for Cool, the
//! Classroom Object-Oriented Language. It transforms source code into a
//! stream of tokens that can be consumed by a parser.
//!
//! # Overview
//!
//! The lexer never fails. Malformed input becomes `ILLEGAL` tokens whose
//! value is the error message, and scanning resynchronizes and carries on.
//! Only end of input inside a comment or a string stops the scan early.
//! Every stream ends with a single `END` token.
//!
//! # Example Usage
//!
//! ```
//! use coolc_util::Handler;
//! use coolc_lex::{Lexer, Token};
//!
//! let source = "x <- 42;";
//! let mut handler = Handler::new();
//!
//! // Iterate through tokens with their spans
//! for spanned in Lexer::new(source, &mut handler) {
//!     println!("{}:{} {}", spanned.span.line, spanned.span.column, spanned.token);
//! }
//!
//! // Or scan everything at once and render it
//! let stream = coolc_lex::scan(source);
//! assert_eq!(stream[1], Token::Assign);
//! assert_eq!(
//!     stream.render(),
//!     "IDENT(x)\nASSIGN\nINT_LITERAL(42)\nSEMICOLON\nEND\n"
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`stream`] - The scanned token sequence
//! - [`render`] - Text rendering and parsing of streams
//! - [`config`] - Lexer options
//! - [`error`] - Lexical and rendering errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `class`, `else`, `fi`, `if`, `in`, `inherits`, `isvoid`, `let`, `loop`,
//! `pool`, `then`, `while`, `case`, `esac`, `new`, `of`, `not`.
//! Matching is case-sensitive.
//!
//! ## Identifiers
//!
//! `[a-zA-Z][a-zA-Z0-9_]*`. Upper-case initial gives `CLASS_NAME`,
//! lower-case gives `IDENT`.
//!
//! ## Literals
//!
//! - **Integer**: `0`, `42`, `007` (text kept verbatim)
//! - **String**: `"hello\n"`, at most 1024 decoded characters by default
//! - **Boolean**: `true`, `false`
//!
//! ## Operators and punctuation
//!
//! `<-` `<=` `<` `=>` `=` `+` `-` `*` `/` `~` `@` `.` `,` `:` `;`
//! `(` `)` `{` `}`
//!
//! ## Comments
//!
//! `(* ... *)`, nested. `--` line comments are available through
//! [`LexerConfig::line_comments`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod render;
pub mod stream;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::{LexError, RenderError};
pub use lexer::Lexer;
pub use render::{parse_rendered, parse_rendered_with, render_tokens, Separator};
pub use stream::TokenStream;
pub use token::{keyword_from_ident, SpannedToken, Token, TokenKind, TokenRecord};

use coolc_util::Handler;

/// Scans `source` with the default configuration.
///
/// Diagnostics are discarded; the `ILLEGAL` tokens in the returned stream
/// carry the same information.
pub fn scan(source: &str) -> TokenStream {
    let mut handler = Handler::new();
    scan_with(source, &LexerConfig::default(), &mut handler)
}

/// Scans `source`, reporting every lexical error to `handler`.
pub fn scan_with(source: &str, config: &LexerConfig, handler: &mut Handler) -> TokenStream {
    Lexer::with_config(source, handler, config.clone()).tokenize()
}
