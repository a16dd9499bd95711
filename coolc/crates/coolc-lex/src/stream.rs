//! The token stream produced by one scan.

use std::ops::Index;

use crate::error::LexError;
use crate::token::{SpannedToken, Token};

/// An ordered, append-only sequence of tokens.
///
/// Streams built by the lexer always end with exactly one
/// [`Token::End`]; nothing follows it.
///
/// # Examples
///
/// ```
/// use coolc_lex::{scan, Token};
///
/// let stream = scan("x # y");
/// assert_eq!(stream.len(), 4);
/// assert!(stream.has_errors());
/// assert_eq!(stream.last(), &Token::End);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<SpannedToken>,
}

impl TokenStream {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, token: SpannedToken) {
        debug_assert!(
            self.tokens.last().map_or(true, |t| !t.token.is_end()),
            "token pushed after END"
        );
        self.tokens.push(token);
    }

    pub(crate) fn from_spanned(tokens: Vec<SpannedToken>) -> Self {
        Self { tokens }
    }

    /// Iterate over the tokens, without spans.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().map(|t| &t.token)
    }

    /// The tokens with their source spans.
    pub fn spanned(&self) -> &[SpannedToken] {
        &self.tokens
    }

    /// A copy of the tokens, without spans.
    pub fn tokens(&self) -> Vec<Token> {
        self.iter().cloned().collect()
    }

    /// Consume the stream, keeping only the tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens.into_iter().map(|t| t.token).collect()
    }

    /// Number of tokens, `END` included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true for a stream with no tokens at all.
    ///
    /// Scanned streams are never empty; they contain at least `END`.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The final token; `END` for any scanned stream.
    pub fn last(&self) -> &Token {
        self.tokens.last().map_or(&Token::End, |t| &t.token)
    }

    /// Returns true if any token is `ILLEGAL`.
    pub fn has_errors(&self) -> bool {
        self.iter().any(Token::is_illegal)
    }

    /// Number of `ILLEGAL` tokens.
    pub fn error_count(&self) -> usize {
        self.iter().filter(|t| t.is_illegal()).count()
    }

    /// Every lexical error with the token that carried it.
    pub fn errors(&self) -> impl Iterator<Item = (&LexError, &SpannedToken)> {
        self.tokens.iter().filter_map(|t| match &t.token {
            Token::Illegal(err) => Some((err, t)),
            _ => None,
        })
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index].token
    }
}

impl<'s> IntoIterator for &'s TokenStream {
    type Item = &'s SpannedToken;
    type IntoIter = std::slice::Iter<'s, SpannedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
