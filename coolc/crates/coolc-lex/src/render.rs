//! Textual rendering of token streams, and reading them back.
//!
//! The canonical form puts one token per line, each line terminated by a
//! newline:
//!
//! ```text
//! CLASS
//! CLASS_NAME(Main)
//! LBRACE
//! END
//! ```
//!
//! Values are printed raw, so a string value may itself contain `)` or a
//! line break. When reading back, a value ends at the first `)` that is
//! followed by a separator and then a known kind name, or by end of text.

use std::fmt;
use std::str::FromStr;

use coolc_util::Span;

use crate::error::RenderError;
use crate::stream::TokenStream;
use crate::token::{SpannedToken, Token, TokenKind};

/// What goes between rendered tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Separator {
    /// One token per line.
    #[default]
    Newline,
    /// All tokens on one line, separated by single spaces.
    Space,
}

impl Separator {
    /// The separator character.
    pub const fn as_char(self) -> char {
        match self {
            Separator::Newline => '\n',
            Separator::Space => ' ',
        }
    }
}

/// Render tokens with `separator` between them and a final newline.
///
/// ```
/// use coolc_lex::{render_tokens, Separator, Token};
///
/// let tokens = [Token::Ident("x".into()), Token::End];
/// assert_eq!(render_tokens(&tokens, Separator::Newline), "IDENT(x)\nEND\n");
/// assert_eq!(render_tokens(&tokens, Separator::Space), "IDENT(x) END\n");
/// ```
pub fn render_tokens<'t>(tokens: impl IntoIterator<Item = &'t Token>, separator: Separator) -> String {
    let mut out = String::new();
    for (i, token) in tokens.into_iter().enumerate() {
        if i > 0 {
            out.push(separator.as_char());
        }
        out.push_str(&token.to_string());
    }
    out.push('\n');
    out
}

impl TokenStream {
    /// Render one token per line.
    pub fn render(&self) -> String {
        self.render_with(Separator::Newline)
    }

    /// Render with an explicit separator.
    pub fn render_with(&self, separator: Separator) -> String {
        render_tokens(self.iter(), separator)
    }
}

impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{token}")?;
        }
        f.write_str("\n")
    }
}

/// Parse the canonical one-token-per-line form.
///
/// # Examples
///
/// ```
/// use coolc_lex::{parse_rendered, Token};
///
/// let tokens = parse_rendered("STRING_LITERAL(f(x))\nEND\n").unwrap();
/// assert_eq!(tokens, vec![Token::StringLiteral("f(x)".into()), Token::End]);
/// ```
pub fn parse_rendered(text: &str) -> Result<Vec<Token>, RenderError> {
    parse_rendered_with(text, Separator::Newline)
}

/// Parse a rendering produced with `separator`.
pub fn parse_rendered_with(text: &str, separator: Separator) -> Result<Vec<Token>, RenderError> {
    let sep = separator.as_char();
    let mut rest = text;
    let mut tokens = Vec::new();

    loop {
        let index = tokens.len();
        if rest.is_empty() {
            return Err(RenderError::MissingEnd);
        }

        let name_len = kind_name_len(rest);
        let name = &rest[..name_len];
        let kind: TokenKind = name.parse().map_err(|_| RenderError::UnknownKind {
            index,
            name: rest.split([sep, '\n', '(']).next().unwrap_or_default().to_string(),
        })?;
        rest = &rest[name_len..];

        let value = match rest.strip_prefix('(') {
            Some(body) if kind.has_value() => {
                let end = value_end(body, sep).ok_or(RenderError::UnterminatedValue {
                    index,
                    kind: kind.as_str(),
                })?;
                rest = &body[end + 1..];
                Some(&body[..end])
            },
            Some(_) => {
                return Err(RenderError::UnexpectedValue {
                    index,
                    kind: kind.as_str(),
                })
            },
            None => None,
        };

        let token = Token::from_parts(kind, value).map_err(|err| at_index(err, index))?;

        rest = match rest.strip_prefix(sep).or_else(|| rest.strip_prefix('\n')) {
            Some(after) => after,
            None if rest.is_empty() => rest,
            None => return Err(RenderError::MissingSeparator { index }),
        };

        tokens.push(token);
        if kind == TokenKind::End {
            return if rest.is_empty() {
                Ok(tokens)
            } else {
                Err(RenderError::TrailingAfterEnd)
            };
        }
    }
}

/// Reads a stream back from its canonical rendering.
///
/// Positions are not part of the rendering, so every span is
/// [`Span::DUMMY`].
impl FromStr for TokenStream {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = parse_rendered(s)?
            .into_iter()
            .map(|token| SpannedToken::new(token, Span::DUMMY))
            .collect();
        Ok(TokenStream::from_spanned(tokens))
    }
}

fn kind_name_len(s: &str) -> usize {
    s.find(|c: char| !(c.is_ascii_uppercase() || c == '_'))
        .unwrap_or(s.len())
}

/// Returns true if `s` begins with a kind name followed by `(`, a
/// separator, or nothing.
fn starts_with_token(s: &str, sep: char) -> bool {
    let len = kind_name_len(s);
    if len == 0 || s[..len].parse::<TokenKind>().is_err() {
        return false;
    }
    match s[len..].chars().next() {
        None => true,
        Some(c) => c == '(' || c == sep || c == '\n',
    }
}

/// Byte offset of the `)` closing a value that starts at `body`.
fn value_end(body: &str, sep: char) -> Option<usize> {
    body.match_indices(')').map(|(i, _)| i).find(|&i| {
        let after = &body[i + 1..];
        if after.is_empty() {
            return true;
        }
        match after.strip_prefix(sep).or_else(|| after.strip_prefix('\n')) {
            Some(next) => next.is_empty() || starts_with_token(next, sep),
            None => false,
        }
    })
}

fn at_index(err: RenderError, index: usize) -> RenderError {
    match err {
        RenderError::UnknownKind { name, .. } => RenderError::UnknownKind { index, name },
        RenderError::MissingValue { kind, .. } => RenderError::MissingValue { index, kind },
        RenderError::UnexpectedValue { kind, .. } => RenderError::UnexpectedValue { index, kind },
        RenderError::InvalidValue { kind, value, .. } => {
            RenderError::InvalidValue { index, kind, value }
        },
        RenderError::UnterminatedValue { kind, .. } => {
            RenderError::UnterminatedValue { index, kind }
        },
        RenderError::MissingSeparator { .. } => RenderError::MissingSeparator { index },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexError;
    use crate::scan;

    #[test]
    fn test_render_canonical() {
        let stream = scan("class Main { x : Int <- 5; };");
        assert_eq!(
            stream.render(),
            "CLASS\nCLASS_NAME(Main)\nLBRACE\nIDENT(x)\nCOLON\nCLASS_NAME(Int)\n\
             ASSIGN\nINT_LITERAL(5)\nSEMICOLON\nRBRACE\nSEMICOLON\nEND\n"
        );
        assert_eq!(stream.to_string(), stream.render());
    }

    #[test]
    fn test_render_bracket_names() {
        let rendered = scan("class A { f() : Int { 1 }; };").render();
        assert_eq!(
            rendered,
            "CLASS\nCLASS_NAME(A)\nLBRACE\nIDENT(f)\nLPAREN\nRPAREN\nCOLON\n\
             CLASS_NAME(Int)\nLBRACE\nINT_LITERAL(1)\nRBRACE\nSEMICOLON\nRBRACE\n\
             SEMICOLON\nEND\n"
        );
        assert!(!rendered.contains("LEFT_") && !rendered.contains("RIGHT_"));
    }

    #[test]
    fn test_display_matches_render_with_errors() {
        let stream = scan("a $ \"b\nc");
        assert_eq!(stream.to_string(), stream.render());
    }

    #[test]
    fn test_render_empty_source() {
        assert_eq!(scan("").render(), "END\n");
    }

    #[test]
    fn test_render_spaced() {
        let stream = scan("x # y");
        assert_eq!(
            stream.render_with(Separator::Space),
            "IDENT(x) ILLEGAL(Illegal character #) IDENT(y) END\n"
        );
    }

    #[test]
    fn test_parse_round_trip_with_tricky_values() {
        let source = "\"a)\\nEND\" \"f(x)\" *) \"\" \"multi\\\nline\"";
        let stream = scan(source);
        let parsed = parse_rendered(&stream.render()).unwrap();
        assert_eq!(parsed, stream.tokens());
    }

    #[test]
    fn test_parse_spaced_round_trip() {
        let stream = scan("let x : Int <- 1 in \"a b\" (* c *) #");
        let text = stream.render_with(Separator::Space);
        assert_eq!(parse_rendered_with(&text, Separator::Space).unwrap(), stream.tokens());
    }

    #[test]
    fn test_parse_without_final_newline() {
        assert_eq!(
            parse_rendered("SEMICOLON\nEND").unwrap(),
            vec![Token::Semicolon, Token::End]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_rendered(""), Err(RenderError::MissingEnd));
        assert_eq!(parse_rendered("DOT\n"), Err(RenderError::MissingEnd));
        assert_eq!(
            parse_rendered("BOGUS\nEND\n"),
            Err(RenderError::UnknownKind {
                index: 0,
                name: "BOGUS".into()
            })
        );
        assert_eq!(
            parse_rendered("DOT\nIDENT\nEND\n"),
            Err(RenderError::MissingValue {
                index: 1,
                kind: "IDENT"
            })
        );
        assert_eq!(
            parse_rendered("DOT(.)\nEND\n"),
            Err(RenderError::UnexpectedValue { index: 0, kind: "DOT" })
        );
        assert_eq!(
            parse_rendered("INT_LITERAL(x)\nEND\n"),
            Err(RenderError::InvalidValue {
                index: 0,
                kind: "INT_LITERAL",
                value: "x".into()
            })
        );
        assert_eq!(parse_rendered("END\nDOT\n"), Err(RenderError::TrailingAfterEnd));
        assert_eq!(
            parse_rendered("DOT DOT\nEND\n"),
            Err(RenderError::MissingSeparator { index: 0 })
        );
    }

    #[test]
    fn test_parse_unterminated_value() {
        assert_eq!(
            parse_rendered("IDENT(x\nEND\n"),
            Err(RenderError::UnterminatedValue {
                index: 0,
                kind: "IDENT"
            })
        );
    }

    #[test]
    fn test_parse_illegal_payload() {
        assert_eq!(
            parse_rendered("ILLEGAL(Unmatched *))\nEND\n").unwrap(),
            vec![Token::Illegal(LexError::UnmatchedCommentClose), Token::End]
        );
        assert!(matches!(
            parse_rendered("ILLEGAL(oops)\nEND\n"),
            Err(RenderError::UnknownErrorMessage(_))
        ));
    }

    #[test]
    fn test_token_stream_from_str() {
        let stream: TokenStream = "IDENT(a)\nPLUS\nINT_LITERAL(1)\nEND\n".parse().unwrap();
        assert_eq!(stream.len(), 4);
        assert_eq!(stream.spanned()[0].span, Span::DUMMY);
        assert_eq!(stream.render(), "IDENT(a)\nPLUS\nINT_LITERAL(1)\nEND\n");
    }
}
