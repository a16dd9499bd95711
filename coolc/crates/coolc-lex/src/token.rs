//! Token definitions for the Cool lexer.
//!
//! A [`Token`] is a kind plus whatever payload that kind carries. The
//! field-less [`TokenKind`] mirrors it one-to-one and owns the canonical
//! upper-case names used when a stream is rendered.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use coolc_util::{FxHashMap, Span};
use serde::Serialize;

use crate::error::{LexError, RenderError};

/// A lexical token.
///
/// # Examples
///
/// ```
/// use coolc_lex::{Token, TokenKind};
///
/// let token = Token::Ident("x".to_string());
/// assert_eq!(token.kind(), TokenKind::Ident);
/// assert_eq!(token.to_string(), "IDENT(x)");
/// assert_eq!(Token::Assign.to_string(), "ASSIGN");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    // ========================================================================
    // Operators and punctuation
    // ========================================================================
    /// `=>`
    Arrow,
    /// `<-`
    Assign,
    /// `@`
    At,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `/`
    Divide,
    /// `.`
    Dot,
    /// `=`
    Equal,
    /// `{`
    LBrace,
    /// `(`
    LParen,
    /// `<`
    LessThan,
    /// `<=`
    LessThanEq,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `+`
    Plus,
    /// `}`
    RBrace,
    /// `)`
    RParen,
    /// `;`
    Semicolon,
    /// `~`
    Tilde,

    // ========================================================================
    // Keywords
    // ========================================================================
    /// `case`
    Case,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `esac`
    Esac,
    /// `fi`
    Fi,
    /// `if`
    If,
    /// `in`
    In,
    /// `inherits`
    Inherits,
    /// `isvoid`
    Isvoid,
    /// `let`
    Let,
    /// `loop`
    Loop,
    /// `new`
    New,
    /// `not`
    Not,
    /// `of`
    Of,
    /// `pool`
    Pool,
    /// `then`
    Then,
    /// `while`
    While,

    // ========================================================================
    // Valued tokens
    // ========================================================================
    /// `true` or `false`
    BoolLiteral(bool),
    /// Identifier starting with an upper-case letter
    ClassName(String),
    /// Identifier starting with a lower-case letter
    Ident(String),
    /// Decimal digits, kept as written
    IntLiteral(String),
    /// Decoded string content, without quotes
    StringLiteral(String),
    /// A lexical error
    Illegal(LexError),

    /// End of input; always the last token of a stream
    End,
}

/// The kind of a [`Token`], without its payload.
///
/// Kinds are listed in the canonical alphabetical order of their names.
/// See [`Token`] for what each one matches.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Arrow,
    Assign,
    At,
    BoolLiteral,
    Case,
    Class,
    ClassName,
    Colon,
    Comma,
    Divide,
    Dot,
    Else,
    End,
    Equal,
    Esac,
    Fi,
    Ident,
    If,
    Illegal,
    In,
    Inherits,
    IntLiteral,
    Isvoid,
    LBrace,
    LessThan,
    LessThanEq,
    Let,
    Loop,
    LParen,
    Minus,
    Multiply,
    New,
    Not,
    Of,
    Plus,
    Pool,
    RBrace,
    RParen,
    Semicolon,
    StringLiteral,
    Then,
    Tilde,
    While,
}

impl TokenKind {
    /// Every kind, in canonical order.
    pub const ALL: [TokenKind; 43] = [
        TokenKind::Arrow,
        TokenKind::Assign,
        TokenKind::At,
        TokenKind::BoolLiteral,
        TokenKind::Case,
        TokenKind::Class,
        TokenKind::ClassName,
        TokenKind::Colon,
        TokenKind::Comma,
        TokenKind::Divide,
        TokenKind::Dot,
        TokenKind::Else,
        TokenKind::End,
        TokenKind::Equal,
        TokenKind::Esac,
        TokenKind::Fi,
        TokenKind::Ident,
        TokenKind::If,
        TokenKind::Illegal,
        TokenKind::In,
        TokenKind::Inherits,
        TokenKind::IntLiteral,
        TokenKind::Isvoid,
        TokenKind::LBrace,
        TokenKind::LessThan,
        TokenKind::LessThanEq,
        TokenKind::Let,
        TokenKind::Loop,
        TokenKind::LParen,
        TokenKind::Minus,
        TokenKind::Multiply,
        TokenKind::New,
        TokenKind::Not,
        TokenKind::Of,
        TokenKind::Plus,
        TokenKind::Pool,
        TokenKind::RBrace,
        TokenKind::RParen,
        TokenKind::Semicolon,
        TokenKind::StringLiteral,
        TokenKind::Then,
        TokenKind::Tilde,
        TokenKind::While,
    ];

    /// The canonical upper-case name, e.g. `LESS_THAN_EQ`.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Arrow => "ARROW",
            TokenKind::Assign => "ASSIGN",
            TokenKind::At => "AT",
            TokenKind::BoolLiteral => "BOOL_LITERAL",
            TokenKind::Case => "CASE",
            TokenKind::Class => "CLASS",
            TokenKind::ClassName => "CLASS_NAME",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Dot => "DOT",
            TokenKind::Else => "ELSE",
            TokenKind::End => "END",
            TokenKind::Equal => "EQUAL",
            TokenKind::Esac => "ESAC",
            TokenKind::Fi => "FI",
            TokenKind::Ident => "IDENT",
            TokenKind::If => "IF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::In => "IN",
            TokenKind::Inherits => "INHERITS",
            TokenKind::IntLiteral => "INT_LITERAL",
            TokenKind::Isvoid => "ISVOID",
            TokenKind::LBrace => "LBRACE",
            TokenKind::LParen => "LPAREN",
            TokenKind::LessThan => "LESS_THAN",
            TokenKind::LessThanEq => "LESS_THAN_EQ",
            TokenKind::Let => "LET",
            TokenKind::Loop => "LOOP",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::New => "NEW",
            TokenKind::Not => "NOT",
            TokenKind::Of => "OF",
            TokenKind::Plus => "PLUS",
            TokenKind::Pool => "POOL",
            TokenKind::RBrace => "RBRACE",
            TokenKind::RParen => "RPAREN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Then => "THEN",
            TokenKind::Tilde => "TILDE",
            TokenKind::While => "WHILE",
        }
    }

    /// Returns true if tokens of this kind carry a value.
    pub const fn has_value(self) -> bool {
        matches!(
            self,
            TokenKind::BoolLiteral
                | TokenKind::ClassName
                | TokenKind::Ident
                | TokenKind::IntLiteral
                | TokenKind::StringLiteral
                | TokenKind::Illegal
        )
    }

    /// Returns true for reserved words, excluding `true` and `false`.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Case
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::Esac
                | TokenKind::Fi
                | TokenKind::If
                | TokenKind::In
                | TokenKind::Inherits
                | TokenKind::Isvoid
                | TokenKind::Let
                | TokenKind::Loop
                | TokenKind::New
                | TokenKind::Not
                | TokenKind::Of
                | TokenKind::Pool
                | TokenKind::Then
                | TokenKind::While
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static KIND_NAMES: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| TokenKind::ALL.iter().map(|k| (k.as_str(), *k)).collect());

impl FromStr for TokenKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KIND_NAMES
            .get(s)
            .copied()
            .ok_or_else(|| RenderError::UnknownKind {
                index: 0,
                name: s.to_string(),
            })
    }
}

/// Reserved words, matched case-sensitively.
static KEYWORDS: LazyLock<FxHashMap<&'static str, Token>> = LazyLock::new(|| {
    let mut m = FxHashMap::default();
    m.insert("case", Token::Case);
    m.insert("class", Token::Class);
    m.insert("else", Token::Else);
    m.insert("esac", Token::Esac);
    m.insert("fi", Token::Fi);
    m.insert("if", Token::If);
    m.insert("in", Token::In);
    m.insert("inherits", Token::Inherits);
    m.insert("isvoid", Token::Isvoid);
    m.insert("let", Token::Let);
    m.insert("loop", Token::Loop);
    m.insert("new", Token::New);
    m.insert("not", Token::Not);
    m.insert("of", Token::Of);
    m.insert("pool", Token::Pool);
    m.insert("then", Token::Then);
    m.insert("while", Token::While);
    m.insert("true", Token::BoolLiteral(true));
    m.insert("false", Token::BoolLiteral(false));
    m
});

/// Look up a reserved word, including the boolean literals.
pub fn keyword_from_ident(ident: &str) -> Option<Token> {
    KEYWORDS.get(ident).cloned()
}

impl Token {
    /// Returns the payload-free kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Arrow => TokenKind::Arrow,
            Token::Assign => TokenKind::Assign,
            Token::At => TokenKind::At,
            Token::Colon => TokenKind::Colon,
            Token::Comma => TokenKind::Comma,
            Token::Divide => TokenKind::Divide,
            Token::Dot => TokenKind::Dot,
            Token::Equal => TokenKind::Equal,
            Token::LBrace => TokenKind::LBrace,
            Token::LParen => TokenKind::LParen,
            Token::LessThan => TokenKind::LessThan,
            Token::LessThanEq => TokenKind::LessThanEq,
            Token::Minus => TokenKind::Minus,
            Token::Multiply => TokenKind::Multiply,
            Token::Plus => TokenKind::Plus,
            Token::RBrace => TokenKind::RBrace,
            Token::RParen => TokenKind::RParen,
            Token::Semicolon => TokenKind::Semicolon,
            Token::Tilde => TokenKind::Tilde,
            Token::Case => TokenKind::Case,
            Token::Class => TokenKind::Class,
            Token::Else => TokenKind::Else,
            Token::Esac => TokenKind::Esac,
            Token::Fi => TokenKind::Fi,
            Token::If => TokenKind::If,
            Token::In => TokenKind::In,
            Token::Inherits => TokenKind::Inherits,
            Token::Isvoid => TokenKind::Isvoid,
            Token::Let => TokenKind::Let,
            Token::Loop => TokenKind::Loop,
            Token::New => TokenKind::New,
            Token::Not => TokenKind::Not,
            Token::Of => TokenKind::Of,
            Token::Pool => TokenKind::Pool,
            Token::Then => TokenKind::Then,
            Token::While => TokenKind::While,
            Token::BoolLiteral(_) => TokenKind::BoolLiteral,
            Token::ClassName(_) => TokenKind::ClassName,
            Token::Ident(_) => TokenKind::Ident,
            Token::IntLiteral(_) => TokenKind::IntLiteral,
            Token::StringLiteral(_) => TokenKind::StringLiteral,
            Token::Illegal(_) => TokenKind::Illegal,
            Token::End => TokenKind::End,
        }
    }

    /// Returns the textual value of a valued token, `None` otherwise.
    ///
    /// ```
    /// use coolc_lex::{LexError, Token};
    ///
    /// assert_eq!(Token::BoolLiteral(false).value().as_deref(), Some("false"));
    /// assert_eq!(
    ///     Token::Illegal(LexError::EofInComment).value().as_deref(),
    ///     Some("EOF in comment")
    /// );
    /// assert_eq!(Token::Dot.value(), None);
    /// ```
    pub fn value(&self) -> Option<Cow<'_, str>> {
        match self {
            Token::BoolLiteral(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Token::ClassName(s) | Token::Ident(s) | Token::IntLiteral(s) | Token::StringLiteral(s) => {
                Some(Cow::Borrowed(s.as_str()))
            }
            Token::Illegal(err) => Some(Cow::Owned(err.to_string())),
            _ => None,
        }
    }

    /// Build a token from a kind and its textual value.
    ///
    /// This is the inverse of [`Token::kind`] plus [`Token::value`].
    pub fn from_parts(kind: TokenKind, value: Option<&str>) -> Result<Token, RenderError> {
        let invalid = |value: &str| RenderError::InvalidValue {
            index: 0,
            kind: kind.as_str(),
            value: value.to_string(),
        };

        match (kind.has_value(), value) {
            (true, None) => {
                return Err(RenderError::MissingValue {
                    index: 0,
                    kind: kind.as_str(),
                })
            }
            (false, Some(_)) => {
                return Err(RenderError::UnexpectedValue {
                    index: 0,
                    kind: kind.as_str(),
                })
            }
            _ => {}
        }

        let token = match (kind, value) {
            (TokenKind::BoolLiteral, Some("true")) => Token::BoolLiteral(true),
            (TokenKind::BoolLiteral, Some("false")) => Token::BoolLiteral(false),
            (TokenKind::BoolLiteral, Some(v)) => return Err(invalid(v)),
            (TokenKind::IntLiteral, Some(v)) => {
                if v.is_empty() || !v.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid(v));
                }
                Token::IntLiteral(v.to_string())
            }
            (TokenKind::Ident, Some(v)) => {
                if v.is_empty() {
                    return Err(invalid(v));
                }
                Token::Ident(v.to_string())
            }
            (TokenKind::ClassName, Some(v)) => {
                if v.is_empty() {
                    return Err(invalid(v));
                }
                Token::ClassName(v.to_string())
            }
            (TokenKind::StringLiteral, Some(v)) => Token::StringLiteral(v.to_string()),
            (TokenKind::Illegal, Some(v)) => Token::Illegal(v.parse()?),
            (kind, _) => Self::from_unit_kind(kind),
        };
        Ok(token)
    }

    fn from_unit_kind(kind: TokenKind) -> Token {
        match kind {
            TokenKind::Arrow => Token::Arrow,
            TokenKind::Assign => Token::Assign,
            TokenKind::At => Token::At,
            TokenKind::Colon => Token::Colon,
            TokenKind::Comma => Token::Comma,
            TokenKind::Divide => Token::Divide,
            TokenKind::Dot => Token::Dot,
            TokenKind::Equal => Token::Equal,
            TokenKind::LBrace => Token::LBrace,
            TokenKind::LParen => Token::LParen,
            TokenKind::LessThan => Token::LessThan,
            TokenKind::LessThanEq => Token::LessThanEq,
            TokenKind::Minus => Token::Minus,
            TokenKind::Multiply => Token::Multiply,
            TokenKind::Plus => Token::Plus,
            TokenKind::RBrace => Token::RBrace,
            TokenKind::RParen => Token::RParen,
            TokenKind::Semicolon => Token::Semicolon,
            TokenKind::Tilde => Token::Tilde,
            TokenKind::Case => Token::Case,
            TokenKind::Class => Token::Class,
            TokenKind::Else => Token::Else,
            TokenKind::Esac => Token::Esac,
            TokenKind::Fi => Token::Fi,
            TokenKind::If => Token::If,
            TokenKind::In => Token::In,
            TokenKind::Inherits => Token::Inherits,
            TokenKind::Isvoid => Token::Isvoid,
            TokenKind::Let => Token::Let,
            TokenKind::Loop => Token::Loop,
            TokenKind::New => Token::New,
            TokenKind::Not => Token::Not,
            TokenKind::Of => Token::Of,
            TokenKind::Pool => Token::Pool,
            TokenKind::Then => Token::Then,
            TokenKind::While => Token::While,
            // Valued kinds are handled by the caller.
            TokenKind::BoolLiteral
            | TokenKind::ClassName
            | TokenKind::Ident
            | TokenKind::IntLiteral
            | TokenKind::StringLiteral
            | TokenKind::Illegal
            | TokenKind::End => Token::End,
        }
    }

    /// Returns true for `ILLEGAL` tokens.
    #[inline]
    pub fn is_illegal(&self) -> bool {
        matches!(self, Token::Illegal(_))
    }

    /// Returns true for the `END` token.
    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self, Token::End)
    }
}

/// Renders `KIND` or `KIND(value)`, values printed raw.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}({})", self.kind(), value),
            None => write!(f, "{}", self.kind()),
        }
    }
}

/// A token together with where it starts in the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpannedToken {
    /// The token
    pub token: Token,
    /// Byte range plus 1-based start line and column
    pub span: Span,
}

impl SpannedToken {
    /// Pair a token with its span.
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }

    /// Flat, serializable view of this token.
    pub fn record(&self) -> TokenRecord<'_> {
        TokenRecord {
            kind: self.token.kind().as_str(),
            value: self.token.value(),
            line: self.span.line,
            column: self.span.column,
        }
    }
}

/// One token as written by the JSON output format.
///
/// ```
/// use coolc_lex::scan;
///
/// let stream = scan("x");
/// let json = serde_json::to_string(&stream.spanned()[0].record()).unwrap();
/// assert_eq!(json, r#"{"kind":"IDENT","value":"x","line":1,"column":1}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenRecord<'a> {
    /// Canonical kind name
    pub kind: &'static str,
    /// Value text, `null` for value-less kinds
    pub value: Option<Cow<'a, str>>,
    /// 1-based line of the first character
    pub line: u32,
    /// 1-based column of the first character
    pub column: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_unique_and_sorted() {
        let names: Vec<&str> = TokenKind::ALL.iter().map(|k| k.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        sorted.dedup();
        assert_eq!(sorted.len(), 43);
    }

    #[test]
    fn test_kind_from_str() {
        for kind in TokenKind::ALL {
            assert_eq!(kind.as_str().parse::<TokenKind>(), Ok(kind));
        }
        assert!("LEFT_BRACE".parse::<TokenKind>().is_err());
        assert!("LBRACE".parse::<TokenKind>().is_ok());
        assert!("ident".parse::<TokenKind>().is_err());
    }

    #[test]
    fn test_valued_kinds() {
        let valued: Vec<_> = TokenKind::ALL.iter().filter(|k| k.has_value()).collect();
        assert_eq!(valued.len(), 6);
        assert!(!TokenKind::End.has_value());
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(keyword_from_ident("class"), Some(Token::Class));
        assert_eq!(keyword_from_ident("isvoid"), Some(Token::Isvoid));
        assert_eq!(keyword_from_ident("true"), Some(Token::BoolLiteral(true)));
        assert_eq!(keyword_from_ident("Class"), None);
        assert_eq!(keyword_from_ident("TRUE"), None);
        assert_eq!(keyword_from_ident("extern"), None);
    }

    #[test]
    fn test_keyword_kinds() {
        let keywords = TokenKind::ALL.iter().filter(|k| k.is_keyword()).count();
        assert_eq!(keywords, 17);
        assert!(!TokenKind::BoolLiteral.is_keyword());
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::LessThanEq.to_string(), "LESS_THAN_EQ");
        assert_eq!(Token::ClassName("Main".into()).to_string(), "CLASS_NAME(Main)");
        assert_eq!(Token::StringLiteral(String::new()).to_string(), "STRING_LITERAL()");
        assert_eq!(Token::IntLiteral("007".into()).to_string(), "INT_LITERAL(007)");
        assert_eq!(
            Token::Illegal(LexError::UnmatchedCommentClose).to_string(),
            "ILLEGAL(Unmatched *))"
        );
        assert_eq!(Token::End.to_string(), "END");
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(Token::from_parts(TokenKind::Dot, None), Ok(Token::Dot));
        assert_eq!(
            Token::from_parts(TokenKind::IntLiteral, Some("0042")),
            Ok(Token::IntLiteral("0042".into()))
        );
        assert_eq!(
            Token::from_parts(TokenKind::Illegal, Some("Illegal character #")),
            Ok(Token::Illegal(LexError::IllegalCharacter('#')))
        );
        assert!(Token::from_parts(TokenKind::IntLiteral, Some("4x")).is_err());
        assert!(Token::from_parts(TokenKind::BoolLiteral, Some("True")).is_err());
        assert!(Token::from_parts(TokenKind::Ident, None).is_err());
        assert!(Token::from_parts(TokenKind::Plus, Some("+")).is_err());
    }

    #[test]
    fn test_from_parts_inverts_kind_and_value() {
        let tokens = [
            Token::Arrow,
            Token::While,
            Token::End,
            Token::BoolLiteral(true),
            Token::Ident("foo_1".into()),
            Token::StringLiteral("a)\nb".into()),
            Token::Illegal(LexError::EofInString),
        ];
        for token in tokens {
            let value = token.value();
            assert_eq!(Token::from_parts(token.kind(), value.as_deref()), Ok(token));
        }
    }

    #[test]
    fn test_record() {
        let spanned = SpannedToken::new(Token::Semicolon, Span::new(4, 5, 2, 3));
        let record = spanned.record();
        assert_eq!(record.kind, "SEMICOLON");
        assert_eq!(record.value, None);
        assert_eq!((record.line, record.column), (2, 3));
    }
}
