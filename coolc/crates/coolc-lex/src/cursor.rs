//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.
//!
//! Unlike a sentinel-based cursor, every lookahead returns `Option<char>`:
//! a NUL byte is real input in Cool (it is an error inside strings), so it
//! cannot double as the end-of-input marker.

/// A cursor for traversing source code character by character.
///
/// The cursor owns nothing but a borrowed view of the source and a position;
/// lookahead never consumes.
///
/// # Example
///
/// ```
/// use coolc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x <- 1");
///
/// assert_eq!(cursor.current(), Some('x'));
/// cursor.advance();
/// assert_eq!(cursor.peek_char(1), Some('<'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead (0 = current).
    ///
    /// # Example
    ///
    /// ```
    /// use coolc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("(*");
    /// assert_eq!(cursor.peek_char(0), Some('('));
    /// assert_eq!(cursor.peek_char(1), Some('*'));
    /// assert_eq!(cursor.peek_char(2), None);
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> Option<char> {
        let rest = self.source.as_bytes().get(self.position..)?;

        // Fast path for ASCII (most common case)
        if let Some(&b) = rest.get(offset) {
            if rest[..=offset].is_ascii() {
                return Some(b as char);
            }
        }

        self.remaining().chars().nth(offset)
    }

    /// Returns true if the next characters are exactly `pair`.
    #[inline]
    pub fn at_pair(&self, first: char, second: char) -> bool {
        self.current() == Some(first) && self.peek_char(1) == Some(second)
    }

    /// Consumes one character and returns it.
    ///
    /// Updates line and column tracking. Returns `None` at end of input.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Advances the cursor by up to `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the expected character if it is next.
    ///
    /// # Example
    ///
    /// ```
    /// use coolc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<-");
    /// assert!(cursor.match_char('<'));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current(), Some('-'));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds and returns them.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> &'a str {
        let start = self.position;
        while let Some(c) = self.current() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
        self.slice_from(start)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source from byte `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_null_is_a_character() {
        let mut cursor = Cursor::new("a\0b");
        cursor.advance();
        assert_eq!(cursor.current(), Some('\0'));
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_line_and_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd");
        assert_eq!((cursor.line(), cursor.column()), (1, 1));
        cursor.advance_n(2);
        assert_eq!((cursor.line(), cursor.column()), (1, 3));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 2));
    }

    #[test]
    fn test_multibyte_characters() {
        let mut cursor = Cursor::new("é#");
        assert_eq!(cursor.current(), Some('é'));
        assert_eq!(cursor.peek_char(1), Some('#'));
        cursor.advance();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.column(), 2);
        assert_eq!(cursor.current(), Some('#'));
    }

    #[test]
    fn test_peek_past_multibyte() {
        let cursor = Cursor::new("aé*)");
        assert_eq!(cursor.peek_char(1), Some('é'));
        assert_eq!(cursor.peek_char(2), Some('*'));
        assert_eq!(cursor.peek_char(3), Some(')'));
        assert_eq!(cursor.peek_char(4), None);
    }

    #[test]
    fn test_at_pair() {
        let cursor = Cursor::new("*)");
        assert!(cursor.at_pair('*', ')'));
        assert!(!cursor.at_pair('(', '*'));
    }

    #[test]
    fn test_eat_while_and_slice() {
        let mut cursor = Cursor::new("abc_12+");
        let word = cursor.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
        assert_eq!(word, "abc_12");
        assert_eq!(cursor.current(), Some('+'));
        assert_eq!(cursor.slice_from(0), "abc_12");
        assert_eq!(cursor.remaining(), "+");
    }
}
