//! Source map for managing source files and computing source locations.
//!
//! This module provides the [`SourceMap`] type for managing source buffers
//! and extracting source lines and span text for diagnostics.

use std::sync::Arc;

use super::{FileId, Span};
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use coolc_util::span::SourceFile;
///
/// let file = SourceFile::new("main.cl", "class Main {};");
/// assert_eq!(file.name(), "main.cl");
/// assert_eq!(file.line_at(1).unwrap(), "class Main {};");
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        for (i, b) in content.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the text of a 1-based line, without its line terminator.
    ///
    /// # Examples
    ///
    /// ```
    /// use coolc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.cl", "x <- 1;\r\ny <- 2;\n");
    /// assert_eq!(file.line_at(1).unwrap(), "x <- 1;");
    /// assert_eq!(file.line_at(2).unwrap(), "y <- 2;");
    /// assert!(file.line_at(9).is_err());
    /// ```
    pub fn line_at(&self, line: usize) -> SourceMapResult<&str> {
        if line == 0 || line > self.line_starts.len() {
            return Err(SourceMapError::InvalidLineNumber {
                line,
                max_lines: self.line_starts.len(),
            });
        }
        let start = self.line_starts[line - 1];
        let end = self
            .line_starts
            .get(line)
            .map(|next| next - 1)
            .unwrap_or(self.content.len());
        let text = &self.content[start..end];
        Ok(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Extract the source text covered by a span
    pub fn span_text(&self, span: Span) -> SourceMapResult<&str> {
        if span.start > span.end {
            return Err(SourceMapError::InvalidSpan {
                start: span.start,
                end: span.end,
            });
        }
        self.content
            .get(span.start..span.end)
            .ok_or(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: span.start,
                span_end: span.end,
            })
    }
}

/// Collection of source files addressed by [`FileId`]
#[derive(Default, Debug)]
pub struct SourceMap {
    files: Vec<SourceFile>,
}

impl SourceMap {
    /// Create an empty source map
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source buffer and return its id
    ///
    /// # Examples
    ///
    /// ```
    /// use coolc_util::span::SourceMap;
    ///
    /// let mut map = SourceMap::new();
    /// let id = map.add_file("<stdin>", "class A {};");
    /// assert_eq!(map.get(id).unwrap().name(), "<stdin>");
    /// ```
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let id = self.files.len();
        self.files.push(SourceFile::new(name, content));
        FileId(id)
    }

    /// Look up a file by id
    pub fn get(&self, id: FileId) -> SourceMapResult<&SourceFile> {
        self.files
            .get(id.index())
            .ok_or(SourceMapError::UnknownFileId(id.index()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_at_bounds() {
        let file = SourceFile::new("a.cl", "one\ntwo");
        assert_eq!(file.line_at(2).unwrap(), "two");
        assert_eq!(
            file.line_at(0),
            Err(SourceMapError::InvalidLineNumber { line: 0, max_lines: 2 })
        );
    }

    #[test]
    fn test_span_text() {
        let file = SourceFile::new("a.cl", "x <- 42;");
        assert_eq!(file.span_text(Span::new(5, 7, 1, 6)).unwrap(), "42");
        assert!(file.span_text(Span::new(5, 70, 1, 6)).is_err());
        assert!(file.span_text(Span::new(7, 5, 1, 8)).is_err());
    }

    #[test]
    fn test_source_map_lookup() {
        let mut map = SourceMap::new();
        let a = map.add_file("a.cl", "a");
        let b = map.add_file("b.cl", "b");
        assert_eq!(map.get(a).unwrap().name(), "a.cl");
        assert_eq!(map.get(b).unwrap().name(), "b.cl");
        assert_eq!(
            map.get(FileId(7)).unwrap_err(),
            SourceMapError::UnknownFileId(7)
        );
    }
}
