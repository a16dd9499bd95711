//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for showing where
//! they point.

use super::{Diagnostic, DiagnosticCode, Handler};
use crate::Span;

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with the
/// highlighted column range.
///
/// # Examples
///
/// ```
/// use coolc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("x : Int #;", 1, 9, 10);
/// assert_eq!(snippet.format(), "  1 | x : Int #;\n    |         ^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Format the snippet for display
    ///
    /// Returns the source line prefixed with its number, followed by a
    /// caret line pointing at the highlighted range.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line, width = width);
        result.push_str(&format!("{:>width$} | ", "", width = width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use coolc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use coolc_util::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("Unmatched *)")
///     .code(DiagnosticCode::E_LEX_UNMATCHED_COMMENT)
///     .span(Span::new(0, 2, 1, 1))
///     .emit(&handler);
/// assert_eq!(handler.diagnostics()[0].span.end, 2);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::DUMMY,
            code: None,
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Build the diagnostic and hand it to `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(Diagnostic {
            message: self.message,
            span: self.span,
            code: self.code,
        });
    }
}
