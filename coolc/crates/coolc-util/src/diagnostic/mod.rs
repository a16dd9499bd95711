//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, collecting, and formatting
//! compiler diagnostics.
//!
//! # Examples
//!
//! ```
//! use coolc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use coolc_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("EOF in comment")
//!     .code(DiagnosticCode::E_LEX_EOF_IN_COMMENT)
//!     .span(Span::DUMMY)
//!     .emit(&handler);
//!
//! if handler.error_count() > 0 {
//!     eprintln!("lexing failed with {} errors", handler.error_count());
//! }
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// An error message with its location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

/// Renders the header line, e.g. `error[E1001]: Illegal character #`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "error[{}]: {}", code, self.message),
            None => write!(f, "error: {}", self.message),
        }
    }
}

/// Collects diagnostics emitted during a compilation phase
///
/// Interior mutability lets any number of phases report through a shared
/// reference.
///
/// # Examples
///
/// ```
/// use coolc_util::diagnostic::{DiagnosticBuilder, Handler};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("Unmatched *)").emit(&handler);
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}
