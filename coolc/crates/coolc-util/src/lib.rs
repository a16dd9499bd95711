//! coolc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for every phase of the Cool tool-chain:
//!
//! - [`span`] - source locations ([`Span`], [`FileId`]) and the
//!   [`SourceMap`] used to look up source lines and span text
//! - [`diagnostic`] - error reporting ([`Diagnostic`], [`DiagnosticBuilder`],
//!   [`Handler`], [`SourceSnippet`]) and the stable [`DiagnosticCode`] catalogue
//! - [`error`] - error types for the utilities themselves
//!
//! # Example
//!
//! ```
//! use coolc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Illegal character #")
//!     .code(DiagnosticCode::E_LEX_ILLEGAL_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
