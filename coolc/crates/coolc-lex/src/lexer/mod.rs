//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier, keyword and boolean lexing
//! - `number` - Integer literal lexing
//! - `string` - String literal lexing
//! - `operator` - Operator and punctuation lexing
//! - `comment` - Comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
