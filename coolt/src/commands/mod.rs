//! Command modules for the coolt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod check;
pub mod lex;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use lex::{run_lex, LexArgs};
