//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, rule dispatch, and entry points
//! - `operator` - Symbolic operator lexing
//! - `string` - String literal and quoted name lexing
//! - `number` - Number literal lexing
//! - `identifier` - Variable, built-in and bare-word lexing

mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::{scan, tokenize, Lexer};
pub use number::number_prefix_len;
