//! Command modules for the jxt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod traits;
pub mod common;

pub mod highlight;
pub mod tokens;
pub mod check;

// Re-export command types and functions
pub use highlight::{HighlightArgs, run_highlight};
pub use tokens::{TokensArgs, run_tokens};
pub use check::{CheckArgs, run_check};
