//! Command trait and common types for the jxt CLI.
//!
//! This module defines the standard command traits that all commands
//! implement to keep their structure consistent.

use crate::error::Result;

/// Standard command trait that all jxt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;
}

/// Counts collected while a command walks its inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Inputs read and lexed.
    pub inputs_processed: usize,

    /// Inputs that could not be read.
    pub inputs_failed: usize,

    /// Tokens lexed across all inputs.
    pub tokens: usize,

    /// Error-qualified tokens across all inputs.
    pub error_tokens: usize,
}

impl RunSummary {
    /// Record a successfully processed input.
    pub fn with_input(mut self, tokens: usize, error_tokens: usize) -> Self {
        self.inputs_processed += 1;
        self.tokens += tokens;
        self.error_tokens += error_tokens;
        self
    }

    /// Record an input that failed.
    pub fn with_failure(mut self) -> Self {
        self.inputs_failed += 1;
        self
    }
}
