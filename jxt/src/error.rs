//! Error handling module for the jxt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application. The lexer itself never fails;
//! every error here comes from the host side: reading inputs, loading
//! configuration, or a `check` run that found malformed tokens.

use thiserror::Error;

/// Main error type for the jxt CLI application.
#[derive(Error, Debug)]
pub enum JxtError {
    /// Error when configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when reading an input fails.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when command-line input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command finishes unsuccessfully.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using JxtError.
pub type Result<T> = std::result::Result<T, JxtError>;
