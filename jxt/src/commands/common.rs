//! Common types and utilities for jxt commands.
//!
//! This module provides the input handling shared by every command:
//! resolving files, inline expressions and stdin into sources, and running
//! a per-source job on a bounded rayon pool while keeping input order.

use std::fmt;
use std::io::Read;
use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{debug, error};

use crate::commands::traits::RunSummary;
use crate::error::{JxtError, Result};

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

// ============================================================================
// Input Sources
// ============================================================================

/// Where the text of one input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk.
    File(PathBuf),
    /// Standard input.
    Stdin,
    /// An expression given on the command line.
    Expr(String),
}

impl InputSource {
    /// Builds the source list from command-line arguments.
    ///
    /// An inline expression takes precedence over files. `-` selects
    /// standard input and may appear at most once.
    pub fn from_args(files: &[PathBuf], expr: Option<&str>) -> Result<Vec<Self>> {
        if let Some(expr) = expr {
            return Ok(vec![Self::Expr(expr.to_string())]);
        }

        if files.is_empty() {
            return Err(JxtError::Validation(
                error_messages::NO_INPUTS.to_string(),
            ));
        }

        let stdin_count = files.iter().filter(|path| path.as_os_str() == STDIN_PATH).count();
        if stdin_count > 1 {
            return Err(JxtError::Validation(
                error_messages::STDIN_TWICE.to_string(),
            ));
        }

        Ok(files
            .iter()
            .map(|path| {
                if path.as_os_str() == STDIN_PATH {
                    Self::Stdin
                } else {
                    Self::File(path.clone())
                }
            })
            .collect())
    }

    /// Reads the full text of the source.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::File(path) => std::fs::read_to_string(path).map_err(|e| {
                JxtError::FileOperation(format!("{}: {}", path.display(), e))
            }),
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            },
            Self::Expr(expr) => Ok(expr.clone()),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
            Self::Expr(_) => f.write_str("<expr>"),
        }
    }
}

// ============================================================================
// Parallel Processing
// ============================================================================

/// Runs `job` on every source using at most `jobs` threads.
///
/// Results come back in input order. A failing source does not stop the
/// others.
pub fn process_sources<T, F>(sources: &[InputSource], jobs: usize, job: F) -> Result<Vec<Result<T>>>
where
    T: Send,
    F: Fn(&InputSource, String) -> Result<T> + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.max(1))
        .build()
        .map_err(|e| JxtError::CommandExecution(format!("Failed to start worker pool: {}", e)))?;

    debug!(sources = sources.len(), jobs, "processing inputs");

    Ok(pool.install(|| {
        sources
            .par_iter()
            .map(|source| source.read().and_then(|text| job(source, text)))
            .collect()
    }))
}

/// Walks per-source results in input order.
///
/// Successes go to `emit`, which returns the token and error-token counts
/// of that input. Failures are logged and counted. Returns an error if any
/// input failed.
pub fn report_outcomes<T>(
    sources: &[InputSource],
    results: Vec<Result<T>>,
    mut emit: impl FnMut(&InputSource, T) -> Result<(usize, usize)>,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (source, result) in sources.iter().zip(results) {
        match result {
            Ok(value) => {
                let (tokens, error_tokens) = emit(source, value)?;
                summary = summary.with_input(tokens, error_tokens);
            },
            Err(e) => {
                error!(source = %source, "{}", e);
                summary = summary.with_failure();
            },
        }
    }

    debug!(?summary, "inputs processed");

    if summary.inputs_failed > 0 {
        return Err(JxtError::CommandExecution(format!(
            "{} {}",
            summary.inputs_failed,
            error_messages::INPUTS_FAILED
        )));
    }

    Ok(summary)
}

/// Converts a byte offset within `line` to a 1-based character column.
pub fn column_of(line: &str, byte_offset: usize) -> usize {
    line[..byte_offset].chars().count() + 1
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when neither files nor an expression were given.
    pub const NO_INPUTS: &str = "No input files or expression specified";

    /// Error when `-` appears more than once.
    pub const STDIN_TWICE: &str = "Standard input ('-') may only be given once";

    /// Error when some inputs could not be processed.
    pub const INPUTS_FAILED: &str = "input(s) failed to process";

    /// Error when `check` found malformed tokens.
    pub const ERROR_TOKENS_FOUND: &str = "error token(s) found";
}
