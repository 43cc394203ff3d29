//! Check command implementation.
//!
//! Reports every error-qualified token (unterminated strings, numbers that
//! overflow, stray characters) and fails if any were found.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use jsonata_lex::{tokenize_lines, TokenKind};
use tracing::{debug, info};

use crate::commands::common::{
    column_of, error_messages, process_sources, report_outcomes, InputSource,
};
use crate::commands::traits::{Command, RunSummary};
use crate::error::{JxtError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files (`-` for stdin).
    pub files: Vec<PathBuf>,
    /// Inline expression, used instead of files.
    pub expr: Option<String>,
    /// Number of inputs processed in parallel.
    pub jobs: usize,
}

/// A malformed token found in one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// One-based line number.
    pub line: usize,
    /// One-based character column.
    pub column: usize,
    /// Error category of the token.
    pub kind: TokenKind,
    /// Lexeme text.
    pub text: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {} '{}'", self.line, self.column, self.kind, self.text)
    }
}

/// Result of checking one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Number of tokens lexed.
    pub tokens: usize,
    /// Error-qualified tokens in source order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Lexes `text` and collects its error-qualified tokens.
pub fn check_text(text: &str) -> CheckReport {
    let mut report = CheckReport::default();

    for line in tokenize_lines(text) {
        report.tokens += line.tokens.len();
        report.diagnostics.extend(
            line.lexemes()
                .filter(|(token, _)| token.kind.is_error())
                .map(|(token, lexeme)| Diagnostic {
                    line: line.index + 1,
                    column: column_of(line.line, token.span.start),
                    kind: token.kind,
                    text: lexeme.to_string(),
                }),
        );
    }

    report
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Execute the command, writing diagnostics to stdout.
    pub fn run(&self) -> Result<RunSummary> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Execute the command, writing diagnostics to `out`.
    pub fn run_to(&self, out: &mut impl Write) -> Result<RunSummary> {
        let sources = InputSource::from_args(&self.args.files, self.args.expr.as_deref())?;

        let results = process_sources(&sources, self.args.jobs, |source, text| {
            debug!(source = %source, bytes = text.len(), "checking");
            Ok(check_text(&text))
        })?;

        let summary = report_outcomes(&sources, results, |source, report| {
            for diagnostic in &report.diagnostics {
                writeln!(out, "{}:{}", source, diagnostic)?;
            }
            Ok((report.tokens, report.diagnostics.len()))
        })?;
        out.flush()?;

        if summary.error_tokens > 0 {
            return Err(JxtError::CommandExecution(format!(
                "{} {}",
                summary.error_tokens,
                error_messages::ERROR_TOKENS_FOUND
            )));
        }

        if self.args.verbose {
            info!(
                inputs = summary.inputs_processed,
                tokens = summary.tokens,
                "no error tokens found"
            );
        }

        Ok(summary)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = RunSummary;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let command = CheckCommand::new(args);
    command.execute().map(|_| ())
}
