//! Tokens command implementation.
//!
//! Dumps every token of every input, either as tab-separated text or as a
//! single JSON array of records.

use std::io::Write;
use std::path::PathBuf;

use jsonata_lex::{tokenize_lines, TokenKind};
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::common::{process_sources, report_outcomes, InputSource};
use crate::commands::traits::{Command, RunSummary};
use crate::config::TokenFormat;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files (`-` for stdin).
    pub files: Vec<PathBuf>,
    /// Inline expression, used instead of files.
    pub expr: Option<String>,
    /// Number of inputs processed in parallel.
    pub jobs: usize,
    /// Dump format.
    pub format: TokenFormat,
}

/// One token as dumped by `jxt tokens`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    /// Input the token came from.
    pub source: String,
    /// One-based line number.
    pub line: usize,
    /// Byte offset of the first byte within the line.
    pub start: usize,
    /// Byte offset one past the last byte within the line.
    pub end: usize,
    /// Category label.
    pub style: &'static str,
    /// Lexeme text.
    pub text: String,
}

impl TokenRecord {
    /// Formats the record as one tab-separated line.
    pub fn to_text(&self, with_source: bool) -> String {
        let location = format!("{}:{}-{}", self.line, self.start, self.end);
        if with_source {
            format!("{}:{}\t{}\t{}", self.source, location, self.style, self.text)
        } else {
            format!("{}\t{}\t{}", location, self.style, self.text)
        }
    }
}

/// Lexes `text` into records tagged with `source`.
pub fn collect_records(source: &str, text: &str) -> Vec<TokenRecord> {
    tokenize_lines(text)
        .iter()
        .flat_map(|line| {
            line.lexemes().map(move |(token, lexeme)| TokenRecord {
                source: source.to_string(),
                line: line.index + 1,
                start: token.span.start,
                end: token.span.end,
                style: token.kind.style(),
                text: lexeme.to_string(),
            })
        })
        .collect()
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Execute the command, writing the dump to stdout.
    pub fn run(&self) -> Result<RunSummary> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Execute the command, writing the dump to `out`.
    pub fn run_to(&self, out: &mut impl Write) -> Result<RunSummary> {
        let sources = InputSource::from_args(&self.args.files, self.args.expr.as_deref())?;
        let with_source = sources.len() > 1;

        let results = process_sources(&sources, self.args.jobs, |source, text| {
            debug!(source = %source, bytes = text.len(), "collecting tokens");
            Ok(collect_records(&source.to_string(), &text))
        })?;

        let mut all_records = Vec::new();
        let outcome = report_outcomes(&sources, results, |_, records| {
            let errors = records
                .iter()
                .filter_map(|record| TokenKind::from_style(record.style))
                .filter(|kind| kind.is_error())
                .count();
            let count = records.len();

            match self.args.format {
                TokenFormat::Text => {
                    for record in &records {
                        writeln!(out, "{}", record.to_text(with_source))?;
                    }
                },
                TokenFormat::Json => all_records.extend(records),
            }

            Ok((count, errors))
        });

        // Records of inputs that did lex are written even if another failed.
        if self.args.format == TokenFormat::Json {
            serde_json::to_writer_pretty(&mut *out, &all_records)?;
            writeln!(out)?;
        }
        out.flush()?;
        let summary = outcome?;

        if self.args.verbose {
            info!(
                inputs = summary.inputs_processed,
                tokens = summary.tokens,
                "tokens finished"
            );
        }

        Ok(summary)
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = RunSummary;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let command = TokensCommand::new(args);
    command.execute().map(|_| ())
}
