//! Highlight command implementation.
//!
//! Prints each input with ANSI colours per token category. Whitespace and
//! anything between tokens is copied through unchanged. Every line is
//! written with a `\n` terminator, so `\r\n` input comes out as `\n` and a
//! missing final newline is added.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use jsonata_lex::{tokenize_lines, TokenKind};
use tracing::{debug, info};

use crate::commands::common::{process_sources, report_outcomes, InputSource};
use crate::commands::traits::{Command, RunSummary};
use crate::config::Theme;
use crate::error::Result;

/// SGR sequence that resets all attributes.
const RESET: &str = "\x1b[0m";

/// SGR parameter for underline, used on error-qualified tokens.
const UNDERLINE: &str = "4";

/// Arguments for the highlight command.
#[derive(Debug, Clone)]
pub struct HighlightArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files (`-` for stdin).
    pub files: Vec<PathBuf>,
    /// Inline expression, used instead of files.
    pub expr: Option<String>,
    /// Number of inputs processed in parallel.
    pub jobs: usize,
    /// Emit ANSI colour sequences.
    pub color: bool,
    /// Colour per token category.
    pub theme: Theme,
}

impl Default for HighlightArgs {
    fn default() -> Self {
        Self {
            verbose: false,
            files: Vec::new(),
            expr: None,
            jobs: 1,
            color: true,
            theme: Theme::default(),
        }
    }
}

/// One rendered input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Rendered text, one terminated line per input line.
    pub text: String,
    /// Number of tokens lexed.
    pub tokens: usize,
    /// Number of error-qualified tokens.
    pub error_tokens: usize,
}

/// Renders `text` with the colours of `theme`.
///
/// With `color` off each line is reproduced without escapes. Lines are
/// always terminated with `\n`, whatever the input used.
pub fn render(text: &str, theme: &Theme, color: bool) -> Rendered {
    let mut out = String::with_capacity(text.len() * 2);
    let mut tokens = 0;
    let mut error_tokens = 0;

    for line in tokenize_lines(text) {
        tokens += line.tokens.len();
        error_tokens += line.tokens.iter().filter(|token| token.kind.is_error()).count();

        for (kind, piece) in line.segments() {
            match kind {
                Some(kind) if color => paint(&mut out, piece, kind, theme),
                _ => out.push_str(piece),
            }
        }
        out.push('\n');
    }

    Rendered {
        text: out,
        tokens,
        error_tokens,
    }
}

/// Appends `piece` wrapped in the SGR sequence for `kind`.
fn paint(out: &mut String, piece: &str, kind: TokenKind, theme: &Theme) {
    let mut params = Vec::with_capacity(2);
    if kind.is_error() {
        params.push(UNDERLINE);
    }
    if let Some(code) = theme.color_for(kind).sgr() {
        params.push(code);
    }

    if params.is_empty() {
        out.push_str(piece);
        return;
    }

    out.push_str("\x1b[");
    out.push_str(&params.join(";"));
    out.push('m');
    out.push_str(piece);
    out.push_str(RESET);
}

/// Highlight command handler.
pub struct HighlightCommand {
    args: HighlightArgs,
}

impl HighlightCommand {
    /// Execute the command, writing rendered inputs to stdout.
    pub fn run(&self) -> Result<RunSummary> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Execute the command, writing rendered inputs to `out`.
    pub fn run_to(&self, out: &mut impl Write) -> Result<RunSummary> {
        let start_time = Instant::now();
        let sources = InputSource::from_args(&self.args.files, self.args.expr.as_deref())?;

        let theme = &self.args.theme;
        let color = self.args.color;
        let results = process_sources(&sources, self.args.jobs, |source, text| {
            debug!(source = %source, bytes = text.len(), "highlighting");
            Ok(render(&text, theme, color))
        })?;

        let summary = report_outcomes(&sources, results, |_, rendered| {
            out.write_all(rendered.text.as_bytes())?;
            Ok((rendered.tokens, rendered.error_tokens))
        })?;
        out.flush()?;

        if self.args.verbose {
            info!(
                inputs = summary.inputs_processed,
                tokens = summary.tokens,
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "highlight finished"
            );
        }

        Ok(summary)
    }
}

impl Command for HighlightCommand {
    type Args = HighlightArgs;
    type Output = RunSummary;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }
}

/// Run the highlight command.
pub fn run_highlight(args: HighlightArgs) -> Result<()> {
    let command = HighlightCommand::new(args);
    command.execute().map(|_| ())
}
