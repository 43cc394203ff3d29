//! jxt CLI - Highlighting and token tools for JSONata expressions.
//!
//! This is the main entry point for the jxt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_highlight, run_tokens, CheckArgs, HighlightArgs, TokensArgs};
use config::{Config, TokenFormat};
use error::{JxtError, Result};

/// jxt - Highlighting and token tools for JSONata
///
/// jxt lexes JSONata expressions line by line and prints them with
/// syntax colouring, dumps their tokens, or reports malformed tokens.
#[derive(Parser, Debug)]
#[command(name = "jxt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Highlighting and token tools for JSONata expressions", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "JXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "JXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "JXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the jxt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print expressions with syntax colouring
    ///
    /// Lexes each input line by line and prints it with ANSI colours
    /// per token category, taken from the configured theme.
    Highlight(HighlightCommand),

    /// Dump the tokens of expressions
    ///
    /// Prints every token with its line, byte span, category and text.
    Tokens(TokensCommand),

    /// Report malformed tokens
    ///
    /// Lists unterminated strings, unrepresentable numbers and stray
    /// characters, and exits non-zero if any were found.
    Check(CheckCommand),
}

/// Input selection shared by every subcommand.
#[derive(Args, Debug)]
struct InputArgs {
    /// Input files (`-` reads standard input)
    files: Vec<PathBuf>,

    /// Lex this expression instead of reading files
    #[arg(short, long, conflicts_with = "files")]
    expr: Option<String>,

    /// Number of parallel jobs (default: from config)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,
}

impl InputArgs {
    /// Resolves the job count against the configuration.
    fn jobs(&self, config: &Config) -> usize {
        self.jobs.map(|jobs| jobs as usize).unwrap_or(config.jobs)
    }
}

/// Arguments for the highlight subcommand.
#[derive(Parser, Debug)]
struct HighlightCommand {
    #[command(flatten)]
    input: InputArgs,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    #[command(flatten)]
    input: InputArgs,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<TokenFormat>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    #[command(flatten)]
    input: InputArgs,
}

/// Main entry point for the jxt CLI.
///
/// Parses command-line arguments, loads configuration, initializes
/// logging, and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first so its verbose flag reaches the logger
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    // Initialize logging
    init_logging(verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, verbose, cli.no_color, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout carries only command output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| JxtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, no_color: bool, config: Config) -> Result<()> {
    match command {
        Commands::Highlight(args) => execute_highlight(args, verbose, no_color, config),
        Commands::Tokens(args) => execute_tokens(args, verbose, config),
        Commands::Check(args) => execute_check(args, verbose, config),
    }
}

/// Execute the highlight command.
fn execute_highlight(args: HighlightCommand, verbose: bool, no_color: bool, config: Config) -> Result<()> {
    let highlight_args = HighlightArgs {
        verbose,
        jobs: args.input.jobs(&config),
        files: args.input.files,
        expr: args.input.expr,
        color: !no_color && config.highlight.color,
        theme: config.theme,
    };
    run_highlight(highlight_args)
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, verbose: bool, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        verbose,
        jobs: args.input.jobs(&config),
        files: args.input.files,
        expr: args.input.expr,
        format: args.format.unwrap_or(config.tokens.format),
    };
    run_tokens(tokens_args)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        verbose,
        jobs: args.input.jobs(&config),
        files: args.input.files,
        expr: args.input.expr,
    };
    run_check(check_args)
}
