//! Coolt CLI - command-line front end for the Cool lexer.
//!
//! This is the main entry point for the coolt CLI application.
//! It uses clap for argument parsing and dispatches to the appropriate
//! command handler.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::{LexerOverrides, OutputFormat},
    run_check, run_lex, CheckArgs, LexArgs,
};
use config::Config;
use error::{CooltError, Result};

/// Coolt - lexical analysis for Cool programs
///
/// Scans Cool source text into tokens, renders the token stream, and
/// reports lexical errors.
#[derive(Parser, Debug)]
#[command(name = "coolt")]
#[command(author = "Cool Toolchain Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analysis for Cool programs", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "COOLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "COOLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "COOLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the coolt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a source file and print its token stream
    ///
    /// Lexical errors appear in the stream as ILLEGAL tokens; the command
    /// still succeeds.
    Lex(LexCommandArgs),

    /// Scan a source file and report lexical errors
    ///
    /// Prints one located diagnostic per error on stderr and exits with
    /// status 1 if any were found.
    Check(CheckCommandArgs),
}

/// Lexer options shared by every subcommand.
#[derive(clap::Args, Debug)]
struct LexerFlags {
    /// Treat `--` as the start of a line comment
    #[arg(long)]
    line_comments: bool,

    /// Longest accepted string literal, in characters
    #[arg(long, value_name = "N")]
    max_string_length: Option<usize>,
}

impl From<LexerFlags> for LexerOverrides {
    fn from(flags: LexerFlags) -> Self {
        Self {
            line_comments: flags.line_comments,
            max_string_length: flags.max_string_length,
        }
    }
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommandArgs {
    /// Source file (default: standard input)
    input: Option<PathBuf>,

    /// Output file (default: standard output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    #[command(flatten)]
    lexer: LexerFlags,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommandArgs {
    /// Source file (default: standard input)
    input: Option<PathBuf>,

    #[command(flatten)]
    lexer: LexerFlags,
}

/// Main entry point for the coolt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color).context("failed to set up logging")?;

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    let code = execute_command(cli.command, config)?;
    Ok(code)
}

/// Initialize the logging system.
///
/// Log output goes to stderr so that token streams on stdout stay clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
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
        .map_err(|e| CooltError::Config(format!("Failed to initialize logging: {}", e)))?;

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
fn execute_command(command: Commands, config: Config) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Lex(args) => execute_lex(args, config),
        Commands::Check(args) => execute_check(args, config),
    }
}

/// Execute the lex command.
fn execute_lex(args: LexCommandArgs, config: Config) -> anyhow::Result<ExitCode> {
    let lex_args = LexArgs {
        input: args.input,
        output: args.output,
        format: args.format,
        overrides: args.lexer.into(),
        config,
    };
    let outcome = run_lex(lex_args).context("lex failed")?;
    debug!(
        tokens = outcome.tokens,
        errors = outcome.errors,
        "lex finished"
    );
    Ok(ExitCode::SUCCESS)
}

/// Execute the check command.
fn execute_check(args: CheckCommandArgs, config: Config) -> anyhow::Result<ExitCode> {
    let check_args = CheckArgs {
        input: args.input,
        overrides: args.lexer.into(),
        config,
    };
    let report = run_check(check_args).context("check failed")?;
    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
