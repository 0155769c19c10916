//! CLI module for sigil
//!
//! This module provides the command-line interface over the tokenizer and parser.
//!
//! ## Commands
//!
//! - `lex <file>` - Print the token stream
//! - `parse <file>` - Print the AST and diagnostics
//! - `grammar` - Print the built-in grammar as a TOML grammar file
//! - `<file>` - Same as `parse <file>`, with the same options
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create an error with a custom exit code.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self::new(message, ExitCode(code))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit code for invalid grammar files (distinct from "source has syntax errors").
pub const CONFIG_ERROR: i32 = 2;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Tokenizer and recovering parser for the sigil scripting dialect
#[derive(Parser, Debug)]
#[command(name = "sigil")]
#[command(version = VERSION)]
#[command(about = "Tokenize and parse sigil scripts", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to parse (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Options for the bare `sigil FILE` form
    #[command(flatten)]
    pub parse: ParseArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the token stream of a file
    Lex {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Split on whitespace and classify whole words instead of prefix scanning
        #[arg(long)]
        words: bool,
        /// Print tokens as JSON
        #[arg(long)]
        json: bool,
        /// Grammar file to use instead of the built-in grammar
        #[arg(long, value_name = "GRAMMAR")]
        grammar: Option<PathBuf>,
    },

    /// Parse a file and print its AST and diagnostics
    Parse {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[command(flatten)]
        options: ParseArgs,
    },

    /// Print the built-in grammar as TOML
    Grammar,
}

/// Options shared by `parse` and the bare `sigil FILE` form.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ParseArgs {
    /// Output format for the AST
    #[arg(long, value_enum, default_value_t = OutputFormat::Sexpr)]
    pub format: OutputFormat,
    /// Grammar file to use instead of the built-in grammar
    #[arg(long, value_name = "GRAMMAR")]
    pub grammar: Option<PathBuf>,
    /// Do not require a delimiter between an `if` condition and its block
    #[arg(long)]
    pub no_delimiter: bool,
    /// Render diagnostics with source highlighting
    #[arg(long)]
    pub pretty: bool,
}

/// AST output format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// S-expression, one line
    #[default]
    Sexpr,
    /// JSON of the whole parse result
    Json,
    /// Rust debug representation
    Debug,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Lex {
            file,
            words,
            json,
            grammar,
        }) => commands::lex_file(&file, words, json, grammar.as_deref()),
        Some(Command::Parse { file, options }) => commands::parse_file(&file, &options),
        Some(Command::Grammar) => commands::print_grammar(),
        None => {
            // Default: parse the file if provided
            if let Some(file) = cli.file {
                commands::parse_file(&file, &cli.parse)
            } else {
                Err(CliError::failure("Error: no input file (try `sigil --help`)"))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_lex() {
        let cli = Cli::try_parse_from(["sigil", "lex", "script.sg", "--words"]).unwrap();
        if let Some(Command::Lex { words, json, grammar, .. }) = cli.command {
            assert!(words);
            assert!(!json);
            assert!(grammar.is_none());
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_parse_with_options() {
        let cli = Cli::try_parse_from([
            "sigil",
            "parse",
            "script.sg",
            "--format",
            "json",
            "--grammar",
            "g.toml",
            "--no-delimiter",
        ])
        .unwrap();
        if let Some(Command::Parse { options, .. }) = cli.command {
            assert_eq!(options.format, OutputFormat::Json);
            assert_eq!(options.grammar, Some(PathBuf::from("g.toml")));
            assert!(options.no_delimiter);
            assert!(!options.pretty);
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_cli_parse_default_format() {
        let cli = Cli::try_parse_from(["sigil", "parse", "script.sg"]).unwrap();
        if let Some(Command::Parse { options, .. }) = cli.command {
            assert_eq!(options.format, OutputFormat::Sexpr);
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_cli_parse_grammar() {
        let cli = Cli::try_parse_from(["sigil", "grammar"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Grammar)));
    }

    #[test]
    fn test_cli_bare_file() {
        let cli = Cli::try_parse_from(["sigil", "script.sg"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, Some(PathBuf::from("script.sg")));
        assert_eq!(cli.parse.format, OutputFormat::Sexpr);
        assert!(!cli.parse.no_delimiter);
    }

    #[test]
    fn test_cli_bare_file_accepts_parse_options() {
        let cli = Cli::try_parse_from(["sigil", "script.sg", "--format", "json", "--no-delimiter", "--pretty"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, Some(PathBuf::from("script.sg")));
        assert_eq!(cli.parse.format, OutputFormat::Json);
        assert!(cli.parse.no_delimiter);
        assert!(cli.parse.pretty);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["sigil", "parse", "script.sg", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_execute_without_file_fails() {
        let cli = Cli::try_parse_from(["sigil"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
