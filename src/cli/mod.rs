//! CLI module for the Lingo toolchain
//!
//! This module provides the command-line interface.
//!
//! ## Commands
//!
//! - `lex <file>` - Print the token stream
//! - `parse <file>` - Print the AST
//! - `fmt <file|dir>` - Format Lingo source files
//! - `handlers <file>` - List a script's handlers
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

use clap::{Parser, Subcommand};

use crate::format::{FormatConfig, LineEnding};
use crate::version::LINGO_VERSION;

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
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Lingo scripting-language tools
#[derive(Parser, Debug)]
#[command(name = "lingo")]
#[command(version = LINGO_VERSION)]
#[command(about = "Lexer, parser and formatter for Lingo scripts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tokenize a script and print its tokens
    Lex {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print one JSON object per token
        #[arg(long)]
        json: bool,
    },

    /// Parse a script and print its AST
    Parse {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Format Lingo source files
    Fmt {
        /// File or directory to format
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
        /// Check formatting without modifying files
        #[arg(long)]
        check: bool,
        /// Show diff of formatting changes
        #[arg(long)]
        diff: bool,
        /// Indent with N spaces instead of tabs
        #[arg(long, value_name = "N")]
        spaces: Option<usize>,
        /// Write CRLF line endings
        #[arg(long)]
        crlf: bool,
    },

    /// List a script's handlers with their arguments and globals
    Handlers {
        /// Script file to inspect
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
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
        Command::Lex { file, json } => commands::lex_file(&file, json),
        Command::Parse { file } => commands::parse_file(&file),
        Command::Fmt {
            path,
            check,
            diff,
            spaces,
            crlf,
        } => {
            let config = format_config(spaces, crlf);
            commands::format_files(&path, &config, check, diff)
        }
        Command::Handlers { file } => commands::list_handlers(&file),
    }
}

/// Build the formatter configuration from `fmt` flags.
fn format_config(spaces: Option<usize>, crlf: bool) -> FormatConfig {
    let mut config = FormatConfig::new();
    if let Some(width) = spaces {
        config = config.with_spaces(width);
    }
    if crlf {
        config = config.with_line_ending(LineEnding::CrLf);
    }
    config
}

// ============================================================================
// Tests
// ============================================================================
