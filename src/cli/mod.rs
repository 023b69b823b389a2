//! CLI module for clangprint
//!
//! ## Commands
//!
//! - `ident <NAME>...` - Print identifiers as the printer would emit them
//! - `header <MANIFEST>` - Assemble an interop header from a JSON manifest
//! - `shim-include <HEADER>` - Print the support-header include cascade
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
use clangprint_core::lang::dialect::Dialect;

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

    /// Render a diagnostic with miette's report handler.
    pub fn from_diagnostic(diagnostic: impl miette::Diagnostic + Send + Sync + 'static) -> Self {
        Self::failure(format!("{:?}", miette::Report::new(diagnostic)))
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

// ============================================================================
// Clap CLI definition
// ============================================================================

/// C/C++ syntax emitter for interop headers
#[derive(Parser, Debug)]
#[command(name = "clangprint")]
#[command(version = VERSION)]
#[command(about = "C/C++ syntax emitter for interop headers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Dialect whose reserved words are avoided (clang, c89..c23, c++98..c++23)
    #[arg(long, global = true, default_value = "clang", value_name = "DIALECT")]
    pub dialect: Dialect,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print identifiers as they would be emitted
    Ident {
        /// Names to sanitize
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },

    /// Assemble a header from a manifest
    Header {
        /// JSON manifest describing the module
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Print the include cascade for a support header
    ShimInclude {
        /// Header file name inside the support directory
        #[arg(value_name = "HEADER")]
        header: String,
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
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    tracing::debug!(dialect = %cli.dialect, "executing command");
    match cli.command {
        Command::Ident { names } => commands::print_identifiers(&names, cli.dialect),
        Command::Header { manifest, output } => commands::emit_header(&manifest, output.as_deref(), cli.dialect),
        Command::ShimInclude { header } => commands::print_shim_include(&header),
    }
}

// ============================================================================
// Tests
// ============================================================================
