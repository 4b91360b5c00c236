//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// dependor - static import graph extraction for JavaScript/TypeScript
#[derive(Parser, Debug, Clone)]
#[command(name = "dependor")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract the static dependency graph of a JavaScript/TypeScript source tree")]
#[command(
    long_about = "dependor walks a source tree, lexes the imports, exports and re-exports of \
every .js/.jsx/.ts/.tsx file, and prints an adjacency list mapping each file to the files it \
imports. Aliases, extensionless imports and index barrels are resolved using dependor.json \
in the scanned root."
)]
#[command(after_help = "EXAMPLES:

    # Print the graph of the current directory as JSON
    dependor

    # Parse a specific root
    dependor ./my-project

    # Dump the graph to dependor-output.json in the working directory
    dependor --write

    # Human-readable dump
    dependor --pretty

    # Single-threaded parse (reproducible ordering of diagnostics)
    dependor --no-parallel
")]
pub struct Args {
    /// Root directory to parse (defaults to the current directory)
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Dump the graph to dependor-output.json in the working directory
    #[arg(long, help = "Write the graph to dependor-output.json instead of stdout")]
    pub write: bool,

    /// Write the graph to a specific file
    #[arg(
        long,
        value_name = "FILE",
        help = "Write the graph to FILE instead of stdout (overrides --write)"
    )]
    pub output_file: Option<PathBuf>,

    /// Print a human-readable dump instead of JSON
    #[arg(long, help = "Print a human-readable dump of the graph to stdout")]
    pub pretty: bool,

    /// Disable the worker pool and lex files sequentially
    #[arg(long, help = "Disable parallel lexing (results are identical, just slower)")]
    pub no_parallel: bool,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress non-essential output")]
    pub quiet: bool,

    /// Log skipped directories and dropped files
    #[arg(short, long, help = "Log skipped directories and dropped files to stderr")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colors in the --pretty dump")]
    pub no_colors: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
