// unstyle/src/cli.rs
//! This file defines the command-line interface (CLI) for the unstyle application.
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

/// Printed to stdout whenever the arguments cannot be parsed.
pub const USAGE: &str = "Usage: unstyle <html-file>";

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "unstyle",
    version = env!("CARGO_PKG_VERSION"),
    about = "Replace known inline style attributes with utility classes",
    long_about = "unstyle rewrites an HTML file in place, replacing a fixed catalog of inline style=\"...\" attributes with equivalent class attributes (or removing them when the stylesheet already covers them). Unknown styles are left untouched.",
)]
pub struct Cli {
    /// The HTML file to rewrite in place.
    #[arg(value_name = "HTML_FILE")]
    pub html_file: PathBuf,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress logging and the rewrite summary.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to additional style rules (YAML), merged into the built-in catalog.
    #[arg(long = "config", value_name = "FILE", help = "Path to a YAML file with additional or overriding style rules.")]
    pub config: Option<PathBuf>,

    /// Explicitly enable these rule names (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Enable these rule names, including opt-in rules (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these rule names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Disable these rule names (comma-separated).")]
    pub disable: Vec<String>,

    /// Print the rewritten document instead of writing the file.
    #[arg(long = "dry-run", short = 'n', help = "Print the rewritten document to stdout and leave the file untouched.")]
    pub dry_run: bool,

    /// Show a unified diff of the changes.
    #[arg(long, short = 'D', help = "Show a unified diff of the changes.")]
    pub diff: bool,

    /// Suppress the rewrite summary.
    #[arg(long = "no-summary", help = "Suppress the per-rule rewrite summary.")]
    pub no_summary: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,
}
