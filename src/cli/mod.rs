//! CLI argument parsing for hunkcheck.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Execution lives in the `commands` module.

use crate::config::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Hunkcheck: flag risky constructs in the lines a diff adds.
///
/// Reads a unified diff, classifies every touched file by extension and
/// matches each added line against the built-in rules for its language.
#[derive(Parser, Debug, Clone)]
#[command(name = "hunkcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Diff file to review.
    #[arg(long, value_name = "PATH")]
    pub diff: PathBuf,

    /// Write the report to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report format [default: config value, then text].
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file [default: ./hunkcheck.yaml when present].
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log progress to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Log debug details to stderr.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
