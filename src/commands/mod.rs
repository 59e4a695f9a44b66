//! Command execution for hunkcheck.
//!
//! Loads config and the diff, runs the review pipeline and writes the
//! rendered report. Everything that can fail lives here, not in the pipeline.

#[cfg(test)]
mod tests;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Result, ReviewError};
use crate::output::write_report;
use crate::render::render;
use crate::review::{ReviewResult, Reviewer};
use crate::rules::RuleCatalog;
use std::path::Path;
use tracing::{debug, info};

/// Execute a review run from the working directory.
///
/// # Exit Codes
///
/// - 0: Review completed, whatever the number of issues
/// - 1: Diff not found, invalid config or rule patterns
/// - 2: Report could not be written
pub fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        ReviewError::UserError(format!("failed to determine current directory: {}", e))
    })?;

    run_in(cli, &cwd).map(|_| ())
}

/// Execute a review run, resolving the default config file inside `dir`.
///
/// Returns the review result after the report has been written.
pub fn run_in(cli: &Cli, dir: &Path) -> Result<ReviewResult> {
    let config = Config::discover(cli.config.as_deref(), dir)?;
    debug!(?config, "resolved config");

    let diff_text = read_diff(&cli.diff)?;
    info!("Analyzing diff: {}", cli.diff.display());

    let catalog = RuleCatalog::builtin()?;
    let reviewer = Reviewer::new(&catalog).with_filter(config.path_filter()?);
    let result = reviewer.review(&diff_text);

    info!(
        files_reviewed = result.files_reviewed,
        issues = result.issues.len(),
        "{}",
        result.summary
    );

    let format = cli.format.unwrap_or(config.format);
    let report = render(&result, format)?;
    write_report(&report, cli.output.as_deref())?;

    if let Some(path) = &cli.output {
        info!(format = %format, "Report written to {}", path.display());
    }

    Ok(result)
}

/// Load the diff text, failing before the pipeline when it is missing.
fn read_diff(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(ReviewError::InputNotFound(path.display().to_string()));
    }

    std::fs::read_to_string(path).map_err(|e| {
        ReviewError::UserError(format!(
            "failed to read diff file '{}': {}",
            path.display(),
            e
        ))
    })
}
