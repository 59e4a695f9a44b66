//! Error types for hunkcheck.
//!
//! Uses thiserror for derive macros. Only the glue around the review pipeline
//! produces errors; parsing and matching a diff never fail.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for hunkcheck operations.
#[derive(Error, Debug)]
pub enum ReviewError {
    /// The diff input could not be located or read.
    #[error("Diff file not found: {0}")]
    InputNotFound(String),

    /// Invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A rule pattern failed to compile while building a catalog.
    #[error("invalid rule catalog: {0}")]
    Catalog(String),

    /// The report could not be rendered or written.
    #[error("failed to write report: {0}")]
    OutputError(String),
}

impl ReviewError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReviewError::InputNotFound(_) => exit_codes::USER_ERROR,
            ReviewError::UserError(_) => exit_codes::USER_ERROR,
            ReviewError::Catalog(_) => exit_codes::USER_ERROR,
            ReviewError::OutputError(_) => exit_codes::OUTPUT_FAILURE,
        }
    }
}

/// Result type alias for hunkcheck operations.
pub type Result<T> = std::result::Result<T, ReviewError>;
