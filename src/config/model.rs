//! Config struct definition.

use super::types::OutputFormat;
use serde::{Deserialize, Serialize};

/// Configuration for a hunkcheck run.
///
/// This struct represents the contents of `hunkcheck.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report format used when `--format` is not given.
    pub format: OutputFormat,

    /// Glob patterns (forward slashes) for diff paths to leave out of the review.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}
