//! Configuration model for hunkcheck.
//!
//! This module defines the Config struct that represents `hunkcheck.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored)
//! and sensible defaults for every field. The rule catalog itself is built in
//! and cannot be changed from config.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use operations::DEFAULT_CONFIG_FILE;
pub use types::OutputFormat;
