//! Hunkcheck: diff-scoped pattern review.
//!
//! Scans a unified diff and flags lines added by the change that match known
//! problematic patterns for the file's language. The review pipeline
//! ([`review::Reviewer`]) is a pure function from diff text to
//! [`review::ReviewResult`]; the remaining modules are the CLI around it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod language;
pub mod logging;
pub mod output;
pub mod render;
pub mod review;
pub mod rules;
