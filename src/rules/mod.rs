//! Rule catalog for hunkcheck.
//!
//! A catalog maps each [`Language`](crate::language::Language) to an ordered
//! list of categories, each holding an ordered list of compiled rules. The
//! built-in table lives in `builtin.rs`; adding a language or a rule there is
//! a data change only.
//!
//! Error handling:
//! - Invalid regex patterns fail catalog construction, never individual lines
//! - Languages without rules resolve to an empty slice

mod builtin;
mod catalog;
mod types;


// Re-export public API
pub use catalog::{CategoryRules, RuleCatalog};
pub use types::{Category, Rule, RuleDefinition, Severity};
