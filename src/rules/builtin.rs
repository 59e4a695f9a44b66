//! Built-in rule table.

use super::types::{Category, RuleDefinition};
use crate::language::Language;

use super::types::Category::{BestPractices, Bugs, Security};

#[rustfmt::skip]
const RUST: &[RuleDefinition] = &[
    rust(BestPractices, r"unwrap\(\)", "Consider using proper error handling instead of unwrap()"),
    rust(BestPractices, r"println!\s*\(", "Prefer logging over println! for production code"),
    rust(BestPractices, r"Vec::new\(\)\.push\(", "Use Vec::with_capacity() when size is known"),
    rust(BestPractices, r"\.clone\(\)", "Avoid unnecessary clones, consider references"),
    rust(Bugs, r"panic!", "Avoid panic! in production code, use Result<T, E>"),
    rust(Bugs, r"expect\(", "Replace expect() with proper error handling"),
    rust(Bugs, r"unsafe\s", "Unsafe block detected - ensure it's necessary and safe"),
    rust(Security, r"println!\s*\(.*password", "Don't log passwords or sensitive data"),
    rust(Security, r"dbg!\s*\(.*password", "Don't include passwords in debug output"),
    rust(Security, r"env!\s*\(.+.\+.\+", "Be careful with string concatenation in commands"),
];

#[rustfmt::skip]
const GO: &[RuleDefinition] = &[
    go(BestPractices, r"fmt\.Print\w*\(", "Use logging instead of fmt.Print"),
    go(BestPractices, r"\[\]byte\(string\)", "Use []byte(string) - more idiomatic"),
    go(BestPractices, r"if err != nil \{[^}]+\}", "Consider wrapping with if err == nil"),
    go(Bugs, r"defer\s+\w+\(\)", "Check for errors before defer"),
    go(Bugs, r"range\s+\w+\(\)\s+\{", "Ensure range limit is checked"),
    go(Security, r"fmt\.Sprint.*password", "Don't include passwords in formatted strings"),
    go(Security, r"os\.Exec.*\+.*password", "Don't concatenate passwords in commands"),
];

const fn rust(category: Category, pattern: &'static str, message: &'static str) -> RuleDefinition {
    RuleDefinition::warning(Language::Rust, category, pattern, message)
}

const fn go(category: Category, pattern: &'static str, message: &'static str) -> RuleDefinition {
    RuleDefinition::warning(Language::Go, category, pattern, message)
}

/// Built-in definitions for `language`, in output order.
pub(super) fn definitions_for(language: Language) -> &'static [RuleDefinition] {
    match language {
        Language::Rust => RUST,
        Language::Go => GO,
        Language::Python
        | Language::JavaScript
        | Language::TypeScript
        | Language::Java
        | Language::Generic => &[],
    }
}
