//! Rule, category and severity types.

use crate::language::Language;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Severity attached to a rule and copied onto its findings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    #[default]
    Warning,
    Info,
}

impl Severity {
    /// Severities from most to least severe.
    pub const ALL: [Severity; 3] = [Severity::Error, Severity::Warning, Severity::Info];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BestPractices,
    Bugs,
    Security,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::BestPractices => "best_practices",
            Category::Bugs => "bugs",
            Category::Security => "security",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uncompiled rule data, the input to [`RuleCatalog::from_definitions`].
///
/// [`RuleCatalog::from_definitions`]: super::RuleCatalog::from_definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDefinition {
    pub language: Language,
    pub category: Category,
    /// Regular expression searched anywhere in the added line.
    pub pattern: &'static str,
    /// Advisory text shown with each finding.
    pub message: &'static str,
    pub severity: Severity,
}

impl RuleDefinition {
    /// A warning-level rule.
    pub const fn warning(
        language: Language,
        category: Category,
        pattern: &'static str,
        message: &'static str,
    ) -> Self {
        Self {
            language,
            category,
            pattern,
            message,
            severity: Severity::Warning,
        }
    }
}

/// A compiled rule.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    pattern: &'static str,
    message: &'static str,
    category: Category,
    severity: Severity,
}

impl Rule {
    pub(super) fn new(definition: &RuleDefinition, regex: Regex) -> Self {
        Self {
            regex,
            pattern: definition.pattern,
            message: definition.message,
            category: definition.category,
            severity: definition.severity,
        }
    }

    /// Whether the pattern occurs anywhere in `content`.
    pub fn is_match(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        self.pattern
    }

    pub fn message(&self) -> &str {
        self.message
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}
