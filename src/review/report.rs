//! Findings and the aggregated review result.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::rules::{Category, Rule, Severity};

/// One match of an added line against a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub category: Category,
    /// File identifier (base name).
    pub file: String,
    /// New-file line number (1-based).
    pub line: usize,
    pub message: String,
    /// The added line without its marker, trimmed.
    pub code: String,
}

impl Finding {
    /// Build a finding for `rule` matching `content` at `file:line`.
    pub fn from_rule(rule: &Rule, file: &str, line: usize, content: &str) -> Self {
        Self {
            severity: rule.severity(),
            category: rule.category(),
            file: file.to_string(),
            line,
            message: rule.message().to_string(),
            code: content.trim().to_string(),
        }
    }
}

/// Result of reviewing one diff.
///
/// Serializes as `{summary, issues, files_reviewed}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewResult {
    pub summary: String,
    /// Findings in discovery order.
    pub issues: Vec<Finding>,
    pub files_reviewed: usize,
}

impl ReviewResult {
    /// Aggregate findings into a result.
    pub fn new(issues: Vec<Finding>, files_reviewed: usize) -> Self {
        Self {
            summary: format!("Code review completed with {} issues found", issues.len()),
            issues,
            files_reviewed,
        }
    }

    /// Whether the review found nothing.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of findings per severity (severities without findings are omitted).
    pub fn count_by_severity(&self) -> BTreeMap<Severity, usize> {
        let mut counts = BTreeMap::new();
        for issue in &self.issues {
            *counts.entry(issue.severity).or_insert(0) += 1;
        }
        counts
    }

    /// Number of findings per file (files without findings are omitted).
    pub fn count_by_file(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for issue in &self.issues {
            *counts.entry(issue.file.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Findings with the given severity, in discovery order.
    pub fn issues_with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }
}
