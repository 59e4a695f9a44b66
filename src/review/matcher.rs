//! Added-line matching.

use crate::diff::FileEntry;
use crate::rules::CategoryRules;

use super::report::Finding;

/// Match every added line of `entry` against `rules`.
///
/// The line counter starts at each hunk's `line_start` and advances once per
/// content line whatever its marker, so removed lines also consume a slot.
/// Only `+` lines are tested; every matching rule yields its own finding.
pub fn analyze_file(entry: &FileEntry, rules: &[CategoryRules]) -> Vec<Finding> {
    let mut findings = Vec::new();

    if rules.is_empty() {
        return findings;
    }

    for hunk in &entry.hunks {
        let mut line_number = hunk.line_start;

        for line in &hunk.content {
            if let Some(added) = line.strip_prefix('+') {
                for category in rules {
                    for rule in &category.rules {
                        if rule.is_match(added) {
                            findings.push(Finding::from_rule(rule, &entry.name, line_number, added));
                        }
                    }
                }
            }
            line_number = line_number.saturating_add(1);
        }
    }

    findings
}
