//! Human-readable report grouped by severity.

use crate::review::ReviewResult;
use crate::rules::Severity;

const RULE_WIDTH: usize = 60;
const SECTION_WIDTH: usize = 50;

fn icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "❌",
        Severity::Warning => "⚠️",
        Severity::Info => "ℹ️",
    }
}

/// Render the report as plain text.
///
/// ```text
/// ============================================================
/// 🔍 CODE REVIEW
/// ============================================================
///
/// Files reviewed: 1
/// Issues found: 1
///
///
/// ⚠️ WARNING (1)
/// --------------------------------------------------
///   [bugs] lib.rs:12
///   Avoid panic! in production code, use Result<T, E>
///   Code: panic!("fail");
/// ```
pub fn render_text(result: &ReviewResult) -> String {
    let rule = "=".repeat(RULE_WIDTH);

    let mut out = String::from("\n");
    out.push_str(&format!("{}\n🔍 CODE REVIEW\n{}\n\n", rule, rule));
    out.push_str(&format!("Files reviewed: {}\n", result.files_reviewed));
    out.push_str(&format!("Issues found: {}\n\n", result.issues.len()));

    let counts = result.count_by_severity();
    for severity in Severity::ALL {
        let Some(count) = counts.get(&severity) else {
            continue;
        };

        out.push_str(&format!(
            "\n{} {} ({})\n",
            icon(severity),
            severity.as_str().to_uppercase(),
            count
        ));
        out.push_str(&"-".repeat(SECTION_WIDTH));
        out.push('\n');

        for issue in result.issues_with_severity(severity) {
            out.push_str(&format!(
                "  [{}] {}:{}\n",
                issue.category, issue.file, issue.line
            ));
            out.push_str(&format!("  {}\n", issue.message));
            out.push_str(&format!("  Code: {}\n\n", issue.code));
        }
    }

    out
}
