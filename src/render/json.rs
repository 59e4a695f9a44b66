//! JSON report.

use crate::error::{Result, ReviewError};
use crate::review::ReviewResult;

/// Pretty-printed `{summary, issues, files_reviewed}` document.
pub fn render_json(result: &ReviewResult) -> Result<String> {
    serde_json::to_string_pretty(result)
        .map_err(|e| ReviewError::OutputError(format!("failed to serialize report: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::Finding;
    use crate::rules::{Category, Severity};
    use serde_json::{Value, json};

    #[test]
    fn test_json_shape() {
        let result = ReviewResult::new(
            vec![Finding {
                severity: Severity::Warning,
                category: Category::BestPractices,
                file: "lib.rs".to_string(),
                line: 4,
                message: "Avoid unnecessary clones, consider references".to_string(),
                code: "let b = a.clone();".to_string(),
            }],
            2,
        );

        let rendered = render_json(&result).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(
            value,
            json!({
                "summary": "Code review completed with 1 issues found",
                "issues": [{
                    "severity": "warning",
                    "category": "best_practices",
                    "file": "lib.rs",
                    "line": 4,
                    "message": "Avoid unnecessary clones, consider references",
                    "code": "let b = a.clone();"
                }],
                "files_reviewed": 2
            })
        );
    }

    #[test]
    fn test_json_is_indented() {
        let rendered = render_json(&ReviewResult::new(Vec::new(), 0)).unwrap();

        assert!(rendered.starts_with("{\n  \"summary\""));
        assert!(rendered.contains("\"issues\": []"));
        assert!(rendered.contains("\"files_reviewed\": 0"));
    }
}
