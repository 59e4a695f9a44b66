//! The diff review pipeline.
//!
//! diff text -> [`parse_diff`](crate::diff::parse_diff) -> per-file language
//! and rules -> [`matcher`] -> [`ReviewResult`].
//!
//! The pipeline is a pure function of the diff text, the catalog and the path
//! filter. It performs no I/O and never fails.

mod filter;
mod matcher;
mod report;


use tracing::debug;

use crate::diff::parse_diff;
use crate::language::Language;
use crate::rules::RuleCatalog;

// Re-export public API
pub use filter::PathFilter;
pub use matcher::analyze_file;
pub use report::{Finding, ReviewResult};

/// Reviews diffs against a borrowed rule catalog.
#[derive(Debug, Clone)]
pub struct Reviewer<'a> {
    catalog: &'a RuleCatalog,
    filter: PathFilter,
}

impl<'a> Reviewer<'a> {
    /// A reviewer that looks at every file in the diff.
    pub fn new(catalog: &'a RuleCatalog) -> Self {
        Self {
            catalog,
            filter: PathFilter::default(),
        }
    }

    /// Skip files whose path matches `filter`.
    pub fn with_filter(mut self, filter: PathFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Parse `diff_text` and match every added line against the catalog.
    ///
    /// # Example
    ///
    /// ```
    /// use hunkcheck::review::Reviewer;
    /// use hunkcheck::rules::RuleCatalog;
    ///
    /// let catalog = RuleCatalog::builtin().unwrap();
    /// let diff = "diff --git a/src/lib.rs b/src/lib.rs\n\
    ///             @@ -1,0 +7,1 @@\n\
    ///             +    panic!(\"fail\");\n";
    ///
    /// let result = Reviewer::new(&catalog).review(diff);
    /// assert_eq!(result.files_reviewed, 1);
    /// assert_eq!(result.issues[0].line, 7);
    /// ```
    pub fn review(&self, diff_text: &str) -> ReviewResult {
        let files = parse_diff(diff_text);

        let mut issues = Vec::new();
        let mut files_reviewed = 0;

        for entry in &files {
            if self.filter.is_excluded(&entry.path) {
                debug!(path = %entry.path, "skipping excluded file");
                continue;
            }
            files_reviewed += 1;

            let language = Language::from_path(&entry.name);
            let rules = self.catalog.rules_for(language);
            let found = analyze_file(entry, rules);
            debug!(
                file = %entry.name,
                language = %language,
                hunks = entry.hunks.len(),
                findings = found.len(),
                "analyzed file"
            );
            issues.extend(found);
        }

        ReviewResult::new(issues, files_reviewed)
    }
}

/// Review `diff_text` against `catalog` without path filtering.
pub fn review_diff(diff_text: &str, catalog: &RuleCatalog) -> ReviewResult {
    Reviewer::new(catalog).review(diff_text)
}
