//! Core diff parsing logic.

use tracing::debug;

use super::helpers::{base_name, parse_diff_git_line, parse_hunk_header};
use super::types::{FileRecord, Hunk};

/// Parse raw unified diff text into a [`FileRecord`].
///
/// Never fails: malformed fragments are skipped rather than reported.
///
/// # Example
///
/// ```
/// use hunkcheck::diff::parse_diff;
///
/// let diff = "diff --git a/src/lib.rs b/src/lib.rs\n\
///             --- a/src/lib.rs\n\
///             +++ b/src/lib.rs\n\
///             @@ -1,0 +1,1 @@\n\
///             +let x = 1;\n";
///
/// let files = parse_diff(diff);
/// let lib = files.get("lib.rs").unwrap();
/// assert_eq!(lib.hunks[0].line_start, 1);
/// assert_eq!(lib.hunks[0].content, vec!["+let x = 1;"]);
/// ```
pub fn parse_diff(diff_text: &str) -> FileRecord {
    let mut record = FileRecord::new();
    let mut current_file: Option<usize> = None;

    for line in diff_text.lines() {
        // Format: "diff --git a/path/to/file b/path/to/file"
        if let Some(rest) = line.strip_prefix("diff --git") {
            current_file = parse_diff_git_line(rest).map(|path| {
                let name = base_name(&path).to_string();
                record.start_file(name, path)
            });
            if current_file.is_none() {
                debug!(header = line, "skipping file header without a path");
            }
            continue;
        }

        let Some(idx) = current_file else {
            continue;
        };

        if line.starts_with("@@") {
            let entry = record.entry_mut(idx);
            match parse_hunk_header(line) {
                Some(new_start) => {
                    entry.hunks.push(Hunk::new(entry.name.clone(), new_start));
                }
                None => {
                    debug!(file = %entry.name, header = line, "skipping malformed hunk header");
                }
            }
            continue;
        }

        // Lines before the file's first hunk have nowhere to go
        if let Some(hunk) = record.entry_mut(idx).hunks.last_mut() {
            hunk.content.push(line.to_string());
        }
    }

    record
}
