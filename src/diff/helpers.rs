//! Helper functions for diff parsing.

/// Parse the new-side path from the remainder of a "diff --git" line.
///
/// Handles:
/// - "a/path/to/file b/path/to/file" (normal)
/// - "a/old/name b/new/name" (rename)
/// - "a/my file.rs b/my file.rs" (spaces in paths)
///
/// Returns the "b/" path with forward slashes, or None if no path is found.
pub(super) fn parse_diff_git_line(rest: &str) -> Option<String> {
    // Paths may contain spaces; the last " b/" separates the two sides.
    if let Some(b_pos) = rest.rfind(" b/") {
        let b_path = &rest[b_pos + 3..];
        if !b_path.is_empty() {
            return Some(normalize_path(b_path));
        }
    }

    // Fallback: last whitespace-separated token, with or without a prefix
    let last = rest.split_whitespace().last()?;
    let path = last
        .strip_prefix("b/")
        .or_else(|| last.strip_prefix("a/"))
        .unwrap_or(last);

    if path.is_empty() {
        None
    } else {
        Some(normalize_path(path))
    }
}

/// Parse the new-file start line from a hunk header.
///
/// Format: "@@ -old_start,old_len +new_start,new_len @@" or "@@ -old_start +new_start @@",
/// optionally followed by section context after the closing "@@".
///
/// Returns None for anything that is not a well-formed header.
pub(super) fn parse_hunk_header(line: &str) -> Option<usize> {
    let line = line.strip_prefix("@@")?;

    let end_marker = line.find("@@")?;
    let range_part = &line[..end_marker];

    let parts: Vec<&str> = range_part.split_whitespace().collect();
    if parts.len() < 2 {
        return None;
    }

    // Old side must still be numeric for the header to count as well-formed
    parse_range_start(parts[0].strip_prefix('-')?)?;
    parse_range_start(parts[1].strip_prefix('+')?)
}

/// Parse the start line from a range specification ("start" or "start,len").
fn parse_range_start(range: &str) -> Option<usize> {
    let start_str = match range.split_once(',') {
        Some((start, len)) => {
            len.parse::<usize>().ok()?;
            start
        }
        None => range,
    };

    start_str.parse().ok()
}

/// Normalize a file path to use forward slashes.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Final component of a forward-slash path.
pub(super) fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
