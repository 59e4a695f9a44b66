//! Unified diff parsing for hunkcheck.
//!
//! Turns raw unified-diff text into a [`FileRecord`]: the files touched by the
//! change, in order of appearance, each with its hunks and their raw lines.
//!
//! The parser is best-effort and total:
//! - Lines before the first `diff --git` header are ignored
//! - Metadata between a file header and its first hunk (`index`, `---`, `+++`) is dropped
//! - A malformed hunk header is dropped; following lines stay in the last open hunk
//! - Hunk lines keep their `+`/`-`/` ` markers for the matcher

mod helpers;
mod parser;
mod types;


// Re-export public API
pub use parser::parse_diff;
pub use types::{FileEntry, FileRecord, Hunk};
