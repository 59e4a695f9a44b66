//! Language classification by file extension.

use serde::Serialize;
use std::fmt;

/// Source languages recognized by the classifier.
///
/// Anything without a known extension is `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Rust,
    Go,
    Python,
    JavaScript,
    TypeScript,
    Java,
    Generic,
}

impl Language {
    /// All languages, in declaration order.
    pub const ALL: [Language; 7] = [
        Language::Rust,
        Language::Go,
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Java,
        Language::Generic,
    ];

    /// Classify a file name or path by its lowercased extension.
    ///
    /// Only the final path component is inspected, so directory names
    /// containing dots do not leak into the result. Dotfiles such as
    /// `.gitignore` have no extension.
    pub fn from_path(path: &str) -> Self {
        let name = path.rsplit(['/', '\\']).next().unwrap_or(path);

        let ext = match name.rfind('.') {
            Some(0) | None => return Language::Generic,
            Some(pos) => name[pos + 1..].to_lowercase(),
        };

        match ext.as_str() {
            "rs" => Language::Rust,
            "go" => Language::Go,
            "py" => Language::Python,
            "js" => Language::JavaScript,
            "ts" => Language::TypeScript,
            "java" => Language::Java,
            _ => Language::Generic,
        }
    }

    /// Stable lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Rust => "rust",
            Language::Go => "go",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::Generic => "generic",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
