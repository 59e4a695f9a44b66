//! Parsed diff structures.

/// A contiguous block of changes in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// File identifier (base name of the new-side path).
    pub file: String,
    /// New-file line number of the first content line (1-based).
    pub line_start: usize,
    /// Raw hunk lines, markers included.
    pub content: Vec<String>,
}

impl Hunk {
    /// Create an empty hunk starting at `line_start`.
    pub fn new(file: impl Into<String>, line_start: usize) -> Self {
        Self {
            file: file.into(),
            line_start,
            content: Vec::new(),
        }
    }
}

/// One file touched by the diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File identifier used in findings (base name).
    pub name: String,
    /// Full new-side path, forward slashes.
    pub path: String,
    /// Hunks in order of appearance.
    pub hunks: Vec<Hunk>,
}

/// Ordered mapping from file identifier to its hunks.
///
/// Insertion order is the order in which files first appear in the diff.
/// Identifiers are unique: a second header with the same base name replaces
/// the earlier entry's hunks but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileRecord {
    entries: Vec<FileEntry>,
}

impl FileRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the entry for `name`, returning its index.
    pub(super) fn start_file(&mut self, name: String, path: String) -> usize {
        if let Some(idx) = self.entries.iter().position(|e| e.name == name) {
            let entry = &mut self.entries[idx];
            entry.path = path;
            entry.hunks.clear();
            return idx;
        }

        self.entries.push(FileEntry {
            name,
            path,
            hunks: Vec::new(),
        });
        self.entries.len() - 1
    }

    /// Mutable access to an entry by index.
    pub(super) fn entry_mut(&mut self, idx: usize) -> &mut FileEntry {
        &mut self.entries[idx]
    }

    /// Number of files in the record.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the diff touched no files.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over files in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    /// Look up a file by identifier.
    pub fn get(&self, name: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

impl<'a> IntoIterator for &'a FileRecord {
    type Item = &'a FileEntry;
    type IntoIter = std::slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
