//! Entry list entity - the ordered contents of `.libname`
//!
//! This is a pure data structure; reading and writing the file is handled
//! by `EntryRepository`.

use super::dependency::{DependencyEntry, DependencyKind};

/// Ordered list of dependency entries
///
/// `(kind, value)` pairs are unique. Order is insertion order and is kept
/// across add/remove because it drives the emission order of same-kind
/// directives in the generated descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    entries: Vec<DependencyEntry>,
}

impl EntryList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from persisted lines, skipping empty ones
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let entries = lines
            .into_iter()
            .filter(|line| !line.is_empty())
            .map(DependencyEntry::from_line)
            .collect();
        Self { entries }
    }

    /// Encode as file content: one line per entry, each newline-terminated
    pub fn to_content(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.to_line());
            out.push('\n');
        }
        out
    }

    pub fn entries(&self) -> &[DependencyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, entry: &DependencyEntry) -> bool {
        self.entries.iter().any(|e| e.same_as(entry))
    }

    /// Append `entry` unless an identical declaration exists.
    ///
    /// Returns `true` if the list changed.
    pub fn add(&mut self, entry: DependencyEntry) -> bool {
        if self.contains(&entry) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Drop every entry matching `entry`, returning how many were removed
    pub fn remove(&mut self, entry: &DependencyEntry) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !e.same_as(entry));
        before - self.entries.len()
    }

    /// Entries of one kind, in insertion order
    pub fn of_kind(&self, kind: DependencyKind) -> impl Iterator<Item = &DependencyEntry> {
        self.entries.iter().filter(move |e| e.kind() == kind)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DependencyEntry> {
        self.entries.iter()
    }
}

impl From<Vec<DependencyEntry>> for EntryList {
    fn from(entries: Vec<DependencyEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a DependencyEntry;
    type IntoIter = std::slice::Iter<'a, DependencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
