//! EntryRepository port - persistence of the dependency list
//!
//! The domain works with `EntryList`; how it is stored (`.libname` lines)
//! is the repository's business.

use std::path::Path;

use crate::domain::entities::{DependencyEntry, EntryList};
use crate::domain::ports::file_system::FsError;

/// Result type for entry list operations
pub type EntryStoreResult<T> = Result<T, EntryStoreError>;

/// Entry list persistence errors
///
/// Malformed lines are never errors; only I/O can fail.
#[derive(Debug)]
pub enum EntryStoreError {
    /// Reading the list failed
    Read(FsError),
    /// Writing the list failed
    Write(FsError),
}

impl std::fmt::Display for EntryStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryStoreError::Read(err) => write!(f, "failed to read dependency list: {}", err),
            EntryStoreError::Write(err) => write!(f, "failed to write dependency list: {}", err),
        }
    }
}

impl std::error::Error for EntryStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EntryStoreError::Read(err) | EntryStoreError::Write(err) => Some(err),
        }
    }
}

/// Abstract repository for the dependency list
///
/// `add` and `remove` are read-modify-write over the whole list. There is no
/// locking: callers must not run two mutations against one file at once.
pub trait EntryRepository {
    /// Load the list; a missing file is an empty list
    fn load(&self, path: &Path) -> EntryStoreResult<EntryList>;

    /// Overwrite the file with `list`
    fn save(&self, list: &EntryList, path: &Path) -> EntryStoreResult<()>;

    /// Append `entry` unless already present. Returns `true` if written.
    fn add(&self, path: &Path, entry: DependencyEntry) -> EntryStoreResult<bool> {
        let mut list = self.load(path)?;
        if !list.add(entry) {
            return Ok(false);
        }
        self.save(&list, path)?;
        Ok(true)
    }

    /// Remove all matches of `entry`. Returns how many were removed.
    ///
    /// The file is only rewritten when something was removed.
    fn remove(&self, path: &Path, entry: &DependencyEntry) -> EntryStoreResult<usize> {
        let mut list = self.load(path)?;
        let removed = list.remove(entry);
        if removed > 0 {
            self.save(&list, path)?;
        }
        Ok(removed)
    }
}
