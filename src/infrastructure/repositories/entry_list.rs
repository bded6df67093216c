//! Line-based Entry Repository
//!
//! Implements the EntryRepository port over `.libname`: one tagged entry
//! per line.

use std::path::Path;

use crate::domain::entities::EntryList;
use crate::domain::ports::entry_repository::{
    EntryRepository, EntryStoreError, EntryStoreResult,
};
use crate::domain::ports::file_system::FileSystem;
use crate::infrastructure::fs::LocalFs;

/// Default file name of the dependency list
pub const ENTRY_LIST_FILE: &str = ".libname";

/// `.libname` repository
pub struct LineEntryRepository<F: FileSystem = LocalFs> {
    fs: F,
}

impl LineEntryRepository {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl<F: FileSystem> LineEntryRepository<F> {
    /// Create over another file system
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }
}

impl Default for LineEntryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> EntryRepository for LineEntryRepository<F> {
    fn load(&self, path: &Path) -> EntryStoreResult<EntryList> {
        if !self.fs.exists(path) {
            tracing::debug!(path = %path.display(), "dependency list missing, using empty list");
            return Ok(EntryList::new());
        }

        let content = self.fs.read(path).map_err(EntryStoreError::Read)?;
        let list = EntryList::from_lines(content.lines());
        tracing::debug!(path = %path.display(), entries = list.len(), "loaded dependency list");
        Ok(list)
    }

    fn save(&self, list: &EntryList, path: &Path) -> EntryStoreResult<()> {
        self.fs
            .write(path, &list.to_content())
            .map_err(EntryStoreError::Write)?;
        tracing::debug!(path = %path.display(), entries = list.len(), "saved dependency list");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DependencyEntry, DependencyKind};
    use crate::domain::ports::file_system::{FsError, FsResult};
    use std::path::PathBuf;
    use tempfile::tempdir;

    /// Serves one fixed `.libname` and refuses every write
    struct ReadOnlyFs {
        content: &'static str,
    }

    impl FileSystem for ReadOnlyFs {
        fn read(&self, _path: &Path) -> FsResult<String> {
            Ok(self.content.to_string())
        }

        fn write(&self, path: &Path, _content: &str) -> FsResult<()> {
            Err(FsError::PermissionDenied(path.to_path_buf()))
        }

        fn exists(&self, _path: &Path) -> bool {
            true
        }

        fn create_dir_all(&self, path: &Path) -> FsResult<()> {
            Err(FsError::PermissionDenied(path.to_path_buf()))
        }

        fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
            Err(FsError::PermissionDenied(path.to_path_buf()))
        }

        fn list_files(&self, _dir: &Path) -> FsResult<Vec<PathBuf>> {
            Ok(Vec::new())
        }

        fn copy(&self, _from: &Path, to: &Path) -> FsResult<()> {
            Err(FsError::PermissionDenied(to.to_path_buf()))
        }
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let repo = LineEntryRepository::new();

        let list = repo.load(&dir.path().join(ENTRY_LIST_FILE)).unwrap();

        assert!(list.is_empty());
    }

    #[test]
    fn save_writes_one_tagged_line_per_entry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(ENTRY_LIST_FILE);
        let repo = LineEntryRepository::new();

        let list = EntryList::from(vec![
            DependencyEntry::package("fmt"),
            DependencyEntry::package_component("Qt6", "Gui"),
            DependencyEntry::link_override("Qt6:Gui=Qt6::Gui"),
        ]);
        repo.save(&list, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "PKG:fmt\nPKGCOMP:Qt6:Gui\nLINKOVR:Qt6:Gui=Qt6::Gui\n");
    }

    #[test]
    fn load_skips_blank_lines_and_accepts_untagged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(ENTRY_LIST_FILE);
        std::fs::write(&path, "\nOpenGL\r\n\nLIB:pthread\n").unwrap();

        let list = LineEntryRepository::new().load(&path).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.entries()[0], DependencyEntry::package("OpenGL"));
        assert_eq!(list.entries()[1].kind(), DependencyKind::LibraryName);
    }

    #[test]
    fn add_then_remove_restores_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(ENTRY_LIST_FILE);
        let repo = LineEntryRepository::new();
        repo.add(&path, DependencyEntry::package("fmt")).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let entry = DependencyEntry::include_path("/opt/include");
        assert!(repo.add(&path, entry.clone()).unwrap());
        assert_eq!(repo.remove(&path, &entry).unwrap(), 1);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn add_is_idempotent_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(ENTRY_LIST_FILE);
        let repo = LineEntryRepository::new();

        repo.add(&path, DependencyEntry::library_name("m")).unwrap();
        repo.add(&path, DependencyEntry::library_name("m")).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "LIB:m\n");
    }

    #[test]
    fn add_reports_write_failure() {
        let repo = LineEntryRepository::with_fs(ReadOnlyFs {
            content: "PKG:fmt\n",
        });
        let path = Path::new(ENTRY_LIST_FILE);

        let err = repo.add(path, DependencyEntry::library_name("m")).unwrap_err();

        assert!(matches!(err, EntryStoreError::Write(FsError::PermissionDenied(_))));
        assert!(err.to_string().starts_with("failed to write dependency list"));
    }

    #[test]
    fn add_existing_entry_skips_write() {
        let repo = LineEntryRepository::with_fs(ReadOnlyFs {
            content: "PKG:fmt\nLIB:m\n",
        });

        let added = repo
            .add(Path::new(ENTRY_LIST_FILE), DependencyEntry::library_name("m"))
            .unwrap();

        assert!(!added);
    }
}
