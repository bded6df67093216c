//! Dependency Use Case
//!
//! `install`, `uninstall` and `list` over `.libname`. All three require the
//! file to exist so a typo'd directory does not silently grow a new list.

use crate::domain::entities::{DependencyEntry, EntryList};
use crate::domain::ports::{EntryRepository, FileSystem};
use crate::error::{CtcError, CtcResult};

use super::project::ProjectPaths;

/// One dependency selector from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyRequest {
    /// `pkg`, `pkg:comp`, `pkg -c comp ...`
    Package {
        name: String,
        components: Vec<String>,
    },
    LibraryPath(String),
    LibraryName(String),
    IncludePath(String),
    ToolchainFile(String),
    /// `key=target` (not validated here)
    LinkOverride(String),
}

impl DependencyRequest {
    /// Build a package request from `pkg[:comp]` plus extra `-c` components
    pub fn package(spec: &str, extra_components: &[String]) -> Self {
        let (name, mut components) = match spec.split_once(':') {
            Some((pkg, comp)) if !comp.is_empty() => (pkg, vec![comp.to_string()]),
            Some((pkg, _)) => (pkg, Vec::new()),
            None => (spec, Vec::new()),
        };
        components.extend(extra_components.iter().cloned());
        DependencyRequest::Package {
            name: name.to_string(),
            components,
        }
    }

    /// Entries this request adds or removes
    ///
    /// A package with components maps to one `PackageComponent` per
    /// component and no bare `Package` entry.
    pub fn entries(&self) -> Vec<DependencyEntry> {
        match self {
            DependencyRequest::Package { name, components } if components.is_empty() => {
                vec![DependencyEntry::package(name.as_str())]
            }
            DependencyRequest::Package { name, components } => components
                .iter()
                .map(|comp| DependencyEntry::package_component(name, comp))
                .collect(),
            DependencyRequest::LibraryPath(v) => vec![DependencyEntry::library_path(v.as_str())],
            DependencyRequest::LibraryName(v) => vec![DependencyEntry::library_name(v.as_str())],
            DependencyRequest::IncludePath(v) => vec![DependencyEntry::include_path(v.as_str())],
            DependencyRequest::ToolchainFile(v) => {
                vec![DependencyEntry::toolchain_file(v.as_str())]
            }
            DependencyRequest::LinkOverride(v) => vec![DependencyEntry::link_override(v.as_str())],
        }
    }
}

/// Outcome for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryChange {
    pub entry: DependencyEntry,
    /// `false` when the entry was already present (install) or absent (uninstall)
    pub changed: bool,
}

/// Dependency list use case
pub struct DependencyUseCase<R: EntryRepository, FS: FileSystem> {
    repo: R,
    fs: FS,
}

impl<R: EntryRepository, FS: FileSystem> DependencyUseCase<R, FS> {
    pub fn new(repo: R, fs: FS) -> Self {
        Self { repo, fs }
    }

    pub fn install(
        &self,
        paths: &ProjectPaths,
        request: &DependencyRequest,
    ) -> CtcResult<Vec<EntryChange>> {
        let path = self.require_entry_list(paths)?;
        let mut changes = Vec::new();
        for entry in request.entries() {
            let changed = self.repo.add(&path, entry.clone())?;
            tracing::debug!(entry = %entry, changed, "install");
            changes.push(EntryChange { entry, changed });
        }
        Ok(changes)
    }

    pub fn uninstall(
        &self,
        paths: &ProjectPaths,
        request: &DependencyRequest,
    ) -> CtcResult<Vec<EntryChange>> {
        let path = self.require_entry_list(paths)?;
        let mut changes = Vec::new();
        for entry in request.entries() {
            let removed = self.repo.remove(&path, &entry)?;
            tracing::debug!(entry = %entry, removed, "uninstall");
            changes.push(EntryChange {
                entry,
                changed: removed > 0,
            });
        }
        Ok(changes)
    }

    pub fn list(&self, paths: &ProjectPaths) -> CtcResult<EntryList> {
        let path = self.require_entry_list(paths)?;
        Ok(self.repo.load(&path)?)
    }

    fn require_entry_list(&self, paths: &ProjectPaths) -> CtcResult<std::path::PathBuf> {
        let path = paths.entry_list();
        if !self.fs.exists(&path) {
            return Err(CtcError::EntryListNotFound { path });
        }
        Ok(path)
    }
}
