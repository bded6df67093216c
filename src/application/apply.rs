//! Apply Use Case
//!
//! Regenerates `CMakeLists.txt` from `.libname`, keeping the user section.

use crate::domain::entities::EntryList;
use crate::domain::ports::{EntryRepository, FileSystem};
use crate::domain::services::render_descriptor;
use crate::error::{CtcError, CtcResult};

use super::project::ProjectPaths;

/// Options for `apply`
#[derive(Debug, Clone)]
pub struct ApplyOptions {
    pub project_name: String,
}

/// Computed descriptor, before or after writing
#[derive(Debug, Clone)]
pub struct ApplyPlan {
    pub entries: EntryList,
    /// Current `CMakeLists.txt` content, `None` if the file does not exist
    pub current: Option<String>,
    pub rendered: String,
}

impl ApplyPlan {
    /// Whether writing would change the file
    pub fn is_changed(&self) -> bool {
        self.current.as_deref() != Some(self.rendered.as_str())
    }
}

/// Apply use case
pub struct ApplyUseCase<R: EntryRepository, FS: FileSystem> {
    repo: R,
    fs: FS,
}

impl<R: EntryRepository, FS: FileSystem> ApplyUseCase<R, FS> {
    pub fn new(repo: R, fs: FS) -> Self {
        Self { repo, fs }
    }

    /// Compute the new descriptor without writing anything
    pub fn plan(&self, paths: &ProjectPaths, options: &ApplyOptions) -> CtcResult<ApplyPlan> {
        let entry_list = paths.entry_list();
        if !self.fs.exists(&entry_list) {
            return Err(CtcError::EntryListNotFound { path: entry_list });
        }
        let entries = self.repo.load(&entry_list)?;

        let descriptor = paths.descriptor();
        let current = if self.fs.exists(&descriptor) {
            Some(self.fs.read(&descriptor)?)
        } else {
            None
        };

        let rendered = render_descriptor(
            &options.project_name,
            entries.entries(),
            current.as_deref().unwrap_or(""),
        );
        tracing::debug!(
            project = %options.project_name,
            entries = entries.len(),
            bytes = rendered.len(),
            "descriptor generated"
        );

        Ok(ApplyPlan {
            entries,
            current,
            rendered,
        })
    }

    /// Compute and write the descriptor
    pub fn execute(&self, paths: &ProjectPaths, options: &ApplyOptions) -> CtcResult<ApplyPlan> {
        let plan = self.plan(paths, options)?;
        let descriptor = paths.descriptor();
        self.fs.write(&descriptor, &plan.rendered)?;
        tracing::debug!(path = %descriptor.display(), "descriptor written");
        Ok(plan)
    }
}
