//! Run use case implementation

use std::path::{Path, PathBuf};

use crate::application::apply::{ApplyOptions, ApplyUseCase};
use crate::application::project::ProjectPaths;
use crate::domain::ports::{BuildTool, EntryRepository, FileSystem};
use crate::error::{CtcError, CtcResult};

use super::options::RunOptions;
use super::result::RunResult;

/// Run use case
pub struct RunUseCase<R, FS, BT>
where
    R: EntryRepository,
    FS: FileSystem + Clone,
    BT: BuildTool,
{
    apply: ApplyUseCase<R, FS>,
    fs: FS,
    tool: BT,
}

impl<R, FS, BT> RunUseCase<R, FS, BT>
where
    R: EntryRepository,
    FS: FileSystem + Clone,
    BT: BuildTool,
{
    pub fn new(repo: R, fs: FS, tool: BT) -> Self {
        Self {
            apply: ApplyUseCase::new(repo, fs.clone()),
            fs,
            tool,
        }
    }

    /// Build the project
    ///
    /// On a build tool failure `build/` is left in place for inspection.
    pub fn execute(&self, paths: &ProjectPaths, options: &RunOptions) -> CtcResult<RunResult> {
        let applied = if options.update_descriptor {
            let apply_options = ApplyOptions {
                project_name: options.project_name.clone(),
            };
            Some(self.apply.execute(paths, &apply_options)?)
        } else {
            let descriptor = paths.descriptor();
            if !self.fs.exists(&descriptor) {
                return Err(CtcError::DescriptorNotFound { path: descriptor });
            }
            None
        };

        let bin_dir = paths.bin_dir();
        self.fs.create_dir_all(&bin_dir)?;

        let build_dir = paths.build_dir();
        if self.fs.exists(&build_dir) {
            if let Err(e) = self.fs.remove_dir_all(&build_dir) {
                tracing::warn!(
                    path = %build_dir.display(),
                    error = %e,
                    "failed to remove stale build directory"
                );
            }
        }
        self.fs.create_dir_all(&build_dir)?;

        tracing::info!(mode = %options.mode, dir = %build_dir.display(), "configuring");
        self.tool.configure(&build_dir, options.mode)?;
        tracing::info!(mode = %options.mode, "building");
        self.tool.build(&build_dir, options.mode)?;

        let mut artifacts = Vec::new();
        for source in collect_artifacts(&self.fs, &build_dir)? {
            let Some(name) = source.file_name() else {
                continue;
            };
            let dest = bin_dir.join(name);
            self.fs
                .copy(&source, &dest)
                .map_err(|e| CtcError::ArtifactCopy {
                    from: source.clone(),
                    to: dest.clone(),
                    source: e,
                })?;
            tracing::debug!(from = %source.display(), to = %dest.display(), "artifact copied");
            artifacts.push(dest);
        }

        let build_dir_removed = if options.keep_build_dir {
            false
        } else {
            match self.fs.remove_dir_all(&build_dir) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(
                        path = %build_dir.display(),
                        error = %e,
                        "failed to remove build directory"
                    );
                    false
                }
            }
        };

        Ok(RunResult {
            mode: options.mode,
            applied,
            artifacts,
            build_dir_removed,
        })
    }
}

/// Executables produced in `build_dir`
///
/// Everything in `build_dir/bin/` when that directory exists, otherwise
/// regular files directly in `build_dir` with no extension or `.exe`.
pub fn collect_artifacts<FS: FileSystem>(fs: &FS, build_dir: &Path) -> CtcResult<Vec<PathBuf>> {
    let build_bin = build_dir.join("bin");
    if fs.exists(&build_bin) {
        return Ok(fs.list_files(&build_bin)?);
    }

    let files = fs.list_files(build_dir)?;
    Ok(files
        .into_iter()
        .filter(|path| match path.extension() {
            None => true,
            Some(ext) => ext == "exe",
        })
        .collect())
}
