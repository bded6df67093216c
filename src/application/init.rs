//! Init Use Case
//!
//! Scaffolds a new project: source directories, an initial
//! `CMakeLists.txt`, `.gitignore`, an empty `.libname` and optionally a
//! README.

use std::path::PathBuf;

use crate::domain::ports::FileSystem;
use crate::domain::services::render_descriptor;
use crate::error::{CtcError, CtcResult};

use super::project::{ProjectPaths, SCAFFOLD_DIRS};

/// Options for `init`
#[derive(Debug, Clone)]
pub struct InitOptions {
    pub project_name: String,
    pub readme: bool,
    pub force: bool,
}

/// What `init` did
#[derive(Debug, Clone, Default)]
pub struct InitResult {
    pub created_dirs: Vec<PathBuf>,
    pub written_files: Vec<PathBuf>,
    /// Existing files left untouched (`.gitignore`, `README.md`)
    pub skipped_files: Vec<PathBuf>,
}

/// Init use case
pub struct InitUseCase<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> InitUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    pub fn execute(&self, paths: &ProjectPaths, options: &InitOptions) -> CtcResult<InitResult> {
        if !options.force {
            for path in [paths.entry_list(), paths.descriptor()] {
                if self.fs.exists(&path) {
                    return Err(CtcError::AlreadyInitialized { path });
                }
            }
        }

        let mut result = InitResult::default();

        for dir in SCAFFOLD_DIRS {
            let path = paths.root().join(dir);
            if !self.fs.exists(&path) {
                self.fs.create_dir_all(&path)?;
                result.created_dirs.push(path);
            }
        }

        // A forced re-init keeps whatever the user appended below the marker.
        let descriptor = paths.descriptor();
        let existing = if self.fs.exists(&descriptor) {
            self.fs.read(&descriptor)?
        } else {
            String::new()
        };
        self.fs
            .write(&descriptor, &render_descriptor(&options.project_name, &[], &existing))?;
        result.written_files.push(descriptor);

        self.fs.write(&paths.entry_list(), "")?;
        result.written_files.push(paths.entry_list());

        self.write_unless_present(
            &paths.gitignore(),
            GITIGNORE_TEMPLATE,
            options.force,
            &mut result,
        )?;

        if options.readme {
            let readme = README_TEMPLATE.replace("{{PROJECT_NAME}}", &options.project_name);
            self.write_unless_present(&paths.readme(), &readme, options.force, &mut result)?;
        }

        tracing::debug!(
            root = %paths.root().display(),
            dirs = result.created_dirs.len(),
            files = result.written_files.len(),
            "project scaffolded"
        );
        Ok(result)
    }

    fn write_unless_present(
        &self,
        path: &std::path::Path,
        content: &str,
        force: bool,
        result: &mut InitResult,
    ) -> CtcResult<()> {
        if self.fs.exists(path) && !force {
            result.skipped_files.push(path.to_path_buf());
            return Ok(());
        }
        self.fs.write(path, content)?;
        result.written_files.push(path.to_path_buf());
        Ok(())
    }
}

const GITIGNORE_TEMPLATE: &str = r#"# Prerequisites
*.d

# Compiled Object files
*.slo
*.lo
*.o
*.obj

# Precompiled Headers
*.gch
*.pch

# Compiled Dynamic libraries
*.so
*.dylib
*.dll

# Compiled Static libraries
*.lai
*.la
*.a
*.lib

# Executables
*.exe
*.out
*.app

# Build directories
build/
Build/
debug/
Debug/
release/
Release/

# CMake
CMakeFiles/
CMakeCache.txt
cmake_install.cmake
Makefile

# IDE files
.vscode/
.vs/
*.sln
*.user

# OS generated files
.DS_Store
Thumbs.db
"#;

const README_TEMPLATE: &str = r#"# {{PROJECT_NAME}}

A C++ project managed by ctc.

## Build

```bash
ctc run
```

Or by hand:

```bash
mkdir build && cd build
cmake ..
cmake --build .
```

Executables are placed in `bin/`.

## Layout

- `app/` - application sources
- `lib/` - library sources
- `include/` - headers
- `bin/` - built executables

## Dependencies

Dependencies live in `.libname`. Manage them with:

- `ctc install <package>` / `ctc uninstall <package>`
- `ctc list`
- `ctc apply` to regenerate `CMakeLists.txt`
"#;
