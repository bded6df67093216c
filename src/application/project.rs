//! Project layout
//!
//! Every command works relative to a project root (normally the current
//! directory). This names the files and directories ctc touches there.

use std::path::{Path, PathBuf};

use crate::infrastructure::ENTRY_LIST_FILE;

/// Generated build descriptor
pub const DESCRIPTOR_FILE: &str = "CMakeLists.txt";

/// Directories created by `init`
pub const SCAFFOLD_DIRS: [&str; 4] = ["bin", "app", "lib", "include"];

/// Paths inside a ctc project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `.libname`
    pub fn entry_list(&self) -> PathBuf {
        self.root.join(ENTRY_LIST_FILE)
    }

    /// `CMakeLists.txt`
    pub fn descriptor(&self) -> PathBuf {
        self.root.join(DESCRIPTOR_FILE)
    }

    /// Final location of built executables
    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    /// Scratch CMake build tree, recreated on every run
    pub fn build_dir(&self) -> PathBuf {
        self.root.join("build")
    }

    pub fn gitignore(&self) -> PathBuf {
        self.root.join(".gitignore")
    }

    pub fn readme(&self) -> PathBuf {
        self.root.join("README.md")
    }
}
