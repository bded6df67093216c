//! Run options

use crate::domain::value_objects::BuildMode;

/// Options for `run`
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub project_name: String,
    pub mode: BuildMode,
    /// Leave `build/` in place after a successful build
    pub keep_build_dir: bool,
    /// Regenerate `CMakeLists.txt` from `.libname` before building
    pub update_descriptor: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            project_name: crate::domain::services::DEFAULT_PROJECT_NAME.to_string(),
            mode: BuildMode::default(),
            keep_build_dir: false,
            update_descriptor: false,
        }
    }
}
