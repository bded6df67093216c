//! BuildTool port - the external build system driver
//!
//! The run use case only needs two steps: configure a build directory for a
//! mode, then build it. Tests substitute a fake that drops artifacts.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::BuildMode;

/// Build step that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    Configure,
    Build,
}

impl BuildStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildStep::Configure => "configure",
            BuildStep::Build => "build",
        }
    }
}

/// Build tool errors
#[derive(Debug)]
pub enum BuildToolError {
    /// The tool executable could not be started
    NotFound { program: PathBuf, source: std::io::Error },
    /// The tool ran and exited unsuccessfully
    Failed { step: BuildStep, code: Option<i32> },
}

impl std::fmt::Display for BuildToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildToolError::NotFound { program, source } => {
                write!(f, "failed to run '{}': {}", program.display(), source)
            }
            BuildToolError::Failed { step, code: Some(code) } => {
                write!(f, "{} step failed with exit code {}", step.as_str(), code)
            }
            BuildToolError::Failed { step, code: None } => {
                write!(f, "{} step was terminated by a signal", step.as_str())
            }
        }
    }
}

impl std::error::Error for BuildToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildToolError::NotFound { source, .. } => Some(source),
            BuildToolError::Failed { .. } => None,
        }
    }
}

/// Abstract build system
///
/// `build_dir` already exists when either method is called. The project
/// source directory is its parent.
pub trait BuildTool {
    /// Generate the build system for `mode` inside `build_dir`
    fn configure(&self, build_dir: &Path, mode: BuildMode) -> Result<(), BuildToolError>;

    /// Compile inside a configured `build_dir`
    fn build(&self, build_dir: &Path, mode: BuildMode) -> Result<(), BuildToolError>;
}
