//! CMake driver
//!
//! Runs `cmake -DCMAKE_BUILD_TYPE=<mode> ..` and
//! `cmake --build . --config <mode>` inside the build directory.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::build_tool::{BuildStep, BuildTool, BuildToolError};
use crate::domain::value_objects::BuildMode;

/// Default executable name
pub const DEFAULT_CMAKE: &str = "cmake";

/// BuildTool backed by the `cmake` executable
#[derive(Debug, Clone)]
pub struct CmakeTool {
    program: PathBuf,
    quiet: bool,
}

impl CmakeTool {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            quiet: false,
        }
    }

    /// Discard the tool's stdout (JSON mode keeps stdout for events)
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn run(
        &self,
        build_dir: &Path,
        step: BuildStep,
        args: &[String],
    ) -> Result<(), BuildToolError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args).current_dir(build_dir).stdin(Stdio::null());

        if self.quiet {
            cmd.stdout(Stdio::null()).stderr(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        tracing::debug!(
            program = %self.program.display(),
            dir = %build_dir.display(),
            step = step.as_str(),
            ?args,
            "running build tool"
        );

        let status = cmd.status().map_err(|source| BuildToolError::NotFound {
            program: self.program.clone(),
            source,
        })?;

        if !status.success() {
            return Err(BuildToolError::Failed {
                step,
                code: status.code(),
            });
        }
        Ok(())
    }
}

impl Default for CmakeTool {
    fn default() -> Self {
        Self::new(DEFAULT_CMAKE)
    }
}

impl BuildTool for CmakeTool {
    fn configure(&self, build_dir: &Path, mode: BuildMode) -> Result<(), BuildToolError> {
        let args = vec![format!("-DCMAKE_BUILD_TYPE={}", mode), "..".to_string()];
        self.run(build_dir, BuildStep::Configure, &args)
    }

    fn build(&self, build_dir: &Path, mode: BuildMode) -> Result<(), BuildToolError> {
        let args = vec![
            "--build".to_string(),
            ".".to_string(),
            "--config".to_string(),
            mode.to_string(),
        ];
        self.run(build_dir, BuildStep::Build, &args)
    }
}
