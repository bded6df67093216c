//! Run result

use std::path::PathBuf;

use crate::application::apply::ApplyPlan;
use crate::domain::value_objects::BuildMode;

/// Outcome of a successful `run`
#[derive(Debug, Clone)]
pub struct RunResult {
    pub mode: BuildMode,
    /// Set when the descriptor was regenerated first
    pub applied: Option<ApplyPlan>,
    /// Copied executables, at their destination in `bin/`
    pub artifacts: Vec<PathBuf>,
    /// Whether `build/` was deleted afterwards
    pub build_dir_removed: bool,
}
