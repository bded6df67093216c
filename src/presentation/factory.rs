//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{ApplyUseCase, DependencyUseCase, InitUseCase, RunUseCase};
use crate::infrastructure::{CmakeTool, LineEntryRepository, LocalFs};

/// Type alias for the concrete DependencyUseCase
pub type ConcreteDependencyUseCase = DependencyUseCase<LineEntryRepository, LocalFs>;

/// Type alias for the concrete ApplyUseCase
pub type ConcreteApplyUseCase = ApplyUseCase<LineEntryRepository, LocalFs>;

/// Type alias for the concrete RunUseCase
pub type ConcreteRunUseCase = RunUseCase<LineEntryRepository, LocalFs, CmakeTool>;

pub fn create_init_use_case() -> InitUseCase<LocalFs> {
    InitUseCase::new(LocalFs::new())
}

pub fn create_dependency_use_case() -> ConcreteDependencyUseCase {
    DependencyUseCase::new(LineEntryRepository::new(), LocalFs::new())
}

pub fn create_apply_use_case() -> ConcreteApplyUseCase {
    ApplyUseCase::new(LineEntryRepository::new(), LocalFs::new())
}

/// Create a run use case driving the given CMake executable
pub fn create_run_use_case(cmake: CmakeTool) -> ConcreteRunUseCase {
    RunUseCase::new(LineEntryRepository::new(), LocalFs::new(), cmake)
}
