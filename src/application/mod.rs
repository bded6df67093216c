//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `InitUseCase` - Scaffold a project
//! - `DependencyUseCase` - install / uninstall / list `.libname` entries
//! - `ApplyUseCase` - Regenerate `CMakeLists.txt`
//! - `RunUseCase` - Configure, build and collect executables

pub mod apply;
pub mod dependencies;
pub mod init;
pub mod project;
pub mod run;

pub use apply::{ApplyOptions, ApplyPlan, ApplyUseCase};
pub use dependencies::{DependencyRequest, DependencyUseCase, EntryChange};
pub use init::{InitOptions, InitResult, InitUseCase};
pub use project::{ProjectPaths, DESCRIPTOR_FILE};
pub use run::{RunOptions, RunResult, RunUseCase};
