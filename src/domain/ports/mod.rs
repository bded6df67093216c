//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_tool;
pub mod entry_repository;
pub mod file_system;

pub use build_tool::{BuildStep, BuildTool, BuildToolError};
pub use entry_repository::{EntryRepository, EntryStoreError, EntryStoreResult};
pub use file_system::{FileSystem, FsError, FsResult};
