//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `repositories/` - `.libname` persistence
//! - `build/` - CMake process driver

pub mod build;
pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use build::CmakeTool;
pub use fs::LocalFs;
pub use repositories::{LineEntryRepository, ENTRY_LIST_FILE};
