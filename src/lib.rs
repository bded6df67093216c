//! ctc - CMake Template Creator
//!
//! Keeps a C++ project's dependencies in a line-oriented `.libname` file and
//! regenerates the managed part of `CMakeLists.txt` from it, leaving the
//! user-owned tail of the file untouched.
//!
//! ## Layers
//!
//! - `domain` - Entries, descriptor synthesis, ports
//! - `infrastructure` - Local file system, `.libname` repository, CMake driver
//! - `application` - Use cases behind each command
//! - `presentation` - CLI definition and use case wiring
//! - `config` - `ctc.toml` / user config and `CTC_*` overrides

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{DependencyEntry, DependencyKind, EntryList};
pub use domain::services::{generate, merge, render_descriptor};
pub use domain::value_objects::BuildMode;
pub use error::{CtcError, CtcResult};
