//! Value Objects
//!
//! Immutable types with no identity.

mod build_mode;
mod config_warning;

pub use build_mode::{BuildMode, InvalidBuildMode};
pub use config_warning::ConfigWarning;
