//! Configuration module for ctc
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CTC_*)
//! 3. Project config (`ctc.toml`), else user config (~/.config/ctc/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    load_for_project, load_with_warnings, resolve_config_path, user_config_path,
    with_env_overrides, with_env_overrides_from, PROJECT_CONFIG_FILE,
};
pub use types::{BuildConfig, ColorMode, Config, OutputConfig, ProjectConfig};
