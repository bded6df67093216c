//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{BuildMode, ConfigWarning};
use crate::error::{CtcError, CtcResult};

use super::types::Config;

/// Project-level config file, next to `.libname`
pub const PROJECT_CONFIG_FILE: &str = "ctc.toml";

/// Every key the schema knows, for "did you mean" suggestions
const KNOWN_KEYS: &[&str] = &[
    "project",
    "name",
    "build",
    "mode",
    "keep_build_dir",
    "cmake",
    "output",
    "color",
    "unicode",
];

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CtcResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CtcError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    tracing::debug!(path = %path.display(), "loaded config");
    Ok((config, warnings))
}

/// Config file that applies to `project_root`, if any
///
/// `ctc.toml` in the project wins over the user config; they are not merged.
pub fn resolve_config_path(project_root: &Path) -> Option<PathBuf> {
    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        return Some(project_config);
    }
    user_config_path().filter(|p| p.is_file())
}

/// `$XDG_CONFIG_HOME/ctc/config.toml`, falling back to `~/.config`
pub fn user_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
    Some(base.join("ctc").join("config.toml"))
}

/// Load the effective configuration for a project, env overrides applied
///
/// A missing config file is not an error; a malformed one is.
pub fn load_for_project(project_root: &Path) -> CtcResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match resolve_config_path(project_root) {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (CTC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable source
pub fn with_env_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // CTC_PROJECT_NAME
    if let Some(name) = lookup("CTC_PROJECT_NAME").filter(|v| !v.is_empty()) {
        config.project.name = name;
    }

    // CTC_BUILD_MODE
    if let Some(mode) = lookup("CTC_BUILD_MODE") {
        match mode.parse::<BuildMode>() {
            Ok(mode) => config.build.mode = mode,
            Err(e) => tracing::warn!("ignoring CTC_BUILD_MODE: {}", e),
        }
    }

    // CTC_CMAKE
    if let Some(cmake) = lookup("CTC_CMAKE").filter(|v| !v.is_empty()) {
        config.build.cmake = cmake;
    }

    // CTC_KEEP_BUILD
    if let Some(val) = lookup("CTC_KEEP_BUILD") {
        config.build.keep_build_dir = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for candidate in KNOWN_KEYS {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

pub(super) fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
