//! Build mode value object - the `CMAKE_BUILD_TYPE` passed to CMake

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// CMake build configuration
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum BuildMode {
    #[value(name = "Debug")]
    Debug,
    #[default]
    #[value(name = "Release")]
    Release,
    #[value(name = "MinSizeRel")]
    MinSizeRel,
    #[value(name = "RelWithDebInfo")]
    RelWithDebInfo,
}

impl BuildMode {
    pub const ALL: [BuildMode; 4] = [
        BuildMode::Debug,
        BuildMode::Release,
        BuildMode::MinSizeRel,
        BuildMode::RelWithDebInfo,
    ];

    /// Value for `-DCMAKE_BUILD_TYPE=` and `--config`
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Debug => "Debug",
            BuildMode::Release => "Release",
            BuildMode::MinSizeRel => "MinSizeRel",
            BuildMode::RelWithDebInfo => "RelWithDebInfo",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unknown build mode name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBuildMode(pub String);

impl fmt::Display for InvalidBuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid build mode '{}'. Valid modes are: Debug, Release, MinSizeRel, RelWithDebInfo",
            self.0
        )
    }
}

impl std::error::Error for InvalidBuildMode {}

impl FromStr for BuildMode {
    type Err = InvalidBuildMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| InvalidBuildMode(s.to_string()))
    }
}
