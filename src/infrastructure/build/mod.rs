//! Build Tool Implementations

mod cmake;

pub use cmake::{CmakeTool, DEFAULT_CMAKE};
