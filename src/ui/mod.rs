//! Terminal output for the `ctc` binary
//!
//! Human output goes to stdout, rendered by `views`. With `--json` each
//! command instead emits NDJSON events through `json`.

pub mod components;
pub mod context;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
