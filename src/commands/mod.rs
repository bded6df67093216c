//! Command handlers
//!
//! Each handler wires a use case to the UI: human output on stdout, or one
//! NDJSON event with `--json`.

pub mod apply;
pub mod dependencies;
pub mod init;
pub mod list;
pub mod run;

use ctc::error::CtcError;

use crate::ui::json;

/// Machine-readable error kind for JSON output
pub fn error_kind(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<CtcError>() {
        Some(CtcError::EntryListNotFound { .. }) => "entry_list_not_found",
        Some(CtcError::DescriptorNotFound { .. }) => "descriptor_not_found",
        Some(CtcError::AlreadyInitialized { .. }) => "already_initialized",
        Some(CtcError::InvalidConfig { .. }) => "invalid_config",
        Some(CtcError::BuildTool(_)) => "build_failed",
        Some(CtcError::ArtifactCopy { .. }) => "artifact_copy_failed",
        Some(CtcError::EntryStore(_)) | Some(CtcError::Fs(_)) | Some(CtcError::Io(_)) => "io",
        None => "error",
    }
}

/// Emit the `error` event for a failed command
pub fn emit_error(command: &str, err: &anyhow::Error) {
    let _ = json::emit(serde_json::json!({
        "event": "error",
        "command": command,
        "kind": error_kind(err),
        "message": format!("{:#}", err),
    }));
}
