//! Error types for ctc
//!
//! Uses `thiserror` for library errors. Port errors keep their own
//! hand-written `Display` and convert in here.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{BuildToolError, EntryStoreError, FsError};

/// Result type alias for ctc operations
pub type CtcResult<T> = Result<T, CtcError>;

/// Main error type for ctc operations
#[derive(Error, Debug)]
pub enum CtcError {
    /// `.libname` is required but absent
    #[error("{path} not found - run 'ctc init' first")]
    EntryListNotFound { path: PathBuf },

    /// `CMakeLists.txt` is required but absent
    #[error("{path} not found - run 'ctc apply' or use 'ctc run -U' first")]
    DescriptorNotFound { path: PathBuf },

    /// `init` would overwrite project files
    #[error("project already initialized ({path} exists) - use --force to overwrite")]
    AlreadyInitialized { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Dependency list could not be read or written
    #[error(transparent)]
    EntryStore(#[from] EntryStoreError),

    /// File system operation failed
    #[error(transparent)]
    Fs(#[from] FsError),

    /// External build tool failed
    #[error("build failed: {0}")]
    BuildTool(#[from] BuildToolError),

    /// Build artifact could not be copied into `bin/`
    #[error("failed to copy artifact {from} to {to}: {source}")]
    ArtifactCopy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: FsError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
