//! Error and warning types for listing and sizing directories.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that prevent a directory from being listed.
#[derive(Debug, Error)]
pub enum ListError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The blocking listing task failed to complete.
    #[error("Listing task failed: {message}")]
    TaskFailed { message: String },
}

impl ListError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Kind of walk warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Permission was denied.
    PermissionDenied,
    /// Error reading a directory during the walk.
    ReadError,
    /// Error reading metadata.
    MetadataError,
    /// The walk task for a subtree did not report back.
    TaskLost,
}

/// Non-fatal problem encountered while sizing a subtree.
///
/// The offending path contributes zero bytes; the rest of the walk goes on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl WalkWarning {
    /// Create a new walk warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a warning from an I/O error, classifying permission failures.
    pub fn from_io(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        let kind = match error.kind() {
            std::io::ErrorKind::PermissionDenied => WarningKind::PermissionDenied,
            _ => WarningKind::ReadError,
        };
        Self {
            message: format!("Walk error: {error}"),
            path,
            kind,
        }
    }

    /// Create a warning for a walk task that never reported.
    pub fn task_lost(path: impl Into<PathBuf>, reason: &str) -> Self {
        let path = path.into();
        Self {
            message: format!("Size task for {} failed: {reason}", path.display()),
            path,
            kind: WarningKind::TaskLost,
        }
    }
}
