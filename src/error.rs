//! Error types and handling for pkgmerge
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Every error here is terminal for the invocation: the first failure aborts
//! the rest of the pipeline and nothing is retried.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pkgmerge operations
#[derive(Error, Diagnostic, Debug)]
pub enum MergeError {
    #[error("File not found: {path}")]
    #[diagnostic(
        code(pkgmerge::fs::not_found),
        help("Run pkgmerge from the project root, next to package.json and boilerplate/")
    )]
    FileNotFound { path: String },

    #[error("Failed to read manifest: {path}")]
    #[diagnostic(code(pkgmerge::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to parse manifest: {path}")]
    #[diagnostic(
        code(pkgmerge::manifest::parse_failed),
        help("The file exists but is not a valid JSON object")
    )]
    ManifestParseFailed { path: String, reason: String },

    #[error("Backup failed: {path}")]
    #[diagnostic(
        code(pkgmerge::backup::failed),
        help("The host manifest has not been modified")
    )]
    BackupFailed { path: String, reason: String },

    #[error("Failed to write manifest: {path}")]
    #[diagnostic(
        code(pkgmerge::manifest::write_failed),
        help("Restore the host manifest from the backup directory if needed")
    )]
    ManifestWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(pkgmerge::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for MergeError {
    fn from(err: std::io::Error) -> Self {
        MergeError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MergeError {
    fn from(err: serde_json::Error) -> Self {
        MergeError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Create a `FileNotFound` error from a path
pub fn file_not_found(path: impl AsRef<std::path::Path>) -> MergeError {
    MergeError::FileNotFound {
        path: path.as_ref().display().to_string(),
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MergeError>;
