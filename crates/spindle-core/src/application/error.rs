//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed. Fatal during composition: the run stops
    /// immediately and files already written stay on disk.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A manifest fragment is not valid JSON.
    #[error("Invalid manifest fragment {path}: {reason}")]
    ManifestParse { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the template directory is complete".into(),
                "Check that you have write permissions on the destination".into(),
            ],
            Self::ManifestParse { path, .. } => vec![
                format!("The fragment at {} is not valid JSON", path.display()),
                "Fix the template file and run again".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::ManifestParse { .. } => ErrorCategory::Validation,
        }
    }
}
