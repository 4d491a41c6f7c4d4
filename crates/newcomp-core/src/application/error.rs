//! Application layer errors.
//!
//! These errors represent failures in orchestration, not validation.
//! Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while planning or applying a component.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Rendering the component templates failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A collaborator file the tool edits but never creates is absent.
    #[error("Required file not found: {path}")]
    MissingCollaborator { path: PathBuf },

    /// A collaborator file lacks the marker line an insertion depends on.
    #[error("Marker '{marker}' not found in {path}")]
    MarkerNotFound { marker: String, path: PathBuf },

    /// A collaborator file was modified between planning and applying.
    #[error("{path} changed after the run was planned")]
    CollaboratorChanged { path: PathBuf },

    /// No ancestor of the start directory looks like a project root.
    #[error("No project root found above {start}")]
    ProjectRootNotFound { start: PathBuf },

    /// In-memory adapter lock poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::MissingCollaborator { path } => vec![
                format!("Expected an existing file at {}", path.display()),
                "newcomp edits this file but never creates it".into(),
                "Check --root or the [project] section of your config".into(),
            ],
            Self::MarkerNotFound { marker, path } => vec![
                format!("Add a line containing '{}' to {}", marker, path.display()),
                "Or point the [markers] section of your config at the marker you use".into(),
                "No files were written".into(),
            ],
            Self::CollaboratorChanged { path } => vec![
                format!("Another process edited {} while newcomp was running", path.display()),
                "Run the command again to plan against the current content".into(),
            ],
            Self::ProjectRootNotFound { start } => vec![
                format!("Searched {} and its parents", start.display()),
                "A project root holds the build file plus include/ and source/".into(),
                "Pass the project directory explicitly with --root".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingCollaborator { .. }
            | Self::MarkerNotFound { .. }
            | Self::ProjectRootNotFound { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::CollaboratorChanged { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
