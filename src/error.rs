//! Error hierarchy for the application layer
//!
//! The measurement core never fails; these errors come from loading
//! configuration and workout files and from command-line input.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for fitunits operations
#[derive(Debug, Error)]
pub enum FitUnitsError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Workout file errors
    #[error("Workout file error: {0}")]
    WorkoutFile(#[from] WorkoutFileError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid user input
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors loading a workout record
#[derive(Debug, Error)]
pub enum WorkoutFileError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid workout record in {path}: {reason}")]
    InvalidRecord { path: PathBuf, reason: String },
}

/// Result type alias for fitunits operations
pub type Result<T> = std::result::Result<T, FitUnitsError>;

impl FitUnitsError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FitUnitsError::WorkoutFile(WorkoutFileError::FileNotFound { .. }) => ErrorSeverity::Warning,
            FitUnitsError::Validation(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FitUnitsError::WorkoutFile(WorkoutFileError::FileNotFound { path }) => {
                format!("Could not find workout file: {}", path.display())
            }
            FitUnitsError::WorkoutFile(WorkoutFileError::InvalidRecord { path, .. }) => {
                format!(
                    "{} is not a valid workout record. Please check the file contents.",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error that prevents the operation
    Error,
    /// Warning that doesn't prevent operation
    Warning,
}
