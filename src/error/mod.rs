//! Error handling module for the trimmer library boundary

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for trimmer operations
#[derive(Error, Debug)]
pub enum TrimmerError {
    /// Domain-level failure (bad arguments, busy runner, I/O setup)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Logging could not be initialized
    #[error("Failed to initialize logging: {message}")]
    LoggingInit { message: String },

    /// Trim ran but the transcoder reported a failure
    #[error("Trim failed: {message}")]
    TrimFailed { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TrimmerError {
    /// Process exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            TrimmerError::Domain(DomainError::BadArgs(_)) => 2,
            TrimmerError::Domain(DomainError::AlreadyRunning) => 3,
            TrimmerError::Domain(DomainError::ResourceUnavailable(_)) => 4,
            TrimmerError::TrimFailed { .. } => 5,
            _ => 1,
        }
    }
}

/// Result type alias for trimmer operations
pub type TrimmerResult<T> = std::result::Result<T, TrimmerError>;
