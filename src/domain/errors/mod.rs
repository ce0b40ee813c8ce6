// Domain errors - Error types for the domain layer

use std::fmt;

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid arguments provided
    BadArgs(String),
    /// File system operation failed
    FsFail(String),
    /// The process runner already has an invocation in flight
    AlreadyRunning,
    /// Resource not available (missing binary, no runtime)
    ResourceUnavailable(String),
    /// Configuration could not be loaded or is invalid
    ConfigFail(String),
    /// External process could not be driven
    ProcessFail(String),
}

impl DomainError {
    /// True for the synchronous busy rejection
    pub fn is_already_running(&self) -> bool {
        matches!(self, DomainError::AlreadyRunning)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::BadArgs(msg) => write!(f, "Bad arguments: {}", msg),
            DomainError::FsFail(msg) => write!(f, "File system error: {}", msg),
            DomainError::AlreadyRunning => {
                write!(f, "A trim command is already running; try again when it finishes")
            }
            DomainError::ResourceUnavailable(msg) => write!(f, "Resource unavailable: {}", msg),
            DomainError::ConfigFail(msg) => write!(f, "Configuration error: {}", msg),
            DomainError::ProcessFail(msg) => write!(f, "Process error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
