// Ports - Seams between the trim use case and the outside world

use std::path::{Path, PathBuf};
use std::str::FromStr;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::errors::*;

/// Notification emitted by a process runner for one accepted submission
#[derive(Debug, Clone, PartialEq)]
pub enum RunnerEvent {
    /// The external process was spawned
    Started,
    /// The process exited successfully; carries its standard output
    Succeeded(String),
    /// The process failed; carries its diagnostic output
    Failed(String),
}

/// Port for the external transcoder binary.
///
/// A runner owns exactly one process slot. `submit` must fail with
/// [`DomainError::AlreadyRunning`] while a previous submission is in flight
/// and must never queue.
#[async_trait]
pub trait ProcessRunnerPort: Send + Sync {
    /// Start the binary with `args`; events arrive on the returned receiver
    fn submit(&self, args: Vec<String>) -> Result<mpsc::UnboundedReceiver<RunnerEvent>, DomainError>;

    /// Whether a submission is currently in flight
    fn is_busy(&self) -> bool;

    /// Check that the binary can be executed; returns its version banner
    async fn probe(&self) -> Result<String, DomainError>;
}

/// Filesystem access needed to place a trim's output
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Whether `path` exists; errors only when existence cannot be determined
    async fn exists(&self, path: &Path) -> Result<bool, DomainError>;

    /// Create `dir` and any missing parents
    async fn ensure_dir(&self, dir: &Path) -> Result<(), DomainError>;

    /// Absolute form of `path`
    async fn absolute(&self, path: &Path) -> Result<PathBuf, DomainError>;
}

/// Flat string key/value settings store
#[async_trait]
pub trait ConfigPort: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    async fn get_or(&self, key: &str, default: &str) -> Result<String, DomainError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Merge settings from a file; keys it does not mention keep their value
    async fn load(&self, path: &Path) -> Result<(), DomainError>;

    /// Reject values that cannot be turned into settings
    async fn validate(&self) -> Result<(), DomainError>;
}

/// Sink for interactor diagnostics
pub trait LogPort: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

/// Verbosity, ordered from most to least chatty
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const LEVELS: [LogLevel; 5] = [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ];
        LEVELS
            .into_iter()
            .find(|level| level.as_filter().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                DomainError::BadArgs(format!(
                    "unknown log level '{}' (expected trace, debug, info, warn or error)",
                    s
                ))
            })
    }
}

impl LogLevel {
    /// Directive string understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
