// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::errors::DomainError;

/// A single user trim action: source file, destination directory and a
/// `[start_ms, end_ms)` range.
///
/// Clamping the range to the media duration is the caller's job.
#[derive(Debug, Clone, PartialEq)]
pub struct TrimRequest {
    pub source_path: PathBuf,
    pub destination_dir: PathBuf,
    pub start_ms: u64,
    pub end_ms: u64,
}

impl TrimRequest {
    /// Create a trim request without range validation
    pub fn new(
        source_path: impl Into<PathBuf>,
        destination_dir: impl Into<PathBuf>,
        start_ms: u64,
        end_ms: u64,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            destination_dir: destination_dir.into(),
            start_ms,
            end_ms,
        }
    }

    /// Create a trim request, rejecting empty paths and `end_ms <= start_ms`
    pub fn validated(
        source_path: impl Into<PathBuf>,
        destination_dir: impl Into<PathBuf>,
        start_ms: u64,
        end_ms: u64,
    ) -> Result<Self, DomainError> {
        let request = Self::new(source_path, destination_dir, start_ms, end_ms);

        if request.source_path.as_os_str().is_empty() {
            return Err(DomainError::BadArgs("Source path cannot be empty".to_string()));
        }
        if request.destination_dir.as_os_str().is_empty() {
            return Err(DomainError::BadArgs(
                "Destination directory cannot be empty".to_string(),
            ));
        }
        if request.end_ms <= request.start_ms {
            return Err(DomainError::BadArgs(format!(
                "End ({} ms) must be greater than start ({} ms)",
                request.end_ms, request.start_ms
            )));
        }

        Ok(request)
    }

    /// Length of the requested range in milliseconds
    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }
}

/// Textual timecode understood by the transcoder's argument parser.
///
/// Normally `HH:MM:SS`; the degenerate zero value is `00:00`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Timecode(String);

impl Timecode {
    pub(crate) fn from_string(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode back to whole seconds
    pub fn to_seconds(&self) -> Option<i64> {
        crate::domain::rules::timecode_to_seconds(&self.0)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Timecode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Argument vector for one stream-copy trim.
///
/// Layout is fixed: `-ss <start> -i <source> -t <duration> -c copy <destination>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrimCommand {
    start: Timecode,
    duration: Timecode,
    args: Vec<String>,
}

impl TrimCommand {
    pub(crate) fn new(start: Timecode, duration: Timecode, source: &Path, destination: &Path) -> Self {
        let args = vec![
            "-ss".to_string(),
            start.as_str().to_string(),
            "-i".to_string(),
            source.to_string_lossy().into_owned(),
            "-t".to_string(),
            duration.as_str().to_string(),
            "-c".to_string(),
            "copy".to_string(),
            destination.to_string_lossy().into_owned(),
        ];

        Self { start, duration, args }
    }

    pub fn start(&self) -> &Timecode {
        &self.start
    }

    pub fn duration(&self) -> &Timecode {
        &self.duration
    }

    pub fn source(&self) -> &str {
        &self.args[3]
    }

    pub fn destination(&self) -> &str {
        &self.args[self.args.len() - 1]
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn into_args(self) -> Vec<String> {
        self.args
    }
}

impl fmt::Display for TrimCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args.join(" "))
    }
}

/// Reference to a produced output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputFile {
    pub path: PathBuf,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `file://` URI for the output path
    pub fn to_uri(&self) -> String {
        let path = self.path.to_string_lossy().replace('\\', "/");
        if path.starts_with('/') {
            format!("file://{}", path)
        } else {
            format!("file:///{}", path)
        }
    }
}

impl fmt::Display for OutputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Lifecycle notification for one accepted trim
#[derive(Debug, Clone, PartialEq)]
pub enum TrimEvent {
    /// External process confirmed it began
    Started,
    /// Output written
    Succeeded(OutputFile),
    /// Transcoder diagnostic, relayed verbatim
    Failed(String),
}

impl TrimEvent {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TrimEvent::Started)
    }
}

/// Terminal result of one trim
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrimOutcome {
    Succeeded { output: OutputFile },
    Failed { message: String },
}

impl TrimOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TrimOutcome::Succeeded { .. })
    }
}

/// State of one accepted trim.
///
/// A busy rejection never gets this far; it is an `Err` from `start_trim`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimState {
    Submitted,
    Running,
    Succeeded,
    Failed,
}

impl TrimState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TrimState::Succeeded | TrimState::Failed)
    }
}

#[cfg(test)]
mod tests;
