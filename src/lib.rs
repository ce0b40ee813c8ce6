//! Video Trimmer Library
//!
//! Turns a millisecond range over a source video into an ffmpeg stream-copy
//! command, runs it through a single-slot process runner and relays the
//! runner's lifecycle back to the caller.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::{TrimInteractor, TrimListener, TrimSession};
pub use domain::errors::DomainError;
pub use domain::model::{OutputFile, Timecode, TrimCommand, TrimEvent, TrimOutcome, TrimRequest, TrimState};
pub use domain::rules::{build_trim_command, format_display_time, seconds_to_timecode};
pub use error::{TrimmerError, TrimmerResult};
pub use ports::{ProcessRunnerPort, RunnerEvent};
