//! FFmpeg execution adapter
//!
//! Runs an ffmpeg-compatible binary as a child process and reports its
//! lifecycle over a channel. One adapter owns one process slot.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::errors::*;
use crate::ports::*;

/// Default binary name, resolved through `PATH`
pub const DEFAULT_FFMPEG_BINARY: &str = "ffmpeg";

/// FFmpeg-based process runner
pub struct FfmpegProcessAdapter {
    binary: PathBuf,
    busy: Arc<AtomicBool>,
}

/// Releases the process slot when dropped
struct SlotGuard(Arc<AtomicBool>);

impl Drop for SlotGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl FfmpegProcessAdapter {
    /// Create new adapter for the given binary
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    fn claim_slot(&self) -> Result<SlotGuard, DomainError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| DomainError::AlreadyRunning)?;
        Ok(SlotGuard(Arc::clone(&self.busy)))
    }
}

impl Default for FfmpegProcessAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_FFMPEG_BINARY)
    }
}

#[async_trait]
impl ProcessRunnerPort for FfmpegProcessAdapter {
    fn submit(&self, args: Vec<String>) -> Result<mpsc::UnboundedReceiver<RunnerEvent>, DomainError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| {
            DomainError::ResourceUnavailable("process runner requires a Tokio runtime".to_string())
        })?;

        let guard = self.claim_slot()?;
        let (tx, rx) = mpsc::unbounded_channel();
        let binary = self.binary.clone();

        debug!(binary = %binary.display(), ?args, "Submitting transcoder command");

        runtime.spawn(async move {
            let terminal = run_to_completion(&binary, &args, &tx).await;
            // Free the slot before the caller can observe the terminal event.
            drop(guard);
            if tx.send(terminal).is_err() {
                debug!("Trim event receiver dropped before completion");
            }
        });

        Ok(rx)
    }

    fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    async fn probe(&self) -> Result<String, DomainError> {
        let output = Command::new(&self.binary)
            .arg("-version")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                DomainError::ResourceUnavailable(format!(
                    "Cannot execute {}: {}",
                    self.binary.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            return Err(DomainError::ResourceUnavailable(format!(
                "{} -version exited with {}",
                self.binary.display(),
                output.status
            )));
        }

        let banner = String::from_utf8_lossy(&output.stdout);
        Ok(banner.lines().next().unwrap_or_default().trim().to_string())
    }
}

/// Spawn the binary, announce the start and wait for the exit status
async fn run_to_completion(
    binary: &Path,
    args: &[String],
    tx: &mpsc::UnboundedSender<RunnerEvent>,
) -> RunnerEvent {
    let child = Command::new(binary)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn();

    let child = match child {
        Ok(child) => child,
        Err(e) => {
            warn!(binary = %binary.display(), error = %e, "Failed to spawn transcoder");
            return RunnerEvent::Failed(format!("Failed to start {}: {}", binary.display(), e));
        }
    };

    debug!(pid = ?child.id(), "Transcoder process started");
    let _ = tx.send(RunnerEvent::Started);

    match child.wait_with_output().await {
        Ok(output) if output.status.success() => {
            RunnerEvent::Succeeded(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if stderr.is_empty() {
                RunnerEvent::Failed(format!("{} exited with {}", binary.display(), output.status))
            } else {
                RunnerEvent::Failed(stderr)
            }
        }
        Err(e) => RunnerEvent::Failed(format!("Failed to wait for {}: {}", binary.display(), e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_outside_runtime_is_rejected() {
        let adapter = FfmpegProcessAdapter::default();
        let err = adapter.submit(vec!["-version".to_string()]).unwrap_err();
        assert!(matches!(err, DomainError::ResourceUnavailable(_)));
        assert!(!adapter.is_busy());
    }

    #[tokio::test]
    async fn test_missing_binary_reports_failure_without_start() {
        let adapter = FfmpegProcessAdapter::new("/nonexistent/bin/ffmpeg-for-tests");
        let mut rx = adapter.submit(vec!["-version".to_string()]).unwrap();

        match rx.recv().await {
            Some(RunnerEvent::Failed(message)) => assert!(message.contains("Failed to start")),
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(rx.recv().await.is_none());
        assert!(!adapter.is_busy());
    }

    #[tokio::test]
    async fn test_slot_is_claimed_until_completion() {
        let adapter = FfmpegProcessAdapter::new("/nonexistent/bin/ffmpeg-for-tests");
        let guard = adapter.claim_slot().unwrap();
        assert!(adapter.is_busy());
        assert_eq!(
            adapter.submit(Vec::new()).unwrap_err(),
            DomainError::AlreadyRunning
        );
        drop(guard);
        assert!(!adapter.is_busy());
    }

    #[tokio::test]
    async fn test_probe_missing_binary() {
        let adapter = FfmpegProcessAdapter::new("/nonexistent/bin/ffmpeg-for-tests");
        let err = adapter.probe().await.unwrap_err();
        assert!(matches!(err, DomainError::ResourceUnavailable(_)));
    }
}
