// Trim interactor - Relays one trim request to the external transcoder

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::ports::*;

/// Diagnostic used when the runner goes away without a terminal event
pub const RUNNER_VANISHED: &str = "process runner stopped without reporting a result";

/// Callback form of the trim lifecycle.
///
/// For an accepted trim, `on_trim_started` fires at most once and strictly
/// before exactly one of `on_success` / `on_error`.
pub trait TrimListener: Send + Sync {
    fn on_trim_started(&self);
    fn on_success(&self, output: OutputFile);
    fn on_error(&self, message: String);
}

/// Interactor for the trim use case
pub struct TrimInteractor {
    runner: Arc<dyn ProcessRunnerPort>,
    fs_port: Arc<dyn FsPort>,
    log_port: Arc<dyn LogPort>,
}

impl TrimInteractor {
    /// Create new trim interactor with injected ports
    pub fn new(
        runner: Arc<dyn ProcessRunnerPort>,
        fs_port: Arc<dyn FsPort>,
        log_port: Arc<dyn LogPort>,
    ) -> Self {
        Self {
            runner,
            fs_port,
            log_port,
        }
    }

    /// Whether the underlying runner has a trim in flight
    pub fn is_busy(&self) -> bool {
        self.runner.is_busy()
    }

    /// Start a trim, naming the output after the current local time.
    ///
    /// Returns [`DomainError::AlreadyRunning`] straight away when the runner
    /// is busy; nothing is queued and no event is emitted for that call.
    pub async fn start_trim(&self, request: &TrimRequest) -> Result<TrimSession, DomainError> {
        self.start_trim_at(request, &Local::now()).await
    }

    /// Start a trim with an explicit timestamp for the output name
    pub async fn start_trim_at<Tz>(
        &self,
        request: &TrimRequest,
        now: &DateTime<Tz>,
    ) -> Result<TrimSession, DomainError>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let destination_dir = self.fs_port.absolute(&request.destination_dir).await?;
        self.fs_port.ensure_dir(&destination_dir).await?;

        let destination = destination_path(&destination_dir, now);
        self.log_port.log(
            LogLevel::Debug,
            &format!("Generated file path {}", destination.display()),
        );

        let source = self.fs_port.absolute(&request.source_path).await?;
        if !self.fs_port.exists(&source).await? {
            self.log_port.log(
                LogLevel::Warn,
                &format!("Source file {} does not exist", source.display()),
            );
        }

        let command = build_trim_command(&source, &destination, request.start_ms, request.end_ms);
        self.log_port.log(
            LogLevel::Info,
            &format!(
                "Trimming {} from {} for {}",
                source.display(),
                command.start(),
                command.duration()
            ),
        );

        let events = match self.runner.submit(command.args().to_vec()) {
            Ok(events) => events,
            Err(e) => {
                if e.is_already_running() {
                    self.log_port.log(
                        LogLevel::Warn,
                        "Trim rejected: a transcoder command is already running",
                    );
                }
                return Err(e);
            }
        };

        Ok(TrimSession::new(events, OutputFile::new(destination), command))
    }

    /// Start a trim and forward its events to `listener` on a spawned task.
    ///
    /// The busy rejection is returned here, never delivered to the listener.
    pub async fn start_trim_with_listener(
        &self,
        request: &TrimRequest,
        listener: Arc<dyn TrimListener>,
    ) -> Result<JoinHandle<TrimOutcome>, DomainError> {
        let session = self.start_trim(request).await?;
        Ok(tokio::spawn(session.relay_to(listener)))
    }
}

/// Event stream of one accepted trim.
///
/// Enforces `Submitted -> Running -> {Succeeded | Failed}`: duplicate or late
/// start notifications are dropped and only one terminal event is produced.
pub struct TrimSession {
    events: mpsc::UnboundedReceiver<RunnerEvent>,
    output: OutputFile,
    command: TrimCommand,
    state: TrimState,
    outcome: Option<TrimOutcome>,
}

impl TrimSession {
    pub(crate) fn new(
        events: mpsc::UnboundedReceiver<RunnerEvent>,
        output: OutputFile,
        command: TrimCommand,
    ) -> Self {
        Self {
            events,
            output,
            command,
            state: TrimState::Submitted,
            outcome: None,
        }
    }

    pub fn state(&self) -> TrimState {
        self.state
    }

    /// Where the output will be written
    pub fn output(&self) -> &OutputFile {
        &self.output
    }

    pub fn command(&self) -> &TrimCommand {
        &self.command
    }

    /// Terminal outcome, once reached
    pub fn outcome(&self) -> Option<&TrimOutcome> {
        self.outcome.as_ref()
    }

    /// Next lifecycle event; `None` after the terminal event
    pub async fn next_event(&mut self) -> Option<TrimEvent> {
        while !self.state.is_terminal() {
            match self.events.recv().await {
                Some(RunnerEvent::Started) => {
                    if self.state == TrimState::Submitted {
                        self.state = TrimState::Running;
                        debug!("Trim running");
                        return Some(TrimEvent::Started);
                    }
                }
                Some(RunnerEvent::Succeeded(_)) => {
                    return Some(self.finish(TrimOutcome::Succeeded {
                        output: self.output.clone(),
                    }));
                }
                Some(RunnerEvent::Failed(message)) => {
                    return Some(self.finish(TrimOutcome::Failed { message }));
                }
                None => {
                    return Some(self.finish(TrimOutcome::Failed {
                        message: RUNNER_VANISHED.to_string(),
                    }));
                }
            }
        }
        None
    }

    fn finish(&mut self, outcome: TrimOutcome) -> TrimEvent {
        let event = match &outcome {
            TrimOutcome::Succeeded { output } => {
                self.state = TrimState::Succeeded;
                info!("Trim finished: {}", output);
                TrimEvent::Succeeded(output.clone())
            }
            TrimOutcome::Failed { message } => {
                self.state = TrimState::Failed;
                warn!("Trim failed: {}", message);
                TrimEvent::Failed(message.clone())
            }
        };
        self.outcome = Some(outcome);
        // Late runner messages are of no interest once terminal.
        self.events.close();
        event
    }

    /// Drain the session and return its terminal outcome
    pub async fn wait(mut self) -> TrimOutcome {
        while self.next_event().await.is_some() {}
        self.terminal_outcome()
    }

    /// Drain the session, forwarding every event to `listener`
    pub async fn relay_to(mut self, listener: Arc<dyn TrimListener>) -> TrimOutcome {
        while let Some(event) = self.next_event().await {
            match event {
                TrimEvent::Started => listener.on_trim_started(),
                TrimEvent::Succeeded(output) => listener.on_success(output),
                TrimEvent::Failed(message) => listener.on_error(message),
            }
        }
        self.terminal_outcome()
    }

    fn terminal_outcome(&self) -> TrimOutcome {
        self.outcome.clone().unwrap_or_else(|| TrimOutcome::Failed {
            message: RUNNER_VANISHED.to_string(),
        })
    }
}
