//! Command implementations

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::{error, info};

use crate::app::{AppContainer, TrimListener};
use crate::cli::args::{CommandArgs, DisplayTimeArgs, TrimArgs};
use crate::config_initialization::TrimmerSettings;
use crate::domain::errors::DomainError;
use crate::domain::model::{OutputFile, TrimOutcome, TrimRequest};
use crate::domain::rules::{build_trim_command, format_display_time};
use crate::error::{TrimmerError, TrimmerResult};

/// Listener that reports progress on the console
struct ConsoleListener {
    json: bool,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleListener {
    fn new(json: bool, out: Box<dyn Write + Send>) -> Self {
        Self {
            json,
            out: Mutex::new(out),
        }
    }

    fn print(&self, line: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
        }
    }
}

impl TrimListener for ConsoleListener {
    fn on_trim_started(&self) {
        info!("Trim started");
        if !self.json {
            self.print("Trimming...");
        }
    }

    fn on_success(&self, output: OutputFile) {
        if !self.json {
            self.print(&format!("Trimmed video written to {}", output));
            self.print(&output.to_uri());
        }
    }

    fn on_error(&self, message: String) {
        error!("Trim failed: {}", message);
    }
}

/// Execute the trim command
pub async fn trim(
    args: TrimArgs,
    settings: &TrimmerSettings,
    container: &dyn AppContainer,
) -> TrimmerResult<TrimOutcome> {
    let destination_dir = args
        .dest_dir
        .map(Into::into)
        .unwrap_or_else(|| settings.destination_dir.clone());
    let request = TrimRequest::validated(args.input, destination_dir, args.start_ms, args.end_ms)?;

    info!(
        "Trim {} [{} - {}) into {}",
        request.source_path.display(),
        format_display_time(request.start_ms),
        format_display_time(request.end_ms),
        request.destination_dir.display()
    );

    let listener = Arc::new(ConsoleListener::new(args.json, Box::new(std::io::stdout())));
    let handle = container
        .trim_interactor()
        .start_trim_with_listener(&request, listener)
        .await?;

    let outcome = handle
        .await
        .map_err(|e| DomainError::ProcessFail(format!("trim relay task failed: {}", e)))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    match outcome {
        TrimOutcome::Failed { message } => Err(TrimmerError::TrimFailed { message }),
        succeeded => Ok(succeeded),
    }
}

/// Execute the command subcommand
pub fn command(args: CommandArgs) -> TrimmerResult<()> {
    let command = build_trim_command(
        Path::new(&args.input),
        Path::new(&args.output),
        args.start_ms,
        args.end_ms,
    );

    if args.json {
        println!("{}", serde_json::to_string(command.args())?);
    } else {
        println!("ffmpeg {}", command);
    }
    Ok(())
}

/// Execute the display-time command
pub fn display_time(args: DisplayTimeArgs) -> TrimmerResult<()> {
    println!("{}", format_display_time(args.millis));
    Ok(())
}

/// Execute the check command; `--ffmpeg` has already been applied through
/// the configuration layers
pub async fn check(container: &dyn AppContainer) -> TrimmerResult<()> {
    let banner = container.process_runner().probe().await?;
    println!("{}", banner);
    Ok(())
}
