use std::sync::Arc;

use crate::adapters::{FfmpegProcessAdapter, FsLocalAdapter, TracingLogAdapter};
use crate::app::trim_interactor::TrimInteractor;
use crate::config_initialization::TrimmerSettings;
use crate::ports::{FsPort, LogPort, ProcessRunnerPort};

pub trait AppContainer: Send + Sync {
    fn trim_interactor(&self) -> Arc<TrimInteractor>;
    fn process_runner(&self) -> Arc<dyn ProcessRunnerPort>;
}

/// Wires the production adapters together.
///
/// The runner is shared, so every interactor handed out competes for the
/// same single process slot.
pub struct DefaultAppContainer {
    process_runner: Arc<dyn ProcessRunnerPort>,
    trim_interactor: Arc<TrimInteractor>,
}

impl DefaultAppContainer {
    pub fn new(settings: &TrimmerSettings) -> Self {
        let process_runner: Arc<dyn ProcessRunnerPort> =
            Arc::new(FfmpegProcessAdapter::new(settings.ffmpeg_path.clone()));
        let fs_port: Arc<dyn FsPort> = Arc::new(FsLocalAdapter::new());
        let log_port: Arc<dyn LogPort> = Arc::new(TracingLogAdapter::with_level(settings.log_level));

        let trim_interactor = Arc::new(TrimInteractor::new(
            Arc::clone(&process_runner),
            fs_port,
            log_port,
        ));

        Self {
            process_runner,
            trim_interactor,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn trim_interactor(&self) -> Arc<TrimInteractor> {
        Arc::clone(&self.trim_interactor)
    }

    fn process_runner(&self) -> Arc<dyn ProcessRunnerPort> {
        Arc::clone(&self.process_runner)
    }
}
