// Tracing log adapter - Forwards interactor diagnostics to tracing

use crate::ports::*;

/// Tracing log adapter
///
/// Messages below `min_level` are dropped before they reach the subscriber.
#[derive(Debug, Clone)]
pub struct TracingLogAdapter {
    min_level: LogLevel,
}

impl TracingLogAdapter {
    /// Adapter that forwards everything
    pub fn new() -> Self {
        Self::with_level(LogLevel::Trace)
    }

    /// Adapter that only forwards `level` and above
    pub fn with_level(level: LogLevel) -> Self {
        Self { min_level: level }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

impl Default for TracingLogAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogPort for TracingLogAdapter {
    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        match level {
            LogLevel::Trace => tracing::trace!("{}", message),
            LogLevel::Debug => tracing::debug!("{}", message),
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Warn => tracing::warn!("{}", message),
            LogLevel::Error => tracing::error!("{}", message),
        }
    }
}
