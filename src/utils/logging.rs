//! Logging setup for the trimmer binary

use tracing_subscriber::EnvFilter;

use crate::error::{TrimmerError, TrimmerResult};
use crate::ports::LogLevel;

/// Build the filter: `RUST_LOG` wins, otherwise the configured level
pub fn build_env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()))
}

/// Install the global subscriber.
///
/// Logs go to stderr so stdout stays free for command output.
pub fn init_logging(level: LogLevel, json: bool) -> TrimmerResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| TrimmerError::LoggingInit {
        message: e.to_string(),
    })
}
