//! Configuration initialization and hierarchy management

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::adapters::toml_config::*;
use crate::domain::errors::DomainError;
use crate::ports::{ConfigPort, LogLevel};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "trimmer.toml";

/// Environment variables and the config keys they override
pub const ENV_MAPPINGS: &[(&str, &str)] = &[
    ("TRIMMER_FFMPEG_PATH", KEY_FFMPEG_PATH),
    ("TRIMMER_DESTINATION_DIR", KEY_DESTINATION_DIR),
    ("TRIMMER_LOG_LEVEL", KEY_LOG_LEVEL),
    ("TRIMMER_JSON_LOGS", KEY_JSON_LOGS),
];

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub ffmpeg_path: Option<String>,
    pub destination_dir: Option<String>,
    pub log_level: Option<String>,
    pub json_logs: Option<bool>,
}

/// Resolved settings after applying every layer
#[derive(Debug, Clone, PartialEq)]
pub struct TrimmerSettings {
    pub ffmpeg_path: PathBuf,
    pub destination_dir: PathBuf,
    pub log_level: LogLevel,
    pub json_logs: bool,
}

/// Initialize configuration hierarchy following precedence: CLI > Env > File > Defaults
pub async fn initialize_configuration_hierarchy(
    config: &TomlConfigAdapter,
    overrides: &ConfigOverrides,
) -> Result<TrimmerSettings, DomainError> {
    initialize_with_env(config, overrides, |key| std::env::var(key).ok()).await
}

/// Same as [`initialize_configuration_hierarchy`] with an injectable environment
pub async fn initialize_with_env<F>(
    config: &TomlConfigAdapter,
    overrides: &ConfigOverrides,
    env: F,
) -> Result<TrimmerSettings, DomainError>
where
    F: Fn(&str) -> Option<String>,
{
    // Step 1: defaults are seeded by TomlConfigAdapter::new()
    // Step 2: file
    load_config_file(config, overrides.config_file.as_deref()).await?;

    // Step 3: environment
    load_environment_variables(config, env).await?;

    // Step 4: command line
    apply_cli_configuration_overrides(config, overrides).await?;

    config.validate().await?;
    let settings = resolve_settings(config).await?;
    debug!(?settings, "Configuration hierarchy initialized");
    Ok(settings)
}

/// Load an explicit config file, or the default one if it exists
async fn load_config_file(
    config: &TomlConfigAdapter,
    explicit: Option<&Path>,
) -> Result<(), DomainError> {
    match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            config.load(path).await
        }
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
            config.load(Path::new(DEFAULT_CONFIG_FILE)).await
        }
        None => {
            debug!("No configuration file found");
            Ok(())
        }
    }
}

async fn load_environment_variables<F>(config: &TomlConfigAdapter, env: F) -> Result<(), DomainError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut env_overrides = 0;
    for (env_var, config_key) in ENV_MAPPINGS {
        if let Some(value) = env(env_var) {
            debug!("Found environment override: {} = {}", env_var, value);
            config.set(config_key, &value).await?;
            env_overrides += 1;
        }
    }

    if env_overrides > 0 {
        debug!("Applied {} environment variable overrides", env_overrides);
    }

    Ok(())
}

async fn apply_cli_configuration_overrides(
    config: &TomlConfigAdapter,
    overrides: &ConfigOverrides,
) -> Result<(), DomainError> {
    let json_logs = overrides.json_logs.map(|b| b.to_string());
    let pairs = [
        (KEY_FFMPEG_PATH, overrides.ffmpeg_path.as_deref()),
        (KEY_DESTINATION_DIR, overrides.destination_dir.as_deref()),
        (KEY_LOG_LEVEL, overrides.log_level.as_deref()),
        (KEY_JSON_LOGS, json_logs.as_deref()),
    ];

    for (key, value) in pairs {
        if let Some(value) = value {
            debug!("CLI override: {} = {}", key, value);
            config.set(key, value).await?;
        }
    }

    Ok(())
}

async fn resolve_settings(config: &TomlConfigAdapter) -> Result<TrimmerSettings, DomainError> {
    let ffmpeg_path = config.get_or(KEY_FFMPEG_PATH, "ffmpeg").await?;
    let destination_dir = config.get_or(KEY_DESTINATION_DIR, ".").await?;
    let log_level = config.get_or(KEY_LOG_LEVEL, "info").await?;
    let json_logs = config.get_or(KEY_JSON_LOGS, "false").await?;

    Ok(TrimmerSettings {
        ffmpeg_path: PathBuf::from(ffmpeg_path),
        destination_dir: PathBuf::from(destination_dir),
        log_level: log_level.parse::<LogLevel>()?,
        json_logs: json_logs
            .parse()
            .map_err(|e| DomainError::ConfigFail(format!("Invalid json_logs: {}", e)))?,
    })
}
