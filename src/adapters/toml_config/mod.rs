// TOML config adapter - Configuration management using TOML files

use crate::domain::errors::*;
use crate::ports::*;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Table holding our keys inside the TOML document
pub const CONFIG_SECTION: &str = "trimmer";

pub const KEY_FFMPEG_PATH: &str = "ffmpeg_path";
pub const KEY_DESTINATION_DIR: &str = "destination_dir";
pub const KEY_LOG_LEVEL: &str = "log_level";
pub const KEY_JSON_LOGS: &str = "json_logs";

/// TOML configuration adapter
pub struct TomlConfigAdapter {
    config: RwLock<HashMap<String, String>>,
    config_file_path: RwLock<Option<PathBuf>>,
}

impl TomlConfigAdapter {
    /// Create new TOML config adapter seeded with defaults
    pub fn new() -> Self {
        Self {
            config: RwLock::new(Self::defaults()),
            config_file_path: RwLock::new(None),
        }
    }

    fn defaults() -> HashMap<String, String> {
        [
            (KEY_FFMPEG_PATH, "ffmpeg"),
            (KEY_DESTINATION_DIR, "."),
            (KEY_LOG_LEVEL, "info"),
            (KEY_JSON_LOGS, "false"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    /// Path of the last file loaded, if any
    pub fn config_file_path(&self) -> Option<PathBuf> {
        self.config_file_path.read().ok().and_then(|p| p.clone())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, String>>, DomainError> {
        self.config
            .read()
            .map_err(|_| DomainError::ConfigFail("configuration lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, String>>, DomainError> {
        self.config
            .write()
            .map_err(|_| DomainError::ConfigFail("configuration lock poisoned".to_string()))
    }

    /// Merge the `[trimmer]` table of a TOML document into the config
    fn deserialize_config(&self, toml_content: &str) -> Result<(), DomainError> {
        let parsed: toml::Value = toml::from_str(toml_content)
            .map_err(|e| DomainError::ConfigFail(format!("Failed to parse TOML config: {}", e)))?;

        let Some(section) = parsed.get(CONFIG_SECTION) else {
            return Ok(());
        };
        let table = section.as_table().ok_or_else(|| {
            DomainError::ConfigFail(format!("[{}] must be a table", CONFIG_SECTION))
        })?;

        let mut config = self.write()?;
        for (key, value) in table {
            let value = match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Integer(i) => i.to_string(),
                other => {
                    return Err(DomainError::ConfigFail(format!(
                        "Unsupported value for {}: {}",
                        key, other
                    )))
                }
            };
            config.insert(key.clone(), value);
        }

        Ok(())
    }
}

impl Default for TomlConfigAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigPort for TomlConfigAdapter {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.read()?.get(key).cloned())
    }

    async fn get_or(&self, key: &str, default: &str) -> Result<String, DomainError> {
        Ok(self
            .read()?
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.write()?.insert(key.to_string(), value.to_string());
        tracing::debug!("Set config {} = {}", key, value);
        Ok(())
    }

    async fn load(&self, path: &Path) -> Result<(), DomainError> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::ConfigFail(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        self.deserialize_config(&content)?;
        if let Ok(mut config_path) = self.config_file_path.write() {
            *config_path = Some(path.to_path_buf());
        }

        Ok(())
    }

    async fn validate(&self) -> Result<(), DomainError> {
        let config = self.read()?;

        if let Some(log_level) = config.get(KEY_LOG_LEVEL) {
            log_level.parse::<LogLevel>().map_err(|e| DomainError::ConfigFail(e.to_string()))?;
        }

        if let Some(json_logs) = config.get(KEY_JSON_LOGS) {
            json_logs.parse::<bool>().map_err(|e| {
                DomainError::ConfigFail(format!("Invalid boolean value for {}: {}", KEY_JSON_LOGS, e))
            })?;
        }

        for key in [KEY_FFMPEG_PATH, KEY_DESTINATION_DIR] {
            if config.get(key).is_some_and(|v| v.trim().is_empty()) {
                return Err(DomainError::ConfigFail(format!("{} cannot be empty", key)));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_defaults() {
        let config = TomlConfigAdapter::new();
        assert_eq!(config.get(KEY_FFMPEG_PATH).await.unwrap().as_deref(), Some("ffmpeg"));
        assert_eq!(config.get_or("missing", "x").await.unwrap(), "x");
        assert_eq!(config.get(KEY_DESTINATION_DIR).await.unwrap().as_deref(), Some("."));
        assert_eq!(config.config_file_path(), None);
        config.validate().await.unwrap();
    }

    #[tokio::test]
    async fn test_load_config_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("trimmer.toml");
        std::fs::write(
            &path,
            "[trimmer]\nffmpeg_path = \"/opt/ffmpeg/bin/ffmpeg\"\njson_logs = true\n",
        )
        .unwrap();

        let config = TomlConfigAdapter::new();
        config.load(&path).await.unwrap();

        assert_eq!(
            config.get(KEY_FFMPEG_PATH).await.unwrap().as_deref(),
            Some("/opt/ffmpeg/bin/ffmpeg")
        );
        assert_eq!(config.get(KEY_JSON_LOGS).await.unwrap().as_deref(), Some("true"));
        assert_eq!(config.get(KEY_LOG_LEVEL).await.unwrap().as_deref(), Some("info"));
        assert_eq!(config.config_file_path(), Some(path));
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let config = TomlConfigAdapter::new();
        let err = config.load(Path::new("/nonexistent/trimmer.toml")).await.unwrap_err();
        assert!(matches!(err, DomainError::ConfigFail(_)));
    }

    #[tokio::test]
    async fn test_invalid_toml_fails() {
        let config = TomlConfigAdapter::new();
        assert!(config.deserialize_config("[trimmer\nbroken").is_err());
        assert!(config.deserialize_config("[trimmer]\nnested = [1, 2]").is_err());
    }

    #[tokio::test]
    async fn test_validate_rejects_bad_values() {
        let config = TomlConfigAdapter::new();
        config.set(KEY_LOG_LEVEL, "chatty").await.unwrap();
        assert!(config.validate().await.is_err());

        let config = TomlConfigAdapter::new();
        config.set(KEY_JSON_LOGS, "yes").await.unwrap();
        assert!(config.validate().await.is_err());

        let config = TomlConfigAdapter::new();
        config.set(KEY_FFMPEG_PATH, "  ").await.unwrap();
        assert!(config.validate().await.is_err());
    }
}
