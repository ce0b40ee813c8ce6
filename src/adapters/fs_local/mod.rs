// Local filesystem adapter - File system operations backed by tokio::fs

use crate::domain::errors::*;
use crate::ports::*;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Local filesystem adapter
#[derive(Debug, Default)]
pub struct FsLocalAdapter;

impl FsLocalAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FsPort for FsLocalAdapter {
    async fn exists(&self, path: &Path) -> Result<bool, DomainError> {
        tokio::fs::try_exists(path)
            .await
            .map_err(|e| DomainError::FsFail(format!("Failed to stat {}: {}", path.display(), e)))
    }

    async fn ensure_dir(&self, dir: &Path) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            DomainError::FsFail(format!("Failed to create directory {}: {}", dir.display(), e))
        })
    }

    async fn absolute(&self, path: &Path) -> Result<PathBuf, DomainError> {
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }

        let cwd = std::env::current_dir()
            .map_err(|e| DomainError::FsFail(format!("Failed to read working directory: {}", e)))?;
        Ok(cwd.join(path))
    }
}
