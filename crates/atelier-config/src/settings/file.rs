//! TOML-file backed settings store.

use async_trait::async_trait;
use atelier_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::SettingsStore;
use crate::schema::SettingsConfig;
use crate::toml_writer::write_atomic;

/// Reads and writes one key of a TOML settings file.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
    key: String,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    /// Build a store from the `[settings]` section, if a path is configured.
    pub fn from_config(config: &SettingsConfig) -> Option<Self> {
        config
            .path
            .as_ref()
            .map(|path| Self::new(path.clone(), config.key.clone()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_table(&self) -> Result<Option<toml::Table>, ConfigError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "settings file absent");
                return Ok(None);
            }
            Err(e) => {
                return Err(ConfigError::ParseError(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        let table: toml::Table = toml::from_str(&content).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to parse settings {}: {e}",
                self.path.display()
            ))
        })?;
        Ok(Some(table))
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn persisted_theme(&self) -> Result<Option<String>, ConfigError> {
        let Some(table) = self.read_table().await? else {
            return Ok(None);
        };

        match table.get(&self.key) {
            Some(toml::Value::String(name)) if !name.trim().is_empty() => {
                Ok(Some(name.trim().to_string()))
            }
            Some(toml::Value::String(_)) | None => Ok(None),
            Some(other) => Err(ConfigError::ParseError(format!(
                "settings key '{}' must be a string, found {}",
                self.key,
                other.type_str()
            ))),
        }
    }

    async fn store_theme(&self, name: &str) -> Result<(), ConfigError> {
        let mut table = self.read_table().await?.unwrap_or_default();
        table.insert(self.key.clone(), toml::Value::String(name.to_string()));

        let content = toml::to_string_pretty(&table).map_err(|e| {
            ConfigError::ParseError(format!("failed to serialize settings: {e}"))
        })?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&path, &content))
            .await
            .map_err(|e| ConfigError::ParseError(format!("settings write task failed: {e}")))??;

        debug!(path = %self.path.display(), key = %self.key, "persisted theme setting stored");
        Ok(())
    }
}
