//! Durable platform-wide settings consulted by the persisted-configuration
//! source.
//!
//! The settings file is a flat TOML table; the configured key (default
//! `template`) holds the legacy template name chosen by an administrator.
//! A missing file means "no opinion", never an error.

mod file;


pub use file::FileSettingsStore;

use async_trait::async_trait;
use atelier_common::ConfigError;

/// Read/write access to the persisted theme setting.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// The stored template name, or `None` when nothing is configured.
    async fn persisted_theme(&self) -> Result<Option<String>, ConfigError>;

    /// Replace the stored template name.
    async fn store_theme(&self, name: &str) -> Result<(), ConfigError>;
}

/// A store that never has an opinion; used when no settings path is
/// configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSettings;

#[async_trait]
impl SettingsStore for NoSettings {
    async fn persisted_theme(&self) -> Result<Option<String>, ConfigError> {
        Ok(None)
    }

    async fn store_theme(&self, _name: &str) -> Result<(), ConfigError> {
        Err(ConfigError::ValidationError(
            "no settings path configured".into(),
        ))
    }
}
