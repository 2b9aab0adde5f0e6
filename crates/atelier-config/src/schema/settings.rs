//! Persisted platform settings configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location of the durable platform-wide settings file.
///
/// When `path` is unset the persisted-configuration source never has an
/// opinion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    pub path: Option<PathBuf>,
    /// Key holding the legacy template name inside the settings file.
    pub key: String,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            path: None,
            key: "template".into(),
        }
    }
}
