//! Core TOML config loading: read from path or platform default.

use crate::schema::AtelierConfig;
use crate::validation;
use atelier_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Environment variable that overrides `themes.default_theme`.
pub const DEFAULT_THEME_ENV: &str = "ATELIER_DEFAULT_THEME";

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields, then
/// applies the [`DEFAULT_THEME_ENV`] override. If validation fails, a warning
/// is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<AtelierConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let mut config: AtelierConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    apply_default_theme_override(&mut config, std::env::var(DEFAULT_THEME_ENV).ok());

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; using parsed config as-is");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/atelier/config.toml`
/// On Linux: `~/.config/atelier/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<AtelierConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            let mut config = AtelierConfig::default();
            apply_default_theme_override(&mut config, std::env::var(DEFAULT_THEME_ENV).ok());
            Ok(config)
        }
        Err(e) => Err(e),
    }
}

/// Replace the process default theme with `value` when it is non-empty.
pub fn apply_default_theme_override(config: &mut AtelierConfig, value: Option<String>) {
    if let Some(slug) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        info!("process default theme overridden by environment: {slug}");
        config.themes.default_theme = Some(slug);
    }
}
