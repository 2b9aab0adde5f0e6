//! Where the config file lives, and seeding it on first run.

use atelier_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;
use crate::toml_writer::write_atomic;

/// Directory under the platform config dir that holds `config.toml`.
pub const CONFIG_DIR_NAME: &str = "atelier";

/// `<base>/atelier/config.toml`.
pub fn config_path_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR_NAME).join("config.toml")
}

/// The config file under the platform config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_path_in(&base))
}

/// Seed `path` with the commented default config.
///
/// An existing file is left untouched, so a config another process wrote
/// between the load attempt and this call survives.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        debug!(path = %path.display(), "config already present, not seeding");
        return Ok(());
    }
    write_atomic(path, &default_config_toml())?;
    info!("created default config at {}", path.display());
    Ok(())
}
