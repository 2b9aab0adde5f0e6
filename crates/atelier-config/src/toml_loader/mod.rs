//! TOML config file loading and creation.

mod loader;
mod paths;
mod template;

#[cfg(test)]
mod tests;

pub use loader::{apply_default_theme_override, load_default, load_from_path, DEFAULT_THEME_ENV};
pub use paths::{config_path_in, create_default_config, default_config_path, CONFIG_DIR_NAME};
