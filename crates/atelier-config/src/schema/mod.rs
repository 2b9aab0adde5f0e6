//! Configuration schema types for Atelier.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults that resolve every request to
//! the fallback theme under `./themes`.

mod settings;
mod signals;
mod system;
mod themes;

pub use settings::*;
pub use signals::*;
pub use system::*;
pub use themes::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Atelier.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct AtelierConfig {
    pub themes: ThemesConfig,
    /// Host or `*.parent` pattern -> theme slug.
    pub domains: BTreeMap<String, String>,
    /// Legacy template name -> theme slug, merged over the built-in table.
    pub legacy: BTreeMap<String, String>,
    pub signals: SignalsConfig,
    pub settings: SettingsConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_config_has_correct_themes() {
        let config = AtelierConfig::default();
        assert_eq!(config.themes.root, PathBuf::from("themes"));
        assert_eq!(config.themes.default_theme, None);
        assert_eq!(config.themes.extensions, vec!["tsx", "ts", "jsx", "js"]);
        assert_eq!(config.themes.max_chain_depth, 16);
    }

    #[test]
    fn default_config_has_correct_signals() {
        let config = AtelierConfig::default();
        assert_eq!(config.signals.preview_cookie, "theme_preview");
        assert_eq!(config.signals.session_cookie, "theme");
        assert_eq!(config.signals.preview_max_age_secs, 3600);
        assert_eq!(config.signals.session_max_age_secs, 31_536_000);
    }

    #[test]
    fn default_config_has_no_bindings() {
        let config = AtelierConfig::default();
        assert!(config.domains.is_empty());
        assert!(config.legacy.is_empty());
        assert!(config.settings.path.is_none());
        assert_eq!(config.settings.key, "template");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: AtelierConfig = toml::from_str(
            r#"
[themes]
default_theme = "aurora"

[domains]
"shop.example.com" = "storefront"
"*.example.com" = "aurora"
"#,
        )
        .unwrap();
        assert_eq!(config.themes.default_theme.as_deref(), Some("aurora"));
        assert_eq!(config.themes.max_chain_depth, 16);
        assert_eq!(config.domains.len(), 2);
        assert_eq!(config.domains["*.example.com"], "aurora");
        assert_eq!(config.signals.session_cookie, "theme");
    }

    #[test]
    fn log_level_parses_lowercase() {
        let config: AtelierConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.as_str(), "debug");
    }
}
