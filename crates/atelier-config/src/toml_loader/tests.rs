//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::AtelierConfig;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_atelier_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, atelier_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[themes]
root = "/srv/themes"

[domains]
"shop.example.com" = "storefront"

[signals]
session_cookie = "site_theme"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.themes.root, Path::new("/srv/themes"));
    assert_eq!(config.domains["shop.example.com"], "storefront");
    assert_eq!(config.signals.session_cookie, "site_theme");
    // Defaults preserved
    assert_eq!(config.signals.preview_cookie, "theme_preview");
    assert_eq!(config.themes.max_chain_depth, 16);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, atelier_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[themes]
max_chain_depth = 500
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.themes.max_chain_depth, 500);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("atelier").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.themes.root, Path::new("themes"));
    assert!(config.domains.is_empty());
}

#[test]
fn create_default_config_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = config_path_in(dir.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[themes]\nroot = \"/srv/themes\"\n").unwrap();

    create_default_config(&path).unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.themes.root, Path::new("/srv/themes"));
    assert!(!path.with_extension("toml.tmp").exists());
}

#[test]
fn config_path_in_uses_project_dir() {
    let path = config_path_in(Path::new("/home/ada/.config"));
    assert_eq!(path, Path::new("/home/ada/.config/atelier/config.toml"));
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;

    let content = default_config_toml();
    let config: AtelierConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.themes.extensions.len(), 4);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn env_override_replaces_default_theme() {
    let mut config = AtelierConfig::default();
    config.themes.default_theme = Some("aurora".into());

    apply_default_theme_override(&mut config, Some("  storefront ".into()));
    assert_eq!(config.themes.default_theme.as_deref(), Some("storefront"));
}

#[test]
fn empty_env_override_is_ignored() {
    let mut config = AtelierConfig::default();
    config.themes.default_theme = Some("aurora".into());

    apply_default_theme_override(&mut config, Some("".into()));
    apply_default_theme_override(&mut config, None);
    assert_eq!(config.themes.default_theme.as_deref(), Some("aurora"));
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("atelier"));
        assert!(path_str.ends_with("config.toml"));
    }
}
