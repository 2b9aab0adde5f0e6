//! Theme discovery configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where themes live and how they are resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemesConfig {
    /// Directory holding one subdirectory per installed theme.
    pub root: PathBuf,
    /// Process-level default theme slug, consulted after the persisted setting.
    pub default_theme: Option<String>,
    /// Extensions tried, in order, when a logical path names no extension.
    pub extensions: Vec<String>,
    /// Upper bound on inheritance chain length (valid range: 1-64).
    pub max_chain_depth: u32,
}

impl Default for ThemesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("themes"),
            default_theme: None,
            extensions: vec!["tsx".into(), "ts".into(), "jsx".into(), "js".into()],
            max_chain_depth: 16,
        }
    }
}
