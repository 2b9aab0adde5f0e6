//! Per-client override signal configuration.

use serde::{Deserialize, Serialize};

/// Cookie names and lifetimes for the preview and session overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalsConfig {
    pub preview_cookie: String,
    pub session_cookie: String,
    /// Preview override lifetime in seconds (valid range: 60-86400).
    pub preview_max_age_secs: u64,
    /// Session override lifetime in seconds (valid range: 3600-63072000).
    pub session_max_age_secs: u64,
}

impl Default for SignalsConfig {
    fn default() -> Self {
        Self {
            preview_cookie: "theme_preview".into(),
            session_cookie: "theme".into(),
            preview_max_age_secs: 3600,
            session_max_age_secs: 365 * 24 * 60 * 60,
        }
    }
}
