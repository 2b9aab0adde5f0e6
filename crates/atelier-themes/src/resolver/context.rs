//! Per-request resolution input.

use atelier_config::schema::SignalsConfig;
use atelier_config::{AtelierConfig, SettingsStore};
use serde::Serialize;
use tracing::{debug, warn};

use crate::signals::RequestSignals;

/// Everything the resolver may consult for one request.
///
/// Built once per request and discarded afterwards. A `None` field means
/// that source has no opinion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionContext {
    pub preview_override: Option<String>,
    pub request_host: Option<String>,
    pub session_override: Option<String>,
    pub persisted_default: Option<String>,
    pub process_default: Option<String>,
}

impl ResolutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preview(mut self, slug: impl Into<String>) -> Self {
        self.preview_override = Some(slug.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.request_host = Some(host.into());
        self
    }

    pub fn with_session(mut self, slug: impl Into<String>) -> Self {
        self.session_override = Some(slug.into());
        self
    }

    pub fn with_persisted(mut self, name: impl Into<String>) -> Self {
        self.persisted_default = Some(name.into());
        self
    }

    pub fn with_process_default(mut self, slug: impl Into<String>) -> Self {
        self.process_default = Some(slug.into());
        self
    }
}

/// Assembles a [`ResolutionContext`] from request signals, the persisted
/// settings store and the process default.
pub struct ContextLoader<'a> {
    cookies: &'a SignalsConfig,
    settings: &'a dyn SettingsStore,
    process_default: Option<String>,
}

impl<'a> ContextLoader<'a> {
    pub fn new(cookies: &'a SignalsConfig, settings: &'a dyn SettingsStore) -> Self {
        Self {
            cookies,
            settings,
            process_default: None,
        }
    }

    /// Cookie names and process default taken from `config`.
    pub fn from_config(config: &'a AtelierConfig, settings: &'a dyn SettingsStore) -> Self {
        Self::new(&config.signals, settings)
            .with_process_default(config.themes.default_theme.clone())
    }

    pub fn with_process_default(mut self, slug: Option<String>) -> Self {
        self.process_default = slug.filter(|s| !s.trim().is_empty());
        self
    }

    /// Build the context for one request.
    ///
    /// A settings store that cannot be read counts as having no opinion.
    pub async fn load(&self, request: &RequestSignals) -> ResolutionContext {
        let persisted_default = match self.settings.persisted_theme().await {
            Ok(value) => value,
            Err(e) => {
                warn!("persisted theme setting unavailable: {e}");
                None
            }
        };
        if persisted_default.is_none() {
            debug!("no persisted theme setting");
        }

        ResolutionContext {
            preview_override: request.cookie(&self.cookies.preview_cookie),
            request_host: request.host.clone().filter(|h| !h.trim().is_empty()),
            session_override: request.cookie(&self.cookies.session_cookie),
            persisted_default,
            process_default: self.process_default.clone(),
        }
    }
}

/// Build the context for one request from `config` and `settings`.
pub async fn load_context(
    request: &RequestSignals,
    config: &AtelierConfig,
    settings: &dyn SettingsStore,
) -> ResolutionContext {
    ContextLoader::from_config(config, settings).load(request).await
}
