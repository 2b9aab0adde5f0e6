//! Active-theme resolution.
//!
//! Exactly one theme serves each request. [`ActiveThemeResolver`] asks a
//! fixed list of signal sources in descending priority and takes the first
//! one that names an installed theme:
//!
//! 1. preview override cookie
//! 2. request host: exact domain binding, a theme's pinned `domain`, then
//!    wildcard binding
//! 3. session override cookie
//! 4. persisted setting, translated through the legacy name table
//! 5. process default
//! 6. [`FALLBACK_THEME`]
//!
//! A source naming a theme that is not installed is treated as silent, so
//! resolution always produces a slug and never fails.

mod context;
mod domain;
mod legacy;


pub use context::{load_context, ContextLoader, ResolutionContext};
pub use domain::DomainThemeMap;
pub use legacy::{LegacyNames, BUILTIN_LEGACY_NAMES};

use atelier_common::Lookup;
use atelier_config::hosts::normalize_host;
use atelier_config::AtelierConfig;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

use crate::store::ThemeCatalog;

/// Theme every resolution ends at when no source has a usable opinion.
pub const FALLBACK_THEME: &str = "default";

/// Which source produced a [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalSource {
    Preview,
    Domain,
    Session,
    Persisted,
    ProcessDefault,
    Fallback,
}

impl SignalSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalSource::Preview => "preview",
            SignalSource::Domain => "domain",
            SignalSource::Session => "session",
            SignalSource::Persisted => "persisted",
            SignalSource::ProcessDefault => "process_default",
            SignalSource::Fallback => "fallback",
        }
    }
}

impl fmt::Display for SignalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The theme chosen for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub slug: String,
    pub source: SignalSource,
}

impl Resolution {
    fn new(slug: impl Into<String>, source: SignalSource) -> Self {
        Self {
            slug: slug.into(),
            source,
        }
    }
}

/// Picks the active theme for a [`ResolutionContext`].
pub struct ActiveThemeResolver<'a, C: ThemeCatalog + ?Sized> {
    catalog: &'a C,
    domains: DomainThemeMap,
    legacy: LegacyNames,
}

impl<'a, C: ThemeCatalog + ?Sized> ActiveThemeResolver<'a, C> {
    /// A resolver with no domain bindings and the built-in legacy table.
    pub fn new(catalog: &'a C) -> Self {
        Self {
            catalog,
            domains: DomainThemeMap::new(),
            legacy: LegacyNames::builtin(),
        }
    }

    /// Domain bindings and legacy names taken from `config`.
    pub fn from_config(catalog: &'a C, config: &AtelierConfig) -> Self {
        Self::new(catalog)
            .with_domains(DomainThemeMap::from_table(&config.domains))
            .with_legacy(LegacyNames::with_overrides(&config.legacy))
    }

    pub fn with_domains(mut self, domains: DomainThemeMap) -> Self {
        self.domains = domains;
        self
    }

    pub fn with_legacy(mut self, legacy: LegacyNames) -> Self {
        self.legacy = legacy;
        self
    }

    /// Choose the active theme. Always succeeds.
    pub async fn resolve(&self, ctx: &ResolutionContext) -> Resolution {
        let resolution = self.first_usable(ctx).await;
        info!(slug = %resolution.slug, source = %resolution.source, "resolved active theme");
        resolution
    }

    /// Slug-only shorthand for [`resolve`](Self::resolve).
    pub async fn resolve_slug(&self, ctx: &ResolutionContext) -> String {
        self.resolve(ctx).await.slug
    }

    async fn first_usable(&self, ctx: &ResolutionContext) -> Resolution {
        if let Some(slug) = self.installed(ctx.preview_override.as_deref()).await {
            return Resolution::new(slug, SignalSource::Preview);
        }
        if let Some(host) = ctx.request_host.as_deref() {
            if let Some(slug) = self.from_host(host).await {
                return Resolution::new(slug, SignalSource::Domain);
            }
        }
        if let Some(slug) = self.installed(ctx.session_override.as_deref()).await {
            return Resolution::new(slug, SignalSource::Session);
        }
        let persisted = ctx
            .persisted_default
            .as_deref()
            .map(|name| self.legacy.translate(name));
        if let Some(slug) = self.installed(persisted).await {
            return Resolution::new(slug, SignalSource::Persisted);
        }
        if let Some(slug) = self.installed(ctx.process_default.as_deref()).await {
            return Resolution::new(slug, SignalSource::ProcessDefault);
        }
        Resolution::new(FALLBACK_THEME, SignalSource::Fallback)
    }

    /// `candidate`, if it names an installed theme.
    async fn installed(&self, candidate: Option<&str>) -> Option<String> {
        let slug = candidate?.trim();
        if slug.is_empty() {
            return None;
        }
        if self.catalog.exists(slug).await {
            Some(slug.to_string())
        } else {
            debug!(slug, "signal names a theme that is not installed");
            None
        }
    }

    /// The domain source. Exact bindings come first, then a theme whose
    /// descriptor pins this host, then wildcard bindings. A binding that
    /// names an uninstalled theme silences the source.
    async fn from_host(&self, raw_host: &str) -> Option<String> {
        let host = normalize_host(raw_host)?;
        if let Some(slug) = self.domains.exact(&host) {
            return self.installed(Some(slug)).await;
        }
        if let Some(slug) = self.pinned_to(&host).await {
            return Some(slug);
        }
        let slug = self.domains.wildcard(&host)?;
        self.installed(Some(slug)).await
    }

    async fn pinned_to(&self, host: &str) -> Option<String> {
        let slugs = match self.catalog.slugs().await {
            Ok(slugs) => slugs,
            Err(e) => {
                warn!("skipping pinned-domain lookup: {e}");
                return None;
            }
        };
        for slug in slugs {
            match self.catalog.metadata(&slug).await {
                Ok(Lookup::Found(meta)) => {
                    let pinned = meta.domain.as_deref().and_then(normalize_host);
                    if pinned.as_deref() == Some(host) {
                        return Some(slug);
                    }
                }
                Ok(Lookup::NotFound) => {}
                Err(e) => warn!(slug = %slug, "skipping theme in pinned-domain lookup: {e}"),
            }
        }
        None
    }
}
