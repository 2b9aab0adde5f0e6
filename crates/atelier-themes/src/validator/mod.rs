//! Build-time theme validation.
//!
//! Runs every static check against every theme directory and collects the
//! failures into a [`ValidationReport`]. Validation never stops at the first
//! problem and never changes anything on disk.

mod checks;


use atelier_common::ThemeError;
use atelier_config::AtelierConfig;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::chain::DEFAULT_MAX_CHAIN_DEPTH;
use crate::store::ThemeCatalog;

/// Outcome for one theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ThemeReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Outcome for every theme directory under the themes root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub per_theme: BTreeMap<String, ThemeReport>,
    pub all_valid: bool,
}

impl ValidationReport {
    pub fn valid_themes(&self) -> impl Iterator<Item = &str> {
        self.per_theme
            .iter()
            .filter(|(_, report)| report.valid)
            .map(|(slug, _)| slug.as_str())
    }

    pub fn error_count(&self) -> usize {
        self.per_theme.values().map(|r| r.errors.len()).sum()
    }
}

/// Validates installed themes through a [`ThemeCatalog`].
pub struct ThemeValidator<'a, C: ThemeCatalog + ?Sized> {
    catalog: &'a C,
    extensions: Vec<String>,
    max_depth: usize,
}

impl<'a, C: ThemeCatalog + ?Sized> ThemeValidator<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self {
            catalog,
            extensions: vec!["tsx".into(), "ts".into(), "jsx".into(), "js".into()],
            max_depth: DEFAULT_MAX_CHAIN_DEPTH,
        }
    }

    /// Page extensions and chain depth taken from `config`.
    pub fn from_config(catalog: &'a C, config: &AtelierConfig) -> Self {
        let mut validator = Self::new(catalog);
        validator.extensions = config.themes.extensions.clone();
        validator.max_depth = config.themes.max_chain_depth as usize;
        validator
    }

    /// Check every theme directory.
    ///
    /// Only a failure to enumerate the themes root is returned as an error;
    /// faults while checking one theme are recorded against that theme.
    pub async fn validate(&self) -> Result<ValidationReport, ThemeError> {
        let slugs = self.catalog.slugs().await?;
        if slugs.is_empty() {
            warn!("no themes found to validate");
        }

        let mut per_theme = BTreeMap::new();
        for slug in slugs {
            let errors =
                checks::check_theme(self.catalog, &slug, &self.extensions, self.max_depth).await;
            if !errors.is_empty() {
                warn!(slug = %slug, "theme failed validation: {}", errors.join("; "));
            }
            per_theme.insert(slug, ThemeReport::from_errors(errors));
        }

        let all_valid = per_theme.values().all(|r| r.valid);
        info!(
            themes = per_theme.len(),
            all_valid, "theme validation finished"
        );
        Ok(ValidationReport {
            per_theme,
            all_valid,
        })
    }
}
