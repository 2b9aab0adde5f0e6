//! Theme discovery listing.

use atelier_common::ThemeError;
use serde::Serialize;
use std::path::PathBuf;

use super::ThemeCatalog;
use crate::metadata::ThemeMetadata;
use crate::resolver::FALLBACK_THEME;

/// One discoverable theme, annotated against the current resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeRegistryEntry {
    pub metadata: ThemeMetadata,
    pub root_path: PathBuf,
    pub is_active: bool,
    pub is_deletable: bool,
}

/// A theme may be removed only when it is neither serving requests nor the
/// fallback every resolution can end at.
pub fn is_deletable(slug: &str, active: &str) -> bool {
    slug != active && slug != FALLBACK_THEME
}

/// List every theme with a usable descriptor, sorted by slug.
///
/// Directories without a descriptor (or with an invalid one) are skipped
/// silently; the validator reports them. A missing themes root is created
/// empty.
pub async fn list_themes<C: ThemeCatalog + ?Sized>(
    catalog: &C,
    active: &str,
) -> Result<Vec<ThemeRegistryEntry>, ThemeError> {
    catalog.ensure_root().await?;
    let mut entries = Vec::new();
    for slug in catalog.slugs().await? {
        let Some(metadata) = catalog.metadata(&slug).await?.found() else {
            continue;
        };
        entries.push(ThemeRegistryEntry {
            root_path: catalog.theme_root(&slug),
            is_active: slug == active,
            is_deletable: is_deletable(&slug, active),
            metadata,
        });
    }
    Ok(entries)
}
