//! Load-time theme registry.
//!
//! Discovery walks each theme once and records its descriptor together with
//! the files under `pages/`, `layout/` and `components/`. Lookups afterwards
//! are answered from memory, so a registry can be shared across requests as
//! an explicit, immutable snapshot.

use async_trait::async_trait;
use atelier_common::{is_valid_slug, ThemeError};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{is_absent, safe_relative, FsThemeStore, ThemeCatalog};
use crate::metadata::{DescriptorStatus, ThemeMetadata};

/// Top-level directories whose contents are indexed during discovery.
pub const INDEXED_DIRS: &[&str] = &["pages", "layout", "components"];

/// One theme as captured by discovery.
#[derive(Debug, Clone)]
pub struct RegisteredTheme {
    pub root: PathBuf,
    pub descriptor: DescriptorStatus,
    files: BTreeSet<String>,
    dirs: BTreeSet<String>,
}

impl RegisteredTheme {
    pub fn new(root: impl Into<PathBuf>, descriptor: DescriptorStatus) -> Self {
        Self {
            root: root.into(),
            descriptor,
            files: BTreeSet::new(),
            dirs: BTreeSet::new(),
        }
    }

    /// Register a theme-relative file; its parent directories are
    /// registered along with it.
    pub fn with_file(mut self, relative: &str) -> Self {
        self.add_file(relative);
        self
    }

    /// Register an empty theme-relative directory.
    pub fn with_dir(mut self, relative: &str) -> Self {
        self.add_dir(relative);
        self
    }

    fn add_file(&mut self, relative: &str) {
        let Some(relative) = safe_relative(relative) else {
            return;
        };
        if let Some((parent, _)) = relative.rsplit_once('/') {
            self.add_dir(parent);
        }
        self.files.insert(relative);
    }

    fn add_dir(&mut self, relative: &str) {
        let Some(relative) = safe_relative(relative) else {
            return;
        };
        let mut prefix = String::new();
        for segment in relative.split('/') {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            self.dirs.insert(prefix.clone());
        }
    }

    /// Indexed files, theme-relative, sorted.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }
}

/// Immutable snapshot of every installed theme.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, RegisteredTheme>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a theme. Invalid slugs are ignored.
    pub fn insert(&mut self, slug: impl Into<String>, theme: RegisteredTheme) {
        let slug = slug.into();
        if is_valid_slug(&slug) {
            self.themes.insert(slug, theme);
        }
    }

    /// Shorthand for registering a theme with valid metadata.
    pub fn with_theme(mut self, metadata: ThemeMetadata, files: &[&str]) -> Self {
        let slug = metadata.slug.clone();
        let mut theme = RegisteredTheme::new(
            PathBuf::from("/themes").join(&slug),
            DescriptorStatus::Valid(metadata),
        );
        for file in files {
            theme.add_file(file);
        }
        self.insert(slug, theme);
        self
    }

    pub fn get(&self, slug: &str) -> Option<&RegisteredTheme> {
        self.themes.get(slug)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Snapshot every theme under `store`'s root.
    pub async fn discover(store: &FsThemeStore) -> Result<Self, ThemeError> {
        let mut registry = Self::new();
        for slug in store.slugs().await? {
            let root = store.theme_root(&slug);
            let descriptor = store.descriptor(&slug).await?;
            let mut theme = RegisteredTheme::new(root.clone(), descriptor);
            for dir in INDEXED_DIRS {
                index_dir(&root, dir, &mut theme).await?;
            }
            debug!(slug = %slug, files = theme.files.len(), "indexed theme");
            registry.insert(slug, theme);
        }
        info!(
            "discovered {} themes under {}",
            registry.len(),
            store.root().display()
        );
        Ok(registry)
    }
}

/// Record every file below `<root>/<top>` into `theme`.
///
/// Symlinks are followed the way [`FsThemeStore`] follows them, so both
/// catalogs classify the same path alike. A directory link back to one of
/// its own ancestors is not descended into again.
async fn index_dir(root: &Path, top: &str, theme: &mut RegisteredTheme) -> Result<(), ThemeError> {
    let mut pending: Vec<(String, Vec<PathBuf>)> = vec![(top.to_string(), Vec::new())];
    while let Some((relative, mut ancestors)) = pending.pop() {
        let dir = root.join(&relative);
        let canonical = match tokio::fs::canonicalize(&dir).await {
            Ok(canonical) => canonical,
            Err(e) if is_absent(&e) => continue,
            Err(e) => return Err(ThemeError::io(dir, e)),
        };
        if ancestors.contains(&canonical) {
            debug!(dir = %dir.display(), "skipping directory link cycle");
            continue;
        }
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if is_absent(&e) => continue,
            Err(e) => return Err(ThemeError::io(dir, e)),
        };
        theme.add_dir(&relative);
        ancestors.push(canonical);

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ThemeError::io(&dir, e))?
        {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            let child = format!("{relative}/{name}");
            let meta = match tokio::fs::metadata(entry.path()).await {
                Ok(meta) => meta,
                // Dangling link.
                Err(e) if is_absent(&e) => continue,
                Err(e) => return Err(ThemeError::io(entry.path(), e)),
            };
            if meta.is_dir() {
                pending.push((child, ancestors.clone()));
            } else if meta.is_file() {
                theme.add_file(&child);
            }
        }
    }
    Ok(())
}

#[async_trait]
impl ThemeCatalog for ThemeRegistry {
    async fn slugs(&self) -> Result<Vec<String>, ThemeError> {
        Ok(self.themes.keys().cloned().collect())
    }

    async fn exists(&self, slug: &str) -> bool {
        self.themes.contains_key(slug)
    }

    async fn descriptor(&self, slug: &str) -> Result<DescriptorStatus, ThemeError> {
        Ok(self
            .themes
            .get(slug)
            .map(|theme| theme.descriptor.clone())
            .unwrap_or(DescriptorStatus::Missing))
    }

    async fn is_file(&self, slug: &str, relative: &str) -> Result<bool, ThemeError> {
        let (Some(theme), Some(relative)) = (self.themes.get(slug), safe_relative(relative)) else {
            return Ok(false);
        };
        Ok(theme.files.contains(&relative))
    }

    async fn is_dir(&self, slug: &str, relative: &str) -> Result<bool, ThemeError> {
        let (Some(theme), Some(relative)) = (self.themes.get(slug), safe_relative(relative)) else {
            return Ok(false);
        };
        Ok(theme.dirs.contains(&relative))
    }

    fn theme_root(&self, slug: &str) -> PathBuf {
        self.themes
            .get(slug)
            .map(|theme| theme.root.clone())
            .unwrap_or_else(|| PathBuf::from(slug))
    }
}
