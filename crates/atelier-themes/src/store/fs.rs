//! Filesystem-backed theme store.

use async_trait::async_trait;
use atelier_common::{is_valid_slug, ThemeError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{is_absent, safe_relative, ThemeCatalog};
use crate::metadata::{read_descriptor, DescriptorStatus};

/// Themes read directly from `<root>/<slug>/` on every call.
#[derive(Debug, Clone)]
pub struct FsThemeStore {
    root: PathBuf,
}

impl FsThemeStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn kind_of(
        &self,
        slug: &str,
        relative: &str,
    ) -> Result<Option<std::fs::FileType>, ThemeError> {
        if !is_valid_slug(slug) {
            return Ok(None);
        }
        let Some(relative) = safe_relative(relative) else {
            return Ok(None);
        };
        let path = self.root.join(slug).join(relative);
        match tokio::fs::metadata(&path).await {
            Ok(meta) => Ok(Some(meta.file_type())),
            Err(e) if is_absent(&e) => Ok(None),
            Err(e) => Err(ThemeError::io(path, e)),
        }
    }
}

#[async_trait]
impl ThemeCatalog for FsThemeStore {
    /// Lists theme directories. A missing root has no themes.
    async fn slugs(&self) -> Result<Vec<String>, ThemeError> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(root = %self.root.display(), "themes directory absent");
                return Ok(Vec::new());
            }
            Err(e) => return Err(ThemeError::io(&self.root, e)),
        };

        let mut slugs = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ThemeError::io(&self.root, e))?
        {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if !is_valid_slug(&name) {
                continue;
            }
            // Follow symlinks so linked theme checkouts count as installed.
            match tokio::fs::metadata(entry.path()).await {
                Ok(meta) if meta.is_dir() => slugs.push(name),
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(ThemeError::io(entry.path(), e)),
            }
        }
        slugs.sort();
        Ok(slugs)
    }

    async fn exists(&self, slug: &str) -> bool {
        if !is_valid_slug(slug) {
            return false;
        }
        match tokio::fs::metadata(self.root.join(slug)).await {
            Ok(meta) => meta.is_dir(),
            Err(e) => {
                if !is_absent(&e) {
                    debug!(slug, error = %e, "theme existence check failed");
                }
                false
            }
        }
    }

    async fn descriptor(&self, slug: &str) -> Result<DescriptorStatus, ThemeError> {
        if !is_valid_slug(slug) {
            return Ok(DescriptorStatus::Missing);
        }
        read_descriptor(&self.root.join(slug), slug).await
    }

    async fn is_file(&self, slug: &str, relative: &str) -> Result<bool, ThemeError> {
        Ok(self
            .kind_of(slug, relative)
            .await?
            .is_some_and(|kind| kind.is_file()))
    }

    async fn is_dir(&self, slug: &str, relative: &str) -> Result<bool, ThemeError> {
        Ok(self
            .kind_of(slug, relative)
            .await?
            .is_some_and(|kind| kind.is_dir()))
    }

    fn theme_root(&self, slug: &str) -> PathBuf {
        self.root.join(slug)
    }

    async fn ensure_root(&self) -> Result<(), ThemeError> {
        match tokio::fs::metadata(&self.root).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tokio::fs::create_dir_all(&self.root)
                    .await
                    .map_err(|e| ThemeError::io(&self.root, e))?;
                info!("created empty themes directory {}", self.root.display());
                Ok(())
            }
            Err(e) => Err(ThemeError::io(&self.root, e)),
        }
    }
}
