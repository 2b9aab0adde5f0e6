//! Installed-theme storage.
//!
//! [`ThemeCatalog`] is the read-only view every other component works
//! against. [`FsThemeStore`] answers it straight from the themes directory;
//! [`ThemeRegistry`] answers it from a snapshot taken during discovery, with
//! each theme's page, layout and component tables held in memory.

mod fs;
mod listing;
mod registry;


pub use fs::FsThemeStore;
pub use listing::{is_deletable, list_themes, ThemeRegistryEntry};
pub use registry::{RegisteredTheme, ThemeRegistry};

use async_trait::async_trait;
use atelier_common::{Lookup, ThemeError};
use std::path::PathBuf;

use crate::metadata::{DescriptorStatus, ThemeMetadata};

/// Read-only access to the set of installed themes.
///
/// Slugs that are not valid theme directory names never exist, so callers
/// may pass client-supplied values straight through.
#[async_trait]
pub trait ThemeCatalog: Send + Sync {
    /// Every installed theme directory, sorted, whether or not it has a
    /// usable descriptor.
    async fn slugs(&self) -> Result<Vec<String>, ThemeError>;

    /// Whether a theme directory named `slug` is present.
    async fn exists(&self, slug: &str) -> bool;

    /// The descriptor state of `slug`; [`DescriptorStatus::Missing`] for
    /// themes that are not installed.
    async fn descriptor(&self, slug: &str) -> Result<DescriptorStatus, ThemeError>;

    /// Whether `relative` names a regular file inside the theme.
    async fn is_file(&self, slug: &str, relative: &str) -> Result<bool, ThemeError>;

    /// Whether `relative` names a directory inside the theme.
    async fn is_dir(&self, slug: &str, relative: &str) -> Result<bool, ThemeError>;

    /// Absolute root directory of `slug`.
    fn theme_root(&self, slug: &str) -> PathBuf;

    /// Create whatever backing storage is missing so the catalog can be
    /// populated. Read operations never call this.
    async fn ensure_root(&self) -> Result<(), ThemeError> {
        Ok(())
    }

    /// Usable metadata for `slug`; missing and invalid descriptors are both
    /// routine absence.
    async fn metadata(&self, slug: &str) -> Result<Lookup<ThemeMetadata>, ThemeError> {
        Ok(self.descriptor(slug).await?.into_metadata().into())
    }
}

/// A path that is not there, including one that runs through a file.
pub(crate) fn is_absent(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory
    )
}

/// Normalise a theme-relative path, rejecting anything that could leave the
/// theme root.
///
/// Leading and trailing `/` are ignored; empty, `.` and `..` segments,
/// backslashes and NUL bytes make the whole path unusable.
pub(crate) fn safe_relative(path: &str) -> Option<String> {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() || trimmed.contains('\\') || trimmed.contains('\0') {
        return None;
    }
    let mut segments = Vec::new();
    for segment in trimmed.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." {
            return None;
        }
        segments.push(segment);
    }
    Some(segments.join("/"))
}
