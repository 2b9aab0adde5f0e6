//! Logical file resolution through the inheritance chain.
//!
//! A logical path such as `pages/about` or `components/Header` names a file
//! independently of which theme supplies it. Resolution checks each theme in
//! the chain in order and returns the first concrete file found; a miss
//! across the whole chain is a routine [`Lookup::NotFound`].

use atelier_common::{Lookup, ThemeError};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use crate::chain::{walk_chain, InheritanceChain, DEFAULT_MAX_CHAIN_DEPTH};
use crate::store::{safe_relative, ThemeCatalog};

/// A concrete file chosen for a logical path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFile {
    /// Theme in the chain that supplied the file.
    pub theme: String,
    /// Theme-relative path of the file, extension included.
    pub relative: String,
    pub path: PathBuf,
}

/// Logical path candidates for a page route.
///
/// Leading and trailing slashes, query strings and fragments are dropped.
/// The bare route maps to `pages/index`; any other route also tries its
/// `index` child so `/blog` can be served by `pages/blog/index`. Dynamic
/// segments such as `[slug]` pass through unchanged.
pub fn page_paths(route: &str) -> Vec<String> {
    let route = route.split(['?', '#']).next().unwrap_or_default();
    let route = route.trim().trim_matches('/');
    if route.is_empty() {
        return vec!["pages/index".to_string()];
    }
    if route == "index" || route.ends_with("/index") {
        return vec![format!("pages/{route}")];
    }
    vec![format!("pages/{route}"), format!("pages/{route}/index")]
}

pub fn layout_path(name: &str) -> String {
    format!("layout/{}", name.trim().trim_matches('/'))
}

pub fn component_path(name: &str) -> String {
    format!("components/{}", name.trim().trim_matches('/'))
}

/// Finds concrete files for logical paths in a theme and its ancestors.
pub struct FileResolver<'a, C: ThemeCatalog + ?Sized> {
    catalog: &'a C,
    extensions: Vec<String>,
    max_depth: usize,
}

impl<'a, C: ThemeCatalog + ?Sized> FileResolver<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self {
            catalog,
            extensions: vec!["tsx".into(), "ts".into(), "jsx".into(), "js".into()],
            max_depth: DEFAULT_MAX_CHAIN_DEPTH,
        }
    }

    /// Extensions tried, in order, after the exact logical path.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The inheritance chain this resolver walks for `slug`.
    pub async fn chain(&self, slug: &str) -> Result<InheritanceChain, ThemeError> {
        walk_chain(self.catalog, slug, self.max_depth).await
    }

    /// Resolve one logical path.
    pub async fn resolve(
        &self,
        slug: &str,
        logical: &str,
    ) -> Result<Lookup<ResolvedFile>, ThemeError> {
        self.resolve_any(slug, &[logical.to_string()]).await
    }

    /// Resolve a page route; see [`page_paths`].
    pub async fn page(&self, slug: &str, route: &str) -> Result<Lookup<ResolvedFile>, ThemeError> {
        self.resolve_any(slug, &page_paths(route)).await
    }

    pub async fn layout(&self, slug: &str, name: &str) -> Result<Lookup<ResolvedFile>, ThemeError> {
        self.resolve(slug, &layout_path(name)).await
    }

    pub async fn component(
        &self,
        slug: &str,
        name: &str,
    ) -> Result<Lookup<ResolvedFile>, ThemeError> {
        self.resolve(slug, &component_path(name)).await
    }

    /// Resolve the first of several logical paths.
    ///
    /// The chain is the outer loop: every candidate is tried in a child
    /// theme before any candidate is tried in its parent.
    pub async fn resolve_any(
        &self,
        slug: &str,
        logical: &[String],
    ) -> Result<Lookup<ResolvedFile>, ThemeError> {
        let candidates: Vec<String> = logical
            .iter()
            .filter_map(|path| safe_relative(path))
            .collect();
        if candidates.is_empty() {
            return Ok(Lookup::NotFound);
        }

        let chain = self.chain(slug).await?;
        for theme in chain.iter() {
            for candidate in &candidates {
                for relative in self.variants(candidate) {
                    if self.catalog.is_file(theme, &relative).await? {
                        debug!(slug, theme, file = %relative, "resolved logical path");
                        return Ok(Lookup::Found(ResolvedFile {
                            theme: theme.to_string(),
                            path: self.catalog.theme_root(theme).join(&relative),
                            relative,
                        }));
                    }
                }
            }
        }

        debug!(slug, candidates = ?candidates, "logical path not found in chain");
        Ok(Lookup::NotFound)
    }

    fn variants(&self, logical: &str) -> Vec<String> {
        let mut variants = Vec::with_capacity(self.extensions.len() + 1);
        variants.push(logical.to_string());
        variants.extend(self.extensions.iter().map(|ext| format!("{logical}.{ext}")));
        variants
    }
}
