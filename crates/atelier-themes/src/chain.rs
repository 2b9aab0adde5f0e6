//! Inheritance-chain walking.
//!
//! A theme's chain is the theme itself followed by its parent, grandparent
//! and so on. The walk is iterative with a visited set, so a cyclic
//! configuration ends the chain instead of looping, and a depth bound caps
//! pathological but acyclic configurations.

use atelier_common::ThemeError;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

use crate::store::ThemeCatalog;

/// Default bound on chain length.
pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 16;

/// Why a walk stopped before reaching a root theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChainDefect {
    /// The starting theme is not installed.
    UnknownTheme { slug: String },
    /// `slug` was reached a second time.
    Cycle { slug: String },
    /// `child` names a parent that is not installed.
    MissingParent { child: String, parent: String },
    /// The chain reached `limit` themes without ending.
    TooDeep { limit: usize },
}

impl fmt::Display for ChainDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainDefect::UnknownTheme { slug } => write!(f, "theme '{slug}' is not installed"),
            ChainDefect::Cycle { slug } => {
                write!(f, "parent chain is cyclic: '{slug}' is its own ancestor")
            }
            ChainDefect::MissingParent { child, parent } => {
                write!(f, "parent '{parent}' of '{child}' is not installed")
            }
            ChainDefect::TooDeep { limit } => {
                write!(f, "parent chain exceeds {limit} themes")
            }
        }
    }
}

/// Ordered ancestor list, self first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InheritanceChain {
    pub slugs: Vec<String>,
    pub defect: Option<ChainDefect>,
}

impl InheritanceChain {
    pub fn is_complete(&self) -> bool {
        self.defect.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slugs.iter().map(String::as_str)
    }
}

/// Walk `slug`'s parent pointers through `catalog`.
///
/// Never loops: a revisited slug, an uninstalled parent or the depth bound
/// ends the walk and is recorded as the chain's defect. Only environment
/// faults while reading descriptors are returned as errors.
pub async fn walk_chain<C: ThemeCatalog + ?Sized>(
    catalog: &C,
    slug: &str,
    max_depth: usize,
) -> Result<InheritanceChain, ThemeError> {
    let mut chain = InheritanceChain {
        slugs: Vec::new(),
        defect: None,
    };

    if !catalog.exists(slug).await {
        chain.defect = Some(ChainDefect::UnknownTheme {
            slug: slug.to_string(),
        });
        return Ok(chain);
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut current = slug.to_string();
    loop {
        if visited.contains(&current) {
            debug!(start = slug, at = %current, "inheritance cycle detected");
            chain.defect = Some(ChainDefect::Cycle { slug: current });
            break;
        }
        if chain.slugs.len() >= max_depth {
            chain.defect = Some(ChainDefect::TooDeep { limit: max_depth });
            break;
        }
        visited.insert(current.clone());
        chain.slugs.push(current.clone());

        let parent = catalog
            .metadata(&current)
            .await?
            .found()
            .and_then(|meta| meta.parent);
        let Some(parent) = parent else {
            break;
        };

        if !catalog.exists(&parent).await {
            chain.defect = Some(ChainDefect::MissingParent {
                child: current,
                parent,
            });
            break;
        }
        current = parent;
    }

    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ThemeMetadata;
    use crate::store::ThemeRegistry;
    use crate::test_support::Fixture;

    #[tokio::test]
    async fn root_theme_chain_is_itself() {
        let fx = Fixture::new();
        fx.theme("default", None);

        let chain = walk_chain(&fx.store(), "default", 16).await.unwrap();
        assert_eq!(chain.slugs, vec!["default"]);
        assert!(chain.is_complete());
    }

    #[tokio::test]
    async fn walks_to_root() {
        let fx = Fixture::new();
        fx.theme("default", None)
            .theme("aurora", Some("default"))
            .theme("aurora-holiday", Some("aurora"));

        let chain = walk_chain(&fx.store(), "aurora-holiday", 16).await.unwrap();
        assert_eq!(chain.slugs, vec!["aurora-holiday", "aurora", "default"]);
        assert!(chain.is_complete());
    }

    #[tokio::test]
    async fn two_theme_cycle_terminates_from_either_end() {
        let fx = Fixture::new();
        fx.theme("a", Some("b")).theme("b", Some("a"));
        let store = fx.store();

        let from_a = walk_chain(&store, "a", 16).await.unwrap();
        assert_eq!(from_a.slugs, vec!["a", "b"]);
        assert_eq!(from_a.defect, Some(ChainDefect::Cycle { slug: "a".into() }));

        let from_b = walk_chain(&store, "b", 16).await.unwrap();
        assert_eq!(from_b.slugs, vec!["b", "a"]);
        assert_eq!(from_b.defect, Some(ChainDefect::Cycle { slug: "b".into() }));
    }

    #[tokio::test]
    async fn self_parent_is_a_cycle() {
        let fx = Fixture::new();
        fx.theme("loop", Some("loop"));

        let chain = walk_chain(&fx.store(), "loop", 16).await.unwrap();
        assert_eq!(chain.slugs, vec!["loop"]);
        assert!(matches!(chain.defect, Some(ChainDefect::Cycle { .. })));
    }

    #[tokio::test]
    async fn missing_parent_ends_chain() {
        let fx = Fixture::new();
        fx.theme("aurora", Some("uninstalled"));

        let chain = walk_chain(&fx.store(), "aurora", 16).await.unwrap();
        assert_eq!(chain.slugs, vec!["aurora"]);
        assert_eq!(
            chain.defect,
            Some(ChainDefect::MissingParent {
                child: "aurora".into(),
                parent: "uninstalled".into(),
            })
        );
    }

    #[tokio::test]
    async fn path_like_parent_is_missing() {
        let fx = Fixture::new();
        fx.theme("aurora", Some("../outside"));

        let chain = walk_chain(&fx.store(), "aurora", 16).await.unwrap();
        assert!(matches!(chain.defect, Some(ChainDefect::MissingParent { .. })));
    }

    #[tokio::test]
    async fn unknown_start_gives_empty_chain() {
        let fx = Fixture::new();
        let chain = walk_chain(&fx.store(), "ghost", 16).await.unwrap();
        assert!(chain.slugs.is_empty());
        assert_eq!(
            chain.defect,
            Some(ChainDefect::UnknownTheme {
                slug: "ghost".into()
            })
        );
    }

    #[tokio::test]
    async fn theme_without_descriptor_is_a_root() {
        let fx = Fixture::new();
        std::fs::create_dir_all(fx.root().join("bare")).unwrap();

        let chain = walk_chain(&fx.store(), "bare", 16).await.unwrap();
        assert_eq!(chain.slugs, vec!["bare"]);
        assert!(chain.is_complete());
    }

    #[tokio::test]
    async fn depth_bound_caps_long_chains() {
        let mut registry = ThemeRegistry::new();
        for i in 0..20 {
            let meta = ThemeMetadata::new(format!("t{i}"), format!("T{i}"), "1.0");
            let meta = if i < 19 {
                meta.with_parent(format!("t{}", i + 1))
            } else {
                meta
            };
            registry = registry.with_theme(meta, &[]);
        }

        let chain = walk_chain(&registry, "t0", 16).await.unwrap();
        assert_eq!(chain.slugs.len(), 16);
        assert_eq!(chain.defect, Some(ChainDefect::TooDeep { limit: 16 }));

        let chain = walk_chain(&registry, "t0", 32).await.unwrap();
        assert_eq!(chain.slugs.len(), 20);
        assert!(chain.is_complete());
    }

    #[test]
    fn defect_messages_name_the_themes() {
        let defect = ChainDefect::MissingParent {
            child: "aurora".into(),
            parent: "base".into(),
        };
        assert_eq!(defect.to_string(), "parent 'base' of 'aurora' is not installed");
        assert!(ChainDefect::Cycle { slug: "a".into() }
            .to_string()
            .contains("cyclic"));
    }
}
