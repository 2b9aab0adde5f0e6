//! Theme selection and inheritance for multi-tenant sites.
//!
//! A theme is a directory of pages, layouts and components described by a
//! `theme.json` (or YAML) descriptor, optionally inheriting from a parent
//! theme. This crate provides:
//!
//! - [`store`]: discovery of installed themes behind the [`ThemeCatalog`]
//!   trait, either straight from disk or from a [`ThemeRegistry`] snapshot
//! - [`resolver`]: choosing the one active theme for a request
//! - [`chain`] and [`files`]: walking parent pointers and finding the first
//!   theme in the chain that supplies a page, layout or component
//! - [`validator`]: static checks over every installed theme
//!
//! # Example
//!
//! ```rust,no_run
//! use atelier_themes::{ActiveThemeResolver, FileResolver, FsThemeStore, ResolutionContext};
//!
//! # async fn run() -> Result<(), atelier_common::ThemeError> {
//! let store = FsThemeStore::new("themes");
//! let ctx = ResolutionContext::new().with_host("shop.example.com");
//! let active = ActiveThemeResolver::new(&store).resolve(&ctx).await;
//! let page = FileResolver::new(&store).page(&active.slug, "/about").await?;
//! # Ok(())
//! # }
//! ```

pub mod chain;
pub mod files;
pub mod metadata;
pub mod resolver;
pub mod signals;
pub mod store;
pub mod validator;

#[cfg(test)]
mod test_support;

pub use chain::{walk_chain, ChainDefect, InheritanceChain, DEFAULT_MAX_CHAIN_DEPTH};
pub use files::{FileResolver, ResolvedFile};
pub use metadata::{DescriptorStatus, ThemeMetadata};
pub use resolver::{
    load_context, ActiveThemeResolver, ContextLoader, DomainThemeMap, LegacyNames, Resolution,
    ResolutionContext, SignalSource, FALLBACK_THEME,
};
pub use signals::{OverrideCookies, RequestSignals, SignalCookie};
pub use store::{list_themes, FsThemeStore, ThemeCatalog, ThemeRegistry, ThemeRegistryEntry};
pub use validator::{ThemeReport, ThemeValidator, ValidationReport};
