//! Per-theme validation checks.
//!
//! Each check appends human-readable messages; none of them short-circuits
//! the others.

use atelier_common::Lookup;

use crate::chain::walk_chain;
use crate::files::FileResolver;
use crate::metadata::DescriptorStatus;
use crate::store::ThemeCatalog;

pub(super) async fn check_theme<C: ThemeCatalog + ?Sized>(
    catalog: &C,
    slug: &str,
    extensions: &[String],
    max_depth: usize,
) -> Vec<String> {
    let mut errors = Vec::new();
    check_descriptor(catalog, slug, &mut errors).await;
    check_pages_dir(catalog, slug, &mut errors).await;
    check_chain(catalog, slug, max_depth, &mut errors).await;
    check_index_page(catalog, slug, extensions, max_depth, &mut errors).await;
    errors
}

async fn check_descriptor<C: ThemeCatalog + ?Sized>(
    catalog: &C,
    slug: &str,
    errors: &mut Vec<String>,
) {
    match catalog.descriptor(slug).await {
        Ok(DescriptorStatus::Valid(_)) => {}
        Ok(DescriptorStatus::Missing) => {
            errors.push("missing theme descriptor (theme.json, theme.yaml or theme.yml)".into())
        }
        Ok(DescriptorStatus::Invalid(reason)) => errors.push(reason),
        Err(e) => errors.push(format!("cannot read descriptor: {e}")),
    }
}

async fn check_pages_dir<C: ThemeCatalog + ?Sized>(
    catalog: &C,
    slug: &str,
    errors: &mut Vec<String>,
) {
    match catalog.is_dir(slug, "pages").await {
        Ok(true) => {}
        Ok(false) => errors.push("missing pages/ directory".into()),
        Err(e) => errors.push(format!("cannot inspect pages/: {e}")),
    }
}

async fn check_chain<C: ThemeCatalog + ?Sized>(
    catalog: &C,
    slug: &str,
    max_depth: usize,
    errors: &mut Vec<String>,
) {
    match walk_chain(catalog, slug, max_depth).await {
        Ok(chain) => {
            if let Some(defect) = chain.defect {
                errors.push(defect.to_string());
            }
        }
        Err(e) => errors.push(format!("cannot walk parent chain: {e}")),
    }
}

async fn check_index_page<C: ThemeCatalog + ?Sized>(
    catalog: &C,
    slug: &str,
    extensions: &[String],
    max_depth: usize,
    errors: &mut Vec<String>,
) {
    let resolver = FileResolver::new(catalog)
        .with_extensions(extensions.iter().cloned())
        .with_max_depth(max_depth);
    match resolver.page(slug, "/").await {
        Ok(Lookup::Found(_)) => {}
        Ok(Lookup::NotFound) => {
            errors.push("index page pages/index not found in theme or its parents".into())
        }
        Err(e) => errors.push(format!("cannot resolve index page: {e}")),
    }
}
