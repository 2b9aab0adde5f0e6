//! Theme slug syntax.

/// Whether `slug` is usable as a theme directory name.
///
/// A slug must be a single, non-hidden path segment made of ASCII
/// alphanumerics, `-`, `_` and `.`. Override values arrive from client
/// cookies, so anything that could leave the themes root is rejected.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= 128
        && !slug.starts_with('.')
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
