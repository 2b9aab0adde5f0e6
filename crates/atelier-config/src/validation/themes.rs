//! Validation for the `[themes]` section.

use crate::schema::AtelierConfig;

use super::helpers::{validate_range, validate_slug};

/// Validate theme discovery constraints.
pub(crate) fn validate_themes(errors: &mut Vec<String>, config: &AtelierConfig) {
    let themes = &config.themes;

    if themes.root.as_os_str().is_empty() {
        errors.push("themes.root must not be empty".into());
    }

    if let Some(ref slug) = themes.default_theme {
        validate_slug(errors, "themes.default_theme", slug);
    }

    validate_range(
        errors,
        "themes.max_chain_depth",
        u64::from(themes.max_chain_depth),
        1,
        64,
    );

    for ext in &themes.extensions {
        if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            errors.push(format!(
                "themes.extensions entry {ext:?} must be alphanumeric without a leading dot"
            ));
        }
    }
}
