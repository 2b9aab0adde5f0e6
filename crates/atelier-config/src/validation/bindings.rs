//! Validation for the `[domains]` and `[legacy]` binding tables.

use crate::hosts::validate_host_pattern;
use crate::schema::AtelierConfig;

use super::helpers::validate_slug;

/// Every domain key must be an exact host or a single-level wildcard, and
/// every value a slug.
pub(crate) fn validate_domains(errors: &mut Vec<String>, config: &AtelierConfig) {
    for (pattern, slug) in &config.domains {
        if !validate_host_pattern(pattern) {
            errors.push(format!("domains: {pattern:?} is not a host or *.domain pattern"));
        }
        validate_slug(errors, &format!("domains.{pattern:?}"), slug);
    }
}

/// Legacy names may be anything non-blank; their targets must be slugs.
pub(crate) fn validate_legacy(errors: &mut Vec<String>, config: &AtelierConfig) {
    for (name, slug) in &config.legacy {
        if name.trim().is_empty() {
            errors.push("legacy: blank legacy name".into());
        }
        validate_slug(errors, &format!("legacy.{name:?}"), slug);
    }
}
