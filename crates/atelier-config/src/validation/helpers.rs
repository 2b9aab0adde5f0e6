//! Shared validation helpers used by all section validators.

use atelier_common::is_valid_slug;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not a usable theme slug.
pub(crate) fn validate_slug(errors: &mut Vec<String>, name: &str, value: &str) {
    if !is_valid_slug(value) {
        errors.push(format!("{name} = {value:?} is not a valid theme slug"));
    }
}
