//! Validation for the `[signals]` and `[settings]` sections.

use crate::schema::AtelierConfig;

use super::helpers::validate_range;

fn is_cookie_token(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Validate cookie names and lifetimes.
pub(crate) fn validate_signals(errors: &mut Vec<String>, config: &AtelierConfig) {
    let signals = &config.signals;

    for (name, value) in [
        ("signals.preview_cookie", &signals.preview_cookie),
        ("signals.session_cookie", &signals.session_cookie),
    ] {
        if !is_cookie_token(value) {
            errors.push(format!("{name} = {value:?} is not a valid cookie name"));
        }
    }

    if signals.preview_cookie == signals.session_cookie {
        errors.push("signals.preview_cookie and signals.session_cookie must differ".into());
    }

    validate_range(
        errors,
        "signals.preview_max_age_secs",
        signals.preview_max_age_secs,
        60,
        86_400,
    );
    validate_range(
        errors,
        "signals.session_max_age_secs",
        signals.session_max_age_secs,
        3_600,
        63_072_000,
    );
}

/// Validate the persisted settings location.
pub(crate) fn validate_settings(errors: &mut Vec<String>, config: &AtelierConfig) {
    if config.settings.key.trim().is_empty() {
        errors.push("settings.key must not be empty".into());
    }
}
