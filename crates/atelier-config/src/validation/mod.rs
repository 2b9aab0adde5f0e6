//! Full configuration validation.
//!
//! Validates numeric ranges, slug syntax, domain patterns and cookie names.
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod bindings;
mod helpers;
mod signals;
mod themes;


use crate::schema::AtelierConfig;
use atelier_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AtelierConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    themes::validate_themes(&mut errors, config);
    bindings::validate_domains(&mut errors, config);
    bindings::validate_legacy(&mut errors, config);
    signals::validate_signals(&mut errors, config);
    signals::validate_settings(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
