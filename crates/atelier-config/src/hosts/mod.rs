//! Host name parsing and matching for domain-to-theme bindings.
//!
//! Domain map keys are either an exact host (`shop.example.com`) or a
//! single-level wildcard (`*.example.com`) that covers every direct
//! subdomain of `example.com`. Request hosts are normalised before
//! matching: lower-cased, port and trailing dot removed.

mod parse;

#[cfg(test)]
mod tests;

use atelier_common::ConfigError;

use parse::{strip_port, HOST_RE};

/// A parsed domain map key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPattern {
    /// Matches one host exactly.
    Exact(String),
    /// Matches any host whose parent domain is the stored value.
    Wildcard(String),
}

/// Parse a domain map key into a [`HostPattern`].
pub fn parse_host_pattern(s: &str) -> Result<HostPattern, ConfigError> {
    let s = s.trim().to_ascii_lowercase();

    if let Some(parent) = s.strip_prefix("*.") {
        if HOST_RE.is_match(parent) {
            return Ok(HostPattern::Wildcard(parent.to_string()));
        }
        return Err(ConfigError::ParseError(format!(
            "invalid wildcard domain pattern: {s}"
        )));
    }

    if HOST_RE.is_match(&s) {
        return Ok(HostPattern::Exact(s));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized domain pattern: {s}"
    )))
}

/// Validate that a string is a usable domain map key.
pub fn validate_host_pattern(s: &str) -> bool {
    parse_host_pattern(s).is_ok()
}

/// Normalise a raw `Host` header value for matching.
///
/// Returns `None` for empty values.
pub fn normalize_host(raw: &str) -> Option<String> {
    let host = strip_port(raw.trim()).trim_end_matches('.');
    if host.is_empty() {
        return None;
    }
    Some(host.to_ascii_lowercase())
}

/// The domain one level above `host` (`a.example.com` -> `example.com`).
///
/// Hosts with a single label have no parent domain.
pub fn parent_domain(host: &str) -> Option<&str> {
    match host.split_once('.') {
        Some((_, parent)) if !parent.is_empty() => Some(parent),
        _ => None,
    }
}
