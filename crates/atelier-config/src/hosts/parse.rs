//! Internal host parsing helpers.
//!
//! Handles the low-level splitting of `Host` header values and the syntax
//! check for host names. Not part of the public API.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a DNS host name: dot-separated labels of `[a-z0-9-]`, no label
/// starting or ending with `-`.
pub(crate) static HOST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?(\.[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?)*$")
        .unwrap()
});

/// Strip a trailing `:port` from a host value.
///
/// Bracketed IPv6 literals (`[::1]:8080`) keep their brackets; a bare IPv6
/// literal without brackets is returned unchanged.
pub(super) fn strip_port(raw: &str) -> &str {
    if raw.starts_with('[') {
        return match raw.find(']') {
            Some(end) => &raw[..=end],
            None => raw,
        };
    }
    match raw.rsplit_once(':') {
        Some((host, port)) if !host.contains(':') && port.chars().all(|c| c.is_ascii_digit()) => {
            host
        }
        _ => raw,
    }
}
