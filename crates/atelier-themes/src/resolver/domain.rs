//! Domain-to-theme bindings.

use atelier_common::ConfigError;
use atelier_config::hosts::{normalize_host, parent_domain, parse_host_pattern, HostPattern};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// Exact hosts and `*.parent` wildcards mapped to theme slugs.
///
/// An exact entry always beats a wildcard, and a wildcard covers exactly one
/// level of subdomain.
#[derive(Debug, Clone, Default)]
pub struct DomainThemeMap {
    exact: HashMap<String, String>,
    wildcard: HashMap<String, String>,
}

impl DomainThemeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `[domains]` config table, rejecting bad patterns.
    pub fn try_from_table(table: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let mut map = Self::new();
        for (pattern, slug) in table {
            map.insert(parse_host_pattern(pattern)?, slug);
        }
        Ok(map)
    }

    /// Build from the `[domains]` config table, skipping bad patterns.
    pub fn from_table(table: &BTreeMap<String, String>) -> Self {
        let mut map = Self::new();
        for (pattern, slug) in table {
            match parse_host_pattern(pattern) {
                Ok(parsed) => map.insert(parsed, slug),
                Err(e) => warn!("ignoring domain binding for {pattern}: {e}"),
            }
        }
        map
    }

    pub fn insert(&mut self, pattern: HostPattern, slug: impl Into<String>) {
        let slug = slug.into().trim().to_string();
        match pattern {
            HostPattern::Exact(host) => self.exact.insert(host, slug),
            HostPattern::Wildcard(parent) => self.wildcard.insert(parent, slug),
        };
    }

    pub fn len(&self) -> usize {
        self.exact.len() + self.wildcard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The slug bound to a raw `Host` value, if any.
    pub fn lookup(&self, raw_host: &str) -> Option<&str> {
        let host = normalize_host(raw_host)?;
        self.exact(&host).or_else(|| self.wildcard(&host))
    }

    /// Exact binding for an already normalised host.
    pub fn exact(&self, host: &str) -> Option<&str> {
        self.exact.get(host).map(String::as_str)
    }

    /// Wildcard binding covering an already normalised host.
    pub fn wildcard(&self, host: &str) -> Option<&str> {
        let parent = parent_domain(host)?;
        self.wildcard.get(parent).map(String::as_str)
    }
}
