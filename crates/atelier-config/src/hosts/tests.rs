//! Tests for host pattern parsing and normalisation.

use super::*;

#[test]
fn parse_exact_host() {
    let p = parse_host_pattern("Shop.Example.com").unwrap();
    assert_eq!(p, HostPattern::Exact("shop.example.com".into()));
}

#[test]
fn parse_wildcard_host() {
    let p = parse_host_pattern("*.example.com").unwrap();
    assert_eq!(p, HostPattern::Wildcard("example.com".into()));
}

#[test]
fn parse_single_label_host() {
    let p = parse_host_pattern("localhost").unwrap();
    assert_eq!(p, HostPattern::Exact("localhost".into()));
}

#[test]
fn reject_nested_wildcard() {
    assert!(parse_host_pattern("*.*.example.com").is_err());
    assert!(parse_host_pattern("shop.*.example.com").is_err());
}

#[test]
fn reject_garbage() {
    assert!(!validate_host_pattern(""));
    assert!(!validate_host_pattern("exa mple.com"));
    assert!(!validate_host_pattern("-bad.example.com"));
    assert!(!validate_host_pattern("http://example.com"));
}

#[test]
fn normalize_strips_port_and_case() {
    assert_eq!(
        normalize_host("Shop.Example.com:8080").as_deref(),
        Some("shop.example.com")
    );
}

#[test]
fn normalize_strips_trailing_dot() {
    assert_eq!(
        normalize_host("example.com.").as_deref(),
        Some("example.com")
    );
}

#[test]
fn normalize_keeps_bracketed_ipv6() {
    assert_eq!(normalize_host("[::1]:3000").as_deref(), Some("[::1]"));
}

#[test]
fn normalize_empty_is_none() {
    assert_eq!(normalize_host("   "), None);
    assert_eq!(normalize_host(":80"), None);
}

#[test]
fn parent_domain_of_subdomain() {
    assert_eq!(parent_domain("shop.example.com"), Some("example.com"));
    assert_eq!(parent_domain("a.b.example.com"), Some("b.example.com"));
}

#[test]
fn single_label_has_no_parent() {
    assert_eq!(parent_domain("localhost"), None);
}
