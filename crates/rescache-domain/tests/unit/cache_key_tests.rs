//! Unit tests for canonical cache keys

use rescache_domain::{CacheKey, Error};
use url::Url;

#[test]
fn test_query_string_is_stripped() {
    let plain = CacheKey::parse("https://api.example.com/v1/accounts/1").unwrap();
    let expanded =
        CacheKey::parse("https://api.example.com/v1/accounts/1?expand=customData").unwrap();
    assert_eq!(plain, expanded);
    assert_eq!(expanded.as_str(), "https://api.example.com/v1/accounts/1");
}

#[test]
fn test_fragment_and_trailing_slash_are_stripped() {
    let key = CacheKey::parse("https://api.example.com/v1/groups/7/#top").unwrap();
    assert_eq!(key.as_str(), "https://api.example.com/v1/groups/7");
}

#[test]
fn test_relative_href_is_rejected() {
    let err = CacheKey::parse("/accounts/1").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_relative_href_is_qualified_against_base() {
    let base = Url::parse("https://api.example.com/v1/").unwrap();
    let key = CacheKey::qualify("accounts/1?expand=groups", Some(&base)).unwrap();
    assert_eq!(key.as_str(), "https://api.example.com/v1/accounts/1");

    assert!(CacheKey::qualify("accounts/1", None).is_err());
}

#[test]
fn test_non_hierarchical_href_is_rejected() {
    assert!(CacheKey::parse("mailto:someone@example.com").is_err());
}
