//! Cacheability and invalidation policy tests

use crate::fakes::{href, map};
use rescache_application::CachePolicy;
use rescache_domain::{CacheKey, Error, ResourceType};
use serde_json::json;
use url::Url;

#[test]
fn test_cacheable_types() {
    let policy = CachePolicy::new();
    assert!(policy.is_cacheable(ResourceType::Account));
    assert!(policy.is_cacheable(ResourceType::CustomData));
    assert!(policy.is_cacheable(ResourceType::Directory));

    assert!(!policy.is_cacheable(ResourceType::Collection));
    assert!(!policy.is_cacheable(ResourceType::EmailVerificationToken));
    assert!(!policy.is_cacheable(ResourceType::PasswordResetToken));
    assert!(!policy.is_cacheable(ResourceType::LoginAttempt));
    assert!(!policy.is_cacheable(ResourceType::ProviderAccountResult));
}

#[test]
fn test_canonical_key_strips_expansion_query() {
    let policy = CachePolicy::new();
    let key = policy
        .canonical_key(&href("/accounts/1?expand=customData"))
        .unwrap();
    assert_eq!(key.as_str(), href("/accounts/1"));
}

#[test]
fn test_relative_href_requires_base_url() {
    let err = CachePolicy::new().canonical_key("/accounts/1").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    let policy = CachePolicy::new().with_base_url(Url::parse("https://api.example.com/").unwrap());
    let key = policy.canonical_key("/v1/accounts/1").unwrap();
    assert_eq!(key.as_str(), href("/accounts/1"));
}

#[test]
fn test_token_consumption_invalidates_linked_account() {
    let policy = CachePolicy::new();
    let response = map(json!({
        "href": href("/passwordResetTokens/abc"),
        "email": "jane@example.com",
        "account": { "href": href("/accounts/1") }
    }));

    let targets = policy.invalidations_after_write(ResourceType::PasswordResetToken, &response);
    assert_eq!(
        targets,
        vec![(ResourceType::Account, CacheKey::parse(&href("/accounts/1")).unwrap())]
    );
}

#[test]
fn test_email_verification_returning_account_invalidates_it() {
    let policy = CachePolicy::new();
    let response = map(json!({
        "href": href("/accounts/7"),
        "status": "ENABLED"
    }));

    let targets =
        policy.invalidations_after_write(ResourceType::EmailVerificationToken, &response);
    assert_eq!(
        targets,
        vec![(ResourceType::Account, CacheKey::parse(&href("/accounts/7")).unwrap())]
    );
}

#[test]
fn test_ordinary_writes_invalidate_nothing_else() {
    let policy = CachePolicy::new();
    let response = map(json!({
        "href": href("/groups/1"),
        "account": { "href": href("/accounts/1") }
    }));
    assert!(policy
        .invalidations_after_write(ResourceType::Group, &response)
        .is_empty());
}

#[test]
fn test_custom_data_field_delete_invalidates_owner() {
    let policy = CachePolicy::new();
    let key = CacheKey::parse(&href("/accounts/1/customData/favoriteColor")).unwrap();

    let targets = policy.invalidations_after_delete(&key);
    assert_eq!(
        targets,
        vec![(
            ResourceType::CustomData,
            CacheKey::parse(&href("/accounts/1/customData")).unwrap()
        )]
    );
}

#[test]
fn test_resource_delete_has_no_dependents() {
    let policy = CachePolicy::new();
    let key = CacheKey::parse(&href("/accounts/1/customData")).unwrap();
    assert!(policy.invalidations_after_delete(&key).is_empty());

    let key = CacheKey::parse(&href("/accounts/1")).unwrap();
    assert!(policy.invalidations_after_delete(&key).is_empty());
}
