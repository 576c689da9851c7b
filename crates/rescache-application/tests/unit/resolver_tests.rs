//! Region resolution tests

use crate::fakes::{in_memory_resolver, resolver_with_modes};
use rescache_application::{CacheResolver, DefaultRegionNameResolver, RegionNameResolver};
use rescache_domain::{AccessMode, AccessModes, Error, PropertyMap, ResourceType};
use rescache_providers::CacheProvider;
use std::sync::Arc;

#[test]
fn test_default_region_names_follow_resource_type() {
    let names = DefaultRegionNameResolver;
    assert_eq!(names.region_name(ResourceType::Account), "account");
    assert_eq!(names.region_name(ResourceType::CustomData), "customData");
}

#[test]
fn test_resolve_returns_named_region() {
    let (_, resolver) = in_memory_resolver();
    let region = resolver
        .resolve(ResourceType::Directory, AccessMode::Blocking)
        .unwrap();
    assert_eq!(region.name(), "directory");
}

#[test]
fn test_resolve_twice_shares_entries() {
    let (_, resolver) = in_memory_resolver();
    let key = "https://api.example.com/v1/accounts/1";

    let first = resolver
        .resolve(ResourceType::Account, AccessMode::Blocking)
        .unwrap();
    first.put(key, PropertyMap::new()).unwrap();

    let second = resolver
        .resolve(ResourceType::Account, AccessMode::NonBlocking)
        .unwrap();
    assert!(second.get(key).unwrap().is_some());
}

#[test]
fn test_custom_name_resolver_closure() {
    let provider = Arc::new(CacheProvider::disabled());
    let resolver = CacheResolver::with_name_resolver(
        provider,
        Arc::new(|rt: ResourceType| format!("tenant-a.{rt}")),
    );
    assert_eq!(resolver.region_name(ResourceType::Group), "tenant-a.group");
    let region = resolver
        .resolve(ResourceType::Group, AccessMode::Blocking)
        .unwrap();
    assert_eq!(region.name(), "tenant-a.group");
}

#[test]
fn test_blocking_only_provider_rejects_non_blocking() {
    let (_, resolver) = resolver_with_modes(AccessModes::blocking_only());

    assert!(resolver
        .resolve(ResourceType::Account, AccessMode::Blocking)
        .is_ok());
    let err = resolver
        .resolve(ResourceType::Account, AccessMode::NonBlocking)
        .unwrap_err();
    match err {
        Error::UnsupportedCacheMode { region, mode } => {
            assert_eq!(region, "account");
            assert_eq!(mode, "non-blocking");
        }
        other => panic!("expected UnsupportedCacheMode, got {other:?}"),
    }
}

#[test]
fn test_non_blocking_only_provider_rejects_blocking() {
    let (_, resolver) = resolver_with_modes(AccessModes::non_blocking_only());

    let err = resolver
        .resolve(ResourceType::Group, AccessMode::Blocking)
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedCacheMode { .. }));
    assert!(err.is_cache_misuse());
    assert!(resolver
        .resolve(ResourceType::Group, AccessMode::NonBlocking)
        .is_ok());
}

#[test]
fn test_disabled_provider_resolves_in_either_mode() {
    let resolver = CacheResolver::new(Arc::new(CacheProvider::disabled()));
    for mode in [AccessMode::Blocking, AccessMode::NonBlocking] {
        let region = resolver.resolve(ResourceType::Account, mode).unwrap();
        region
            .put("https://api.example.com/v1/accounts/1", PropertyMap::new())
            .unwrap();
        assert!(region
            .get("https://api.example.com/v1/accounts/1")
            .unwrap()
            .is_none());
    }
}

#[test]
fn test_resolve_after_dispose_fails() {
    let (provider, resolver) = in_memory_resolver();
    provider.dispose();

    let err = resolver
        .resolve(ResourceType::Account, AccessMode::Blocking)
        .unwrap_err();
    assert!(matches!(err, Error::ObjectDisposed { .. }));
}
