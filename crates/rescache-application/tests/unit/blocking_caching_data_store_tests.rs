//! Blocking caching data store tests

use crate::fakes::{FakeStore, href, in_memory_resolver, map, resolver_with_modes};
use rescache_application::{BlockingCachingDataStore, CacheResolver};
use rescache_domain::{AccessModes, Error, FieldValue, ResourceType};
use rescache_providers::{CacheProvider, InMemoryCacheProvider, ManualClock};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_fetch_and_hit() {
    let store = FakeStore::new().with_resource(
        href("/applications/1"),
        map(json!({ "href": href("/applications/1"), "name": "portal" })),
    );
    let (_, resolver) = in_memory_resolver();
    let data_store = BlockingCachingDataStore::new(store, resolver);

    for _ in 0..3 {
        let app = data_store
            .get_resource(ResourceType::Application, &href("/applications/1"))
            .unwrap();
        assert_eq!(app.get("name"), Some(&FieldValue::scalar("portal")));
    }
    assert_eq!(data_store.store().fetch_count(), 1);
}

#[test]
fn test_save_merge_and_delete() {
    let store = FakeStore::new().with_resource(
        href("/groups/1"),
        map(json!({ "href": href("/groups/1"), "a": 1, "b": 2 })),
    );
    let (_, resolver) = in_memory_resolver();
    let data_store = BlockingCachingDataStore::new(store, resolver);
    data_store
        .get_resource(ResourceType::Group, &href("/groups/1"))
        .unwrap();

    data_store
        .store()
        .respond_to_writes(map(json!({ "a": 9 })));
    let response = data_store
        .save_resource(ResourceType::Group, &href("/groups/1"), &map(json!({ "a": 9 })))
        .unwrap();
    assert_eq!(response, map(json!({ "a": 9 })));

    let cached = data_store
        .get_resource(ResourceType::Group, &href("/groups/1"))
        .unwrap();
    assert_eq!(cached, map(json!({ "href": href("/groups/1"), "a": 9, "b": 2 })));

    data_store
        .delete_resource(ResourceType::Group, &href("/groups/1"))
        .unwrap();
    data_store
        .get_resource(ResourceType::Group, &href("/groups/1"))
        .unwrap();
    assert_eq!(data_store.store().fetch_count(), 2);
}

#[test]
fn test_non_blocking_only_provider_rejects_blocking_store() {
    let store = FakeStore::new();
    let (_, resolver) = resolver_with_modes(AccessModes::non_blocking_only());
    let data_store = BlockingCachingDataStore::new(store, resolver);

    let err = data_store
        .get_resource(ResourceType::Account, &href("/accounts/1"))
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedCacheMode { .. }));
}

#[test]
fn test_disabled_provider_passes_through() {
    let store = FakeStore::new();
    store.respond_to_writes(map(json!({ "href": href("/accounts/1"), "email": "x@example.com" })));
    let resolver = CacheResolver::new(Arc::new(CacheProvider::disabled()));
    let data_store = BlockingCachingDataStore::new(store, resolver);

    data_store
        .create_resource(
            ResourceType::Account,
            &href("/directories/9/accounts"),
            &map(json!({ "email": "x@example.com" })),
        )
        .unwrap();
    let err = data_store
        .get_resource(ResourceType::Account, &href("/accounts/1"))
        .unwrap_err();
    assert!(matches!(err, Error::ResourceFetch { .. }));
}

#[test]
fn test_expired_entry_is_refetched() {
    let clock = Arc::new(ManualClock::new());
    let provider = InMemoryCacheProvider::builder()
        .with_default_time_to_live(Duration::from_millis(500))
        .with_clock(clock.clone())
        .build();
    let resolver = CacheResolver::new(Arc::new(CacheProvider::from(provider)));
    let store = FakeStore::new().with_resource(
        href("/accounts/1"),
        map(json!({ "href": href("/accounts/1"), "email": "jane@example.com" })),
    );
    let data_store = BlockingCachingDataStore::new(store, resolver);

    data_store
        .get_resource(ResourceType::Account, &href("/accounts/1"))
        .unwrap();
    clock.advance(Duration::from_millis(100));
    data_store
        .get_resource(ResourceType::Account, &href("/accounts/1"))
        .unwrap();
    assert_eq!(data_store.store().fetch_count(), 1);

    clock.advance(Duration::from_millis(500));
    data_store
        .get_resource(ResourceType::Account, &href("/accounts/1"))
        .unwrap();
    assert_eq!(data_store.store().fetch_count(), 2);
}
