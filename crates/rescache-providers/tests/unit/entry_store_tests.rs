//! Entry store expiration, accounting and lifecycle tests

use rescache_domain::{Error, FieldValue, PropertyMap, RegionSettings};
use rescache_providers::{InMemoryEntryStore, ManualClock};
use std::sync::Arc;
use std::time::Duration;

const ACCOUNT: &str = "https://api.example.com/v1/accounts/1";

fn account() -> PropertyMap {
    PropertyMap::new().with("email", FieldValue::scalar("a@b.com"))
}

fn store(settings: RegionSettings) -> (InMemoryEntryStore, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let store = InMemoryEntryStore::new("account", settings, clock.clone());
    (store, clock)
}

#[test]
fn test_entries_without_bounds_never_expire() {
    let (store, clock) = store(RegionSettings::new());
    store.put(ACCOUNT, account()).unwrap();

    clock.advance(Duration::from_secs(60 * 60 * 24 * 365));

    assert_eq!(store.get(ACCOUNT).unwrap(), Some(account()));
}

#[test]
fn test_ttl_scenario_500ms() {
    let (store, clock) =
        store(RegionSettings::new().with_time_to_live(Duration::from_millis(500)));
    store.put(ACCOUNT, account()).unwrap();

    clock.advance(Duration::from_millis(250));
    assert_eq!(store.get(ACCOUNT).unwrap(), Some(account()));

    clock.advance(Duration::from_millis(350));
    assert_eq!(store.get(ACCOUNT).unwrap(), None);

    let stats = store.stats();
    assert_eq!(stats.hit_count, 1);
    assert_eq!(stats.miss_count, 1);
    assert_eq!(stats.access_count, 2);
    // Expired entry was evicted on access
    assert!(!store.contains_key(ACCOUNT));
}

#[test]
fn test_ttl_is_not_extended_by_access() {
    let (store, clock) = store(RegionSettings::new().with_time_to_live(Duration::from_secs(1)));
    store.put(ACCOUNT, account()).unwrap();

    for _ in 0..4 {
        clock.advance(Duration::from_millis(200));
        assert!(store.get(ACCOUNT).unwrap().is_some());
    }
    clock.advance(Duration::from_millis(300));
    assert!(store.get(ACCOUNT).unwrap().is_none());
}

#[test]
fn test_tti_refreshed_by_access() {
    let (store, clock) = store(RegionSettings::new().with_time_to_idle(Duration::from_secs(10)));
    store.put(ACCOUNT, account()).unwrap();

    for _ in 0..20 {
        clock.advance(Duration::from_secs(9));
        assert!(store.get(ACCOUNT).unwrap().is_some());
    }

    clock.advance(Duration::from_secs(11));
    assert!(store.get(ACCOUNT).unwrap().is_none());
    assert_eq!(store.stats().miss_count, 1);
}

#[test]
fn test_put_resets_bookkeeping_and_replaces_value() {
    let (store, clock) =
        store(RegionSettings::new().with_time_to_live(Duration::from_millis(500)));
    store.put(ACCOUNT, account()).unwrap();
    clock.advance(Duration::from_millis(400));

    let replacement = PropertyMap::new().with("givenName", FieldValue::scalar("Ann"));
    store.put(ACCOUNT, replacement.clone()).unwrap();
    clock.advance(Duration::from_millis(400));

    // No merge at this layer
    assert_eq!(store.get(ACCOUNT).unwrap(), Some(replacement));
}

#[test]
fn test_put_then_get_hits_and_remove_then_get_misses() {
    let (store, _clock) = store(RegionSettings::new());
    store.put(ACCOUNT, account()).unwrap();
    assert!(store.get(ACCOUNT).unwrap().is_some());

    store.remove(ACCOUNT).unwrap();
    assert!(store.get(ACCOUNT).unwrap().is_none());

    // Removing an absent key is a no-op
    store.remove(ACCOUNT).unwrap();
}

#[test]
fn test_empty_store_hit_ratio_is_zero() {
    let (store, _clock) = store(RegionSettings::new());
    let stats = store.stats();
    assert_eq!(stats.access_count, 0);
    assert_eq!(stats.hit_ratio(), 0.0);
}

#[test]
fn test_dispose_clears_and_rejects_access() {
    let (store, _clock) = store(RegionSettings::new());
    store.put(ACCOUNT, account()).unwrap();
    store.get(ACCOUNT).unwrap();

    store.dispose();

    assert!(store.is_disposed());
    assert!(store.is_empty());
    assert_eq!(store.stats().access_count, 0);
    assert!(matches!(store.get(ACCOUNT), Err(Error::ObjectDisposed { .. })));
    assert!(matches!(
        store.put(ACCOUNT, account()),
        Err(Error::ObjectDisposed { .. })
    ));
    assert!(matches!(store.remove(ACCOUNT), Err(Error::ObjectDisposed { .. })));
}

#[test]
fn test_counters_consistent_under_concurrent_access() {
    const THREADS: usize = 8;
    const OPS: usize = 500;

    let (store, _clock) = store(RegionSettings::new());
    std::thread::scope(|scope| {
        for t in 0..THREADS {
            let store = &store;
            scope.spawn(move || {
                for i in 0..OPS {
                    let key = format!("https://api.example.com/v1/accounts/{}", i % 16);
                    if (i + t) % 3 == 0 {
                        store.put(key.clone(), account()).unwrap();
                    }
                    store.get(&key).unwrap();
                    if (i + t) % 7 == 0 {
                        store.remove(&key).unwrap();
                    }
                }
            });
        }
    });

    let stats = store.stats();
    assert_eq!(stats.access_count, (THREADS * OPS) as u64);
    assert_eq!(stats.hit_count + stats.miss_count, stats.access_count);
}

#[test]
fn test_merge_updates_in_place_without_counting() {
    let (store, _clock) = store(RegionSettings::new());
    store
        .put(
            ACCOUNT,
            account().with("status", FieldValue::scalar("ENABLED")),
        )
        .unwrap();

    let changes = PropertyMap::new().with("status", FieldValue::scalar("DISABLED"));
    assert!(store.merge(ACCOUNT, &changes).unwrap());
    assert_eq!(store.stats().access_count, 0);

    let merged = store.get(ACCOUNT).unwrap().unwrap();
    assert_eq!(merged.get("status"), Some(&FieldValue::scalar("DISABLED")));
    assert_eq!(merged.get("email"), Some(&FieldValue::scalar("a@b.com")));
}

#[test]
fn test_merge_never_creates_entries() {
    let (store, clock) = store(RegionSettings::new().with_time_to_live(Duration::from_millis(500)));
    assert!(!store.merge(ACCOUNT, &account()).unwrap());
    assert!(store.is_empty());

    store.put(ACCOUNT, account()).unwrap();
    clock.advance(Duration::from_millis(600));
    assert!(!store.merge(ACCOUNT, &account()).unwrap());
    assert!(store.is_empty());
    assert_eq!(store.stats().access_count, 0);
}

#[test]
fn test_concurrent_merges_keep_every_field() {
    const ROUNDS: usize = 500;

    let (store, _clock) = store(RegionSettings::new());
    let first = PropertyMap::new().with("a", FieldValue::scalar(9));
    let second = PropertyMap::new().with("b", FieldValue::scalar(7));

    for round in 0..ROUNDS {
        store
            .put(
                ACCOUNT,
                PropertyMap::new()
                    .with("a", FieldValue::scalar(1))
                    .with("b", FieldValue::scalar(2)),
            )
            .unwrap();
        let barrier = std::sync::Barrier::new(2);
        std::thread::scope(|scope| {
            for changes in [&first, &second] {
                let (store, barrier) = (&store, &barrier);
                scope.spawn(move || {
                    barrier.wait();
                    assert!(store.merge(ACCOUNT, changes).unwrap());
                });
            }
        });

        let merged = store.get(ACCOUNT).unwrap().unwrap();
        assert_eq!(merged.get("a"), Some(&FieldValue::scalar(9)), "round {round}");
        assert_eq!(merged.get("b"), Some(&FieldValue::scalar(7)), "round {round}");
    }
}

#[test]
fn test_put_racing_dispose_leaves_nothing_behind() {
    for _ in 0..200 {
        let (store, _clock) = store(RegionSettings::new());
        let barrier = std::sync::Barrier::new(5);
        std::thread::scope(|scope| {
            for t in 0..4 {
                let (store, barrier) = (&store, &barrier);
                scope.spawn(move || {
                    barrier.wait();
                    for i in 0..50 {
                        let key = format!("https://api.example.com/v1/accounts/{t}-{i}");
                        if store.put(key, account()).is_err() {
                            break;
                        }
                    }
                });
            }
            barrier.wait();
            store.dispose();
        });

        assert!(store.is_disposed());
        assert!(store.is_empty());
    }
}
