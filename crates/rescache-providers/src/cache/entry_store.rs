//! In-memory entry store
//!
//! A single named region: key → entry with TTL/TTI bookkeeping and
//! hit/miss accounting. Expiration is checked lazily on access; there is no
//! background sweep.
//!
//! ## Concurrency
//!
//! Entries live in a sharded [`DashMap`], so a get/put/remove on one key is
//! atomic with respect to other operations on the same key while unrelated
//! keys proceed in parallel. [`merge`](InMemoryEntryStore::merge) does its
//! read-modify-write under the same per-key guard. The access count is derived from the hit and
//! miss counters, which keeps `access == hit + miss` true at every instant.

use dashmap::DashMap;
use rescache_domain::error::{Error, Result};
use rescache_domain::ports::Clock;
use rescache_domain::value_objects::{PropertyMap, RegionSettings, RegionStats};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;
use tracing::trace;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: PropertyMap,
    created_at: Instant,
    last_accessed_at: Instant,
}

/// Named in-memory region
pub struct InMemoryEntryStore {
    name: String,
    settings: RegionSettings,
    entries: DashMap<String, CacheEntry>,
    hits: AtomicU64,
    misses: AtomicU64,
    disposed: AtomicBool,
    clock: Arc<dyn Clock>,
}

impl InMemoryEntryStore {
    /// Create an empty region
    pub fn new<S: Into<String>>(name: S, settings: RegionSettings, clock: Arc<dyn Clock>) -> Self {
        Self {
            name: name.into(),
            settings,
            entries: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            disposed: AtomicBool::new(false),
            clock,
        }
    }

    /// Region name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expiration settings of this region
    pub fn settings(&self) -> RegionSettings {
        self.settings
    }

    fn ensure_live(&self) -> Result<()> {
        if self.disposed.load(Ordering::Acquire) {
            return Err(self.disposed_error());
        }
        Ok(())
    }

    fn disposed_error(&self) -> Error {
        Error::object_disposed(format!("cache region '{}'", self.name))
    }

    fn is_expired(&self, entry: &CacheEntry, now: Instant) -> bool {
        self.settings.is_expired(
            now.saturating_duration_since(entry.created_at),
            now.saturating_duration_since(entry.last_accessed_at),
        )
    }

    /// Look up a live entry, refreshing its last-access time.
    ///
    /// An entry found past its TTL or TTI is evicted and counted as a miss.
    pub fn get(&self, key: &str) -> Result<Option<PropertyMap>> {
        self.ensure_live()?;
        let now = self.clock.now();

        let found = match self.entries.get_mut(key) {
            Some(mut entry) if !self.is_expired(&entry, now) => {
                entry.last_accessed_at = now;
                Some(entry.value.clone())
            }
            Some(_) => {
                // Guard must be released before taking the shard lock again
                None
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                return Ok(None);
            }
        };

        match found {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(Some(value))
            }
            None => {
                // A concurrent put may have refreshed the entry in between
                if self
                    .entries
                    .remove_if(key, |_, entry| self.is_expired(entry, now))
                    .is_some()
                {
                    trace!(region = %self.name, key, "evicted expired entry");
                }
                self.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
        }
    }

    /// Unconditional upsert; resets creation and access times
    pub fn put<S: Into<String>>(&self, key: S, value: PropertyMap) -> Result<()> {
        self.ensure_live()?;
        let key = key.into();
        let now = self.clock.now();
        self.entries.insert(
            key.clone(),
            CacheEntry {
                value,
                created_at: now,
                last_accessed_at: now,
            },
        );
        // dispose() may have cleared the map before this insert landed
        if self.is_disposed() {
            self.entries.remove(&key);
            return Err(self.disposed_error());
        }
        Ok(())
    }

    /// Merge `changes` into a live entry in place.
    ///
    /// The read-modify-write runs under the key's shard guard, so concurrent
    /// merges of different fields all survive. Counters are left untouched.
    /// Returns `false` without creating anything when the key is absent or
    /// expired.
    pub fn merge(&self, key: &str, changes: &PropertyMap) -> Result<bool> {
        self.ensure_live()?;
        let now = self.clock.now();

        let merged = match self.entries.get_mut(key) {
            Some(mut entry) if !self.is_expired(&entry, now) => {
                entry.value = entry.value.merged_with(changes);
                entry.created_at = now;
                entry.last_accessed_at = now;
                true
            }
            Some(_) => false,
            None => return Ok(false),
        };

        if !merged
            && self
                .entries
                .remove_if(key, |_, entry| self.is_expired(entry, now))
                .is_some()
        {
            trace!(region = %self.name, key, "evicted expired entry");
        }
        Ok(merged)
    }

    /// Remove an entry; absent keys are a no-op
    pub fn remove(&self, key: &str) -> Result<()> {
        self.ensure_live()?;
        self.entries.remove(key);
        Ok(())
    }

    /// Whether a key is held, without touching counters or expiry
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries held, including expired ones not yet evicted
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the region holds nothing
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counter snapshot
    pub fn stats(&self) -> RegionStats {
        let hit_count = self.hits.load(Ordering::Relaxed);
        let miss_count = self.misses.load(Ordering::Relaxed);
        RegionStats {
            name: self.name.clone(),
            size: self.entries.len(),
            access_count: hit_count + miss_count,
            hit_count,
            miss_count,
        }
    }

    /// Clear entries and counters; later get/put/remove fail with `ObjectDisposed`
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::Release);
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Whether [`dispose`](Self::dispose) has been called
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }
}

impl fmt::Debug for InMemoryEntryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryEntryStore")
            .field("name", &self.name)
            .field("settings", &self.settings)
            .field("entries", &self.entries.len())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
