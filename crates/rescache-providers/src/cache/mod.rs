//! Cache provider variants
//!
//! | Variant | Region | Description |
//! |---------|--------|-------------|
//! | [`CacheProvider::Disabled`] | [`NullRegion`] | Turn-off switch: always misses |
//! | [`CacheProvider::InMemory`] | [`InMemoryEntryStore`] | In-process regions with TTL/TTI |
//!
//! New backends are added as further variants of both enums.

pub mod entry_store;
pub mod in_memory;
pub mod null;

pub use entry_store::InMemoryEntryStore;
pub use in_memory::{InMemoryCacheProvider, InMemoryCacheProviderBuilder};
pub use null::{NullCacheProvider, NullRegion};

use rescache_domain::error::Result;
use rescache_domain::value_objects::{AccessModes, PropertyMap, RegionSettings, RegionStats};
use std::collections::HashMap;
use std::sync::Arc;

/// Region registry, selected at construction
///
/// Exactly one provider exists per client; it is created with the client and
/// disposed at shutdown.
#[derive(Debug)]
pub enum CacheProvider {
    /// Caching turned off
    Disabled(NullCacheProvider),
    /// In-process regions
    InMemory(InMemoryCacheProvider),
}

impl CacheProvider {
    /// The disabled provider
    pub fn disabled() -> Self {
        Self::Disabled(NullCacheProvider::new())
    }

    /// In-memory provider with default settings and per-region overrides
    pub fn in_memory(defaults: RegionSettings, overrides: HashMap<String, RegionSettings>) -> Self {
        Self::InMemory(InMemoryCacheProvider::new(defaults, overrides))
    }

    /// Return the named region, creating it lazily
    pub fn region(&self, name: &str) -> Result<CacheRegion> {
        match self {
            Self::Disabled(provider) => Ok(CacheRegion::Disabled(provider.region(name))),
            Self::InMemory(provider) => provider.region(name).map(CacheRegion::InMemory),
        }
    }

    /// Access conventions honored, fixed at construction
    pub fn access_modes(&self) -> AccessModes {
        match self {
            Self::Disabled(provider) => provider.access_modes(),
            Self::InMemory(provider) => provider.access_modes(),
        }
    }

    /// Whether blocking access is honored
    pub fn is_blocking_supported(&self) -> bool {
        self.access_modes().blocking
    }

    /// Whether non-blocking access is honored
    pub fn is_non_blocking_supported(&self) -> bool {
        self.access_modes().non_blocking
    }

    /// Whether this is the disabled variant
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled(_))
    }

    /// Stats of every live region
    pub fn stats(&self) -> Vec<RegionStats> {
        match self {
            Self::Disabled(_) => Vec::new(),
            Self::InMemory(provider) => provider.stats(),
        }
    }

    /// Dispose every owned region
    pub fn dispose(&self) {
        if let Self::InMemory(provider) = self {
            provider.dispose();
        }
    }

    /// Provider identifier (e.g. "null", "in_memory")
    pub fn provider_name(&self) -> &str {
        match self {
            Self::Disabled(_) => "null",
            Self::InMemory(_) => "in_memory",
        }
    }
}

impl From<InMemoryCacheProvider> for CacheProvider {
    fn from(provider: InMemoryCacheProvider) -> Self {
        Self::InMemory(provider)
    }
}

impl From<NullCacheProvider> for CacheProvider {
    fn from(provider: NullCacheProvider) -> Self {
        Self::Disabled(provider)
    }
}

/// Handle to one region
///
/// The blocking methods return once the in-memory map access completes. The
/// `*_async` methods are the completion-based form with identical semantics;
/// they never suspend mid-mutation.
#[derive(Debug, Clone)]
pub enum CacheRegion {
    /// Region of the disabled provider
    Disabled(NullRegion),
    /// In-memory region
    InMemory(Arc<InMemoryEntryStore>),
}

impl CacheRegion {
    /// Region name
    pub fn name(&self) -> &str {
        match self {
            Self::Disabled(region) => region.name(),
            Self::InMemory(region) => region.name(),
        }
    }

    /// Look up a live entry
    pub fn get(&self, key: &str) -> Result<Option<PropertyMap>> {
        match self {
            Self::Disabled(region) => region.get(key),
            Self::InMemory(region) => region.get(key),
        }
    }

    /// Upsert an entry
    pub fn put<S: Into<String>>(&self, key: S, value: PropertyMap) -> Result<()> {
        match self {
            Self::Disabled(region) => region.put(key, value),
            Self::InMemory(region) => region.put(key, value),
        }
    }

    /// Merge `changes` into an existing entry; see [`InMemoryEntryStore::merge`]
    pub fn merge(&self, key: &str, changes: &PropertyMap) -> Result<bool> {
        match self {
            Self::Disabled(region) => region.merge(key, changes),
            Self::InMemory(region) => region.merge(key, changes),
        }
    }

    /// Remove an entry
    pub fn remove(&self, key: &str) -> Result<()> {
        match self {
            Self::Disabled(region) => region.remove(key),
            Self::InMemory(region) => region.remove(key),
        }
    }

    /// Counter snapshot
    pub fn stats(&self) -> RegionStats {
        match self {
            Self::Disabled(region) => region.stats(),
            Self::InMemory(region) => region.stats(),
        }
    }
}

#[allow(clippy::unused_async)]
impl CacheRegion {
    /// Non-blocking [`get`](Self::get)
    pub async fn get_async(&self, key: &str) -> Result<Option<PropertyMap>> {
        self.get(key)
    }

    /// Non-blocking [`put`](Self::put)
    pub async fn put_async<S: Into<String>>(&self, key: S, value: PropertyMap) -> Result<()> {
        self.put(key, value)
    }

    /// Non-blocking [`merge`](Self::merge)
    pub async fn merge_async(&self, key: &str, changes: &PropertyMap) -> Result<bool> {
        self.merge(key, changes)
    }

    /// Non-blocking [`remove`](Self::remove)
    pub async fn remove_async(&self, key: &str) -> Result<()> {
        self.remove(key)
    }
}
