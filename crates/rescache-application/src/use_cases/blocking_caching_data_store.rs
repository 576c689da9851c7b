//! Blocking Caching Data Store Use Case
//!
//! Synchronous counterpart of [`CachingDataStore`](super::CachingDataStore).
//! Regions are resolved in blocking mode, so a provider restricted to
//! non-blocking access rejects every cached call made through it.

use crate::cache::{CacheCoordinator, CachePolicy, CacheResolver};
use rescache_domain::error::Result;
use rescache_domain::ports::BlockingResourceStore;
use rescache_domain::value_objects::{PropertyMap, ResourceType};

/// Cache-aware wrapper around a [`BlockingResourceStore`]
#[derive(Debug)]
pub struct BlockingCachingDataStore<S> {
    store: S,
    cache: CacheCoordinator,
}

impl<S: BlockingResourceStore> BlockingCachingDataStore<S> {
    /// Wrap `store`, accepting only absolute hrefs
    pub fn new(store: S, resolver: CacheResolver) -> Self {
        Self::with_policy(store, resolver, CachePolicy::default())
    }

    /// Wrap `store` with a custom policy
    pub fn with_policy(store: S, resolver: CacheResolver, policy: CachePolicy) -> Self {
        Self {
            store,
            cache: CacheCoordinator::new(resolver, policy),
        }
    }

    /// The backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The coordinator shared by all operations
    pub fn coordinator(&self) -> &CacheCoordinator {
        &self.cache
    }

    /// Fetch a resource, serving it from the cache when a live entry exists
    pub fn get_resource(&self, resource_type: ResourceType, href: &str) -> Result<PropertyMap> {
        let key = self.cache.policy().canonical_key(href)?;
        if self.cache.policy().is_cacheable(resource_type) {
            if let Some(cached) = self.cache.lookup_blocking(resource_type, &key)? {
                return Ok(cached);
            }
        }

        let response = self.store.fetch(href)?;
        self.cache
            .apply_blocking(self.cache.plan_fetch(resource_type, &key, &response))?;
        Ok(response)
    }

    /// Create a resource under the parent collection `href`
    pub fn create_resource(
        &self,
        resource_type: ResourceType,
        href: &str,
        payload: &PropertyMap,
    ) -> Result<PropertyMap> {
        let response = self.store.create(href, payload)?;
        self.cache
            .apply_blocking(self.cache.plan_create(resource_type, &response))?;
        Ok(response)
    }

    /// Send a partial update and merge the response into existing entries
    pub fn save_resource(
        &self,
        resource_type: ResourceType,
        href: &str,
        changes: &PropertyMap,
    ) -> Result<PropertyMap> {
        let key = self.cache.policy().canonical_key(href)?;
        let response = self.store.update(href, changes)?;
        self.cache
            .apply_blocking(self.cache.plan_save(resource_type, &key, &response))?;
        Ok(response)
    }

    /// Delete a resource, then drop its entry and any dependent entries
    pub fn delete_resource(&self, resource_type: ResourceType, href: &str) -> Result<()> {
        let key = self.cache.policy().canonical_key(href)?;
        self.store.delete(href)?;
        self.cache
            .apply_blocking(self.cache.plan_delete(resource_type, &key))
    }
}
