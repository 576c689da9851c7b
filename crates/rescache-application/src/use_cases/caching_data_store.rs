//! Caching Data Store Use Case
//!
//! Non-blocking data store that serves reads from the cache and keeps the
//! cache consistent with every create, save and delete sent to the backing
//! store.

use crate::cache::{CacheCoordinator, CachePolicy, CacheResolver};
use rescache_domain::error::Result;
use rescache_domain::ports::ResourceStore;
use rescache_domain::value_objects::{PropertyMap, ResourceType};
use tracing::debug;

/// Cache-aware wrapper around a [`ResourceStore`]
///
/// Store errors propagate unchanged and leave the cache untouched. A cache
/// entry is only mutated after the store call it mirrors has succeeded.
#[derive(Debug)]
pub struct CachingDataStore<S> {
    store: S,
    cache: CacheCoordinator,
}

impl<S: ResourceStore> CachingDataStore<S> {
    /// Wrap `store`, accepting only absolute hrefs
    pub fn new(store: S, resolver: CacheResolver) -> Self {
        Self::with_policy(store, resolver, CachePolicy::default())
    }

    /// Wrap `store` with a custom policy (e.g. a base URL for relative hrefs)
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

    /// Fetch a resource, serving it from the cache when a live entry exists.
    ///
    /// On a miss the store response is returned as received; its primary
    /// representation and any embedded resources are cached separately.
    pub async fn get_resource(&self, resource_type: ResourceType, href: &str) -> Result<PropertyMap> {
        let key = self.cache.policy().canonical_key(href)?;
        if self.cache.policy().is_cacheable(resource_type) {
            if let Some(cached) = self.cache.lookup(resource_type, &key).await? {
                return Ok(cached);
            }
        }

        let response = self.store.fetch(href).await?;
        let ops = self.cache.plan_fetch(resource_type, &key, &response);
        self.cache.apply(ops).await?;
        Ok(response)
    }

    /// Create a resource under the parent collection `href`
    pub async fn create_resource(
        &self,
        resource_type: ResourceType,
        href: &str,
        payload: &PropertyMap,
    ) -> Result<PropertyMap> {
        let response = self.store.create(href, payload).await?;
        let ops = self.cache.plan_create(resource_type, &response);
        debug!(resource_type = %resource_type, ops = ops.len(), "created resource");
        self.cache.apply(ops).await?;
        Ok(response)
    }

    /// Send a partial update and merge the response into existing entries
    pub async fn save_resource(
        &self,
        resource_type: ResourceType,
        href: &str,
        changes: &PropertyMap,
    ) -> Result<PropertyMap> {
        let key = self.cache.policy().canonical_key(href)?;
        let response = self.store.update(href, changes).await?;
        let ops = self.cache.plan_save(resource_type, &key, &response);
        self.cache.apply(ops).await?;
        Ok(response)
    }

    /// Delete a resource, then drop its entry and any dependent entries
    pub async fn delete_resource(&self, resource_type: ResourceType, href: &str) -> Result<()> {
        let key = self.cache.policy().canonical_key(href)?;
        self.store.delete(href).await?;
        let ops = self.cache.plan_delete(resource_type, &key);
        self.cache.apply(ops).await
    }
}
