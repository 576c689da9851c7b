//! Consistency coordination
//!
//! Every store operation is turned into a list of [`CacheOp`]s by a pure
//! planning step, then applied to the resolved regions through either the
//! blocking or the non-blocking calling convention. Both data stores share
//! the planning, so the two conventions cannot drift apart.

use super::embedded::{CacheableResource, split_embedded};
use super::policy::CachePolicy;
use super::resolver::CacheResolver;
use rescache_domain::error::Result;
use rescache_domain::value_objects::{AccessMode, CacheKey, PropertyMap, ResourceType};
use tracing::{debug, warn};

/// One cache mutation derived from a store operation
#[derive(Debug, Clone, PartialEq)]
pub enum CacheOp {
    /// Replace (or create) the entry
    Put(CacheableResource),
    /// Merge top-level fields into an existing entry; no-op when absent
    Merge(CacheableResource),
    /// Drop the entry
    Remove {
        /// Region-deciding type
        resource_type: ResourceType,
        /// Entry key
        key: CacheKey,
    },
}

/// Plans and applies cache mutations around store operations
#[derive(Debug, Clone)]
pub struct CacheCoordinator {
    resolver: CacheResolver,
    policy: CachePolicy,
}

impl CacheCoordinator {
    /// Create a coordinator
    pub fn new(resolver: CacheResolver, policy: CachePolicy) -> Self {
        Self { resolver, policy }
    }

    /// Cacheability and key policy
    pub fn policy(&self) -> &CachePolicy {
        &self.policy
    }

    /// Region resolver
    pub fn resolver(&self) -> &CacheResolver {
        &self.resolver
    }

    /// Mutations after a fetch missed and went to the store
    pub fn plan_fetch(
        &self,
        resource_type: ResourceType,
        request_key: &CacheKey,
        response: &PropertyMap,
    ) -> Vec<CacheOp> {
        self.plan_entries(resource_type, Some(request_key), response, CacheOp::Put)
    }

    /// Mutations after a create succeeded
    ///
    /// The key comes from the href the store assigned; a response without
    /// one cannot be cached.
    pub fn plan_create(&self, resource_type: ResourceType, response: &PropertyMap) -> Vec<CacheOp> {
        let mut ops = self.plan_entries(resource_type, None, response, CacheOp::Put);
        ops.extend(self.plan_invalidations(resource_type, response));
        ops
    }

    /// Mutations after a partial update succeeded
    ///
    /// The response is merged into existing entries only; a partial response
    /// never creates an entry.
    pub fn plan_save(
        &self,
        resource_type: ResourceType,
        key: &CacheKey,
        response: &PropertyMap,
    ) -> Vec<CacheOp> {
        let mut ops = self.plan_entries(resource_type, Some(key), response, CacheOp::Merge);
        ops.extend(self.plan_invalidations(resource_type, response));
        ops
    }

    /// Mutations after a delete succeeded
    pub fn plan_delete(&self, resource_type: ResourceType, key: &CacheKey) -> Vec<CacheOp> {
        let mut ops = Vec::new();
        if self.policy.is_cacheable(resource_type) {
            ops.push(CacheOp::Remove {
                resource_type,
                key: key.clone(),
            });
        }
        ops.extend(
            self.policy
                .invalidations_after_delete(key)
                .into_iter()
                .map(|(resource_type, key)| CacheOp::Remove { resource_type, key }),
        );
        ops
    }

    fn plan_entries(
        &self,
        resource_type: ResourceType,
        fallback_key: Option<&CacheKey>,
        response: &PropertyMap,
        op: fn(CacheableResource) -> CacheOp,
    ) -> Vec<CacheOp> {
        if !self.policy.is_cacheable(resource_type) && resource_type != ResourceType::Collection {
            return Vec::new();
        }

        let split = split_embedded(&self.policy, resource_type, response);
        let mut ops = Vec::with_capacity(split.embedded.len() + 1);
        if let Some(primary) = split.primary {
            match self.primary_key(response, fallback_key) {
                Some(key) => ops.push(op(CacheableResource {
                    resource_type,
                    key,
                    value: primary,
                })),
                None => warn!(
                    resource_type = %resource_type,
                    "response without a usable href was not cached"
                ),
            }
        }
        ops.extend(split.embedded.into_iter().map(op));
        ops
    }

    fn plan_invalidations(&self, resource_type: ResourceType, response: &PropertyMap) -> Vec<CacheOp> {
        self.policy
            .invalidations_after_write(resource_type, response)
            .into_iter()
            .map(|(resource_type, key)| CacheOp::Remove { resource_type, key })
            .collect()
    }

    fn primary_key(&self, response: &PropertyMap, fallback: Option<&CacheKey>) -> Option<CacheKey> {
        match response.href() {
            Some(href) => self.policy.canonical_key(href).ok(),
            None => fallback.cloned(),
        }
    }
}

// Blocking convention
impl CacheCoordinator {
    /// Cached entry for `key`, if live
    pub fn lookup_blocking(
        &self,
        resource_type: ResourceType,
        key: &CacheKey,
    ) -> Result<Option<PropertyMap>> {
        let region = self.resolver.resolve(resource_type, AccessMode::Blocking)?;
        let cached = region.get(key.as_str())?;
        log_lookup(resource_type, key, cached.is_some());
        Ok(cached)
    }

    /// Apply planned mutations
    pub fn apply_blocking(&self, ops: Vec<CacheOp>) -> Result<()> {
        for op in ops {
            match op {
                CacheOp::Put(resource) => {
                    let region = self
                        .resolver
                        .resolve(resource.resource_type, AccessMode::Blocking)?;
                    debug!(region = region.name(), key = %resource.key, "cache put");
                    region.put(resource.key.as_str(), resource.value)?;
                }
                CacheOp::Merge(resource) => {
                    let region = self
                        .resolver
                        .resolve(resource.resource_type, AccessMode::Blocking)?;
                    if region.merge(resource.key.as_str(), &resource.value)? {
                        debug!(region = region.name(), key = %resource.key, "cache merge");
                    }
                }
                CacheOp::Remove { resource_type, key } => {
                    let region = self.resolver.resolve(resource_type, AccessMode::Blocking)?;
                    debug!(region = region.name(), key = %key, "cache remove");
                    region.remove(key.as_str())?;
                }
            }
        }
        Ok(())
    }
}

// Non-blocking convention
impl CacheCoordinator {
    /// Cached entry for `key`, if live
    pub async fn lookup(
        &self,
        resource_type: ResourceType,
        key: &CacheKey,
    ) -> Result<Option<PropertyMap>> {
        let region = self.resolver.resolve(resource_type, AccessMode::NonBlocking)?;
        let cached = region.get_async(key.as_str()).await?;
        log_lookup(resource_type, key, cached.is_some());
        Ok(cached)
    }

    /// Apply planned mutations
    pub async fn apply(&self, ops: Vec<CacheOp>) -> Result<()> {
        for op in ops {
            match op {
                CacheOp::Put(resource) => {
                    let region = self
                        .resolver
                        .resolve(resource.resource_type, AccessMode::NonBlocking)?;
                    debug!(region = region.name(), key = %resource.key, "cache put");
                    region
                        .put_async(resource.key.as_str(), resource.value)
                        .await?;
                }
                CacheOp::Merge(resource) => {
                    let region = self
                        .resolver
                        .resolve(resource.resource_type, AccessMode::NonBlocking)?;
                    if region
                        .merge_async(resource.key.as_str(), &resource.value)
                        .await?
                    {
                        debug!(region = region.name(), key = %resource.key, "cache merge");
                    }
                }
                CacheOp::Remove { resource_type, key } => {
                    let region = self
                        .resolver
                        .resolve(resource_type, AccessMode::NonBlocking)?;
                    debug!(region = region.name(), key = %key, "cache remove");
                    region.remove_async(key.as_str()).await?;
                }
            }
        }
        Ok(())
    }
}

fn log_lookup(resource_type: ResourceType, key: &CacheKey, hit: bool) {
    if hit {
        debug!(resource_type = %resource_type, key = %key, "cache hit");
    } else {
        debug!(resource_type = %resource_type, key = %key, "cache miss");
    }
}
