//! Region resolution
//!
//! The only sanctioned way to reach a region: the resolver names the region
//! for a resource type, checks that the provider honors the requested access
//! convention, and returns the provider's region handle.

use rescache_domain::error::{Error, Result};
use rescache_domain::value_objects::{AccessMode, ResourceType};
use rescache_providers::{CacheProvider, CacheRegion};
use std::fmt;
use std::sync::Arc;

/// Strategy mapping a resource type to its region name
///
/// Closures `Fn(ResourceType) -> String` implement it, so a custom mapping
/// can be plugged in without a dedicated type.
pub trait RegionNameResolver: Send + Sync {
    /// Region holding resources of `resource_type`
    fn region_name(&self, resource_type: ResourceType) -> String;
}

/// Uses the resource type's canonical name ("account", "customData", ...)
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRegionNameResolver;

impl RegionNameResolver for DefaultRegionNameResolver {
    fn region_name(&self, resource_type: ResourceType) -> String {
        resource_type.as_str().to_string()
    }
}

impl<F> RegionNameResolver for F
where
    F: Fn(ResourceType) -> String + Send + Sync,
{
    fn region_name(&self, resource_type: ResourceType) -> String {
        self(resource_type)
    }
}

/// Resource type → region lookup composed with a provider
#[derive(Clone)]
pub struct CacheResolver {
    provider: Arc<CacheProvider>,
    names: Arc<dyn RegionNameResolver>,
}

impl CacheResolver {
    /// Resolver using the default naming strategy
    pub fn new(provider: Arc<CacheProvider>) -> Self {
        Self::with_name_resolver(provider, Arc::new(DefaultRegionNameResolver))
    }

    /// Resolver using a custom naming strategy
    pub fn with_name_resolver(
        provider: Arc<CacheProvider>,
        names: Arc<dyn RegionNameResolver>,
    ) -> Self {
        Self { provider, names }
    }

    /// Region name for a resource type
    pub fn region_name(&self, resource_type: ResourceType) -> String {
        self.names.region_name(resource_type)
    }

    /// Resolve the region for `resource_type` under the given calling convention.
    ///
    /// Fails with [`Error::UnsupportedCacheMode`] when an enabled provider
    /// does not honor `mode`. The disabled provider hands out its null region
    /// for either mode.
    pub fn resolve(&self, resource_type: ResourceType, mode: AccessMode) -> Result<CacheRegion> {
        let name = self.names.region_name(resource_type);
        if !self.provider.is_disabled() && !self.provider.access_modes().supports(mode) {
            return Err(Error::unsupported_cache_mode(name, mode));
        }
        self.provider.region(&name)
    }

    /// The underlying provider
    pub fn provider(&self) -> &CacheProvider {
        &self.provider
    }
}

impl fmt::Debug for CacheResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheResolver")
            .field("provider", &self.provider.provider_name())
            .finish()
    }
}
