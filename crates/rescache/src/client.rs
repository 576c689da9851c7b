//! Client-scoped cache
//!
//! Owns the one provider of an API client and hands out data stores wired
//! to it.

use rescache_application::{
    BlockingCachingDataStore, CachePolicy, CacheResolver, CachingDataStore, RegionNameResolver,
};
use rescache_domain::error::Result;
use rescache_domain::ports::{BlockingResourceStore, ResourceStore};
use rescache_domain::value_objects::RegionStats;
use rescache_infrastructure::cache::CacheProviderFactory;
use rescache_infrastructure::config::AppConfig;
use rescache_providers::CacheProvider;
use std::sync::Arc;
use tracing::info;
use url::Url;

/// The cache of one API client
///
/// Created with the client, disposed at shutdown. Every data store obtained
/// from it shares the same regions.
#[derive(Debug, Clone)]
pub struct ResourceCache {
    provider: Arc<CacheProvider>,
    resolver: CacheResolver,
    policy: CachePolicy,
}

impl ResourceCache {
    /// Wrap an already constructed provider
    pub fn new(provider: CacheProvider) -> Self {
        let provider = Arc::new(provider);
        Self {
            resolver: CacheResolver::new(Arc::clone(&provider)),
            provider,
            policy: CachePolicy::default(),
        }
    }

    /// Build the provider described by `config`
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        CacheProviderFactory::create_from_config(&config.cache).map(Self::new)
    }

    /// A cache that stores nothing
    pub fn disabled() -> Self {
        Self::new(CacheProviderFactory::create_disabled())
    }

    /// Qualify relative hrefs against `base_url`
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.policy = self.policy.with_base_url(base_url);
        self
    }

    /// Replace the resource type to region name mapping
    pub fn with_region_names(mut self, names: Arc<dyn RegionNameResolver>) -> Self {
        self.resolver = CacheResolver::with_name_resolver(Arc::clone(&self.provider), names);
        self
    }

    /// Non-blocking caching data store in front of `store`
    pub fn data_store<S: ResourceStore>(&self, store: S) -> CachingDataStore<S> {
        CachingDataStore::with_policy(store, self.resolver.clone(), self.policy.clone())
    }

    /// Blocking caching data store in front of `store`
    pub fn blocking_data_store<S: BlockingResourceStore>(
        &self,
        store: S,
    ) -> BlockingCachingDataStore<S> {
        BlockingCachingDataStore::with_policy(store, self.resolver.clone(), self.policy.clone())
    }

    /// The shared provider
    pub fn provider(&self) -> &CacheProvider {
        &self.provider
    }

    /// The region resolver
    pub fn resolver(&self) -> &CacheResolver {
        &self.resolver
    }

    /// Stats of every live region
    pub fn stats(&self) -> Vec<RegionStats> {
        self.provider.stats()
    }

    /// Dispose the provider; later region access fails with `ObjectDisposed`
    pub fn dispose(&self) {
        info!(provider = self.provider.provider_name(), "disposing resource cache");
        self.provider.dispose();
    }
}
