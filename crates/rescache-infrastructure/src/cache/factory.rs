//! Cache provider factory
//!
//! Builds the one provider a client owns from its cache configuration.

use crate::config::CacheConfig;
use crate::config::loader::validate_cache_config;
use rescache_domain::error::Result;
use rescache_domain::value_objects::RegionSettings;
use rescache_providers::{CacheProvider, InMemoryCacheProvider};
use tracing::info;

/// Cache provider factory
pub struct CacheProviderFactory;

impl CacheProviderFactory {
    /// Create a provider from configuration
    ///
    /// `enabled = false` yields the disabled provider; otherwise an in-memory
    /// provider with the configured defaults, region overrides and access
    /// conventions.
    pub fn create_from_config(config: &CacheConfig) -> Result<CacheProvider> {
        validate_cache_config(config)?;

        if !config.enabled {
            info!("Caching disabled by configuration");
            return Ok(Self::create_disabled());
        }

        let provider = InMemoryCacheProvider::builder()
            .with_defaults(config.default_settings())
            .with_regions(
                config
                    .regions
                    .iter()
                    .map(|(name, region)| (name.clone(), region.to_settings())),
            )
            .with_access_modes(config.access.into())
            .build();
        Ok(CacheProvider::from(provider))
    }

    /// Create the disabled provider
    pub fn create_disabled() -> CacheProvider {
        CacheProvider::disabled()
    }

    /// Create an in-memory provider with default settings and no overrides
    pub fn create_in_memory(defaults: RegionSettings) -> CacheProvider {
        CacheProvider::from(InMemoryCacheProvider::builder().with_defaults(defaults).build())
    }
}
