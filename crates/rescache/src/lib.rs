//! # rescache
//!
//! Client-side resource cache for REST API SDKs.
//!
//! Resources fetched from the remote API are cached in named regions (one
//! per resource type) with time-to-live and time-to-idle expiry. Every
//! create, save and delete sent through the caching data store keeps the
//! regions consistent: expanded sub-resources are cached on their own,
//! partial save responses are merged into existing entries, deletes and
//! token consumption drop stale entries.
//!
//! ## Example
//!
//! ```ignore
//! use rescache::{ResourceCache, ResourceType};
//! use rescache::infrastructure::ConfigLoader;
//!
//! let config = ConfigLoader::new().load()?;
//! let cache = ResourceCache::from_config(&config)?;
//! let accounts = cache.data_store(my_http_store);
//!
//! let account = accounts
//!     .get_resource(ResourceType::Account, "https://api.example.com/v1/accounts/1")
//!     .await?;
//!
//! cache.dispose();
//! ```
//!
//! ## Architecture
//!
//! - `domain` - error type, value objects and the resource store port
//! - `providers` - the disabled and in-memory cache providers
//! - `application` - region resolution, cacheability policy and the data stores
//! - `infrastructure` - configuration, logging and provider construction

/// Domain layer - error type, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use rescache_domain::*;
}

/// Provider layer - cache providers and regions
pub mod providers {
    pub use rescache_providers::*;
}

/// Application layer - resolver, policy and caching data stores
pub mod application {
    pub use rescache_application::*;
}

/// Infrastructure layer - config, logging and provider factory
pub mod infrastructure {
    pub use rescache_infrastructure::*;
}

mod client;

pub use client::ResourceCache;

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::{BlockingCachingDataStore, CachePolicy, CacheResolver, CachingDataStore};
pub use providers::{CacheProvider, CacheRegion};
