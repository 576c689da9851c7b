//! Application Layer - Resource Cache
//!
//! Orchestrates the cache around the external resource store.
//!
//! ## Components
//!
//! - [`cache::CacheResolver`]: maps a resource type to its region and
//!   enforces the provider's access conventions
//! - [`cache::CachePolicy`]: cacheability, canonical keys and
//!   cross-resource invalidation rules
//! - [`cache::split_embedded`]: peels expanded sub-resources off a response
//! - [`cache::CacheCoordinator`]: plans and applies the cache mutations of
//!   every store operation
//! - [`use_cases::CachingDataStore`] / [`use_cases::BlockingCachingDataStore`]:
//!   store wrappers for non-blocking and blocking call sites

pub mod cache;
pub mod use_cases;

pub use cache::{
    CacheCoordinator, CacheOp, CachePolicy, CacheResolver, CacheableResource,
    DefaultRegionNameResolver, RegionNameResolver, SplitResource, split_embedded,
};
pub use use_cases::{BlockingCachingDataStore, CachingDataStore};
