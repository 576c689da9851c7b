//! Cache Provider Implementations
//!
//! Region registries and entry stores backing the resource cache.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullCacheProvider`] | Disabled | Every get misses, puts and removes are no-ops |
//! | [`InMemoryCacheProvider`] | Local | Named in-process regions with TTL/TTI expiration |
//!
//! Both are reached through the tagged [`CacheProvider`] enum, which hands
//! out [`CacheRegion`] handles.

pub mod cache;
pub mod clock;

pub use cache::{
    CacheProvider, CacheRegion, InMemoryCacheProvider, InMemoryCacheProviderBuilder,
    InMemoryEntryStore, NullCacheProvider, NullRegion,
};
pub use clock::{ManualClock, SystemClock};
