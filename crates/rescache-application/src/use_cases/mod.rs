//! Use cases
//!
//! Cache-aware wrappers around the external resource store, one per calling
//! convention.

pub mod blocking_caching_data_store;
pub mod caching_data_store;

pub use blocking_caching_data_store::BlockingCachingDataStore;
pub use caching_data_store::CachingDataStore;
