//! Cache provider construction
//!
//! The single place where configuration turns into a [`CacheProvider`]
//! (`rescache_providers::CacheProvider`).

pub mod factory;

pub use factory::CacheProviderFactory;
