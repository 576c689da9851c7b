//! Disabled cache provider
//!
//! A provider that stores nothing. Its regions always miss and accept every
//! put and remove without effect, which turns caching off without any
//! conditional logic at the call sites.

use rescache_domain::error::Result;
use rescache_domain::value_objects::{AccessModes, PropertyMap, RegionStats};

/// Disabled provider
///
/// # Example
///
/// ```rust
/// use rescache_providers::NullCacheProvider;
///
/// let provider = NullCacheProvider::new();
/// let region = provider.region("account");
/// assert!(region.get("https://api.example.com/v1/accounts/1").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCacheProvider;

impl NullCacheProvider {
    /// Create the disabled provider
    pub fn new() -> Self {
        Self
    }

    /// Null region carrying the requested name
    pub fn region(&self, name: &str) -> NullRegion {
        NullRegion {
            name: name.to_string(),
        }
    }

    /// The disabled provider honors neither access convention
    pub fn access_modes(&self) -> AccessModes {
        AccessModes::none()
    }
}

/// Region of the disabled provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullRegion {
    name: String,
}

impl NullRegion {
    /// Region name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always a miss
    pub fn get(&self, _key: &str) -> Result<Option<PropertyMap>> {
        Ok(None)
    }

    /// Accepted and dropped
    pub fn put<S: Into<String>>(&self, _key: S, _value: PropertyMap) -> Result<()> {
        Ok(())
    }

    /// Nothing to merge into
    pub fn merge(&self, _key: &str, _changes: &PropertyMap) -> Result<bool> {
        Ok(false)
    }

    /// Nothing to remove
    pub fn remove(&self, _key: &str) -> Result<()> {
        Ok(())
    }

    /// Empty stats
    pub fn stats(&self) -> RegionStats {
        RegionStats {
            name: self.name.clone(),
            ..RegionStats::default()
        }
    }
}
