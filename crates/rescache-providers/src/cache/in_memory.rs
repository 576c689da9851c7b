//! In-memory cache provider
//!
//! Region registry over [`InMemoryEntryStore`]s. Regions are created
//! lazily on first request, with their explicit settings when configured and
//! the provider defaults otherwise.
//!
//! ## Example
//!
//! ```ignore
//! use rescache_domain::RegionSettings;
//! use rescache_providers::InMemoryCacheProvider;
//! use std::time::Duration;
//!
//! let provider = InMemoryCacheProvider::builder()
//!     .with_default_time_to_live(Duration::from_secs(3600))
//!     .with_region(
//!         "account",
//!         RegionSettings::new().with_time_to_idle(Duration::from_secs(300)),
//!     )
//!     .build();
//! ```

use super::entry_store::InMemoryEntryStore;
use crate::clock::SystemClock;
use dashmap::DashMap;
use rescache_domain::error::{Error, Result};
use rescache_domain::ports::Clock;
use rescache_domain::value_objects::{AccessModes, RegionSettings, RegionStats};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info};

/// In-memory region registry
pub struct InMemoryCacheProvider {
    defaults: RegionSettings,
    overrides: HashMap<String, RegionSettings>,
    access_modes: AccessModes,
    regions: DashMap<String, Arc<InMemoryEntryStore>>,
    clock: Arc<dyn Clock>,
    disposed: AtomicBool,
}

impl InMemoryCacheProvider {
    /// Create a provider honoring both access conventions
    pub fn new(defaults: RegionSettings, overrides: HashMap<String, RegionSettings>) -> Self {
        Self::builder()
            .with_defaults(defaults)
            .with_regions(overrides)
            .build()
    }

    /// Start building a provider
    pub fn builder() -> InMemoryCacheProviderBuilder {
        InMemoryCacheProviderBuilder::default()
    }

    /// Settings a region with this name is (or would be) created with
    pub fn settings_for(&self, name: &str) -> RegionSettings {
        self.overrides.get(name).copied().unwrap_or(self.defaults)
    }

    /// Default settings for unconfigured regions
    pub fn defaults(&self) -> RegionSettings {
        self.defaults
    }

    /// Access conventions honored by this provider
    pub fn access_modes(&self) -> AccessModes {
        self.access_modes
    }

    /// Return the named region, creating it on first use.
    ///
    /// Creation goes through the map's per-shard entry lock, so concurrent
    /// callers asking for the same unknown name share one store.
    pub fn region(&self, name: &str) -> Result<Arc<InMemoryEntryStore>> {
        if self.disposed.load(Ordering::Acquire) {
            return Err(Error::object_disposed("in-memory cache provider"));
        }
        if let Some(region) = self.regions.get(name) {
            return Ok(Arc::clone(region.value()));
        }
        let region = self
            .regions
            .entry(name.to_string())
            .or_insert_with(|| {
                let settings = self.settings_for(name);
                debug!(
                    region = name,
                    ttl = ?settings.time_to_live,
                    tti = ?settings.time_to_idle,
                    "created cache region"
                );
                Arc::new(InMemoryEntryStore::new(
                    name,
                    settings,
                    Arc::clone(&self.clock),
                ))
            })
            .value()
            .clone();
        // Lost a race with dispose(): drop what this call inserted
        if self.disposed.load(Ordering::Acquire) {
            self.regions.remove(name);
            region.dispose();
            return Err(Error::object_disposed("in-memory cache provider"));
        }
        Ok(region)
    }

    /// Stats for every region created so far, ordered by name
    pub fn stats(&self) -> Vec<RegionStats> {
        let mut stats: Vec<RegionStats> = self
            .regions
            .iter()
            .map(|region| region.value().stats())
            .collect();
        stats.sort_by(|a, b| a.name.cmp(&b.name));
        stats
    }

    /// Dispose every region; later region requests fail with `ObjectDisposed`
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        for region in self.regions.iter() {
            region.value().dispose();
        }
        self.regions.clear();
        info!("in-memory cache provider disposed");
    }

    /// Whether [`dispose`](Self::dispose) has been called
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }
}

impl Default for InMemoryCacheProvider {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for InMemoryCacheProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryCacheProvider")
            .field("defaults", &self.defaults)
            .field("overrides", &self.overrides)
            .field("access_modes", &self.access_modes)
            .field("regions", &self.regions.len())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// Builder for [`InMemoryCacheProvider`]
#[derive(Debug)]
pub struct InMemoryCacheProviderBuilder {
    defaults: RegionSettings,
    overrides: HashMap<String, RegionSettings>,
    access_modes: AccessModes,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryCacheProviderBuilder {
    fn default() -> Self {
        Self {
            defaults: RegionSettings::default(),
            overrides: HashMap::new(),
            access_modes: AccessModes::both(),
            clock: Arc::new(SystemClock),
        }
    }
}

impl InMemoryCacheProviderBuilder {
    /// Default settings for regions without an override
    pub fn with_defaults(mut self, defaults: RegionSettings) -> Self {
        self.defaults = defaults;
        self
    }

    /// Default time-to-live
    pub fn with_default_time_to_live(mut self, ttl: Duration) -> Self {
        self.defaults.time_to_live = Some(ttl);
        self
    }

    /// Default time-to-idle
    pub fn with_default_time_to_idle(mut self, tti: Duration) -> Self {
        self.defaults.time_to_idle = Some(tti);
        self
    }

    /// Explicit settings for one region
    pub fn with_region<S: Into<String>>(mut self, name: S, settings: RegionSettings) -> Self {
        self.overrides.insert(name.into(), settings);
        self
    }

    /// Explicit settings for several regions
    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = (S, RegionSettings)>,
        S: Into<String>,
    {
        self.overrides
            .extend(regions.into_iter().map(|(name, settings)| (name.into(), settings)));
        self
    }

    /// Restrict the access conventions the provider honors
    pub fn with_access_modes(mut self, access_modes: AccessModes) -> Self {
        self.access_modes = access_modes;
        self
    }

    /// Time source used for expiration
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the provider
    pub fn build(self) -> InMemoryCacheProvider {
        info!(
            regions = self.overrides.len(),
            blocking = self.access_modes.blocking,
            non_blocking = self.access_modes.non_blocking,
            "in-memory cache provider configured"
        );
        InMemoryCacheProvider {
            defaults: self.defaults,
            overrides: self.overrides,
            access_modes: self.access_modes,
            regions: DashMap::new(),
            clock: self.clock,
            disposed: AtomicBool::new(false),
        }
    }
}
