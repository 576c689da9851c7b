//! Cache region configuration and statistics

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Expiration settings of a single region
///
/// Either bound alone is enough to expire an entry; with neither set an
/// entry only leaves the region on explicit removal or disposal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSettings {
    /// Absolute entry lifetime, measured from the last put
    pub time_to_live: Option<Duration>,
    /// Lifetime measured from the last access
    pub time_to_idle: Option<Duration>,
}

impl RegionSettings {
    /// Settings under which entries never expire on their own
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time-to-live
    pub fn with_time_to_live(mut self, ttl: Duration) -> Self {
        self.time_to_live = Some(ttl);
        self
    }

    /// Set the time-to-idle
    pub fn with_time_to_idle(mut self, tti: Duration) -> Self {
        self.time_to_idle = Some(tti);
        self
    }

    /// Whether an entry with the given ages has expired
    pub fn is_expired(&self, since_created: Duration, since_accessed: Duration) -> bool {
        self.time_to_live.is_some_and(|ttl| since_created > ttl)
            || self.time_to_idle.is_some_and(|tti| since_accessed > tti)
    }
}

/// Calling convention used to reach a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// Synchronous calls that return once the map access completes
    Blocking,
    /// Completion-based (`async`) calls
    NonBlocking,
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blocking => f.write_str("blocking"),
            Self::NonBlocking => f.write_str("non-blocking"),
        }
    }
}

/// Access conventions a provider honors, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessModes {
    /// Blocking access supported
    pub blocking: bool,
    /// Non-blocking access supported
    pub non_blocking: bool,
}

impl AccessModes {
    /// Both conventions
    pub const fn both() -> Self {
        Self {
            blocking: true,
            non_blocking: true,
        }
    }

    /// Blocking access only
    pub const fn blocking_only() -> Self {
        Self {
            blocking: true,
            non_blocking: false,
        }
    }

    /// Non-blocking access only
    pub const fn non_blocking_only() -> Self {
        Self {
            blocking: false,
            non_blocking: true,
        }
    }

    /// Neither convention (the disabled provider)
    pub const fn none() -> Self {
        Self {
            blocking: false,
            non_blocking: false,
        }
    }

    /// Whether `mode` is honored
    pub fn supports(&self, mode: AccessMode) -> bool {
        match mode {
            AccessMode::Blocking => self.blocking,
            AccessMode::NonBlocking => self.non_blocking,
        }
    }
}

impl Default for AccessModes {
    fn default() -> Self {
        Self::both()
    }
}

/// Point-in-time statistics of one region
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionStats {
    /// Region name
    pub name: String,
    /// Entries currently held (expired entries not yet evicted included)
    pub size: usize,
    /// Total gets
    pub access_count: u64,
    /// Gets that returned a live entry
    pub hit_count: u64,
    /// Gets that found nothing or an expired entry
    pub miss_count: u64,
}

impl RegionStats {
    /// Hits over accesses, 0 when nothing was accessed
    pub fn hit_ratio(&self) -> f64 {
        if self.access_count == 0 {
            0.0
        } else {
            self.hit_count as f64 / self.access_count as f64
        }
    }
}
