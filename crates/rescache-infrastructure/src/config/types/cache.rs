//! Cache configuration types

use crate::constants::{CACHE_DEFAULT_TTI_SECS, CACHE_DEFAULT_TTL_SECS};
use rescache_domain::value_objects::{AccessModes, RegionSettings};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Access conventions the provider honors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheAccessConfig {
    /// Blocking and non-blocking
    #[default]
    Both,
    /// Blocking only
    Blocking,
    /// Non-blocking only
    NonBlocking,
}

impl From<CacheAccessConfig> for AccessModes {
    fn from(access: CacheAccessConfig) -> Self {
        match access {
            CacheAccessConfig::Both => AccessModes::both(),
            CacheAccessConfig::Blocking => AccessModes::blocking_only(),
            CacheAccessConfig::NonBlocking => AccessModes::non_blocking_only(),
        }
    }
}

/// Per-region override; an absent bound means "no bound"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionConfig {
    /// Time-to-live in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_secs: Option<u64>,

    /// Time-to-idle in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tti_secs: Option<u64>,
}

impl RegionConfig {
    /// Region settings described by this override
    pub fn to_settings(&self) -> RegionSettings {
        settings(self.ttl_secs, self.tti_secs)
    }
}

/// Cache configuration
///
/// ```toml
/// [cache]
/// enabled = true
/// access = "both"
/// default_ttl_secs = 3600
///
/// [cache.regions.account]
/// tti_secs = 300
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache enabled; `false` selects the disabled provider
    pub enabled: bool,

    /// Access conventions honored by the provider
    pub access: CacheAccessConfig,

    /// Default time-to-live in seconds for regions without an override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_ttl_secs: Option<u64>,

    /// Default time-to-idle in seconds for regions without an override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tti_secs: Option<u64>,

    /// Per-region overrides, keyed by region name
    pub regions: BTreeMap<String, RegionConfig>,
}

impl CacheConfig {
    /// Settings for regions without an override
    pub fn default_settings(&self) -> RegionSettings {
        settings(self.default_ttl_secs, self.default_tti_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            access: CacheAccessConfig::Both,
            default_ttl_secs: Some(CACHE_DEFAULT_TTL_SECS),
            default_tti_secs: Some(CACHE_DEFAULT_TTI_SECS),
            regions: BTreeMap::new(),
        }
    }
}

fn settings(ttl_secs: Option<u64>, tti_secs: Option<u64>) -> RegionSettings {
    RegionSettings {
        time_to_live: ttl_secs.map(Duration::from_secs),
        time_to_idle: tti_secs.map(Duration::from_secs),
    }
}
