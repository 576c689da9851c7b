//! Unit tests for region settings, access modes and stats

use rescache_domain::{AccessMode, AccessModes, RegionSettings, RegionStats};
use std::time::Duration;

#[test]
fn test_settings_without_bounds_never_expire() {
    let settings = RegionSettings::new();
    let ages = Duration::from_secs(60 * 60 * 24 * 365);
    assert!(!settings.is_expired(ages, ages));
}

#[test]
fn test_ttl_alone_expires() {
    let settings = RegionSettings::new().with_time_to_live(Duration::from_millis(500));
    assert!(!settings.is_expired(Duration::from_millis(250), Duration::ZERO));
    assert!(!settings.is_expired(Duration::from_millis(500), Duration::ZERO));
    assert!(settings.is_expired(Duration::from_millis(600), Duration::ZERO));
}

#[test]
fn test_tti_alone_expires() {
    let settings = RegionSettings::new().with_time_to_idle(Duration::from_secs(10));
    assert!(!settings.is_expired(Duration::from_secs(1000), Duration::from_secs(9)));
    assert!(settings.is_expired(Duration::from_secs(11), Duration::from_secs(11)));
}

#[test]
fn test_access_modes() {
    assert!(AccessModes::both().supports(AccessMode::Blocking));
    assert!(AccessModes::both().supports(AccessMode::NonBlocking));
    assert!(!AccessModes::blocking_only().supports(AccessMode::NonBlocking));
    assert!(!AccessModes::non_blocking_only().supports(AccessMode::Blocking));
    assert!(!AccessModes::none().supports(AccessMode::Blocking));
    assert_eq!(AccessModes::default(), AccessModes::both());
    assert_eq!(AccessMode::NonBlocking.to_string(), "non-blocking");
}

#[test]
fn test_hit_ratio() {
    let stats = RegionStats {
        name: "account".to_string(),
        size: 1,
        access_count: 4,
        hit_count: 3,
        miss_count: 1,
    };
    assert!((stats.hit_ratio() - 0.75).abs() < f64::EPSILON);
    assert_eq!(RegionStats::default().hit_ratio(), 0.0);
}
