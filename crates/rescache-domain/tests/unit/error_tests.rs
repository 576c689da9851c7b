//! Unit tests for domain error types

use rescache_domain::{AccessMode, Error};

#[test]
fn test_unsupported_cache_mode_error() {
    let error = Error::unsupported_cache_mode("account", AccessMode::Blocking);
    match &error {
        Error::UnsupportedCacheMode { region, mode } => {
            assert_eq!(region, "account");
            assert_eq!(mode, "blocking");
        }
        _ => panic!("Expected UnsupportedCacheMode error"),
    }
    assert!(error.is_cache_misuse());
    assert!(error.to_string().contains("account"));
}

#[test]
fn test_object_disposed_error() {
    let error = Error::object_disposed("region 'group'");
    match &error {
        Error::ObjectDisposed { object } => assert_eq!(object, "region 'group'"),
        _ => panic!("Expected ObjectDisposed error"),
    }
    assert!(error.is_cache_misuse());
}

#[test]
fn test_resource_fetch_error_is_not_cache_misuse() {
    let error = Error::resource_fetch("503 Service Unavailable");
    assert!(!error.is_cache_misuse());
    assert_eq!(
        error.to_string(),
        "Resource fetch error: 503 Service Unavailable"
    );
}

#[test]
fn test_resource_fetch_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
    let error = Error::resource_fetch_with_source("GET failed", io);
    match error {
        Error::ResourceFetch { message, source } => {
            assert_eq!(message, "GET failed");
            assert!(source.is_some());
        }
        _ => panic!("Expected ResourceFetch error"),
    }
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("ttl cannot be 0");
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "ttl cannot be 0");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: Error = json_err.into();
    assert!(matches!(error, Error::Json { .. }));
}
