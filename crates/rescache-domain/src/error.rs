//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the resource cache
///
/// A cache miss is never an error. The cache-internal variants
/// ([`Error::UnsupportedCacheMode`], [`Error::ObjectDisposed`]) signal a
/// wiring or lifecycle bug in the caller and are not retryable.
#[derive(Error, Debug)]
pub enum Error {
    /// A region was requested with an access convention the provider does not honor
    #[error("Unsupported cache mode: region '{region}' cannot be accessed in {mode} mode")]
    UnsupportedCacheMode {
        /// Name of the region that was requested
        region: String,
        /// The access mode that was refused
        mode: String,
    },

    /// A provider or region was used after it was disposed
    #[error("Object disposed: {object}")]
    ObjectDisposed {
        /// Description of the disposed object
        object: String,
    },

    /// Failure reported by the external resource store
    #[error("Resource fetch error: {message}")]
    ResourceFetch {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Cache lifecycle and wiring errors
impl Error {
    /// Create an unsupported cache mode error
    pub fn unsupported_cache_mode<R: Into<String>, M: std::fmt::Display>(
        region: R,
        mode: M,
    ) -> Self {
        Self::UnsupportedCacheMode {
            region: region.into(),
            mode: mode.to_string(),
        }
    }

    /// Create an object disposed error
    pub fn object_disposed<S: Into<String>>(object: S) -> Self {
        Self::ObjectDisposed {
            object: object.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Whether this error is a cache programmer error rather than an external failure
    pub fn is_cache_misuse(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedCacheMode { .. } | Self::ObjectDisposed { .. }
        )
    }
}

// External resource store errors
impl Error {
    /// Create a resource fetch error
    pub fn resource_fetch<S: Into<String>>(message: S) -> Self {
        Self::ResourceFetch {
            message: message.into(),
            source: None,
        }
    }

    /// Create a resource fetch error with source
    pub fn resource_fetch_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::ResourceFetch {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration and infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
