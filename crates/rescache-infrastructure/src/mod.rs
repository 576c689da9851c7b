//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based loading: defaults, TOML file, environment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Caching
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Cache provider construction from configuration |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers converting foreign errors |

pub mod cache;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use cache::CacheProviderFactory;
pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use error_ext::ErrorContext;
