//! Configuration types module

pub mod app;
pub mod cache;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use cache::{CacheAccessConfig, CacheConfig, RegionConfig};
pub use logging::LoggingConfig;
