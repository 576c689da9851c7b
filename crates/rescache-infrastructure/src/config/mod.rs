//! Configuration
//!
//! Typed configuration loaded with figment from defaults, an optional TOML
//! file and `RESCACHE_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
