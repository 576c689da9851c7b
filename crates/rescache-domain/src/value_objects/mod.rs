//! Value Objects
//!
//! Immutable types describing cached resources and cache regions.

pub mod cache;
pub mod cache_key;
pub mod property_map;
pub mod resource_type;

pub use cache::{AccessMode, AccessModes, RegionSettings, RegionStats};
pub use cache_key::CacheKey;
pub use property_map::{FieldValue, PropertyMap};
pub use resource_type::ResourceType;
