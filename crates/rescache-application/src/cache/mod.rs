//! Cache consistency layer
//!
//! Region resolution, cacheability policy, expansion splitting, and the
//! coordinator that keeps regions consistent with store operations.

pub mod coordinator;
pub mod embedded;
pub mod policy;
pub mod resolver;

pub use coordinator::{CacheCoordinator, CacheOp};
pub use embedded::{CacheableResource, SplitResource, split_embedded};
pub use policy::CachePolicy;
pub use resolver::{CacheResolver, DefaultRegionNameResolver, RegionNameResolver};
