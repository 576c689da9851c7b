//! Domain Port Interfaces
//!
//! Contracts the surrounding client implements for the cache.
//!
//! ## Organization
//!
//! - **providers/** - the external resource store performing network I/O
//! - **infrastructure/** - time source used for expiration bookkeeping

/// Infrastructure service ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

pub use infrastructure::Clock;
pub use providers::{BlockingResourceStore, ResourceStore};
