//! Clock Port
//!
//! Expiration is judged against a monotonic time source supplied to each
//! region, so TTL/TTI behavior can be driven deterministically in tests.

use std::fmt::Debug;
use std::time::Instant;

/// Monotonic time source
pub trait Clock: Send + Sync + Debug {
    /// Current instant
    fn now(&self) -> Instant;
}
