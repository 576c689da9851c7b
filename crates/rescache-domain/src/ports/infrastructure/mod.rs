//! Infrastructure ports

pub mod clock;

pub use clock::Clock;
