//! External provider ports

pub mod resource_store;

pub use resource_store::{BlockingResourceStore, ResourceStore};
