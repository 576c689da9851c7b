//! # Resource Cache Domain Layer
//!
//! Core types shared by every layer of the resource cache: the error type,
//! the cached value model, resource type identification and the port traits
//! implemented by the surrounding client.
//!
//! ## Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error enum and `Result` alias |
//! | [`constants`] | Representation field names and cache constants |
//! | [`value_objects`] | `PropertyMap`, `ResourceType`, `CacheKey`, region settings and stats |
//! | [`ports`] | External resource store and clock contracts |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::*;
