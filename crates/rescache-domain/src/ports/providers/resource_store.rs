//! Resource Store Port
//!
//! The HTTP-backed object store that performs the actual network reads and
//! writes. The cache sits in front of it and never retries or masks its
//! failures: every error it returns is passed through unchanged, normally as
//! [`Error::ResourceFetch`](crate::Error::ResourceFetch).
//!
//! Two calling conventions are offered with identical semantics:
//! [`ResourceStore`] for async call sites and [`BlockingResourceStore`] for
//! synchronous ones.

use crate::error::Result;
use crate::value_objects::PropertyMap;
use async_trait::async_trait;

/// Non-blocking external resource store
///
/// # Example
///
/// ```ignore
/// let account = store.fetch("https://api.example.com/v1/accounts/1").await?;
/// let created = store.create(&accounts_href, &payload).await?;
/// ```
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Read the representation at `href` (which may carry an expansion query)
    async fn fetch(&self, href: &str) -> Result<PropertyMap>;

    /// Create a resource by posting `payload` to the collection at `href`
    ///
    /// The returned representation carries the newly assigned href.
    async fn create(&self, href: &str, payload: &PropertyMap) -> Result<PropertyMap>;

    /// Send the changed fields of the resource at `href`
    ///
    /// The response may be the full updated representation or a partial one.
    async fn update(&self, href: &str, payload: &PropertyMap) -> Result<PropertyMap>;

    /// Delete the resource at `href`
    async fn delete(&self, href: &str) -> Result<()>;
}

/// Blocking external resource store
pub trait BlockingResourceStore: Send + Sync {
    /// Read the representation at `href`
    fn fetch(&self, href: &str) -> Result<PropertyMap>;

    /// Create a resource in the collection at `href`
    fn create(&self, href: &str, payload: &PropertyMap) -> Result<PropertyMap>;

    /// Send the changed fields of the resource at `href`
    fn update(&self, href: &str, payload: &PropertyMap) -> Result<PropertyMap>;

    /// Delete the resource at `href`
    fn delete(&self, href: &str) -> Result<()>;
}
