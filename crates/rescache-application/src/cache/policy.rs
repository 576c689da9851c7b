//! Cacheability and key policy
//!
//! Decides what may enter the cache, derives canonical keys, and names the
//! entries a write invalidates in other regions.

use rescache_domain::constants::{ACCOUNT_FIELD, CUSTOM_DATA_SEGMENT};
use rescache_domain::error::Result;
use rescache_domain::value_objects::{CacheKey, FieldValue, PropertyMap, ResourceType};
use url::Url;

/// Static cacheability policy plus href canonicalization
#[derive(Debug, Clone, Default)]
pub struct CachePolicy {
    base_url: Option<Url>,
}

impl CachePolicy {
    /// Policy accepting only absolute hrefs
    pub fn new() -> Self {
        Self::default()
    }

    /// Qualify relative hrefs against `base_url`
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Base URL used for relative hrefs, if any
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Whether resources of this type may be cached.
    ///
    /// Collection pages, one-time tokens, login attempts and provider
    /// account results never are.
    pub fn is_cacheable(&self, resource_type: ResourceType) -> bool {
        !(resource_type == ResourceType::Collection || resource_type.is_ephemeral())
    }

    /// Canonical key for an href (absolute URI, query and fragment stripped)
    pub fn canonical_key(&self, href: &str) -> Result<CacheKey> {
        CacheKey::qualify(href, self.base_url.as_ref())
    }

    /// Entries in other regions made stale by creating or updating a
    /// resource of `resource_type` with the given response.
    ///
    /// Consuming an email-verification or password-reset token changes the
    /// target account, which the response links to (or names directly).
    pub fn invalidations_after_write(
        &self,
        resource_type: ResourceType,
        response: &PropertyMap,
    ) -> Vec<(ResourceType, CacheKey)> {
        if !matches!(
            resource_type,
            ResourceType::EmailVerificationToken | ResourceType::PasswordResetToken
        ) {
            return Vec::new();
        }

        let mut targets = Vec::new();
        let linked = response.get(ACCOUNT_FIELD).and_then(|field| match field {
            FieldValue::Link(href) => Some(href.as_str()),
            FieldValue::Map(map) => map.href(),
            FieldValue::Scalar(_) => None,
        });
        if let Some(key) = linked.and_then(|href| self.canonical_key(href).ok()) {
            targets.push((ResourceType::Account, key));
        }
        if let Some(key) = response.href().and_then(|href| self.canonical_key(href).ok()) {
            if ResourceType::from_href(key.url()) == Some(ResourceType::Account) {
                targets.push((ResourceType::Account, key));
            }
        }
        targets.dedup();
        targets
    }

    /// Entries in other regions made stale by deleting `key`.
    ///
    /// Deleting a single custom-data field (`…/customData/{field}`) changes
    /// the owning custom-data resource.
    pub fn invalidations_after_delete(&self, key: &CacheKey) -> Vec<(ResourceType, CacheKey)> {
        let Some(segments) = key.url().path_segments() else {
            return Vec::new();
        };
        let segments: Vec<&str> = segments.filter(|s| !s.is_empty()).collect();
        if segments.len() < 2 || segments[segments.len() - 2] != CUSTOM_DATA_SEGMENT {
            return Vec::new();
        }
        let mut parent = key.url().clone();
        if let Ok(mut path) = parent.path_segments_mut() {
            path.pop_if_empty().pop();
        }
        match CacheKey::parse(parent.as_str()) {
            Ok(parent_key) => vec![(ResourceType::CustomData, parent_key)],
            Err(_) => Vec::new(),
        }
    }
}
