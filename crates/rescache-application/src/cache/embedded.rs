//! Splitting expanded responses into independently cached resources
//!
//! A fetched representation may inline fully expanded sub-resources
//! (custom data, a directory, a page of groups). Each one with its own href
//! is lifted out to be cached under its own key and region, and the parent
//! field is rewritten to a bare link so the parent entry never carries a
//! second, independently stale copy. The rule is re-applied to every lifted
//! resource, which covers deeper nesting.

use super::policy::CachePolicy;
use rescache_domain::constants::ITEMS_FIELD;
use rescache_domain::value_objects::{CacheKey, FieldValue, PropertyMap, ResourceType};
use serde_json::Value;
use tracing::debug;

/// A resource ready to be written to its region
#[derive(Debug, Clone, PartialEq)]
pub struct CacheableResource {
    /// Type deciding the region
    pub resource_type: ResourceType,
    /// Canonical key
    pub key: CacheKey,
    /// Representation with its own expansions already reduced to links
    pub value: PropertyMap,
}

/// Result of [`split_embedded`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitResource {
    /// The top-level representation with embedded resources reduced to
    /// links; `None` for a collection page, which is never cached itself
    pub primary: Option<PropertyMap>,
    /// Lifted sub-resources (and collection items) of cacheable types
    pub embedded: Vec<CacheableResource>,
}

/// Split `raw` (a representation of `resource_type`) into its primary entry
/// and the embedded resources to cache on their own.
///
/// Embedded resources of non-cacheable types are still reduced to links in
/// the primary, but are not returned for caching. Fields whose href cannot
/// be canonicalized or whose type cannot be inferred stay inline.
pub fn split_embedded(
    policy: &CachePolicy,
    resource_type: ResourceType,
    raw: &PropertyMap,
) -> SplitResource {
    let mut embedded = Vec::new();
    if resource_type == ResourceType::Collection {
        let collection_key = raw.href().and_then(|href| policy.canonical_key(href).ok());
        collect_items(policy, raw, collection_key.as_ref(), &mut embedded);
        return SplitResource {
            primary: None,
            embedded,
        };
    }
    let primary = reduce(policy, raw, &mut embedded);
    SplitResource {
        primary: Some(primary),
        embedded,
    }
}

/// Copy `raw`, lifting every embedded resource into `out`
fn reduce(policy: &CachePolicy, raw: &PropertyMap, out: &mut Vec<CacheableResource>) -> PropertyMap {
    raw.iter()
        .map(|(name, field)| {
            let reduced = match field {
                FieldValue::Map(nested) => lift(policy, name, nested, out)
                    .map(FieldValue::Link)
                    .unwrap_or_else(|| field.clone()),
                other => other.clone(),
            };
            (name.clone(), reduced)
        })
        .collect()
}

/// Lift one embedded map; returns the link that replaces it, if lifted
fn lift(
    policy: &CachePolicy,
    field_name: &str,
    nested: &PropertyMap,
    out: &mut Vec<CacheableResource>,
) -> Option<String> {
    let href = nested.href()?;
    let key = match policy.canonical_key(href) {
        Ok(key) => key,
        Err(e) => {
            debug!(field = field_name, error = %e, "embedded resource kept inline");
            return None;
        }
    };

    let resource_type = if nested.contains_key(ITEMS_FIELD) {
        ResourceType::Collection
    } else {
        ResourceType::from_field_name(field_name).or_else(|| ResourceType::from_href(key.url()))?
    };

    if resource_type == ResourceType::Collection {
        collect_items(policy, nested, Some(&key), out);
    } else {
        let value = reduce(policy, nested, out);
        if policy.is_cacheable(resource_type) {
            out.push(CacheableResource {
                resource_type,
                key,
                value,
            });
        }
    }
    Some(href.to_string())
}

/// Lift each item of a collection page
fn collect_items(
    policy: &CachePolicy,
    page: &PropertyMap,
    page_key: Option<&CacheKey>,
    out: &mut Vec<CacheableResource>,
) {
    let Some(FieldValue::Scalar(Value::Array(items))) = page.get(ITEMS_FIELD) else {
        return;
    };
    let page_item_type = page_key.and_then(|key| ResourceType::collection_item_type(key.url()));

    for item in items {
        let Ok(item) = PropertyMap::from_json(item.clone()) else {
            continue;
        };
        let Some(key) = item.href().and_then(|href| policy.canonical_key(href).ok()) else {
            continue;
        };
        let Some(item_type) = ResourceType::from_href(key.url()).or(page_item_type) else {
            continue;
        };
        let value = reduce(policy, &item, out);
        if policy.is_cacheable(item_type) {
            out.push(CacheableResource {
                resource_type: item_type,
                key,
                value,
            });
        }
    }
}
