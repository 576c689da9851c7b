//! Cached resource representation
//!
//! A resource is held as an ordered mapping from field name to a tagged
//! [`FieldValue`]. Link references (`{"href": ...}` with nothing else) are
//! kept distinct from nested maps so that expanded sub-resources can be
//! peeled off and replaced with bare links before caching.

use crate::constants::HREF_FIELD;
use crate::error::{Error, Result};
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A single field of a resource representation
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Any non-object JSON value (strings, numbers, booleans, null, arrays)
    Scalar(Value),
    /// A nested object, possibly a fully expanded sub-resource
    Map(PropertyMap),
    /// A bare reference to another resource
    Link(String),
}

impl FieldValue {
    /// Create a scalar field
    pub fn scalar<V: Into<Value>>(value: V) -> Self {
        Self::Scalar(value.into())
    }

    /// Create a link field pointing at `href`
    pub fn link<S: Into<String>>(href: S) -> Self {
        Self::Link(href.into())
    }

    /// Classify a JSON value
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(object) => {
                if object.len() == 1 {
                    if let Some(Value::String(href)) = object.get(HREF_FIELD) {
                        return Self::Link(href.clone());
                    }
                }
                Self::Map(PropertyMap::from_object(object))
            }
            other => Self::Scalar(other),
        }
    }

    /// Render back to JSON
    pub fn to_json(&self) -> Value {
        match self {
            Self::Scalar(value) => value.clone(),
            Self::Map(map) => map.to_json(),
            Self::Link(href) => {
                let mut object = Map::new();
                object.insert(HREF_FIELD.to_string(), Value::String(href.clone()));
                Value::Object(object)
            }
        }
    }

    /// The nested map, if this field is one
    pub fn as_map(&self) -> Option<&PropertyMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The link target, if this field is a link
    pub fn as_link(&self) -> Option<&str> {
        match self {
            Self::Link(href) => Some(href),
            _ => None,
        }
    }

    /// The scalar value, if this field is one
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None,
        }
    }
}

/// Field-name keyed resource representation
///
/// Values handed out by the cache are owned snapshots; updating a
/// cached resource always builds a new map (see [`PropertyMap::merged_with`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyMap(BTreeMap<String, FieldValue>);

impl PropertyMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON object
    pub fn from_object(object: Map<String, Value>) -> Self {
        object
            .into_iter()
            .map(|(name, value)| (name, FieldValue::from_json(value)))
            .collect()
    }

    /// Build from any JSON value, which must be an object
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(object) => Ok(Self::from_object(object)),
            other => Err(Error::invalid_argument(format!(
                "resource representation must be a JSON object, got: {other}"
            ))),
        }
    }

    /// Render as a JSON object
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(name, field)| (name.clone(), field.to_json()))
                .collect(),
        )
    }

    /// Look up a field
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Insert or replace a field, returning the previous value
    pub fn insert<S: Into<String>>(&mut self, name: S, value: FieldValue) -> Option<FieldValue> {
        self.0.insert(name.into(), value)
    }

    /// Builder-style insert
    pub fn with<S: Into<String>>(mut self, name: S, value: FieldValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Remove a field
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.0.remove(name)
    }

    /// Whether the field is present
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    /// The resource's own href, when present as a string field
    pub fn href(&self) -> Option<&str> {
        self.0
            .get(HREF_FIELD)
            .and_then(FieldValue::as_scalar)
            .and_then(Value::as_str)
    }

    /// Top-level merge of a (possibly partial) update into this snapshot.
    ///
    /// Fields present in `update` overwrite, fields absent from it survive.
    /// Nested maps are replaced wholesale, never deep-merged.
    pub fn merged_with(&self, update: &PropertyMap) -> PropertyMap {
        let mut merged = self.0.clone();
        for (name, field) in &update.0 {
            merged.insert(name.clone(), field.clone());
        }
        PropertyMap(merged)
    }
}

impl FromIterator<(String, FieldValue)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<String, FieldValue>> for PropertyMap {
    fn from(fields: BTreeMap<String, FieldValue>) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for PropertyMap {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json(value)
    }
}

impl From<PropertyMap> for Value {
    fn from(map: PropertyMap) -> Self {
        map.to_json()
    }
}

impl Serialize for PropertyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, field) in &self.0 {
            map.serialize_entry(name, &field.to_json())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PropertyMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_object(object))
    }
}
