//! # Settings Model
//!
//! The flat settings object that drift detection operates on, plus the
//! entity identifier newtype.
//!
//! ## Validation
//!
//! [`EntityId`] is validated to be non-empty at construction time — an
//! entity id keys the persisted baseline, and an empty key would make two
//! distinct entities indistinguishable.
//!
//! ## Leniency
//!
//! Upstream sources hand over arbitrary JSON. [`SettingsObject::from_json`]
//! degrades a non-object to the empty mapping and drops non-scalar values
//! rather than erroring; callers decide whether an empty object is
//! meaningful.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// A single scalar configuration value: null, boolean, number, or string.
///
/// The untagged representation means plain JSON settings objects
/// deserialize directly into the typed model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingsValue {
    /// An explicit null value, distinct from a missing key.
    Null,
    /// A boolean flag.
    Bool(bool),
    /// A numeric value (integer or decimal).
    Number(serde_json::Number),
    /// A string value.
    Text(String),
}

impl From<bool> for SettingsValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for SettingsValue {
    fn from(v: i64) -> Self {
        Self::Number(v.into())
    }
}

impl From<&str> for SettingsValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for SettingsValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// One entity's current configuration: a flat, ordered mapping from key
/// to scalar value.
///
/// Backed by a `BTreeMap`, so iteration order is always lexicographic and
/// the insertion order of the source never leaks into hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsObject(BTreeMap<String, SettingsValue>);

impl SettingsObject {
    /// Create an empty settings object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a settings object from arbitrary JSON, leniently.
    ///
    /// A non-object value degrades to the empty mapping. Nested objects and
    /// arrays inside an object are dropped; the model is flat by contract.
    pub fn from_json(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };
        let entries = map.iter().filter_map(|(k, v)| {
            let scalar = match v {
                Value::Null => SettingsValue::Null,
                Value::Bool(b) => SettingsValue::Bool(*b),
                Value::Number(n) => SettingsValue::Number(n.clone()),
                Value::String(s) => SettingsValue::Text(s.clone()),
                Value::Array(_) | Value::Object(_) => return None,
            };
            Some((k.clone(), scalar))
        });
        Self(entries.collect())
    }

    /// Insert a key/value pair, returning the previous value if present.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<SettingsValue>,
    ) -> Option<SettingsValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style insertion for concise construction.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<SettingsValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&SettingsValue> {
        self.0.get(key)
    }

    /// Whether the given key is present (even with an explicit null value).
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the object holds no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &SettingsValue)> {
        self.0.iter()
    }
}

impl FromIterator<(String, SettingsValue)> for SettingsObject {
    fn from_iter<I: IntoIterator<Item = (String, SettingsValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Identifier of one watched entity (e.g., a mailing list address).
///
/// # Validation
///
/// Must be a non-empty string. No further format restrictions are imposed
/// because entity naming varies across upstream directories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Create an entity identifier from a string, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyEntityId`] if the string is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::EmptyEntityId);
        }
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
