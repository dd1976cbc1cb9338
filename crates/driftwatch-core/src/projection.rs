//! # Projections — The Two Canonical Views of a Settings Object
//!
//! A settings object is hashed twice, through two deterministic projections:
//!
//! - **Business projection**: only the tracked policy keys, in lexicographic
//!   order. A key missing from the settings is projected as an explicit
//!   absence sentinel so that "key missing" and "key explicitly null" hash
//!   differently.
//! - **Full projection**: every key except the excluded volatile fields
//!   (revision tags and similar cache-control noise), in lexicographic order.
//!
//! Keys outside the tracked set can never affect the business projection;
//! keys in the excluded set can never affect either projection.

use std::collections::BTreeSet;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::settings::{SettingsObject, SettingsValue};

/// Serialized form of [`ProjectedValue::Absent`].
///
/// An object can never collide with a scalar settings value, so the
/// sentinel is unambiguous in canonical bytes.
const ABSENT_SENTINEL_KEY: &str = "__absent__";

/// The key sets that parameterize projection: a tracked allow-list for the
/// business projection and an exclusion set for the full projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPolicy {
    /// Policy-relevant keys. Only these feed the business hash.
    pub tracked: BTreeSet<String>,
    /// Volatile keys removed before computing the full hash.
    pub excluded: BTreeSet<String>,
}

impl KeyPolicy {
    /// Build a policy from tracked and excluded key lists.
    pub fn new<T, E>(tracked: T, excluded: E) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            tracked: tracked.into_iter().map(Into::into).collect(),
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the given key is in the tracked set.
    pub fn is_tracked(&self, key: &str) -> bool {
        self.tracked.contains(key)
    }

    /// Whether the given key is in the exclusion set.
    pub fn is_excluded(&self, key: &str) -> bool {
        self.excluded.contains(key)
    }
}

/// One slot in a projection: either the value found in the settings, or an
/// explicit marker that the key was absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectedValue {
    /// The key was not present in the settings object.
    Absent,
    /// The value found in the settings object (possibly an explicit null).
    Value(SettingsValue),
}

impl Serialize for ProjectedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(ABSENT_SENTINEL_KEY, &true)?;
                map.end()
            }
            Self::Value(v) => v.serialize(serializer),
        }
    }
}

/// An ordered mapping from key to projected value, the canonical input to
/// hashing. Iteration and serialization order is always lexicographic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Projection(std::collections::BTreeMap<String, ProjectedValue>);

impl Projection {
    /// Look up a projected value by key.
    pub fn get(&self, key: &str) -> Option<&ProjectedValue> {
        self.0.get(key)
    }

    /// Number of projected keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the projection holds no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ProjectedValue)> {
        self.0.iter()
    }
}

impl FromIterator<(String, ProjectedValue)> for Projection {
    fn from_iter<I: IntoIterator<Item = (String, ProjectedValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Project the tracked policy keys out of a settings object.
///
/// Every tracked key appears in the output: present keys carry their value
/// (explicit null included), missing keys carry [`ProjectedValue::Absent`].
/// An empty settings object yields a projection of all-absent tracked keys;
/// an empty tracked set yields an empty projection.
pub fn project_business(settings: &SettingsObject, policy: &KeyPolicy) -> Projection {
    policy
        .tracked
        .iter()
        .map(|key| {
            let slot = match settings.get(key) {
                Some(value) => ProjectedValue::Value(value.clone()),
                None => ProjectedValue::Absent,
            };
            (key.clone(), slot)
        })
        .collect()
}

/// Project a settings object minus its excluded volatile keys.
///
/// An empty settings object yields an empty projection; callers decide
/// whether that is meaningful.
pub fn project_full(settings: &SettingsObject, policy: &KeyPolicy) -> Projection {
    settings
        .iter()
        .filter(|(key, _)| !policy.is_excluded(key))
        .map(|(key, value)| (key.clone(), ProjectedValue::Value(value.clone())))
        .collect()
}
