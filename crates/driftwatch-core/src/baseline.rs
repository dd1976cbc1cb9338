//! # Baseline — The Persisted Comparison State
//!
//! A baseline maps each entity to the hash pair computed on the previous
//! run. It is loaded once per run, compared against freshly computed pairs,
//! and wholly replaced at the end of the run — never merged field by field.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::hashpair::HashPair;
use crate::settings::EntityId;

/// Mapping from entity id to the hash pair recorded for it.
///
/// Serializes as a plain JSON object keyed by entity id. Iteration order is
/// lexicographic by id, which keeps persisted snapshots byte-stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Baseline(BTreeMap<EntityId, HashPair>);

impl Baseline {
    /// Create an empty baseline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the hash pair for an entity, returning any previous pair.
    pub fn insert(&mut self, id: EntityId, pair: HashPair) -> Option<HashPair> {
        self.0.insert(id, pair)
    }

    /// Look up the hash pair recorded for an entity.
    pub fn get(&self, id: &EntityId) -> Option<&HashPair> {
        self.0.get(id)
    }

    /// Whether the baseline holds an entry for the entity.
    pub fn contains(&self, id: &EntityId) -> bool {
        self.0.contains_key(id)
    }

    /// Number of entities recorded.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the baseline is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in lexicographic id order.
    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &HashPair)> {
        self.0.iter()
    }

    /// Iterate entity ids in lexicographic order.
    pub fn entity_ids(&self) -> impl Iterator<Item = &EntityId> {
        self.0.keys()
    }
}

impl FromIterator<(EntityId, HashPair)> for Baseline {
    fn from_iter<I: IntoIterator<Item = (EntityId, HashPair)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashpair::compute_hash_pair;
    use crate::projection::KeyPolicy;
    use crate::settings::SettingsObject;

    fn pair(seed: &str) -> HashPair {
        let settings = SettingsObject::new().with("seed", seed);
        compute_hash_pair(&settings, &KeyPolicy::default()).unwrap()
    }

    #[test]
    fn insert_and_get() {
        let mut baseline = Baseline::new();
        let id = EntityId::new("staff@example.com").unwrap();
        assert!(baseline.insert(id.clone(), pair("a")).is_none());
        assert_eq!(baseline.get(&id), Some(&pair("a")));
        assert_eq!(baseline.insert(id.clone(), pair("b")), Some(pair("a")));
    }

    #[test]
    fn serializes_as_object_keyed_by_id() {
        let baseline: Baseline = [(EntityId::new("a@x").unwrap(), pair("a"))]
            .into_iter()
            .collect();
        let json = serde_json::to_value(&baseline).unwrap();
        assert!(json.get("a@x").is_some());
        let decoded: Baseline = serde_json::from_value(json).unwrap();
        assert_eq!(baseline, decoded);
    }

    #[test]
    fn iteration_is_sorted_by_id() {
        let baseline: Baseline = [
            (EntityId::new("zeta@x").unwrap(), pair("z")),
            (EntityId::new("alpha@x").unwrap(), pair("a")),
        ]
        .into_iter()
        .collect();
        let ids: Vec<&str> = baseline.entity_ids().map(EntityId::as_str).collect();
        assert_eq!(ids, ["alpha@x", "zeta@x"]);
    }
}
