//! # Differ
//!
//! Compares a freshly computed baseline against the previously stored one
//! and reports which entities changed in which projection.
//!
//! Entities present only in the old baseline (removed upstream) produce no
//! record — removal detection is a separate concern. The business and full
//! flags are independent: a noisy field can flip the full digest while the
//! tracked policy keys hold still.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::baseline::Baseline;
use crate::settings::EntityId;

/// Why an entity appears in the change set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// The entity has no entry in the old baseline.
    New,
    /// The entity's digests differ from the old baseline entry.
    Modified,
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::New => "new",
            Self::Modified => "modified",
        };
        f.write_str(s)
    }
}

/// One entity's change status, derived fresh each run and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// The entity that changed.
    pub entity_id: EntityId,
    /// Whether the entity is new or modified.
    pub kind: ChangeKind,
    /// The business digest moved (or the entity is new).
    pub business_changed: bool,
    /// The full digest moved (or the entity is new).
    pub full_changed: bool,
}

/// Diff two baselines, iterating the new baseline in its lexicographic
/// id order.
pub fn diff(old: &Baseline, new: &Baseline) -> Vec<ChangeRecord> {
    diff_in_order(old, new, new.entity_ids())
}

/// Diff two baselines in a caller-supplied entity order.
///
/// Output order follows `order`; map iteration order is not part of the
/// contract. Ids absent from the new baseline are skipped, as are duplicate
/// ids after their first occurrence. Entities unchanged in both projections
/// produce no record.
pub fn diff_in_order<'a, I>(old: &Baseline, new: &Baseline, order: I) -> Vec<ChangeRecord>
where
    I: IntoIterator<Item = &'a EntityId>,
{
    let mut seen: BTreeSet<&EntityId> = BTreeSet::new();
    let mut changes = Vec::new();

    for id in order {
        if !seen.insert(id) {
            continue;
        }
        let Some(fresh) = new.get(id) else {
            continue;
        };
        let record = match old.get(id) {
            None => ChangeRecord {
                entity_id: id.clone(),
                kind: ChangeKind::New,
                business_changed: true,
                full_changed: true,
            },
            Some(prior) => {
                let business_changed = fresh.business != prior.business;
                let full_changed = fresh.full != prior.full;
                if !business_changed && !full_changed {
                    continue;
                }
                ChangeRecord {
                    entity_id: id.clone(),
                    kind: ChangeKind::Modified,
                    business_changed,
                    full_changed,
                }
            }
        };
        changes.push(record);
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashpair::{compute_hash_pair, HashPair};
    use crate::projection::KeyPolicy;
    use crate::settings::SettingsObject;

    fn policy() -> KeyPolicy {
        KeyPolicy::new(["whoCanJoin"], ["etag"])
    }

    fn pair(who_can_join: &str, other: &str) -> HashPair {
        let settings = SettingsObject::new()
            .with("whoCanJoin", who_can_join)
            .with("other", other);
        compute_hash_pair(&settings, &policy()).unwrap()
    }

    fn id(s: &str) -> EntityId {
        EntityId::new(s).unwrap()
    }

    #[test]
    fn empty_old_baseline_marks_everything_new() {
        let new: Baseline = [(id("a@x"), pair("ALL", "x")), (id("b@x"), pair("ANY", "y"))]
            .into_iter()
            .collect();
        let changes = diff(&Baseline::new(), &new);
        assert_eq!(changes.len(), 2);
        assert!(changes
            .iter()
            .all(|c| c.kind == ChangeKind::New && c.business_changed && c.full_changed));
    }

    #[test]
    fn identical_baselines_yield_no_changes() {
        let baseline: Baseline = [(id("a@x"), pair("ALL", "x"))].into_iter().collect();
        assert!(diff(&baseline, &baseline.clone()).is_empty());
    }

    #[test]
    fn business_and_full_flags_move_independently() {
        let old: Baseline = [(id("a@x"), pair("ALL", "x"))].into_iter().collect();
        // Only the untracked "other" key changed: full moves, business holds.
        let new: Baseline = [(id("a@x"), pair("ALL", "y"))].into_iter().collect();
        let changes = diff(&old, &new);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::Modified);
        assert!(!changes[0].business_changed);
        assert!(changes[0].full_changed);
    }

    #[test]
    fn tracked_change_flips_both_flags() {
        let old: Baseline = [(id("a@x"), pair("ALL", "x"))].into_iter().collect();
        let new: Baseline = [(id("a@x"), pair("INVITED", "x"))].into_iter().collect();
        let changes = diff(&old, &new);
        assert_eq!(changes.len(), 1);
        assert!(changes[0].business_changed);
        assert!(changes[0].full_changed);
    }

    #[test]
    fn removed_entities_are_out_of_scope() {
        let old: Baseline = [(id("a@x"), pair("ALL", "x")), (id("gone@x"), pair("ALL", "x"))]
            .into_iter()
            .collect();
        let new: Baseline = [(id("a@x"), pair("ALL", "x"))].into_iter().collect();
        assert!(diff(&old, &new).is_empty());
    }

    #[test]
    fn output_follows_caller_order() {
        let new: Baseline = [
            (id("a@x"), pair("ALL", "x")),
            (id("b@x"), pair("ALL", "x")),
            (id("c@x"), pair("ALL", "x")),
        ]
        .into_iter()
        .collect();
        let order = [id("c@x"), id("a@x"), id("b@x")];
        let changes = diff_in_order(&Baseline::new(), &new, order.iter());
        let ids: Vec<&str> = changes.iter().map(|c| c.entity_id.as_str()).collect();
        assert_eq!(ids, ["c@x", "a@x", "b@x"]);
    }

    #[test]
    fn duplicate_and_unknown_ids_in_order_are_skipped() {
        let new: Baseline = [(id("a@x"), pair("ALL", "x"))].into_iter().collect();
        let order = [id("a@x"), id("a@x"), id("missing@x")];
        let changes = diff_in_order(&Baseline::new(), &new, order.iter());
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].entity_id.as_str(), "a@x");
    }
}
