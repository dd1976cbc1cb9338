//! # Hash Pair — Business + Full Digests of One Settings Object
//!
//! Composes the Normalizer (projections) with the Hasher (canonical bytes +
//! SHA-256) to produce the two digests drift detection compares.

use serde::{Deserialize, Serialize};

use crate::canonical::CanonicalBytes;
use crate::digest::{sha256_digest, SettingsDigest};
use crate::error::CanonicalError;
use crate::projection::{project_business, project_full, KeyPolicy};
use crate::settings::SettingsObject;

/// The two digests derived from one settings object.
///
/// `business` depends only on the tracked policy keys; `full` depends on
/// every key except the excluded volatile fields. The two move
/// independently: a noisy field can change the full digest while the
/// business digest stays put.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashPair {
    /// Digest over the tracked-keys projection.
    pub business: SettingsDigest,
    /// Digest over the whole object minus excluded keys.
    pub full: SettingsDigest,
}

/// Compute the business and full digests of a settings object.
///
/// Deterministic: repeated calls over equal settings (regardless of source
/// key insertion order) return equal pairs.
///
/// # Errors
///
/// Returns [`CanonicalError`] if projection serialization fails. The
/// projection types serialize infallibly in practice, so an error here
/// indicates a bug rather than a condition callers should handle.
pub fn compute_hash_pair(
    settings: &SettingsObject,
    policy: &KeyPolicy,
) -> Result<HashPair, CanonicalError> {
    let business = sha256_digest(&CanonicalBytes::new(&project_business(settings, policy))?);
    let full = sha256_digest(&CanonicalBytes::new(&project_full(settings, policy))?);
    Ok(HashPair { business, full })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> KeyPolicy {
        KeyPolicy::new(["whoCanJoin"], ["etag"])
    }

    #[test]
    fn hash_pair_deterministic() {
        let settings = SettingsObject::new()
            .with("whoCanJoin", "ALL_IN_DOMAIN_CAN_JOIN")
            .with("etag", "v1");
        let a = compute_hash_pair(&settings, &policy()).unwrap();
        let b = compute_hash_pair(&settings, &policy()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tracked_key_change_moves_both_digests() {
        let before = SettingsObject::new().with("whoCanJoin", "ALL_IN_DOMAIN_CAN_JOIN");
        let after = SettingsObject::new().with("whoCanJoin", "INVITED_CAN_JOIN");
        let a = compute_hash_pair(&before, &policy()).unwrap();
        let b = compute_hash_pair(&after, &policy()).unwrap();
        assert_ne!(a.business, b.business);
        assert_ne!(a.full, b.full);
    }

    #[test]
    fn untracked_key_change_moves_only_full_digest() {
        let before = SettingsObject::new()
            .with("whoCanJoin", "ALL_IN_DOMAIN_CAN_JOIN")
            .with("description", "old");
        let after = SettingsObject::new()
            .with("whoCanJoin", "ALL_IN_DOMAIN_CAN_JOIN")
            .with("description", "new");
        let a = compute_hash_pair(&before, &policy()).unwrap();
        let b = compute_hash_pair(&after, &policy()).unwrap();
        assert_eq!(a.business, b.business);
        assert_ne!(a.full, b.full);
    }

    #[test]
    fn excluded_key_change_moves_neither_digest() {
        let before = SettingsObject::new()
            .with("whoCanJoin", "ALL_IN_DOMAIN_CAN_JOIN")
            .with("etag", "v1");
        let after = SettingsObject::new()
            .with("whoCanJoin", "ALL_IN_DOMAIN_CAN_JOIN")
            .with("etag", "v2");
        let a = compute_hash_pair(&before, &policy()).unwrap();
        let b = compute_hash_pair(&after, &policy()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_settings_hash_cleanly() {
        let pair = compute_hash_pair(&SettingsObject::new(), &policy()).unwrap();
        // The business projection still carries the absent tracked key, so
        // the two digests cover different canonical bytes.
        assert_ne!(pair.business, pair.full);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::settings::SettingsValue;
    use proptest::prelude::*;

    fn settings_entries() -> impl Strategy<Value = Vec<(String, SettingsValue)>> {
        let value = prop_oneof![
            Just(SettingsValue::Null),
            any::<bool>().prop_map(SettingsValue::Bool),
            any::<i64>().prop_map(|n| SettingsValue::Number(n.into())),
            "[a-zA-Z0-9_]{0,20}".prop_map(SettingsValue::Text),
        ];
        prop::collection::vec(("[a-z]{1,8}", value), 0..12)
    }

    proptest! {
        /// Hashing is independent of source insertion order.
        #[test]
        fn insertion_order_independent(entries in settings_entries()) {
            let policy = KeyPolicy::new(["alpha", "beta"], ["etag"]);
            let forward: SettingsObject = entries.iter().cloned().collect();
            let reversed: SettingsObject = entries.iter().rev().cloned().collect();
            // Last write wins differs between orders when keys repeat, so
            // only compare when keys are unique.
            let unique: std::collections::BTreeSet<&String> =
                entries.iter().map(|(k, _)| k).collect();
            prop_assume!(unique.len() == entries.len());
            let a = compute_hash_pair(&forward, &policy).unwrap();
            let b = compute_hash_pair(&reversed, &policy).unwrap();
            prop_assert_eq!(a, b);
        }

        /// Equal digests for equal settings, across repeated computation.
        #[test]
        fn repeated_computation_stable(entries in settings_entries()) {
            let policy = KeyPolicy::new(["alpha"], ["etag"]);
            let settings: SettingsObject = entries.into_iter().collect();
            let a = compute_hash_pair(&settings, &policy).unwrap();
            let b = compute_hash_pair(&settings, &policy).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
