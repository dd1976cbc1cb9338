//! # Canonical Serialization — JCS-Compatible Byte Production
//!
//! This module defines `CanonicalBytes`, the sole construction path for bytes
//! used in digest computation across driftwatch.
//!
//! ## Determinism Invariant
//!
//! The `CanonicalBytes` newtype has a private inner field. The only way to
//! construct it is through `CanonicalBytes::new()`, which serializes via
//! RFC 8785 (JSON Canonicalization Scheme): sorted keys, compact separators,
//! deterministic number rendering. Any function computing a digest must
//! accept `&CanonicalBytes`, so no code path can hash non-canonical bytes.
//!
//! Two values with deeply equal content therefore always produce identical
//! bytes — and identical digests — regardless of the key insertion order of
//! the maps they came from.

use serde::Serialize;

use crate::error::CanonicalError;

/// Bytes produced exclusively by JCS-compatible canonicalization.
///
/// # Invariants
///
/// - The only constructor is `CanonicalBytes::new()`.
/// - Serialization uses sorted keys with compact separators (RFC 8785).
/// - The byte sequence is valid UTF-8 JSON.
///
/// These invariants are enforced by the constructor and cannot be violated
/// by downstream code because the inner `Vec<u8>` is private.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// This is the ONLY way to construct `CanonicalBytes`. All digest
    /// computation in the workspace must flow through this constructor.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalError::Serialization` if the value cannot be
    /// represented as JSON. For the projection types in this crate that is
    /// unreachable in practice; an error here indicates a bug, not an
    /// operational condition.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalError> {
        let value = serde_json::to_value(obj)?;
        let s = serde_jcs::to_string(&value)?;
        Ok(Self(s.into_bytes()))
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_bytes_sorted_keys() {
        let data = serde_json::json!({"z": 1, "m": 2, "a": 3});
        let cb = CanonicalBytes::new(&data).expect("should canonicalize");
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert_eq!(s, r#"{"a":3,"m":2,"z":1}"#);
    }

    #[test]
    fn canonical_bytes_compact_separators() {
        let data = serde_json::json!({"b": 2, "a": 1, "c": "hello"});
        let cb = CanonicalBytes::new(&data).expect("should canonicalize");
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert_eq!(s, r#"{"a":1,"b":2,"c":"hello"}"#);
    }

    #[test]
    fn canonical_bytes_nested() {
        let data = serde_json::json!({
            "outer": {"b": 2, "a": 1},
            "list": [3, 2, 1]
        });
        let cb = CanonicalBytes::new(&data).expect("should canonicalize");
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert_eq!(s, r#"{"list":[3,2,1],"outer":{"a":1,"b":2}}"#);
    }

    #[test]
    fn null_passthrough() {
        let data = serde_json::json!({"key": null});
        let cb = CanonicalBytes::new(&data).expect("null should pass through");
        assert_eq!(cb.as_bytes(), br#"{"key":null}"#);
    }

    #[test]
    fn bool_passthrough() {
        let data = serde_json::json!({"flag": true, "other": false});
        let cb = CanonicalBytes::new(&data).expect("bools should pass through");
        assert_eq!(cb.as_bytes(), br#"{"flag":true,"other":false}"#);
    }

    #[test]
    fn empty_object() {
        let data = serde_json::json!({});
        let cb = CanonicalBytes::new(&data).expect("empty object should work");
        assert_eq!(cb.as_bytes(), b"{}");
    }

    #[test]
    fn unicode_passthrough() {
        // RFC 8785 does not escape non-ASCII: UTF-8 passes through.
        let data = serde_json::json!({"name": "\u{00e9}\u{00e8}\u{00ea}"});
        let cb = CanonicalBytes::new(&data).expect("unicode should pass through");
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert!(s.contains('\u{00e9}'));
    }

    #[test]
    fn len_and_is_empty() {
        let data = serde_json::json!({"a": 1});
        let cb = CanonicalBytes::new(&data).unwrap();
        assert!(!cb.is_empty());
        assert!(cb.len() > 0);
    }
}
