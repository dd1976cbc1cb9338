//! # Content Digest
//!
//! Defines `SettingsDigest`, the fixed-size digest over a canonical
//! projection, and the single digest computation path.
//!
//! ## Determinism Invariant
//!
//! `sha256_digest()` accepts only `&CanonicalBytes`, not raw `&[u8]`. This
//! compile-time constraint prevents any code path from computing a digest
//! over non-canonical bytes.
//!
//! Collisions are accepted as cryptographically negligible — the digest is
//! a change detector, not a security boundary.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;
use crate::error::ValidationError;

/// A SHA-256 digest over one canonical projection.
///
/// Produced exclusively from `CanonicalBytes` via [`sha256_digest()`].
/// Serializes as a lowercase hex string, which is how digests appear in
/// persisted baseline snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SettingsDigest([u8; 32]);

impl SettingsDigest {
    /// Construct a digest from raw bytes.
    ///
    /// Prefer [`sha256_digest()`] for computing digests from canonical bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Access the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a digest from a 64-character hex string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDigest`] if the string is not
    /// exactly 64 hex characters.
    pub fn parse_hex(s: &str) -> Result<Self, ValidationError> {
        if s.len() != 64 || !s.is_ascii() {
            return Err(ValidationError::InvalidDigest(s.to_string()));
        }
        let mut bytes = [0u8; 32];
        for (i, chunk) in s.as_bytes().chunks_exact(2).enumerate() {
            let pair = std::str::from_utf8(chunk)
                .map_err(|_| ValidationError::InvalidDigest(s.to_string()))?;
            bytes[i] = u8::from_str_radix(pair, 16)
                .map_err(|_| ValidationError::InvalidDigest(s.to_string()))?;
        }
        Ok(Self(bytes))
    }
}

impl std::fmt::Display for SettingsDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for SettingsDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SettingsDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(de::Error::custom)
    }
}

/// Compute a SHA-256 digest from canonical bytes.
///
/// This is the sole digest computation path. The function signature enforces
/// that only `CanonicalBytes` (produced through the canonicalization
/// pipeline) can be hashed.
pub fn sha256_digest(data: &CanonicalBytes) -> SettingsDigest {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    SettingsDigest::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_digest_deterministic() {
        let cb = CanonicalBytes::new(&serde_json::json!({"a": 1, "b": 2})).unwrap();
        let d1 = sha256_digest(&cb);
        let d2 = sha256_digest(&cb);
        assert_eq!(d1, d2);
    }

    #[test]
    fn different_inputs_different_digests() {
        let cb1 = CanonicalBytes::new(&serde_json::json!({"a": 1})).unwrap();
        let cb2 = CanonicalBytes::new(&serde_json::json!({"a": 2})).unwrap();
        assert_ne!(sha256_digest(&cb1), sha256_digest(&cb2));
    }

    #[test]
    fn hex_format() {
        let cb = CanonicalBytes::new(&serde_json::json!({"key": "value"})).unwrap();
        let hex = sha256_digest(&cb).to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn known_sha256_vector() {
        // SHA256 of the empty JSON object "{}" is a known value.
        let cb = CanonicalBytes::new(&serde_json::json!({})).unwrap();
        assert_eq!(cb.as_bytes(), b"{}");
        let digest = sha256_digest(&cb);
        assert_eq!(
            digest.to_hex(),
            "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
        );
    }

    #[test]
    fn parse_hex_round_trip() {
        let cb = CanonicalBytes::new(&serde_json::json!({"x": true})).unwrap();
        let digest = sha256_digest(&cb);
        let parsed = SettingsDigest::parse_hex(&digest.to_hex()).unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn parse_hex_rejects_bad_input() {
        assert!(SettingsDigest::parse_hex("abc").is_err());
        assert!(SettingsDigest::parse_hex(&"g".repeat(64)).is_err());
    }

    #[test]
    fn serde_round_trip_as_hex_string() {
        let cb = CanonicalBytes::new(&serde_json::json!({"k": 1})).unwrap();
        let digest = sha256_digest(&cb);
        let encoded = serde_json::to_string(&digest).unwrap();
        assert!(encoded.starts_with('"'));
        let decoded: SettingsDigest = serde_json::from_str(&encoded).unwrap();
        assert_eq!(digest, decoded);
    }
}
