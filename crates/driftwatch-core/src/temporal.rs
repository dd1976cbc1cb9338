//! # Temporal Types
//!
//! UTC-only timestamp type. All timestamps are stored in UTC with
//! second-level precision and a `Z` suffix in serialized form, so persisted
//! snapshots stay byte-stable under canonical serialization.

use chrono::{DateTime, Timelike, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// A UTC timestamp with second-level precision.
///
/// Serializes to ISO 8601 with `Z` suffix (e.g., `2026-01-15T12:00:00Z`).
/// Subsecond precision is truncated at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp representing the current UTC time.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating to seconds.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.with_nanosecond(0).unwrap_or(dt))
    }

    /// Parse a timestamp from an RFC 3339 string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimestamp`] if the string does not
    /// parse as RFC 3339.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let dt = DateTime::parse_from_rfc3339(value).map_err(|e| {
            ValidationError::InvalidTimestamp {
                value: value.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self::from_datetime(dt.with_timezone(&Utc)))
    }

    /// Access the underlying `chrono::DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Return the timestamp as an ISO 8601 string with Z suffix.
    pub fn to_canonical_string(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_string_has_z_suffix_and_seconds() {
        let ts = Timestamp::parse("2026-01-15T12:00:00.123456Z").unwrap();
        assert_eq!(ts.to_canonical_string(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn non_utc_offsets_are_converted() {
        let ts = Timestamp::parse("2026-01-15T17:00:00+05:00").unwrap();
        assert_eq!(ts.to_canonical_string(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Timestamp::parse("not-a-date").is_err());
    }

    #[test]
    fn serde_round_trip() {
        let ts = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        let encoded = serde_json::to_string(&ts).unwrap();
        assert_eq!(encoded, "\"2026-01-15T12:00:00Z\"");
        let decoded: Timestamp = serde_json::from_str(&encoded).unwrap();
        assert_eq!(ts, decoded);
    }
}
