//! # Settings Sources
//!
//! Upstream collaborators that hand the engine a list of entities with
//! their current settings. Fetching from a live directory API, a database,
//! or a file dump is the source's business; the engine only sees
//! [`EntityRecord`]s.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use driftwatch_core::{EntityId, SettingsObject};

/// Errors raised while fetching entities from a source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// I/O failure reading the upstream payload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The upstream payload is not decodable JSON.
    #[error("malformed entity payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The upstream payload decoded, but is not an array of entity records.
    #[error("expected a JSON array of entity records")]
    NotAnArray,

    /// Backend-specific failure (HTTP status, quota, ...).
    #[error("source backend error: {0}")]
    Backend(String),
}

/// One fetched entity: its id, the upstream revision tag if the source
/// exposes one, and its current settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// The entity this record describes.
    pub id: EntityId,
    /// Upstream revision tag, used for the cheap pre-check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// The entity's current settings.
    #[serde(default)]
    pub settings: SettingsObject,
}

/// Upstream boundary: produce the entity list for one sync run.
///
/// The engine preserves the returned order end to end: change records come
/// out in fetch order.
pub trait SettingsSource {
    /// Fetch all entities and their current settings.
    fn fetch(&mut self) -> Result<Vec<EntityRecord>, SourceError>;
}

/// A source over a JSON array of entity records, as produced by directory
/// export jobs: `[{"id": "...", "etag": "...", "settings": {...}}, ...]`.
///
/// Parsing is lenient in the same way the core is: records without a usable
/// id are skipped with a warning, and a record's non-object `settings`
/// degrades to the empty object.
#[derive(Debug, Clone)]
pub struct JsonSource {
    records: Vec<EntityRecord>,
}

impl JsonSource {
    /// Parse a source from a decoded JSON value.
    pub fn from_value(value: &Value) -> Result<Self, SourceError> {
        let Value::Array(items) = value else {
            return Err(SourceError::NotAnArray);
        };

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            let raw_id = item.get("id").and_then(Value::as_str).unwrap_or_default();
            let id = match EntityId::new(raw_id) {
                Ok(id) => id,
                Err(_) => {
                    tracing::warn!("entity record without a usable id, skipping");
                    continue;
                }
            };
            let etag = item
                .get("etag")
                .and_then(Value::as_str)
                .map(ToString::to_string);
            let settings =
                SettingsObject::from_json(item.get("settings").unwrap_or(&Value::Null));
            records.push(EntityRecord { id, etag, settings });
        }
        Ok(Self { records })
    }

    /// Parse a source from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SourceError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(&value)
    }

    /// Number of parsed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the source holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SettingsSource for JsonSource {
    fn fetch(&mut self) -> Result<Vec<EntityRecord>, SourceError> {
        Ok(self.records.clone())
    }
}
