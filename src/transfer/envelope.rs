//! Versioned wrapper written around an exported form

use crate::state::FieldDescriptor;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Schema version stamped on every export
pub const SCHEMA_VERSION: &str = "1.0.0";

/// The persisted form of a form definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope {
    pub id: String,
    pub version: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    pub fields: Vec<FieldDescriptor>,
}

impl ExportEnvelope {
    /// Wrap fields with a time-derived id and the current schema version
    pub fn new(fields: Vec<FieldDescriptor>, now: DateTime<Utc>) -> Self {
        Self {
            id: format!("form_{}", now.timestamp_millis()),
            version: SCHEMA_VERSION.to_string(),
            created_at: now,
            fields,
        }
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix
fn serialize_timestamp<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}
