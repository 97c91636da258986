//! Form definition store
//!
//! Holds the current ordered field list. Every write replaces the whole
//! sequence, so a snapshot handed out by [`FormStore::read`] is never seen
//! half-updated.

use super::descriptor::FieldDescriptor;
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Change notification shapes accepted from the editing surface
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EditorPayload {
    /// A bare field list
    Fields(Vec<FieldDescriptor>),
    /// An object wrapping the list in `task_data`
    Envelope { task_data: Vec<FieldDescriptor> },
}

impl EditorPayload {
    /// Normalize an external payload. Anything that is neither an array nor
    /// an object with a `task_data` array yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let list = match value {
            Value::Array(_) => value,
            Value::Object(map) => map.get("task_data").filter(|v| v.is_array())?,
            _ => return None,
        };
        Vec::<FieldDescriptor>::deserialize(list)
            .ok()
            .map(Self::Fields)
    }

    pub fn into_fields(self) -> Vec<FieldDescriptor> {
        match self {
            Self::Fields(fields) | Self::Envelope { task_data: fields } => fields,
        }
    }
}

/// Generation tag distinguishing where a batch of ids came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdOrigin {
    Update,
    Import,
}

impl IdOrigin {
    fn prefix(self) -> &'static str {
        match self {
            Self::Update => "field",
            Self::Import => "imported_field",
        }
    }
}

/// Synthetic identifier source: wall clock, per-store batch counter, index
#[derive(Debug, Default)]
pub struct IdGenerator {
    batch: u64,
}

impl IdGenerator {
    /// Stamp a batch in order. Ids are unique within the batch by index and
    /// across batches by the counter, whatever the clock resolution.
    pub fn stamp(&mut self, origin: IdOrigin, fields: &mut [FieldDescriptor]) {
        let millis = Utc::now().timestamp_millis();
        let batch = self.batch;
        self.batch = self.batch.wrapping_add(1);
        for (index, field) in fields.iter_mut().enumerate() {
            field.set_unique_id(format!("{}_{millis}_{batch}_{index}", origin.prefix()));
        }
    }
}

/// Owner of the current form definition
#[derive(Debug)]
pub struct FormStore {
    fields: Arc<[FieldDescriptor]>,
    ids: IdGenerator,
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            fields: Arc::from(Vec::<FieldDescriptor>::new()),
            ids: IdGenerator::default(),
        }
    }

    /// Apply a raw change notification. Returns false and keeps the current
    /// contents when the payload shape is not recognized.
    pub fn update(&mut self, raw: &Value) -> bool {
        match EditorPayload::from_value(raw) {
            Some(payload) => {
                self.apply(payload);
                true
            }
            None => {
                tracing::debug!("Ignoring unrecognized form update payload");
                false
            }
        }
    }

    /// Apply an already normalized change notification
    pub fn apply(&mut self, payload: EditorPayload) {
        self.replace(IdOrigin::Update, payload.into_fields());
    }

    /// Replace contents with fields restored from a file
    pub fn import(&mut self, fields: Vec<FieldDescriptor>) {
        self.replace(IdOrigin::Import, fields);
    }

    fn replace(&mut self, origin: IdOrigin, mut fields: Vec<FieldDescriptor>) {
        self.ids.stamp(origin, &mut fields);
        self.fields = Arc::from(fields);
    }

    /// Snapshot of the current field list
    pub fn read(&self) -> Arc<[FieldDescriptor]> {
        Arc::clone(&self.fields)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
