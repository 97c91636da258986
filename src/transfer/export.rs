//! Export of the current form definition to a JSON file

use super::envelope::ExportEnvelope;
use crate::error::{BuilderError, Result};
use crate::state::FieldDescriptor;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Wrap the fields in an envelope. Refuses an empty form.
pub fn build_envelope(fields: &[FieldDescriptor], now: DateTime<Utc>) -> Result<ExportEnvelope> {
    if fields.is_empty() {
        return Err(BuilderError::EmptyForm);
    }
    Ok(ExportEnvelope::new(fields.to_vec(), now))
}

/// Pretty JSON with two-space indentation
pub fn render_json(envelope: &ExportEnvelope) -> Result<String> {
    Ok(serde_json::to_string_pretty(envelope)?)
}

/// Download name with a time-derived suffix
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("form_configuration_{}.json", now.timestamp_millis())
}

/// Write the form into `dir` and return the written path.
///
/// Nothing is created on disk when the form is empty.
pub fn export_to_dir(fields: &[FieldDescriptor], dir: &Path, now: DateTime<Utc>) -> Result<PathBuf> {
    let envelope = build_envelope(fields, now)?;
    let content = render_json(&envelope)?;

    fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(now));
    fs::write(&path, content)?;

    tracing::info!(path = %path.display(), fields = fields.len(), "Exported form");
    Ok(path)
}
