//! Import of a form definition from a JSON file

use super::source::FileSource;
use crate::error::{BuilderError, Result};
use crate::state::FieldDescriptor;
use serde_json::Value;
use std::path::Path;

/// The picker only accepts `.json` files
pub fn ensure_json_path(path: &Path) -> Result<()> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(())
    } else {
        Err(BuilderError::UnsupportedFile(path.to_path_buf()))
    }
}

/// Parse and validate an import document.
///
/// Only `fields` is required and it must be an array of objects. The
/// properties of each object are not checked. Other top-level keys are
/// ignored.
pub fn parse_import(text: &str) -> Result<Vec<FieldDescriptor>> {
    let document: Value = serde_json::from_str(text)?;

    let fields = document
        .get("fields")
        .ok_or_else(|| BuilderError::Validation("missing `fields`".to_string()))?
        .as_array()
        .ok_or_else(|| BuilderError::Validation("`fields` is not an array".to_string()))?;

    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            field
                .as_object()
                .cloned()
                .map(FieldDescriptor::from)
                .ok_or_else(|| {
                    BuilderError::Validation(format!("field {index} is not an object"))
                })
        })
        .collect()
}

/// Read the whole file through `source`, then parse and validate it
pub async fn read_import(source: &dyn FileSource, path: &Path) -> Result<Vec<FieldDescriptor>> {
    ensure_json_path(path)?;
    let text = source.read_to_string(path).await?;
    parse_import(&text)
}
