//! Error types for form building, import and export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the form definition pipeline.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Export requested with no fields in the form.
    #[error("No form elements to export")]
    EmptyForm,

    /// Preview requested with no fields in the form.
    #[error("No form elements to preview")]
    EmptyPreview,

    /// Import content is not valid JSON.
    #[error("failed to parse form JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Import content is JSON but not a form configuration.
    #[error("invalid form configuration: {0}")]
    Validation(String),

    /// The import picker only accepts `.json` files.
    #[error("only .json files can be imported: {}", .0.display())]
    UnsupportedFile(PathBuf),

    /// Reading or writing a form file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for form pipeline operations.
pub type Result<T> = std::result::Result<T, BuilderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_message_matches_alert() {
        assert_eq!(
            BuilderError::EmptyForm.to_string(),
            "No form elements to export"
        );
    }

    #[test]
    fn test_empty_preview_has_its_own_message() {
        assert_eq!(
            BuilderError::EmptyPreview.to_string(),
            "No form elements to preview"
        );
    }

    #[test]
    fn test_parse_error_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: BuilderError = err.into();
        assert!(matches!(err, BuilderError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse form JSON"));
    }

    #[test]
    fn test_unsupported_file_shows_path() {
        let err = BuilderError::UnsupportedFile(PathBuf::from("form.txt"));
        assert!(err.to_string().contains("form.txt"));
    }
}
