//! Form import/export pipeline
//!
//! Export turns the current form definition into a versioned JSON file.
//! Import reads such a file back, validates it, and hands the fields to the
//! store.

mod envelope;
mod export;
mod import;
mod source;

pub use envelope::{ExportEnvelope, SCHEMA_VERSION};
pub use export::{build_envelope, export_filename, export_to_dir, render_json};
pub use import::{ensure_json_path, parse_import, read_import};
pub use source::{FileSource, TokioFileSource};

#[cfg(test)]
pub use source::MockFileSource;
