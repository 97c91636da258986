//! Dialog forms built from editable fields

mod field;
mod form_state;

pub use field::{FieldValue, FormField};
pub use form_state::{Form, PathPrompt, PropertyForm};
