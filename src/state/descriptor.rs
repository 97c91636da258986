//! Field descriptors: the elements a form definition is made of

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Type tag of a form element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Header,
    TextInput,
    NumberInput,
    Textarea,
    Dropdown,
    Checkboxes,
    RadioButtons,
    FileUpload,
    EmailInput,
    /// A tag this builder has no palette entry for, kept so files round-trip
    Other(String),
}

impl FieldKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Header => "Header",
            Self::TextInput => "TextInput",
            Self::NumberInput => "NumberInput",
            Self::Textarea => "Textarea",
            Self::Dropdown => "Dropdown",
            Self::Checkboxes => "Checkboxes",
            Self::RadioButtons => "RadioButtons",
            Self::FileUpload => "FileUpload",
            Self::EmailInput => "EmailInput",
            Self::Other(tag) => tag,
        }
    }

    /// Kinds that carry a list of options
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Dropdown | Self::Checkboxes | Self::RadioButtons)
    }

    /// Kinds that only display text and collect no answer
    pub fn is_static(&self) -> bool {
        matches!(self, Self::Header)
    }
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Header" => Self::Header,
            "TextInput" => Self::TextInput,
            "NumberInput" => Self::NumberInput,
            "Textarea" => Self::Textarea,
            "Dropdown" => Self::Dropdown,
            "Checkboxes" => Self::Checkboxes,
            "RadioButtons" => Self::RadioButtons,
            "FileUpload" => Self::FileUpload,
            "EmailInput" => Self::EmailInput,
            _ => Self::Other(tag),
        }
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (value, label) pair offered by a choice field
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
    /// Properties of the option other than value and label
    pub extra: Map<String, Value>,
}

impl FieldOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            extra: Map::new(),
        }
    }

    /// Read an option leniently: scalar values and labels are taken as text,
    /// and a bare scalar stands for both
    pub fn from_value(raw: &Value) -> Self {
        match raw {
            Value::Object(map) => {
                let mut extra = map.clone();
                let value = extra.remove("value");
                let label = extra.remove("label");
                Self {
                    value: value.as_ref().and_then(scalar_text).unwrap_or_default(),
                    label: label.as_ref().and_then(scalar_text).unwrap_or_default(),
                    extra,
                }
            }
            other => {
                let text = scalar_text(other).unwrap_or_default();
                Self::new(&text, &text)
            }
        }
    }

    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("value".to_string(), Value::from(self.value.as_str()));
        map.insert("label".to_string(), Value::from(self.label.as_str()));
        map.extend(self.extra.clone());
        Value::Object(map)
    }

    /// Label to show, falling back to the value
    pub fn display(&self) -> &str {
        if self.label.is_empty() {
            &self.value
        } else {
            &self.label
        }
    }
}

/// Text of a scalar JSON value
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// One configured element of a form.
///
/// The record is kept as the JSON object it was read from. Typed accessors
/// read the properties leniently and never reject a record, so a record
/// serializes back to the same object plus its synthetic `uniqueId`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldDescriptor {
    props: Map<String, Value>,
}

const TYPE: &str = "type";
const UNIQUE_ID: &str = "uniqueId";

impl From<Map<String, Value>> for FieldDescriptor {
    fn from(props: Map<String, Value>) -> Self {
        Self { props }
    }
}

impl FieldDescriptor {
    /// Create an empty descriptor of the given kind
    pub fn of_kind(kind: FieldKind) -> Self {
        Self::default().with(TYPE, String::from(kind))
    }

    /// Builder form of [`FieldDescriptor::set`]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a property. An existing key keeps its position.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.props.insert(key.to_string(), value.into());
    }

    /// Remove a property, keeping the order of the others
    pub fn remove(&mut self, key: &str) {
        if self.props.contains_key(key) {
            self.props = std::mem::take(&mut self.props)
                .into_iter()
                .filter(|(k, _)| k != key)
                .collect();
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    /// String property; other JSON types read as absent
    pub fn str_prop(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(Value::as_str)
    }

    pub fn kind(&self) -> Option<FieldKind> {
        self.str_prop(TYPE).map(|tag| FieldKind::from(tag.to_string()))
    }

    /// Kind of the field, treating a missing tag as free text input
    pub fn kind_or_text(&self) -> FieldKind {
        self.kind().unwrap_or(FieldKind::TextInput)
    }

    /// Display text for header elements
    pub fn text(&self) -> Option<&str> {
        self.str_prop("text")
    }

    pub fn label(&self) -> Option<&str> {
        self.str_prop("label")
    }

    /// Submission key
    pub fn field_name(&self) -> Option<&str> {
        self.str_prop("field_name")
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.str_prop("placeholder")
    }

    /// Session-local bookkeeping tag, regenerated on every update and import
    pub fn unique_id(&self) -> Option<&str> {
        self.str_prop(UNIQUE_ID)
    }

    pub fn set_unique_id(&mut self, id: String) {
        self.set(UNIQUE_ID, id);
    }

    /// Label shown in lists: label, header text, field name, then the kind
    pub fn display_label(&self) -> String {
        self.label()
            .or(self.text())
            .or(self.field_name())
            .map(str::to_string)
            .unwrap_or_else(|| self.kind_or_text().to_string())
    }

    /// `true` or `"true"`; anything else is optional
    pub fn is_required(&self) -> bool {
        match self.props.get("required") {
            Some(Value::Bool(required)) => *required,
            Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    pub fn is_choice(&self) -> bool {
        self.kind().is_some_and(|kind| kind.is_choice())
    }

    /// Options of a choice field; a missing or non-array property reads as
    /// no options
    pub fn options(&self) -> Vec<FieldOption> {
        match self.props.get("options") {
            Some(Value::Array(items)) => items.iter().map(FieldOption::from_value).collect(),
            _ => Vec::new(),
        }
    }

    pub fn set_options(&mut self, options: &[FieldOption]) {
        let items = options.iter().map(FieldOption::to_value).collect();
        self.set("options", Value::Array(items));
    }

    /// Key used for this field's answer on submission
    pub fn submission_key(&self) -> Option<&str> {
        self.field_name().or(self.unique_id())
    }

    /// Copy of this descriptor without its synthetic identifier
    pub fn without_id(&self) -> Self {
        let mut copy = self.clone();
        copy.remove(UNIQUE_ID);
        copy
    }
}
