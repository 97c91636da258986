//! Dialog forms: field property editing and the import path prompt

use super::field::{FieldValue, FormField};
use crate::state::{FieldDescriptor, FieldKind, FieldOption};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Editor for the properties of one field in the form definition
#[derive(Debug, Clone)]
pub struct PropertyForm {
    /// Position of the edited field in the form definition
    pub target: usize,
    kind: FieldKind,
    fields: Vec<FormField>,
    pub active_field_index: usize,
}

impl PropertyForm {
    pub fn from_field(target: usize, field: &FieldDescriptor) -> Self {
        let kind = field.kind_or_text();
        let mut fields = Vec::new();

        if kind.is_static() {
            fields.push(FormField::text_with_value(
                "text",
                "Text",
                field.text().unwrap_or_default().to_string(),
            ));
        } else {
            fields.push(FormField::text_with_value(
                "label",
                "Label",
                field.label().unwrap_or_default().to_string(),
            ));
        }
        fields.push(FormField::text_with_value(
            "field_name",
            "Field Name",
            field.field_name().unwrap_or_default().to_string(),
        ));
        if !kind.is_static() {
            if kind.is_choice() {
                fields.push(FormField::text_with_value(
                    "options",
                    "Options (value=label; ...)",
                    format_options(&field.options()),
                ));
            } else {
                fields.push(FormField::text_with_value(
                    "placeholder",
                    "Placeholder",
                    field.placeholder().unwrap_or_default().to_string(),
                ));
            }
            fields.push(FormField::flag("required", "Required", field.is_required()));
        }

        Self {
            target,
            kind,
            fields,
            active_field_index: 0,
        }
    }

    pub fn title(&self) -> String {
        format!("Edit {}", self.kind)
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Copy `original` with the edited properties applied. Properties whose
    /// input was left as shown are not touched.
    pub fn apply(&self, original: &FieldDescriptor) -> FieldDescriptor {
        let mut field = original.clone();
        for input in &self.fields {
            let key = input.name.as_str();
            match key {
                "text" | "label" | "field_name" | "placeholder" => {
                    if input.as_text() == original.str_prop(key).unwrap_or_default() {
                        continue;
                    }
                    match input.non_empty_text() {
                        Some(text) => field.set(key, text),
                        None => field.remove(key),
                    }
                }
                "required" => {
                    if input.as_flag() != original.is_required() {
                        field.set(key, input.as_flag());
                    }
                }
                "options" => {
                    let existing = original.options();
                    if input.as_text() != format_options(&existing) {
                        field.set_options(&parse_options(input.as_text(), &existing));
                    }
                }
                _ => {}
            }
        }
        field
    }

    /// Whether the active input is the yes/no flag
    pub fn is_active_flag(&self) -> bool {
        self.fields
            .get(self.active_field_index)
            .is_some_and(|f| matches!(f.value, FieldValue::Flag(_)))
    }
}

impl Form for PropertyForm {
    fn field_count(&self) -> usize {
        self.fields.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len().saturating_sub(1));
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        &mut self.fields[self.active_field_index]
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}

/// `value=label` pairs separated by `; `
fn format_options(options: &[FieldOption]) -> String {
    options
        .iter()
        .map(|o| {
            if o.label.is_empty() || o.label == o.value {
                o.value.clone()
            } else {
                format!("{}={}", o.value, o.label)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse `value=label; ...`, keeping unmodelled properties of options whose
/// value is unchanged
fn parse_options(text: &str, existing: &[FieldOption]) -> Vec<FieldOption> {
    text.split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            let (value, label) = match item.split_once('=') {
                Some((value, label)) => (value.trim(), label.trim()),
                None => (item, item),
            };
            let mut option = existing
                .iter()
                .find(|o| o.value == value)
                .cloned()
                .unwrap_or_default();
            option.value = value.to_string();
            option.label = label.to_string();
            option
        })
        .collect()
}

/// Path entry for importing a form file
#[derive(Debug, Clone)]
pub struct PathPrompt {
    pub path: FormField,
}

impl PathPrompt {
    pub fn new(initial: String) -> Self {
        Self {
            path: FormField::text_with_value("path", "Path to .json file", initial),
        }
    }
}

impl Form for PathPrompt {
    fn field_count(&self) -> usize {
        1
    }
    fn active_field(&self) -> usize {
        0
    }
    fn set_active_field(&mut self, _index: usize) {}
    fn get_active_field_mut(&mut self) -> &mut FormField {
        &mut self.path
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        (index == 0).then_some(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::toolbar_items;
    use serde_json::json;

    fn type_text(form: &mut PropertyForm, text: &str) {
        let field = form.get_active_field_mut();
        field.clear();
        for c in text.chars() {
            field.push_char(c);
        }
    }

    mod property_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_header_has_text_and_name_only() {
            let header = toolbar_items()[0].instantiate(1);
            let form = PropertyForm::from_field(0, &header);
            let names: Vec<_> = form.fields().iter().map(|f| f.name.as_str()).collect();
            assert_eq!(names, vec!["text", "field_name"]);
            assert_eq!(form.fields()[0].as_text(), "Header");
        }

        #[test]
        fn test_text_input_fields() {
            let input = toolbar_items()[1].instantiate(1);
            let form = PropertyForm::from_field(2, &input);
            let names: Vec<_> = form.fields().iter().map(|f| f.name.as_str()).collect();
            assert_eq!(names, vec!["label", "field_name", "placeholder", "required"]);
            assert_eq!(form.target, 2);
            assert_eq!(form.title(), "Edit TextInput");
        }

        #[test]
        fn test_choice_shows_options() {
            let dropdown = toolbar_items()[4].instantiate(1);
            let form = PropertyForm::from_field(0, &dropdown);
            assert_eq!(
                form.get_field(2).unwrap().as_text(),
                "option1=Option 1; option2=Option 2"
            );
        }

        #[test]
        fn test_apply_edits() {
            let input = toolbar_items()[1].instantiate(1);
            let mut form = PropertyForm::from_field(0, &input);
            type_text(&mut form, "Full name");
            form.next_field();
            type_text(&mut form, "full_name");
            form.next_field();
            type_text(&mut form, "");
            form.next_field();
            assert!(form.is_active_flag());
            form.get_active_field_mut().push_char(' ');

            let edited = form.apply(&input);
            assert_eq!(edited.label(), Some("Full name"));
            assert_eq!(edited.field_name(), Some("full_name"));
            assert_eq!(edited.get("placeholder"), None);
            assert!(edited.is_required());
            assert_eq!(edited.kind(), input.kind());
        }

        #[test]
        fn test_apply_leaves_untouched_properties_verbatim() {
            let raw = json!({
                "type": "NumberInput",
                "label": "Age",
                "placeholder": null,
                "required": "true",
                "min": "0"
            });
            let field: FieldDescriptor = serde_json::from_value(raw.clone()).unwrap();
            let form = PropertyForm::from_field(0, &field);
            assert_eq!(serde_json::to_value(form.apply(&field)).unwrap(), raw);
        }

        #[test]
        fn test_apply_options_keeps_extra_properties() {
            let dropdown: FieldDescriptor = serde_json::from_value(json!({
                "type": "Dropdown",
                "options": [{"value": "a", "label": "A", "key": "k1"}]
            }))
            .unwrap();
            let mut form = PropertyForm::from_field(0, &dropdown);
            form.set_active_field(2);
            type_text(&mut form, "a=Alpha; b");

            let edited = form.apply(&dropdown);
            let options = edited.options();
            assert_eq!(options.len(), 2);
            assert_eq!(options[0].label, "Alpha");
            assert_eq!(options[0].extra.get("key"), Some(&json!("k1")));
            assert_eq!(options[1], FieldOption::new("b", "b"));
        }

        #[test]
        fn test_navigation_wraps() {
            let input = toolbar_items()[1].instantiate(1);
            let mut form = PropertyForm::from_field(0, &input);
            form.prev_field();
            assert_eq!(form.active_field(), 3);
            form.next_field();
            assert_eq!(form.active_field(), 0);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let input = toolbar_items()[1].instantiate(1);
            let mut form = PropertyForm::from_field(0, &input);
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 3);
        }
    }

    mod options_text {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_format_collapses_identical_label() {
            let options = vec![FieldOption::new("x", "x"), FieldOption::new("y", "Why")];
            assert_eq!(format_options(&options), "x; y=Why");
        }

        #[test]
        fn test_parse_skips_blank_items() {
            let parsed = parse_options(" a = A ;; ;b=B", &[]);
            assert_eq!(parsed, vec![FieldOption::new("a", "A"), FieldOption::new("b", "B")]);
        }
    }

    mod path_prompt {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_prompt_edits_path() {
            let mut prompt = PathPrompt::new("/tmp/".to_string());
            prompt.get_active_field_mut().push_char('f');
            assert_eq!(prompt.path.as_text(), "/tmp/f");
            prompt.next_field();
            assert_eq!(prompt.active_field(), 0);
            assert!(prompt.get_field(1).is_none());
        }
    }
}
