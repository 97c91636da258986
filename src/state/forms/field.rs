//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single input of a dialog form, with its label and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::text_with_value(name, label, String::new())
    }

    /// Create a new text field with initial value
    pub fn text_with_value(name: &str, label: &str, value: String) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(value),
            is_multiline: false,
        }
    }

    /// Create a new yes/no field
    pub fn flag(name: &str, label: &str, value: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Flag(value),
            is_multiline: false,
        }
    }

    /// Get the text value (returns empty string for flags)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Get the flag value (returns false for text fields)
    pub fn as_flag(&self) -> bool {
        match &self.value {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(_) => false,
        }
    }

    /// Trimmed text, or None when blank
    pub fn non_empty_text(&self) -> Option<String> {
        let text = self.as_text().trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Flag(b) => match c {
                'y' | 'Y' => *b = true,
                'n' | 'N' => *b = false,
                ' ' => *b = !*b,
                _ => {}
            },
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Flag(_) => {}
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Flag(b) => *b = false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(true) => "[x] yes".to_string(),
            FieldValue::Flag(false) => "[ ] no".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_editing() {
        let mut field = FormField::text("label", "Label");
        field.push_char('a');
        field.push_char('b');
        field.pop_char();
        assert_eq!(field.as_text(), "a");
        field.clear();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_flag_editing() {
        let mut field = FormField::flag("required", "Required", false);
        field.push_char(' ');
        assert!(field.as_flag());
        field.push_char('n');
        assert!(!field.as_flag());
        field.push_char('y');
        assert!(field.as_flag());
        field.pop_char();
        assert!(field.as_flag());
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_non_empty_text_trims() {
        assert_eq!(FormField::text_with_value("a", "A", "  ".into()).non_empty_text(), None);
        assert_eq!(
            FormField::text_with_value("a", "A", " x ".into()).non_empty_text(),
            Some("x".to_string())
        );
    }

    #[test]
    fn test_display_value() {
        assert_eq!(FormField::flag("r", "R", true).display_value(), "[x] yes");
        assert_eq!(FormField::flag("r", "R", false).display_value(), "[ ] no");
        assert_eq!(
            FormField::text_with_value("t", "T", "hi".into()).display_value(),
            "hi"
        );
    }
}
