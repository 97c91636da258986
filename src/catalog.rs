//! Toolbar catalog: the palette of field types a form can be built from

use crate::state::{FieldDescriptor, FieldKind, FieldOption};

/// One palette entry offered by the editor
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarItem {
    /// Stable key identifying the field type
    pub key: FieldKind,
    /// Human-readable name
    pub name: &'static str,
    /// Icon reference (Font Awesome class name)
    pub icon: &'static str,
    /// Default property bag for new fields of this type
    pub props: FieldDescriptor,
}

impl ToolbarItem {
    fn new(key: FieldKind, name: &'static str, icon: &'static str) -> Self {
        Self {
            props: FieldDescriptor::of_kind(key.clone()),
            key,
            name,
            icon,
        }
    }

    fn label(mut self, label: &str) -> Self {
        self.props.set("label", label);
        self
    }

    fn text(mut self, text: &str) -> Self {
        self.props.set("text", text);
        self
    }

    fn field_name(mut self, prefix: &str) -> Self {
        self.props.set("field_name", prefix);
        self
    }

    fn optional(mut self) -> Self {
        self.props.set("required", false);
        self
    }

    fn placeholder(mut self, placeholder: &str) -> Self {
        self.props.set("placeholder", placeholder);
        self
    }

    fn range(mut self, min: u64, max: u64) -> Self {
        self.props.set("min", min);
        self.props.set("max", max);
        self
    }

    fn options(mut self, stem: &str, label: &str) -> Self {
        let options: Vec<FieldOption> = (1..=2)
            .map(|n| FieldOption::new(&format!("{stem}{n}"), &format!("{label} {n}")))
            .collect();
        self.props.set_options(&options);
        self
    }

    /// Field name prefix from the default property bag
    pub fn field_name_prefix(&self) -> &str {
        self.props.field_name().unwrap_or("field")
    }

    /// Single-glyph stand-in for the icon in a terminal
    pub fn glyph(&self) -> &'static str {
        match self.key {
            FieldKind::Header => "H",
            FieldKind::TextInput => "T",
            FieldKind::NumberInput => "#",
            FieldKind::Textarea => "¶",
            FieldKind::Dropdown => "▾",
            FieldKind::Checkboxes => "☑",
            FieldKind::RadioButtons => "◉",
            FieldKind::FileUpload => "↑",
            FieldKind::EmailInput => "@",
            FieldKind::Other(_) => "?",
        }
    }

    /// Build a new field from the default bag, numbering its field name
    pub fn instantiate(&self, sequence: usize) -> FieldDescriptor {
        let mut field = self.props.clone();
        field.set("field_name", format!("{}_{sequence}", self.field_name_prefix()));
        field
    }
}

/// The fixed, ordered palette
pub fn toolbar_items() -> Vec<ToolbarItem> {
    vec![
        ToolbarItem::new(FieldKind::Header, "Header Text", "fa fa-header")
            .text("Header")
            .field_name("header_text"),
        ToolbarItem::new(FieldKind::TextInput, "Text Input", "fa fa-font")
            .label("Text Input")
            .field_name("text_input")
            .optional()
            .placeholder("Enter text"),
        ToolbarItem::new(FieldKind::NumberInput, "Number Input", "fa fa-hashtag")
            .label("Number Input")
            .field_name("number_input")
            .optional()
            .range(0, 100),
        ToolbarItem::new(FieldKind::Textarea, "Text Area", "fa fa-text-height")
            .label("Text Area")
            .field_name("textarea")
            .optional()
            .placeholder("Enter long text"),
        ToolbarItem::new(FieldKind::Dropdown, "Dropdown", "fa fa-caret-square-o-down")
            .label("Dropdown")
            .field_name("dropdown")
            .optional()
            .options("option", "Option"),
        ToolbarItem::new(FieldKind::Checkboxes, "Checkboxes", "fa fa-check-square-o")
            .label("Checkboxes")
            .field_name("checkboxes")
            .optional()
            .options("checkbox", "Checkbox"),
        ToolbarItem::new(FieldKind::RadioButtons, "Radio Buttons", "fa fa-dot-circle-o")
            .label("Radio Buttons")
            .field_name("radio_buttons")
            .optional()
            .options("radio", "Radio"),
        ToolbarItem::new(FieldKind::FileUpload, "File Upload", "fa fa-upload")
            .label("File Upload")
            .field_name("file_upload")
            .optional(),
        ToolbarItem::new(FieldKind::EmailInput, "Email Input", "fa fa-envelope")
            .label("Email")
            .field_name("email_input")
            .optional()
            .placeholder("Enter email address"),
    ]
}
