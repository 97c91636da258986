//! Read-only rendering of the form definition and answer collection

use super::descriptor::{FieldDescriptor, FieldKind};
use serde_json::{Map, Value};

/// Answer being collected for one field
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// Headers collect nothing
    None,
    Text(String),
    /// Digits, sign and decimal point only
    Number(String),
    Single(Option<usize>),
    Multi(Vec<bool>),
}

impl Answer {
    fn for_field(field: &FieldDescriptor) -> Self {
        match field.kind_or_text() {
            FieldKind::Header => Self::None,
            FieldKind::NumberInput => Self::Number(String::new()),
            FieldKind::Dropdown | FieldKind::RadioButtons => Self::Single(None),
            FieldKind::Checkboxes => Self::Multi(vec![false; field.options().len()]),
            _ => Self::Text(String::new()),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::None => false,
            Self::Text(s) | Self::Number(s) => s.trim().is_empty(),
            Self::Single(choice) => choice.is_none(),
            Self::Multi(checked) => !checked.iter().any(|c| *c),
        }
    }

    fn collects(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// One rendered field with its answer slot
#[derive(Debug, Clone)]
pub struct PreviewSlot {
    pub field: FieldDescriptor,
    pub answer: Answer,
}

impl PreviewSlot {
    fn to_json(&self) -> Value {
        let options = self.field.options();
        match &self.answer {
            Answer::None => Value::Null,
            Answer::Text(s) => Value::String(s.clone()),
            Answer::Number(s) => s
                .parse::<serde_json::Number>()
                .map(Value::Number)
                .unwrap_or_else(|_| Value::String(s.clone())),
            Answer::Single(choice) => choice
                .and_then(|i| options.get(i))
                .map(|o| Value::String(o.value.clone()))
                .unwrap_or(Value::Null),
            Answer::Multi(checked) => Value::Array(
                checked
                    .iter()
                    .zip(options)
                    .filter(|(c, _)| **c)
                    .map(|(_, o)| Value::String(o.value.clone()))
                    .collect(),
            ),
        }
    }
}

/// Answers for the preview surface, rebuilt whenever the form changes
#[derive(Debug, Clone, Default)]
pub struct PreviewForm {
    pub slots: Vec<PreviewSlot>,
    pub active: usize,
}

impl PreviewForm {
    pub fn from_fields(fields: &[FieldDescriptor]) -> Self {
        let slots = fields
            .iter()
            .map(|field| PreviewSlot {
                answer: Answer::for_field(field),
                field: field.clone(),
            })
            .collect();
        let mut form = Self { slots, active: 0 };
        form.active = form.first_input().unwrap_or(0);
        form
    }

    fn first_input(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.answer.collects())
    }

    /// Move to the next answerable field, wrapping around
    pub fn next_field(&mut self) {
        let len = self.slots.len();
        if let Some(next) = (1..=len)
            .map(|step| (self.active + step) % len)
            .find(|&i| self.slots[i].answer.collects())
        {
            self.active = next;
        }
    }

    /// Move to the previous answerable field, wrapping around
    pub fn prev_field(&mut self) {
        let len = self.slots.len();
        if let Some(prev) = (1..=len)
            .map(|step| (self.active + len - step) % len)
            .find(|&i| self.slots[i].answer.collects())
        {
            self.active = prev;
        }
    }

    fn active_slot_mut(&mut self) -> Option<&mut PreviewSlot> {
        self.slots.get_mut(self.active)
    }

    pub fn input_char(&mut self, c: char) {
        let Some(slot) = self.active_slot_mut() else {
            return;
        };
        match &mut slot.answer {
            Answer::Text(s) => s.push(c),
            Answer::Number(s) => {
                if c.is_ascii_digit() || (c == '-' && s.is_empty()) || (c == '.' && !s.contains('.'))
                {
                    s.push(c);
                }
            }
            Answer::Multi(checked) => {
                if let Some(n) = c.to_digit(10).filter(|n| *n > 0) {
                    if let Some(box_) = checked.get_mut(n as usize - 1) {
                        *box_ = !*box_;
                    }
                }
            }
            Answer::Single(_) | Answer::None => {}
        }
    }

    pub fn backspace(&mut self) {
        let Some(slot) = self.active_slot_mut() else {
            return;
        };
        match &mut slot.answer {
            Answer::Text(s) | Answer::Number(s) => {
                s.pop();
            }
            Answer::Single(choice) => *choice = None,
            Answer::Multi(_) | Answer::None => {}
        }
    }

    /// Step through the options of a single-choice field
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(slot) = self.active_slot_mut() else {
            return;
        };
        let count = slot.field.options().len();
        if let Answer::Single(choice) = &mut slot.answer {
            if count == 0 {
                return;
            }
            *choice = Some(match (*choice, forward) {
                (None, true) => 0,
                (None, false) => count - 1,
                (Some(i), true) => (i + 1) % count,
                (Some(i), false) => (i + count - 1) % count,
            });
        }
    }

    /// Collect answers keyed by field name, or the labels of required fields
    /// left empty
    pub fn submit(&self) -> Result<Map<String, Value>, Vec<String>> {
        let missing: Vec<String> = self
            .slots
            .iter()
            .filter(|s| s.field.is_required() && s.answer.is_empty())
            .map(|s| s.field.display_label())
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(self
            .slots
            .iter()
            .filter(|s| s.answer.collects())
            .filter_map(|s| Some((s.field.submission_key()?.to_string(), s.to_json())))
            .collect())
    }
}
