//! Editing surface state
//!
//! The editor never writes the store directly. Each operation builds the
//! complete next field list from the current snapshot and returns it as a
//! change notification, the same way an embedded builder widget reports its
//! changes.

use super::descriptor::FieldDescriptor;
use super::store::EditorPayload;
use crate::catalog::ToolbarItem;

/// Which pane of the editor has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorFocus {
    #[default]
    Palette,
    Canvas,
}

impl EditorFocus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Palette => Self::Canvas,
            Self::Canvas => Self::Palette,
        };
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub focus: EditorFocus,
    pub palette_index: usize,
    pub canvas_index: usize,
    /// Count of fields added from the palette, used to number field names
    added: usize,
}

fn notify(fields: Vec<FieldDescriptor>) -> EditorPayload {
    EditorPayload::Envelope { task_data: fields }
}

impl EditorState {
    pub fn move_selection_down(&mut self, palette_len: usize, canvas_len: usize) {
        let (index, max) = match self.focus {
            EditorFocus::Palette => (&mut self.palette_index, palette_len),
            EditorFocus::Canvas => (&mut self.canvas_index, canvas_len),
        };
        if *index + 1 < max {
            *index += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        let index = match self.focus {
            EditorFocus::Palette => &mut self.palette_index,
            EditorFocus::Canvas => &mut self.canvas_index,
        };
        *index = index.saturating_sub(1);
    }

    /// Keep the canvas selection inside a list of `len` fields
    pub fn clamp(&mut self, len: usize) {
        self.canvas_index = self.canvas_index.min(len.saturating_sub(1));
    }

    /// Insert a new field after the canvas selection (or at the end when the
    /// palette has focus) and select it
    pub fn add(&mut self, item: &ToolbarItem, fields: &[FieldDescriptor]) -> EditorPayload {
        self.added += 1;
        let position = match self.focus {
            EditorFocus::Canvas if !fields.is_empty() => self.canvas_index + 1,
            _ => fields.len(),
        };
        let mut next = fields.to_vec();
        next.insert(position, item.instantiate(self.added));
        self.canvas_index = position;
        notify(next)
    }

    /// Remove the selected field
    pub fn remove(&mut self, fields: &[FieldDescriptor]) -> Option<EditorPayload> {
        if self.canvas_index >= fields.len() {
            return None;
        }
        let mut next = fields.to_vec();
        next.remove(self.canvas_index);
        self.clamp(next.len());
        Some(notify(next))
    }

    /// Swap the selected field with the one above it
    pub fn move_up(&mut self, fields: &[FieldDescriptor]) -> Option<EditorPayload> {
        if self.canvas_index == 0 || self.canvas_index >= fields.len() {
            return None;
        }
        let mut next = fields.to_vec();
        next.swap(self.canvas_index, self.canvas_index - 1);
        self.canvas_index -= 1;
        Some(notify(next))
    }

    /// Swap the selected field with the one below it
    pub fn move_down(&mut self, fields: &[FieldDescriptor]) -> Option<EditorPayload> {
        if self.canvas_index + 1 >= fields.len() {
            return None;
        }
        let mut next = fields.to_vec();
        next.swap(self.canvas_index, self.canvas_index + 1);
        self.canvas_index += 1;
        Some(notify(next))
    }

    /// Replace the field at `index` with an edited copy
    pub fn replace(
        &self,
        fields: &[FieldDescriptor],
        index: usize,
        field: FieldDescriptor,
    ) -> Option<EditorPayload> {
        let mut next = fields.to_vec();
        *next.get_mut(index)? = field;
        Some(notify(next))
    }
}
