//! Application state definitions

use super::editor::EditorState;
use super::forms::{PathPrompt, PropertyForm};
use super::preview::PreviewForm;
use crate::error::BuilderError;
use std::collections::VecDeque;

/// Which surface is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Edit,
    Preview,
}

impl Mode {
    /// Label of the toggle control while in this mode
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::Edit => "Preview Form",
            Self::Preview => "Edit Form",
        }
    }
}

/// Modal input currently capturing the keyboard
#[derive(Debug, Clone, Default)]
pub enum Overlay {
    #[default]
    None,
    ImportPrompt(PathPrompt),
    Properties(PropertyForm),
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub mode: Mode,
    pub editor: EditorState,
    pub preview: PreviewForm,
    pub overlay: Overlay,
    /// Error alerts waiting to be dismissed, oldest first
    pub errors: VecDeque<String>,
    /// Informational alert waiting to be dismissed
    pub notice: Option<String>,
    /// One-line feedback in the status bar
    pub status_message: Option<String>,
    /// Scroll offset of the configuration panel
    pub scroll_offset: usize,
    /// Imports started but not yet completed
    pub pending_imports: usize,
}

impl AppState {
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Dismiss the front-most alert. Errors are shown before notices.
    pub fn dismiss_alert(&mut self) -> bool {
        if self.errors.pop_front().is_some() {
            return true;
        }
        self.notice.take().is_some()
    }

    pub fn has_alert(&self) -> bool {
        !self.errors.is_empty() || self.notice.is_some()
    }

    /// Flip between editing and preview. Refused while the form is empty.
    pub fn toggle_mode(&mut self, field_count: usize) -> Result<Mode, BuilderError> {
        if field_count == 0 {
            return Err(BuilderError::EmptyPreview);
        }
        self.mode = match self.mode {
            Mode::Edit => Mode::Preview,
            Mode::Preview => Mode::Edit,
        };
        Ok(self.mode)
    }

    /// Fall back to editing when there is nothing left to preview
    pub fn sync_mode(&mut self, field_count: usize) {
        if field_count == 0 {
            self.mode = Mode::Edit;
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_edit() {
        let state = AppState::default();
        assert_eq!(state.mode, Mode::Edit);
        assert!(!state.has_alert());
    }

    #[test]
    fn test_toggle_refused_when_empty() {
        let mut state = AppState::default();
        assert!(matches!(state.toggle_mode(0), Err(BuilderError::EmptyPreview)));
        assert_eq!(state.mode, Mode::Edit);
    }

    #[test]
    fn test_double_toggle_restores_mode() {
        let mut state = AppState::default();
        assert_eq!(state.toggle_mode(2).unwrap(), Mode::Preview);
        assert_eq!(state.toggle_mode(2).unwrap(), Mode::Edit);
    }

    #[test]
    fn test_toggle_labels() {
        assert_eq!(Mode::Edit.toggle_label(), "Preview Form");
        assert_eq!(Mode::Preview.toggle_label(), "Edit Form");
    }

    #[test]
    fn test_sync_mode_leaves_preview_when_empty() {
        let mut state = AppState {
            mode: Mode::Preview,
            ..Default::default()
        };
        state.sync_mode(3);
        assert_eq!(state.mode, Mode::Preview);
        state.sync_mode(0);
        assert_eq!(state.mode, Mode::Edit);
    }

    #[test]
    fn test_alerts_dismiss_errors_first() {
        let mut state = AppState::default();
        state.notice = Some("Form imported successfully!".to_string());
        state.push_error("first".to_string());
        state.push_error("second".to_string());

        assert_eq!(state.current_error(), Some("first"));
        assert!(state.dismiss_alert());
        assert_eq!(state.current_error(), Some("second"));
        assert!(state.dismiss_alert());
        assert!(state.notice.is_some());
        assert!(state.dismiss_alert());
        assert!(!state.dismiss_alert());
    }

    #[test]
    fn test_scroll_saturates() {
        let mut state = AppState::default();
        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);
        state.scroll_down();
        assert_eq!(state.scroll_offset, 1);
    }
}
