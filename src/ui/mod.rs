//! UI module for rendering the TUI

mod components;
mod config_panel;
mod editor;
mod forms;
mod layout;
mod preview;
mod widgets;

use crate::app::App;
use crate::state::{Mode, Overlay};
use components::{render_error_dialog, render_info_dialog, render_prompt_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (controls_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_controls(frame, controls_area, app);

    match app.state.mode {
        Mode::Edit => editor::draw(frame, main_area, app),
        Mode::Preview => preview::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Modal input on top of the main view
    match &app.state.overlay {
        Overlay::None => {}
        Overlay::ImportPrompt(prompt) => render_prompt_dialog(frame, "Import JSON", &prompt.path),
        Overlay::Properties(form) => forms::draw_property_form(frame, form),
    }

    // Alerts on top of everything
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error, app.state.errors.len().saturating_sub(1));
    } else if let Some(notice) = &app.state.notice {
        render_info_dialog(frame, notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use serde_json::json;

    fn render(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_empty_editor_shows_palette_and_hint() {
        let app = App::new(TuiConfig::default());
        let text = screen_text(&render(&app));
        assert!(text.contains("Toolbox"));
        assert!(text.contains("Header Text"));
        assert!(text.contains("No form elements yet."));
        assert!(!text.contains("Current Form Configuration"));
    }

    #[test]
    fn test_fields_show_configuration_panel() {
        let mut app = App::new(TuiConfig::default());
        app.notify_editor_raw(&json!([{"type": "TextInput", "label": "Full name"}]));
        let text = screen_text(&render(&app));
        assert!(text.contains("Full name"));
        assert!(text.contains("Current Form Configuration"));
    }

    #[test]
    fn test_error_alert_is_drawn() {
        let mut app = App::new(TuiConfig::default());
        app.push_error("No form elements to export");
        let text = screen_text(&render(&app));
        assert!(text.contains("No form elements to export"));
    }

    #[test]
    fn test_preview_mode_draws_preview() {
        let mut app = App::new(TuiConfig::default());
        app.notify_editor_raw(&json!([{"type": "EmailInput", "label": "Contact"}]));
        app.toggle_preview();
        let text = screen_text(&render(&app));
        assert!(text.contains("Form Preview"));
        assert!(text.contains("Contact"));
        assert!(text.contains("Edit Form"));
    }
}
