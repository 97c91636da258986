//! Layout components (controls bar, status bar)

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::{
    COPY_SHORTCUT, EXPORT_SHORTCUT, IMPORT_SHORTCUT, PREVIEW_SHORTCUT, SAVE_SHORTCUT,
};
use crate::state::{EditorFocus, Mode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into controls bar, main content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Controls
            Constraint::Min(0),                // Main content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the Export / Import / Preview controls
pub fn draw_controls(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Export
            Constraint::Length(20), // Import
            Constraint::Length(20), // Preview / Edit
            Constraint::Min(0),     // Pending imports
        ])
        .split(area);

    let enabled = app.controls_enabled();
    render_button(frame, chunks[0], EXPORT_SHORTCUT, "Export JSON", enabled);
    render_button(frame, chunks[1], IMPORT_SHORTCUT, "Import JSON", true);
    render_button(
        frame,
        chunks[2],
        PREVIEW_SHORTCUT,
        app.state.mode.toggle_label(),
        enabled,
    );

    if app.state.pending_imports > 0 {
        let pending = Paragraph::new(format!(
            "\n  reading {} file(s)...",
            app.state.pending_imports
        ))
        .style(Style::default().fg(Color::Yellow));
        frame.render_widget(pending, chunks[3]);
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Field count
    let count = app.store.len();
    let count_style = if count == 0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };
    spans.push(Span::styled(format!(" {count} fields "), count_style));

    // Mode-specific hints
    spans.push(Span::styled(
        get_mode_hints(app.state.mode, app.state.editor.focus),
        Style::default().fg(Color::Gray),
    ));

    // Status message
    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current mode
fn get_mode_hints(mode: Mode, focus: EditorFocus) -> String {
    match (mode, focus) {
        (Mode::Edit, EditorFocus::Palette) => {
            "j/k:nav  Enter/a:add  Tab:canvas  PgUp/PgDn:scroll json  q:quit".to_string()
        }
        (Mode::Edit, EditorFocus::Canvas) => format!(
            "j/k:nav  Enter/e:edit  d:delete  J/K:move  a:add  {COPY_SHORTCUT}:copy json  Tab:palette"
        ),
        (Mode::Preview, _) => format!(
            "Tab:next  ←/→:choose  1-9:check  Enter/{SAVE_SHORTCUT}:submit  Esc:edit"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_controls_and_status() {
        let (controls, main, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(controls.height, BUTTON_HEIGHT);
        assert_eq!(status, Rect::new(0, 23, 80, 1));
        assert_eq!(main.height, 24 - BUTTON_HEIGHT - 1);
    }

    #[test]
    fn test_hints_follow_mode_and_focus() {
        assert!(get_mode_hints(Mode::Edit, EditorFocus::Palette).contains("add"));
        assert!(get_mode_hints(Mode::Edit, EditorFocus::Canvas).contains("d:delete"));
        assert!(get_mode_hints(Mode::Preview, EditorFocus::Canvas).contains("submit"));
    }
}
