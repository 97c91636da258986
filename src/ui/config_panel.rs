//! Current form configuration panel

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the form definition as JSON, as it would be exported
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let json = app.config_json();
    let content: Vec<Line> = json
        .lines()
        .map(|line| Line::from(highlight_json_line(line)))
        .collect();

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Current Form Configuration ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .scroll((app.state.scroll_offset as u16, 0));

    frame.render_widget(paragraph, area);
}

/// Color the key of a `"key": value` line
fn highlight_json_line(line: &str) -> Vec<Span<'_>> {
    let trimmed = line.trim_start();
    if let Some(colon) = trimmed.find("\": ") {
        if trimmed.starts_with('"') {
            let indent = &line[..line.len() - trimmed.len()];
            let (key, rest) = trimmed.split_at(colon + 1);
            return vec![
                Span::raw(indent),
                Span::styled(key, Style::default().fg(Color::Cyan)),
                Span::raw(rest),
            ];
        }
    }
    vec![Span::raw(line)]
}
