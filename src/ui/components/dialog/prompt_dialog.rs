//! Single-line input dialog

use super::base::centered_rect;
use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a titled prompt holding one text field
pub fn render_prompt_dialog(frame: &mut Frame, title: &str, field: &FormField) {
    let dialog_area = centered_rect(frame.area(), 64, 8);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hint
        ])
        .margin(1)
        .split(inner);

    crate::ui::forms::draw_field(frame, chunks[0], field, true);

    let hint = Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(":import  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(":cancel"),
    ]);
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}
