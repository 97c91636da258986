//! Field property editor overlay

use super::field_renderer::draw_field;
use crate::platform::SAVE_SHORTCUT;
use crate::state::{Form, PropertyForm};
use crate::ui::components::centered_rect;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the property editor centered over the editor
pub fn draw(frame: &mut Frame, form: &PropertyForm) {
    let field_count = form.field_count() as u16;
    // Inputs, hint line, margins and borders
    let height = field_count * 3 + 1 + 2 + 2;
    let area = centered_rect(frame.area(), 64, height);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", form.title()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(3); form.field_count()];
    constraints.push(Constraint::Length(1)); // Help text
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    for (index, field) in form.fields().iter().enumerate() {
        draw_field(frame, chunks[index], field, form.active_field() == index);
    }

    let flag_hint = if form.is_active_flag() {
        "  Space:toggle"
    } else {
        ""
    };
    let help = Line::from(vec![Span::styled(
        format!("Tab:next  Enter/{SAVE_SHORTCUT}:save  Esc:cancel{flag_hint}"),
        Style::default().fg(Color::DarkGray),
    )]);
    frame.render_widget(Paragraph::new(help), chunks[form.field_count()]);
}
