//! Preview mode: the form as an end user would fill it in

use crate::app::App;
use crate::platform::SAVE_SHORTCUT;
use crate::state::{Answer, FieldKind, PreviewSlot};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the preview view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let preview = &app.state.preview;
    let mut lines = vec![];
    let mut active_line = 0;
    for (idx, slot) in preview.slots.iter().enumerate() {
        if idx == preview.active {
            active_line = lines.len();
        }
        lines.extend(slot_lines(slot, idx == preview.active));
        lines.push(Line::from(""));
    }

    // Keep the active field on screen
    let visible = chunks[0].height.saturating_sub(2) as usize;
    let scroll = active_line.saturating_sub(visible.saturating_sub(4));

    let form = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Form Preview ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0));
    frame.render_widget(form, chunks[0]);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled(" [Enter] ", Style::default().fg(Color::Cyan)),
        Span::raw("or "),
        Span::styled(SAVE_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(" to submit"),
    ]));
    frame.render_widget(hint, chunks[1]);
}

fn slot_lines(slot: &PreviewSlot, is_active: bool) -> Vec<Line<'static>> {
    let field = &slot.field;
    let prefix = if is_active { "▸ " } else { "  " };

    if field.kind_or_text() == FieldKind::Header {
        return vec![Line::from(Span::styled(
            field.display_label(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))];
    }

    let label_style = if is_active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let mut title = vec![
        Span::styled(prefix, Style::default().fg(Color::Cyan)),
        Span::styled(field.display_label(), label_style),
    ];
    if field.is_required() {
        title.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    let mut lines = vec![Line::from(title)];

    let options = field.options();
    match &slot.answer {
        Answer::None => {}
        Answer::Text(value) | Answer::Number(value) => {
            let content = if value.is_empty() {
                Span::styled(
                    field.placeholder().unwrap_or_default().to_string(),
                    Style::default().fg(Color::DarkGray),
                )
            } else {
                Span::raw(value.clone())
            };
            let cursor = if is_active { "█" } else { "" };
            lines.push(Line::from(vec![
                Span::raw("    "),
                content,
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ]));
        }
        Answer::Single(choice) => {
            let radio = field.kind_or_text() == FieldKind::RadioButtons;
            if radio {
                for (i, option) in options.iter().enumerate() {
                    let mark = if *choice == Some(i) { "(•)" } else { "( )" };
                    lines.push(option_line(mark, option.display()));
                }
            } else {
                let current = choice
                    .and_then(|i| options.get(i))
                    .map(|o| o.display().to_string())
                    .unwrap_or_else(|| "Select...".to_string());
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("◂ {current} ▸"), Style::default().fg(Color::White)),
                ]));
            }
        }
        Answer::Multi(checked) => {
            for (i, (option, on)) in options.iter().zip(checked).enumerate() {
                let mark = if *on { "[x]" } else { "[ ]" };
                lines.push(option_line(
                    mark,
                    &format!("{} {}", i + 1, option.display()),
                ));
            }
        }
    }
    lines
}

fn option_line(mark: &str, label: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(mark.to_string(), Style::default().fg(Color::Green)),
        Span::raw(format!(" {label}")),
    ])
}
