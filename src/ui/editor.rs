//! Edit mode: toolbar palette, form canvas and configuration panel

use super::config_panel;
use super::widgets::render_scrollable_list;
use crate::app::App;
use crate::state::{EditorFocus, FieldDescriptor};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the editor view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let show_json = !app.store.is_empty() && app.config.show_config_panel();

    let mut constraints = vec![Constraint::Length(24), Constraint::Min(30)];
    if show_json {
        constraints.push(Constraint::Percentage(40));
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    draw_palette(frame, chunks[0], app);
    draw_canvas(frame, chunks[1], app);
    if show_json {
        config_panel::draw(frame, chunks[2], app);
    }
}

fn border_color(focused: bool) -> Color {
    if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Draw the toolbar palette (left side)
fn draw_palette(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state.editor.focus == EditorFocus::Palette;

    let items: Vec<ListItem> = app
        .palette()
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", item.glyph()), Style::default().fg(Color::Yellow)),
                Span::raw(item.name),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Toolbox ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color(focused))),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▸");

    render_scrollable_list(frame, area, list, app.state.editor.palette_index, focused);
}

/// Draw the form canvas (middle)
fn draw_canvas(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state.editor.focus == EditorFocus::Canvas;
    let fields = app.store.read();
    let block = Block::default()
        .title(format!(" Form ({}) ", fields.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(focused)));

    if fields.is_empty() {
        let message = Paragraph::new(
            "No form elements yet.\nSelect a field type in the toolbox and press Enter to add it.\nPress ^O to import a saved form.",
        )
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(message, area);
        return;
    }

    let items: Vec<ListItem> = fields.iter().map(canvas_line).map(ListItem::new).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▸");

    render_scrollable_list(frame, area, list, app.state.editor.canvas_index, focused);
}

fn canvas_line(field: &FieldDescriptor) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!("[{}]", field.kind_or_text()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" "),
        Span::styled(
            field.display_label(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if field.is_required() {
        spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    if let Some(name) = field.field_name() {
        spans.push(Span::styled(
            format!("  {name}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if field.is_choice() {
        spans.push(Span::styled(
            format!("  ({} options)", field.options().len()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}
