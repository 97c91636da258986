//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Render a list that keeps the selected item visible.
///
/// `selected_index` is ignored when `highlight` is false, so an unfocused
/// list shows no cursor.
pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    list: List,
    selected_index: usize,
    highlight: bool,
) {
    let mut list_state = ListState::default().with_selected(highlight.then_some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}
