pub mod add_sheet;
pub mod confirm_dialog;
pub mod date_strip;
pub mod detail_modal;
pub mod header;
pub mod help_overlay;
pub mod quote_card;
pub mod status_row;
pub mod task_list;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — lays out the screen regions and stacks overlays
/// on top in their z-order.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Hit areas are rebuilt from scratch every frame
    app.slider_area = None;
    app.update_button = None;
    app.theme_toggle_area = None;
    app.sheet_area = None;
    app.detail_area = None;
    app.date_cells.clear();
    app.task_rows.clear();
    app.option_rows.clear();

    // Layout: header | date strip | quote card | task list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    date_strip::render_date_strip(frame, app, chunks[1]);
    quote_card::render_quote_card(frame, app, chunks[2]);
    task_list::render_task_list(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);

    // Overlays, bottom to top
    if app.detail_task.is_some() {
        detail_modal::render_detail_modal(frame, app, area);
    }
    if app.sheet.is_visible() {
        add_sheet::render_add_sheet(frame, app, area);
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
    if app.confirm.is_some() {
        confirm_dialog::render_confirm_dialog(frame, app, area);
    }
}

/// Word-wrap `text` into lines of at most `max_width` cells, prefixing every
/// line with `indent`.
pub(super) fn wrap_text(indent: &str, text: &str, max_width: usize) -> Vec<String> {
    let indent_len = indent.len();
    let mut lines = Vec::new();
    let mut current = indent.to_string();

    for word in text.split_whitespace() {
        let space = if current.len() == indent_len { 0 } else { 1 };
        if current.len() + space + word.len() > max_width && current.len() > indent_len {
            lines.push(current);
            current = indent.to_string();
        }
        if current.len() > indent_len {
            current.push(' ');
        }
        current.push_str(word);
    }
    if current.len() > indent_len || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// A fixed-size rect horizontally centered in `area` at the given top offset.
pub(super) fn centered_rect_at(width: u16, height: u16, top: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = (area.y + top).min(area.y + area.height.saturating_sub(height));
    Rect::new(
        x,
        y,
        width.min(area.width),
        height.min(area.height.saturating_sub(top)),
    )
}

/// A fixed-size rect centered in `area`.
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
