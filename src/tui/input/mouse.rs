use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::model::progress::{PROGRESS_MAX, PROGRESS_MIN};
use crate::tui::app::App;
use crate::tui::slider::{self, SliderDrag};

/// Mouse dispatch against the hit areas recorded during the last render.
pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            on_left_down(app, Position::new(mouse.column, mouse.row));
        }
        MouseEventKind::Drag(MouseButton::Left) => on_left_drag(app, mouse.column),
        MouseEventKind::Up(MouseButton::Left) => app.drag = None,
        _ => {}
    }
}

fn on_left_down(app: &mut App, pos: Position) {
    // Confirmation dialogs are key-driven; clicks elsewhere are swallowed
    if app.confirm.is_some() {
        return;
    }
    if app.show_help {
        app.show_help = false;
        return;
    }

    if app.sheet.is_visible() {
        if let Some(index) = hit_index(&app.option_rows, pos) {
            app.select_add_option(index);
        } else if !contains(app.sheet_area, pos) {
            // Backdrop tap starts the close sequence
            app.request_sheet_close();
        }
        return;
    }

    if app.detail_task.is_some() {
        if !contains(app.detail_area, pos) {
            app.close_detail();
        }
        return;
    }

    // Base screen
    if contains(app.theme_toggle_area, pos) {
        app.toggle_theme();
    } else if contains(app.update_button, pos) {
        app.update_progress();
    } else if let Some(area) = app.slider_area
        && area.contains(pos)
    {
        // Gesture start; the value only changes on subsequent move events
        app.drag = Some(SliderDrag {
            origin_col: pos.x,
            track_cells: area.width,
        });
    } else if let Some(day) = hit_index(&app.date_cells, pos) {
        app.select_day(day);
    } else if let Some((area, index)) = app
        .task_rows
        .iter()
        .find(|(area, _)| area.contains(pos))
        .copied()
    {
        app.task_cursor = index;
        // The rightmost cells of a row are the completion control
        if pos.x >= area.right().saturating_sub(3) {
            app.toggle_task_completion(index);
        } else {
            app.open_detail(index);
        }
    }
}

/// Continuous two-way binding: every drag-move reports a value, with the
/// displacement clamped into the track's travel range.
fn on_left_drag(app: &mut App, col: u16) {
    if let Some(drag) = app.drag {
        let displacement = drag.displacement(col);
        let value = slider::value_for_displacement(displacement, PROGRESS_MIN, PROGRESS_MAX);
        app.progress.set_pending(value);
        app.status_message = Some(format!("Progress {}% pending, press u to update", value));
    }
}

fn contains(area: Option<ratatui::layout::Rect>, pos: Position) -> bool {
    area.is_some_and(|a| a.contains(pos))
}

fn hit_index<T: Copy>(rows: &[(ratatui::layout::Rect, T)], pos: Position) -> Option<T> {
    rows.iter()
        .find(|(area, _)| area.contains(pos))
        .map(|(_, value)| *value)
}
