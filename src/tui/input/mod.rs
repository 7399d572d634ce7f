mod mouse;
mod navigate;
mod overlay;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};

use super::app::App;

/// Handle a key event. Overlays intercept input in stacking order:
/// confirmation dialog, help, detail modal, add sheet, then the base screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    if app.confirm.is_some() {
        overlay::handle_confirm(app, key);
        return;
    }
    if app.show_help {
        app.show_help = false;
        return;
    }
    if app.detail_task.is_some() {
        overlay::handle_detail(app, key);
        return;
    }
    if app.sheet.is_visible() {
        overlay::handle_sheet(app, key);
        return;
    }
    navigate::handle_navigate(app, key);
}

/// Handle a mouse event (cell taps, slider drag, backdrop dismissal).
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    mouse::handle_mouse(app, mouse);
}
