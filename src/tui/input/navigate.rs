use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::date;
use crate::tui::app::App;

/// Base-screen key handling: task list navigation, date strip selection,
/// theme toggle, overlay openers.
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }
        (KeyModifiers::NONE, KeyCode::Char('t')) => app.toggle_theme(),
        (KeyModifiers::NONE, KeyCode::Char('?')) | (_, KeyCode::F(1)) => {
            app.show_help = true;
        }
        (KeyModifiers::NONE, KeyCode::Char('a')) | (_, KeyCode::Char('+')) => {
            app.open_sheet();
        }
        (KeyModifiers::NONE, KeyCode::Char('u')) => app.update_progress(),

        // Task list cursor
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
            if app.task_cursor + 1 < app.tasks.len() {
                app.task_cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
            app.task_cursor = app.task_cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => app.task_cursor = 0,
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
            app.task_cursor = app.tasks.len().saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Enter) => {
            app.open_detail(app.task_cursor);
        }
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Char('x')) => {
            app.toggle_task_completion(app.task_cursor);
        }

        // Date strip selection
        (KeyModifiers::NONE, KeyCode::Char('h') | KeyCode::Left) => {
            if app.selected_day > date::WINDOW_START {
                app.select_day(app.selected_day - 1);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('l') | KeyCode::Right) => {
            if app.selected_day < date::WINDOW_END {
                app.select_day(app.selected_day + 1);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn cursor_stays_within_task_list() {
        let mut app = App::new(false);
        handle_navigate(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.task_cursor, 0);
        for _ in 0..20 {
            handle_navigate(&mut app, key(KeyCode::Char('j')));
        }
        assert_eq!(app.task_cursor, app.tasks.len() - 1);
    }

    #[test]
    fn date_selection_clamps_to_window() {
        let mut app = App::new(false);
        for _ in 0..30 {
            handle_navigate(&mut app, key(KeyCode::Left));
        }
        assert_eq!(app.selected_day, date::WINDOW_START);
        for _ in 0..30 {
            handle_navigate(&mut app, key(KeyCode::Right));
        }
        assert_eq!(app.selected_day, date::WINDOW_END);
    }

    #[test]
    fn enter_opens_detail_for_cursor_task() {
        let mut app = App::new(false);
        handle_navigate(&mut app, key(KeyCode::Char('j')));
        handle_navigate(&mut app, key(KeyCode::Enter));
        assert_eq!(app.detail().unwrap().id, 2);
    }

    #[test]
    fn a_opens_the_add_sheet() {
        let mut app = App::new(false);
        assert!(!app.sheet.is_visible());
        handle_navigate(&mut app, key(KeyCode::Char('a')));
        assert!(app.sheet.is_visible());
    }
}
