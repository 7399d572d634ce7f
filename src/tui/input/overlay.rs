use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, ConfirmKind};

/// Keys while a confirmation dialog is up. A choice dialog offers Cancel/OK;
/// cancelling aborts with no state change. A notice only offers OK.
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    let Some(confirm) = &app.confirm else {
        return;
    };
    match confirm.kind {
        ConfirmKind::Choice => match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                app.confirm = None;
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                app.confirm = None;
            }
            _ => {}
        },
        ConfirmKind::Notice => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                app.confirm = None;
            }
            _ => {}
        },
    }
}

/// Keys while the task-detail modal is shown.
pub(super) fn handle_detail(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_detail(),
        // Completion button: raises the notice, never mutates
        KeyCode::Enter | KeyCode::Char('c') => {
            if let Some(index) = app.detail_task {
                app.toggle_task_completion(index);
            }
        }
        _ => {}
    }
}

/// Keys while the add sheet is visible (including during its slides).
pub(super) fn handle_sheet(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => app.request_sheet_close(),
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
            if app.sheet_cursor + 1 < app.add_options.len() {
                app.sheet_cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
            app.sheet_cursor = app.sheet_cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Enter) => {
            app.select_add_option(app.sheet_cursor);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::ConfirmState;
    use crate::tui::sheet::SheetPhase;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn cancel_dismisses_choice_without_state_change() {
        let mut app = App::new(false);
        app.open_sheet();
        app.confirm = Some(ConfirmState {
            title: "Habit".into(),
            message: "You selected: Habit".into(),
            kind: ConfirmKind::Choice,
        });
        handle_confirm(&mut app, key(KeyCode::Esc));
        assert!(app.confirm.is_none());
        // Nothing else changed: sheet still on its way, no task mutated
        assert!(app.sheet.is_visible());
    }

    #[test]
    fn notice_dismisses_on_enter() {
        let mut app = App::new(false);
        app.update_progress();
        assert!(app.confirm.is_some());
        handle_confirm(&mut app, key(KeyCode::Enter));
        assert!(app.confirm.is_none());
    }

    #[test]
    fn esc_starts_sheet_close_sequence() {
        let mut app = App::new(false);
        app.open_sheet();
        handle_sheet(&mut app, key(KeyCode::Esc));
        assert_eq!(app.sheet.phase(), SheetPhase::Closing);
        // Still visible until the slide completes
        assert!(app.sheet.is_visible());
    }

    #[test]
    fn sheet_cursor_stays_within_options() {
        let mut app = App::new(false);
        app.open_sheet();
        for _ in 0..10 {
            handle_sheet(&mut app, key(KeyCode::Down));
        }
        assert_eq!(app.sheet_cursor, app.add_options.len() - 1);
        for _ in 0..10 {
            handle_sheet(&mut app, key(KeyCode::Up));
        }
        assert_eq!(app.sheet_cursor, 0);
    }

    #[test]
    fn detail_esc_closes_the_modal() {
        let mut app = App::new(false);
        app.open_detail(1);
        handle_detail(&mut app, key(KeyCode::Esc));
        assert!(app.detail().is_none());
    }

    #[test]
    fn detail_completion_button_raises_notice_only() {
        let mut app = App::new(false);
        app.open_detail(0);
        let completed_before = app.tasks[0].completed;
        handle_detail(&mut app, key(KeyCode::Char('c')));
        assert_eq!(app.tasks[0].completed, completed_before);
        assert_eq!(app.confirm.as_ref().unwrap().title, "Task Updated");
        // Modal stays open behind the notice
        assert!(app.detail().is_some());
    }
}
