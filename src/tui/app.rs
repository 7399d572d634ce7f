use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::model::{
    AddOption, DateCell, Progress, Task, builtin_add_options, builtin_tasks, date,
    date_window,
};

use super::input;
use super::render;
use super::sheet::AddSheet;
use super::slider::SliderDrag;
use super::theme::Theme;

/// Shape of a confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmKind {
    /// Cancel/OK choice. Cancel aborts with no state change.
    Choice,
    /// OK-only notice.
    Notice,
}

/// A pending confirmation dialog. Blocking to the user, never to the system;
/// dismissing it is a pure state transition.
#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub title: String,
    pub message: String,
    pub kind: ConfirmKind,
}

/// Main application state
pub struct App {
    pub theme: Theme,
    pub should_quit: bool,
    /// Timestamp of the current frame, advanced by `tick`.
    pub now: Instant,

    // Static catalog, created once at startup
    pub tasks: Vec<Task>,
    pub add_options: Vec<AddOption>,
    pub dates: Vec<DateCell>,

    /// The single selected day in the date strip (purely visual)
    pub selected_day: u32,
    pub progress: Progress,

    // Task list navigation
    pub task_cursor: usize,
    pub task_scroll: usize,

    /// Detail overlay: hidden when `None`, shown for the task at this index
    pub detail_task: Option<usize>,
    /// Add-sheet overlay with its slide animation
    pub sheet: AddSheet,
    pub sheet_cursor: usize,
    pub confirm: Option<ConfirmState>,
    pub show_help: bool,
    pub status_message: Option<String>,

    /// In-flight slider drag, if any
    pub drag: Option<SliderDrag>,

    // Hit areas recorded during render for mouse dispatch
    pub slider_area: Option<Rect>,
    pub update_button: Option<Rect>,
    pub theme_toggle_area: Option<Rect>,
    pub sheet_area: Option<Rect>,
    pub detail_area: Option<Rect>,
    pub date_cells: Vec<(Rect, u32)>,
    pub task_rows: Vec<(Rect, usize)>,
    pub option_rows: Vec<(Rect, usize)>,
}

impl App {
    pub fn new(dark: bool) -> Self {
        App {
            theme: Theme::from_flag(dark),
            should_quit: false,
            now: Instant::now(),
            tasks: builtin_tasks(),
            add_options: builtin_add_options(),
            dates: date_window(),
            selected_day: date::DEFAULT_SELECTED_DAY,
            progress: Progress::new(66),
            task_cursor: 0,
            task_scroll: 0,
            detail_task: None,
            sheet: AddSheet::new(),
            sheet_cursor: 0,
            confirm: None,
            show_help: false,
            status_message: None,
            drag: None,
            slider_area: None,
            update_button: None,
            theme_toggle_area: None,
            sheet_area: None,
            detail_area: None,
            date_cells: Vec::new(),
            task_rows: Vec::new(),
            option_rows: Vec::new(),
        }
    }

    /// Advance time-driven state (sheet slide) to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        self.sheet.tick(now);
    }

    /// Flip the theme flag; every themed style derives from the new palette
    /// on the next frame.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn select_day(&mut self, day: u32) {
        if self.dates.iter().any(|cell| cell.day == day) {
            self.selected_day = day;
        }
    }

    /// The task the detail overlay is showing, if open.
    pub fn detail(&self) -> Option<&Task> {
        self.detail_task.and_then(|idx| self.tasks.get(idx))
    }

    pub fn open_detail(&mut self, index: usize) {
        if index < self.tasks.len() {
            self.detail_task = Some(index);
        }
    }

    pub fn close_detail(&mut self) {
        self.detail_task = None;
    }

    pub fn open_sheet(&mut self) {
        self.sheet_cursor = 0;
        self.sheet.open(self.now);
    }

    pub fn request_sheet_close(&mut self) {
        self.sheet.request_close(self.now);
    }

    /// An add-option was chosen: start the close slide, then raise the
    /// follow-up confirmation. Nothing is ever created.
    pub fn select_add_option(&mut self, index: usize) {
        let Some(option) = self.add_options.get(index) else {
            return;
        };
        let title = option.title.clone();
        self.request_sheet_close();
        self.confirm = Some(ConfirmState {
            message: format!("You selected: {}", title),
            title,
            kind: ConfirmKind::Choice,
        });
    }

    /// Copy pending progress into committed and raise the notice.
    pub fn update_progress(&mut self) {
        self.progress.commit();
        self.confirm = Some(ConfirmState {
            title: "Progress Updated".to_string(),
            message: format!("Progress set to {}%", self.progress.committed()),
            kind: ConfirmKind::Notice,
        });
    }

    /// The completion control only raises a notice; it never flips the
    /// task's `completed` flag. Observed source behavior, kept as-is.
    pub fn toggle_task_completion(&mut self, _index: usize) {
        self.confirm = Some(ConfirmState {
            title: "Task Updated".to_string(),
            message: "Task completion status changed".to_string(),
            kind: ConfirmKind::Notice,
        });
    }
}

/// Run the TUI application
pub fn run(dark: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(dark);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| render::render(frame, app))?;

        // Idle at a slow poll; tighten to an animation tick while a sheet
        // slide is in flight so the offset interpolation stays smooth.
        let timeout = if app.sheet.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(250)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tui::sheet::{SLIDE_DURATION, SheetPhase};

    #[test]
    fn selecting_a_day_marks_only_that_cell() {
        let mut app = App::new(false);
        assert_eq!(app.selected_day, 18);
        app.select_day(21);
        let selected: Vec<u32> = app
            .dates
            .iter()
            .filter(|cell| cell.day == app.selected_day)
            .map(|cell| cell.day)
            .collect();
        assert_eq!(selected, vec![21]);
    }

    #[test]
    fn selecting_a_day_outside_the_window_is_ignored() {
        let mut app = App::new(false);
        app.select_day(3);
        assert_eq!(app.selected_day, 18);
    }

    #[test]
    fn update_progress_commits_pending_value() {
        let mut app = App::new(false);
        assert_eq!(app.progress.committed(), 66);
        app.progress.set_pending(40);
        app.update_progress();
        assert_eq!(app.progress.committed(), 40);
        assert_eq!(app.progress.pending(), app.progress.committed());
        let confirm = app.confirm.expect("notice raised");
        assert_eq!(confirm.title, "Progress Updated");
        assert_eq!(confirm.message, "Progress set to 40%");
        assert_eq!(confirm.kind, ConfirmKind::Notice);
    }

    #[test]
    fn completion_toggle_never_mutates_the_task() {
        let mut app = App::new(false);
        let before: Vec<bool> = app.tasks.iter().map(|t| t.completed).collect();
        app.toggle_task_completion(0);
        app.toggle_task_completion(3);
        let after: Vec<bool> = app.tasks.iter().map(|t| t.completed).collect();
        assert_eq!(before, after);
        assert_eq!(app.confirm.unwrap().title, "Task Updated");
    }

    #[test]
    fn selecting_an_add_option_closes_sheet_before_confirming() {
        let mut app = App::new(false);
        app.open_sheet();
        app.tick(app.now + SLIDE_DURATION);
        assert_eq!(app.sheet.phase(), SheetPhase::Shown);

        app.select_add_option(1);
        // Close sequence started, confirmation raised on top of it
        assert_eq!(app.sheet.phase(), SheetPhase::Closing);
        let confirm = app.confirm.expect("confirmation raised");
        assert_eq!(confirm.title, "Recurring Task");
        assert_eq!(confirm.message, "You selected: Recurring Task");
        assert_eq!(confirm.kind, ConfirmKind::Choice);
    }

    #[test]
    fn detail_overlay_tracks_the_selected_task() {
        let mut app = App::new(false);
        assert!(app.detail().is_none());
        app.open_detail(2);
        assert_eq!(app.detail().unwrap().id, 3);
        app.close_detail();
        assert!(app.detail().is_none());
    }

    #[test]
    fn theme_toggle_round_trips() {
        let mut app = App::new(false);
        let light = app.theme.clone();
        app.toggle_theme();
        assert!(app.theme.dark);
        app.toggle_theme();
        assert_eq!(app.theme, light);
    }
}
