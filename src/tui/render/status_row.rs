use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::fit_to_width;

/// Render the bottom status row: a transient message when one is set,
/// otherwise the standing key hints.
pub fn render_status_row(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let (text, fg) = match &app.status_message {
        Some(message) => (format!(" {}", message), theme.text_primary),
        None => (
            " q quit   t theme   a add   Enter details   ? help".to_string(),
            theme.text_tertiary,
        ),
    };
    // Full-width repaint so a longer previous message never lingers
    let text = fit_to_width(&text, area.width as usize);
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(fg).bg(theme.background)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn idle_row_shows_the_standing_hints() {
        let mut app = sample_app();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &mut app, area);
        });
        assert!(output.contains("q quit"));
        assert!(output.contains("? help"));
    }

    #[test]
    fn status_message_replaces_the_hints() {
        let mut app = sample_app();
        app.status_message = Some("Selected day 21".to_string());
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &mut app, area);
        });
        assert!(output.contains("Selected day 21"));
        assert!(!output.contains("q quit"));
    }
}
