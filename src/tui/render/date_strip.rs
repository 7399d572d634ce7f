use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Width of one date cell in terminal cells.
const CELL_W: u16 = 5;

/// Render the horizontal date strip: one cell per day in the fixed window,
/// day name over day number, the selected day inverted onto the primary
/// color. Scrolls horizontally to keep the selection visible when the
/// terminal is narrow.
pub fn render_date_strip(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.height < 2 {
        return;
    }
    let theme = &app.theme;
    let bg = theme.background;

    let visible = (area.width / CELL_W) as usize;
    let count = app.dates.len();
    let selected_idx = app
        .dates
        .iter()
        .position(|cell| cell.day == app.selected_day)
        .unwrap_or(0);

    // Keep the selected cell visible, centered when scrolling is needed
    let start = if count <= visible {
        0
    } else {
        selected_idx
            .saturating_sub(visible / 2)
            .min(count - visible)
    };

    let mut name_spans: Vec<Span> = Vec::new();
    let mut num_spans: Vec<Span> = Vec::new();
    let mut cells: Vec<(Rect, u32)> = Vec::new();

    for (i, cell) in app.dates.iter().enumerate().skip(start).take(visible) {
        let selected = cell.day == app.selected_day;
        let cell_bg = if selected {
            theme.primary
        } else {
            theme.date_item_background
        };
        let name_fg = if selected {
            Color::Rgb(0xFF, 0xFF, 0xFF)
        } else {
            theme.text_tertiary
        };
        let num_fg = if selected {
            Color::Rgb(0xFF, 0xFF, 0xFF)
        } else {
            theme.text_primary
        };

        name_spans.push(Span::styled(
            format!("{:^width$}", cell.day_name, width = CELL_W as usize),
            Style::default().fg(name_fg).bg(cell_bg),
        ));
        num_spans.push(Span::styled(
            format!("{:^width$}", cell.day, width = CELL_W as usize),
            Style::default()
                .fg(num_fg)
                .bg(cell_bg)
                .add_modifier(Modifier::BOLD),
        ));

        let x = area.x + ((i - start) as u16) * CELL_W;
        cells.push((Rect::new(x, area.y, CELL_W, 2), cell.day));
    }

    let name_row = Rect::new(area.x, area.y, area.width, 1);
    let num_row = Rect::new(area.x, area.y + 1, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(name_spans)).style(Style::default().bg(bg)),
        name_row,
    );
    frame.render_widget(
        Paragraph::new(Line::from(num_spans)).style(Style::default().bg(bg)),
        num_row,
    );

    app.date_cells = cells;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn strip_shows_the_full_window_when_wide_enough() {
        let mut app = sample_app();
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_date_strip(frame, &mut app, area);
        });
        assert!(output.contains("Sun"));
        assert!(output.contains("Sat"));
        assert!(output.contains("15"));
        assert!(output.contains("28"));
        assert_eq!(app.date_cells.len(), 14);
    }

    #[test]
    fn narrow_strip_keeps_selection_visible() {
        let mut app = sample_app();
        app.select_day(28);
        let output = render_to_string(30, 3, |frame, area| {
            render_date_strip(frame, &mut app, area);
        });
        assert!(output.contains("28"));
        assert!(app.date_cells.iter().any(|(_, day)| *day == 28));
        // Only as many cells as fit are recorded
        assert_eq!(app.date_cells.len(), 6);
    }
}
