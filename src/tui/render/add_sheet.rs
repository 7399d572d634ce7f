use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

/// Full height of the sheet when fully slid in: handle row plus two rows per
/// option and a padding row.
const SHEET_H: u16 = 10;

/// Render the bottom add sheet at its current slide offset. While a slide is
/// in flight only the portion that has entered the screen is drawn, so the
/// sheet visually rises from (and sinks past) the bottom edge.
pub fn render_add_sheet(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.card_background;

    let height = SHEET_H.min(area.height);
    let offset = app.sheet.offset_rows(height, app.now);
    let visible_h = height.saturating_sub(offset);
    if visible_h == 0 {
        return;
    }

    let sheet = Rect::new(
        area.x,
        area.y + area.height - visible_h,
        area.width,
        visible_h,
    );
    frame.render_widget(Clear, sheet);
    frame.render_widget(
        Paragraph::new("").style(Style::default().bg(bg)),
        sheet,
    );

    // Handle bar on the sheet's top row
    let handle = "━".repeat(8);
    let handle_pad = (area.width as usize).saturating_sub(8) / 2;
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" ".repeat(handle_pad), Style::default().bg(bg)),
            Span::styled(handle, Style::default().fg(theme.border).bg(bg)),
        ]))
        .style(Style::default().bg(bg)),
        Rect::new(sheet.x, sheet.y, sheet.width, 1),
    );

    let desc_width = (area.width as usize).saturating_sub(6);
    let mut rows: Vec<(Rect, usize)> = Vec::new();
    for (index, option) in app.add_options.iter().enumerate() {
        let y = sheet.y + 1 + (index as u16) * 2;
        if y + 1 >= sheet.y + sheet.height {
            break;
        }
        let is_cursor = index == app.sheet_cursor;
        let marker = if is_cursor { "▌" } else { " " };

        let title_line = Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.primary).bg(bg)),
            Span::styled(
                format!(" {} ", option.icon.glyph()),
                Style::default().fg(theme.icon_tint).bg(bg),
            ),
            Span::styled(
                option.title.clone(),
                Style::default()
                    .fg(theme.text_primary)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(title_line).style(Style::default().bg(bg)),
            Rect::new(sheet.x, y, sheet.width, 1),
        );

        let desc = truncate_to_width(&option.description, desc_width);
        let desc_line = Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.primary).bg(bg)),
            Span::styled("    ", Style::default().bg(bg)),
            Span::styled(desc, Style::default().fg(theme.text_secondary).bg(bg)),
        ]);
        frame.render_widget(
            Paragraph::new(desc_line).style(Style::default().bg(bg)),
            Rect::new(sheet.x, y + 1, sheet.width, 1),
        );

        rows.push((Rect::new(sheet.x, y, sheet.width, 2), index));
    }

    app.option_rows = rows;
    app.sheet_area = Some(sheet);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use crate::tui::sheet::SLIDE_DURATION;

    #[test]
    fn fully_open_sheet_lists_all_four_options() {
        let mut app = sample_app();
        app.open_sheet();
        app.tick(app.now + SLIDE_DURATION);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_add_sheet(frame, &mut app, area);
        });
        assert!(output.contains("Habit"));
        assert!(output.contains("Recurring Task"));
        assert!(output.contains("Goal of the Day"));
        assert!(output.contains("Single instance activity without tracking over time."));
        assert_eq!(app.option_rows.len(), 4);
    }

    #[test]
    fn opening_sheet_starts_below_the_screen() {
        let mut app = sample_app();
        app.open_sheet();
        // At the very first frame the sheet is still fully off-screen
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_add_sheet(frame, &mut app, area);
        });
        assert!(output.trim().is_empty());
        assert!(app.sheet_area.is_none());
    }

    #[test]
    fn partially_slid_sheet_clips_at_the_bottom() {
        let mut app = sample_app();
        app.open_sheet();
        let mid = app.now + SLIDE_DURATION / 2;
        app.tick(mid);
        render_to_string(TERM_W, TERM_H, |frame, area| {
            render_add_sheet(frame, &mut app, area);
        });
        let sheet = app.sheet_area.expect("partially visible");
        assert!(sheet.height < SHEET_H);
        assert!(sheet.height > 0);
        assert_eq!(sheet.y + sheet.height, TERM_H);
    }
}
