use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::APP_NAME;
use crate::tui::app::App;
use crate::util::unicode::display_width;

/// Render the header: logo and app name on the left, theme toggle and inert
/// icon hints (search, calendar, help) on the right, separator underneath.
pub fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let logo_style = Style::default()
        .fg(ratatui::style::Color::Rgb(0xFF, 0xFF, 0xFF))
        .bg(theme.primary)
        .add_modifier(Modifier::BOLD);
    let name_style = Style::default()
        .fg(theme.text_primary)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let icon_style = Style::default().fg(theme.icon_tint).bg(bg);

    let toggle = if theme.dark { "[☾]" } else { "[☀]" };
    let icons = " ⌕ ▤ ? ";

    let left_width = 1 + 3 + 1 + display_width(APP_NAME);
    let right_width = display_width(toggle) + display_width(icons);
    let pad = (area.width as usize).saturating_sub(left_width + right_width);

    let line = Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(" W ", logo_style),
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(APP_NAME, name_style),
        Span::styled(" ".repeat(pad), Style::default().bg(bg)),
        Span::styled(toggle, icon_style),
        Span::styled(icons, icon_style),
    ]);

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);

    // Separator row
    if area.height > 1 {
        let sep = "─".repeat(area.width as usize);
        let sep_area = Rect::new(area.x, area.y + 1, area.width, 1);
        frame.render_widget(
            Paragraph::new(sep).style(Style::default().fg(theme.border).bg(bg)),
            sep_area,
        );
    }

    // Toggle glyph hit area
    let toggle_x = area.x + (left_width + pad) as u16;
    app.theme_toggle_area = Some(Rect::new(toggle_x, area.y, 3, 1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn header_shows_logo_and_app_name() {
        let mut app = sample_app();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &mut app, area);
        });
        assert!(output.contains("W"));
        assert!(output.contains("WingsFly"));
    }

    #[test]
    fn toggle_glyph_follows_the_flag() {
        let mut app = sample_app();
        let light = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &mut app, area);
        });
        assert!(light.contains("[☀]"));

        app.toggle_theme();
        let dark = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &mut app, area);
        });
        assert!(dark.contains("[☾]"));
    }

    #[test]
    fn toggle_hit_area_is_recorded() {
        let mut app = sample_app();
        render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &mut app, area);
        });
        let toggle = app.theme_toggle_area.expect("recorded");
        assert_eq!(toggle.height, 1);
        assert_eq!(toggle.width, 3);
    }
}
