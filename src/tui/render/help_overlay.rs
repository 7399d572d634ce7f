use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect_fixed;

const BINDINGS: &[(&str, &str)] = &[
    ("j / k", "move between tasks"),
    ("Enter", "open task details"),
    ("Space / x", "toggle task completion"),
    ("h / l", "change the selected day"),
    ("drag", "move the progress slider"),
    ("u", "update progress"),
    ("a / +", "open the add sheet"),
    ("t", "switch light / dark theme"),
    ("?", "this help"),
    ("q", "quit"),
];

/// Render the key-binding reference overlay. Any key closes it.
pub fn render_help_overlay(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.card_background;

    let key_w = BINDINGS.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut lines: Vec<Line> = Vec::new();
    for (key, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:>width$}  ", key, width = key_w),
                Style::default()
                    .fg(theme.primary)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*action, Style::default().fg(theme.text_secondary).bg(bg)),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " press any key to close",
        Style::default().fg(theme.text_tertiary).bg(bg),
    )));

    let popup_w: u16 = 42.min(area.width.saturating_sub(4));
    let popup_h = ((lines.len() as u16) + 2).min(area.height);
    let overlay = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border).bg(bg))
        .title(Span::styled(
            " Keys ",
            Style::default()
                .fg(theme.text_primary)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        overlay,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn overlay_lists_the_core_bindings() {
        let mut app = sample_app();
        app.show_help = true;
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_help_overlay(frame, &mut app, area);
        });
        assert!(output.contains("Keys"));
        assert!(output.contains("open task details"));
        assert!(output.contains("update progress"));
        assert!(output.contains("switch light / dark theme"));
    }
}
