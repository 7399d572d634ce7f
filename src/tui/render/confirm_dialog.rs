use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::tui::app::{App, ConfirmKind};

use super::{centered_rect_fixed, wrap_text};

/// Render the confirmation dialog centered over everything else. Purely
/// informational; both buttons only dismiss it.
pub fn render_confirm_dialog(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(confirm) = &app.confirm else {
        return;
    };
    let theme = &app.theme;
    let bg = theme.card_background;
    let white = Color::Rgb(0xFF, 0xFF, 0xFF);

    let popup_w: u16 = 44.min(area.width.saturating_sub(4));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(" {}", confirm.title),
        Style::default()
            .fg(theme.text_primary)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    for text in wrap_text(" ", &confirm.message, inner_w) {
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(theme.text_secondary).bg(bg),
        )));
    }
    lines.push(Line::default());

    let button = |label: &str, button_bg: Color, button_fg: Color| {
        Span::styled(
            label.to_string(),
            Style::default()
                .fg(button_fg)
                .bg(button_bg)
                .add_modifier(Modifier::BOLD),
        )
    };
    let gap = Span::styled("   ", Style::default().bg(bg));
    match confirm.kind {
        ConfirmKind::Choice => {
            lines.push(Line::from(vec![
                Span::styled(" ", Style::default().bg(bg)),
                button("[ Cancel ]", theme.date_item_background, theme.text_primary),
                gap,
                button("[ OK ]", theme.primary, white),
            ]));
            lines.push(Line::from(Span::styled(
                " Enter OK   Esc cancel",
                Style::default().fg(theme.text_tertiary).bg(bg),
            )));
        }
        ConfirmKind::Notice => {
            lines.push(Line::from(vec![
                Span::styled(" ", Style::default().bg(bg)),
                button("[ OK ]", theme.primary, white),
            ]));
            lines.push(Line::from(Span::styled(
                " Enter dismiss",
                Style::default().fg(theme.text_tertiary).bg(bg),
            )));
        }
    }

    let popup_h = ((lines.len() as u16) + 2).min(area.height);
    let overlay = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border).bg(bg))
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
    fn choice_dialog_offers_cancel_and_ok() {
        let mut app = sample_app();
        app.select_add_option(0);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_dialog(frame, &mut app, area);
        });
        assert!(output.contains("Habit"));
        assert!(output.contains("You selected: Habit"));
        assert!(output.contains("[ Cancel ]"));
        assert!(output.contains("[ OK ]"));
    }

    #[test]
    fn notice_dialog_offers_only_ok() {
        let mut app = sample_app();
        app.update_progress();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_dialog(frame, &mut app, area);
        });
        assert!(output.contains("Progress Updated"));
        assert!(output.contains("Progress set to 66%"));
        assert!(output.contains("[ OK ]"));
        assert!(!output.contains("[ Cancel ]"));
    }
}
