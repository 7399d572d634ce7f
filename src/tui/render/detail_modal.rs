use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::{centered_rect_at, wrap_text};

/// Render the task-detail modal over the base screen. Shown whenever a task
/// is selected; closed via Esc or a backdrop click.
pub fn render_detail_modal(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(task) = app.detail() else {
        return;
    };
    let theme = &app.theme;
    let bg = theme.card_background;
    let white = Color::Rgb(0xFF, 0xFF, 0xFF);

    let popup_w: u16 = 56.min(area.width.saturating_sub(4));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let text_style = Style::default().fg(theme.text_secondary).bg(bg);
    let bright_style = Style::default()
        .fg(theme.text_primary)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    // Icon block and title
    let mut first = true;
    for text in wrap_text("     ", &task.title, inner_w) {
        if first {
            first = false;
            let rest = text.trim_start().to_string();
            lines.push(Line::from(vec![
                Span::styled(" ", Style::default().bg(bg)),
                Span::styled(
                    format!(" {} ", task.icon.initial()),
                    Style::default().fg(white).bg(theme.primary),
                ),
                Span::styled(" ", Style::default().bg(bg)),
                Span::styled(rest, bright_style),
            ]));
        } else {
            lines.push(Line::from(Span::styled(text, bright_style)));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(" ⏰ {}", task.time),
        text_style,
    )));
    lines.push(Line::default());
    for text in wrap_text(" ", &task.description, inner_w) {
        lines.push(Line::from(Span::styled(text, text_style)));
    }
    lines.push(Line::default());

    // Tag pills
    let mut tag_spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];
    for tag in &task.tags {
        let style = theme.tag_style(tag);
        tag_spans.push(Span::styled(
            format!(" {} ", tag),
            Style::default().fg(style.text).bg(style.background),
        ));
        tag_spans.push(Span::styled(" ", Style::default().bg(bg)));
    }
    lines.push(Line::from(tag_spans));
    lines.push(Line::default());

    // Completion button: success-colored once completed
    let (label, button_bg) = if task.completed {
        ("[ Mark as Incomplete ]", theme.success)
    } else {
        ("[ Mark as Complete ]", theme.primary)
    };
    lines.push(Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            label,
            Style::default()
                .fg(white)
                .bg(button_bg)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        " c toggle   Esc close",
        Style::default().fg(theme.text_tertiary).bg(bg),
    )));

    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    // The mockup pins the detail card at 15% from the top
    let top = area.height / 7;
    let overlay = centered_rect_at(popup_w, popup_h, top, area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border).bg(bg))
        .title(Span::styled(" Task Details ", bright_style))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block).style(Style::default().bg(bg)), overlay);

    app.detail_area = Some(overlay);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn modal_shows_task_fields() {
        let mut app = sample_app();
        app.open_detail(1);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_detail_modal(frame, &mut app, area);
        });
        assert!(output.contains("Task Details"));
        assert!(output.contains("2.5 Hours Simran and Meditation"));
        assert!(output.contains("6:00 AM"));
        assert!(output.contains("Daily meditation and spiritual practice"));
        assert!(output.contains("[ Mark as Complete ]"));
    }

    #[test]
    fn completed_task_offers_the_inverse_action() {
        let mut app = sample_app();
        app.open_detail(0);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_detail_modal(frame, &mut app, area);
        });
        assert!(output.contains("[ Mark as Incomplete ]"));
    }

    #[test]
    fn modal_hit_area_is_recorded() {
        let mut app = sample_app();
        app.open_detail(2);
        render_to_string(TERM_W, TERM_H, |frame, area| {
            render_detail_modal(frame, &mut app, area);
        });
        assert!(app.detail_area.is_some());
    }
}
