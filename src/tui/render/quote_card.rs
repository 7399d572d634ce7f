use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::model::DAILY_QUOTE;
use crate::model::progress::{PROGRESS_MAX, PROGRESS_MIN};
use crate::tui::app::App;
use crate::tui::slider::{self, MAX_TRAVEL};
use crate::util::unicode::truncate_to_width;

/// Render the quote card: title, quote text, committed progress, the
/// draggable slider (pending value), and the update action.
pub fn render_quote_card(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let card_bg = theme.quote_background;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border).bg(card_bg))
        .title(Span::styled(
            " Today's Quote ",
            Style::default()
                .fg(theme.text_primary)
                .bg(card_bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(card_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width < 8 || inner.height < 4 {
        return;
    }

    let text_width = inner.width.saturating_sub(2) as usize;

    // Quote text
    let quote = truncate_to_width(DAILY_QUOTE, text_width);
    frame.render_widget(
        Paragraph::new(format!(" {}", quote))
            .style(Style::default().fg(theme.text_secondary).bg(card_bg)),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    // Committed progress
    frame.render_widget(
        Paragraph::new(format!(" Progress {}%", app.progress.committed()))
            .style(Style::default().fg(theme.primary).bg(card_bg)),
        Rect::new(inner.x, inner.y + 1, inner.width, 1),
    );

    // Slider track: filled up to the thumb in primary, rest in border color
    let track_cells = inner.width.saturating_sub(2);
    let travel = track_cells.saturating_sub(1) as f64;
    let thumb_cell = (slider::thumb_position(app.progress.pending(), PROGRESS_MIN, PROGRESS_MAX)
        / MAX_TRAVEL
        * travel)
        .round() as u16;

    let mut spans = vec![Span::styled(" ", Style::default().bg(card_bg))];
    for cell in 0..track_cells {
        let (glyph, fg) = if cell < thumb_cell {
            ("━", theme.primary)
        } else if cell == thumb_cell {
            ("●", theme.primary)
        } else {
            ("─", theme.border)
        };
        spans.push(Span::styled(glyph, Style::default().fg(fg).bg(card_bg)));
    }
    let slider_row = Rect::new(inner.x, inner.y + 2, inner.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(card_bg)),
        slider_row,
    );
    // Update action, centered
    let label = "[ Update Progress ]";
    let label_w = label.len() as u16;
    let button_x = inner.x + inner.width.saturating_sub(label_w) / 2;
    let button_area = Rect::new(button_x, inner.y + 3, label_w.min(inner.width), 1);
    frame.render_widget(
        Paragraph::new(label).style(
            Style::default()
                .fg(Color::Rgb(0xFF, 0xFF, 0xFF))
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        button_area,
    );

    if inner.height > 4 {
        frame.render_widget(
            Paragraph::new(" drag the slider, then u to update")
                .style(Style::default().fg(theme.text_tertiary).bg(card_bg)),
            Rect::new(inner.x, inner.y + 4, inner.width, 1),
        );
    }

    app.slider_area = Some(Rect::new(inner.x + 1, inner.y + 2, track_cells, 1));
    app.update_button = Some(button_area);
}
