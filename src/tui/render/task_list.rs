use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::util::unicode::{display_width, truncate_to_width};

/// Rows occupied by one task entry: title row plus meta row.
const ITEM_H: u16 = 2;

/// Render the scrollable task list. Each entry is two rows: icon block and
/// title with the completion control on the right, then time and tag pills.
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.height < ITEM_H {
        return;
    }

    let visible = (area.height / ITEM_H) as usize;
    let count = app.tasks.len();

    // Keep the cursor visible
    app.task_cursor = app.task_cursor.min(count.saturating_sub(1));
    if app.task_cursor < app.task_scroll {
        app.task_scroll = app.task_cursor;
    } else if app.task_cursor >= app.task_scroll + visible {
        app.task_scroll = app.task_cursor + 1 - visible;
    }

    let end = count.min(app.task_scroll + visible);
    for (slot, index) in (app.task_scroll..end).enumerate() {
        let y = area.y + (slot as u16) * ITEM_H;
        let item_area = Rect::new(area.x, y, area.width, ITEM_H);
        render_task_item(
            frame,
            &app.theme,
            &app.tasks[index],
            index == app.task_cursor,
            item_area,
        );
        app.task_rows.push((item_area, index));
    }
}

fn render_task_item(frame: &mut Frame, theme: &Theme, task: &Task, is_cursor: bool, area: Rect) {
    let bg = theme.background;
    let white = Color::Rgb(0xFF, 0xFF, 0xFF);

    let marker = if is_cursor { "▌" } else { " " };
    let marker_style = Style::default().fg(theme.primary).bg(bg);
    let icon_style = Style::default().fg(white).bg(theme.primary);
    let title_style = if is_cursor {
        Style::default()
            .fg(theme.text_primary)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_primary).bg(bg)
    };

    // Completion control, rightmost cells of the title row
    let (check, check_style) = if task.completed {
        ("✓", Style::default().fg(theme.success).bg(bg).add_modifier(Modifier::BOLD))
    } else {
        ("○", Style::default().fg(theme.border).bg(bg))
    };

    // Title row: marker, icon block, title, padding, checkbox
    let icon = format!(" {} ", task.icon.initial());
    let fixed = 1 + display_width(&icon) + 1 + 2; // marker + icon + gap + check gutter
    let title_width = (area.width as usize).saturating_sub(fixed + 1);
    let title = truncate_to_width(&task.title, title_width);
    let pad = title_width.saturating_sub(display_width(&title));

    let title_line = Line::from(vec![
        Span::styled(marker, marker_style),
        Span::styled(icon, icon_style),
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(title, title_style),
        Span::styled(" ".repeat(pad + 1), Style::default().bg(bg)),
        Span::styled(check, check_style),
        Span::styled(" ", Style::default().bg(bg)),
    ]);
    frame.render_widget(
        Paragraph::new(title_line).style(Style::default().bg(bg)),
        Rect::new(area.x, area.y, area.width, 1),
    );

    // Meta row: time, then tag pills
    let mut meta_spans = vec![
        Span::styled(marker, marker_style),
        Span::styled("    ", Style::default().bg(bg)),
        Span::styled(
            task.time.clone(),
            Style::default().fg(theme.text_secondary).bg(bg),
        ),
        Span::styled("  ", Style::default().bg(bg)),
    ];
    for tag in &task.tags {
        let style = theme.tag_style(tag);
        meta_spans.push(Span::styled(
            format!(" {} ", tag),
            Style::default().fg(style.text).bg(style.background),
        ));
        meta_spans.push(Span::styled(" ", Style::default().bg(bg)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(meta_spans)).style(Style::default().bg(bg)),
        Rect::new(area.x, area.y + 1, area.width, 1),
    );
}
