use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the task list for the active filter. Takes `&mut App` because the
/// scroll offset is adjusted here, where the viewport height is known.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    app.clamp_cursor();

    let height = area.height as usize;
    let len = app.visible_len();

    // Keep the viewport filled, even when the area has zero rows; the
    // offset may be stale from before a deletion or resize
    if app.scroll_offset + height > len {
        app.scroll_offset = len.saturating_sub(height);
    }
    // Keep the cursor inside the viewport
    if height > 0 {
        if app.cursor < app.scroll_offset {
            app.scroll_offset = app.cursor;
        } else if app.cursor >= app.scroll_offset + height {
            app.scroll_offset = app.cursor - height + 1;
        }
    }
    let scroll = app.scroll_offset;

    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let tasks = app.list.visible_tasks();

    if tasks.is_empty() {
        render_empty_state(frame, app, area);
        return;
    }

    let end = (scroll + height).min(tasks.len());
    let mut lines: Vec<Line> = Vec::new();

    for (task, idx) in tasks[scroll..end].iter().zip(scroll..end) {
        let is_cursor = idx == app.cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let mut spans: Vec<Span> = Vec::new();

        // Cursor accent bar
        if is_cursor {
            spans.push(Span::styled(
                "\u{258E}",
                Style::default().fg(app.theme.highlight).bg(row_bg),
            ));
        } else {
            spans.push(Span::styled(" ", Style::default().bg(row_bg)));
        }

        // Checkbox
        if task.completed {
            spans.push(Span::styled(
                "[x]",
                Style::default().fg(app.theme.green).bg(row_bg),
            ));
        } else {
            spans.push(Span::styled(
                "[ ]",
                Style::default().fg(app.theme.text).bg(row_bg),
            ));
        }
        spans.push(Span::styled(" ", Style::default().bg(row_bg)));

        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let avail = (area.width as usize).saturating_sub(used);

        let editing_here =
            app.mode == Mode::Edit && app.list.editing() == Some(task.id);
        if editing_here {
            let text_style = Style::default().fg(app.theme.text_bright).bg(row_bg);
            let cursor_style = Style::default().fg(row_bg).bg(app.theme.text_bright);
            spans.extend(super::line_edit_spans(
                app.list.edit_scratch().unwrap_or(""),
                app.edit_cursor,
                avail,
                text_style,
                cursor_style,
            ));
        } else {
            let text_style = if task.completed {
                Style::default()
                    .fg(app.theme.dim)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if is_cursor {
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.text).bg(row_bg)
            };
            spans.push(Span::styled(
                unicode::truncate_to_width(&task.text, avail),
                text_style,
            ));
        }

        // Selection background runs the full row width
        if is_cursor {
            let filled: usize = spans
                .iter()
                .map(|s| unicode::display_width(&s.content))
                .sum();
            if filled < area.width as usize {
                spans.push(Span::styled(
                    " ".repeat(area.width as usize - filled),
                    Style::default().bg(row_bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(bg_style);
    frame.render_widget(paragraph, area);
}

fn render_empty_state(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  No tasks found",
            Style::default().fg(app.theme.text).bg(bg),
        )),
        Line::from(Span::styled(
            "  Add a new task to get started!",
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];
    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
