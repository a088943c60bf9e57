use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): counts or a transient message
/// on the left, key hints for the current mode on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];

    if let Some(ref msg) = app.status_message {
        // Red for destructive-action reports, yellow for prompts
        let color = if app.status_alert {
            app.theme.red
        } else {
            app.theme.yellow
        };
        spans.push(Span::styled(msg.clone(), Style::default().fg(color).bg(bg)));
    } else {
        let stats = app.list.stats();
        let text_style = Style::default().fg(app.theme.text).bg(bg);
        let dim_style = Style::default().fg(app.theme.dim).bg(bg);
        spans.push(Span::styled(format!("{} total", stats.total), text_style));
        spans.push(Span::styled(" \u{B7} ", dim_style));
        spans.push(Span::styled(format!("{} active", stats.active), text_style));
        spans.push(Span::styled(" \u{B7} ", dim_style));
        spans.push(Span::styled(
            format!("{} completed", stats.completed),
            Style::default().fg(app.theme.green).bg(bg),
        ));
    }

    let hint = match app.mode {
        Mode::Normal => "a add  Space toggle  Enter edit  d delete  ? help",
        Mode::Insert => "Enter add  Esc back",
        Mode::Edit => "Enter save  Esc cancel",
    };
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
