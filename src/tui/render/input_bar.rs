use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

const PLACEHOLDER: &str = "Add a new task...";

/// Render the entry row: a `+` marker and the draft being typed.
/// Outside insert mode the row shows a placeholder, or a dimmed
/// half-typed draft left behind by Esc.
pub fn render_input_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let inserting = app.mode == Mode::Insert;

    let marker_color = if inserting {
        app.theme.highlight
    } else {
        app.theme.accent
    };

    let mut spans: Vec<Span> = vec![
        Span::styled(" ", bg_style),
        Span::styled(
            "+",
            Style::default()
                .fg(marker_color)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ", bg_style),
    ];
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let avail = (area.width as usize).saturating_sub(used);

    if inserting {
        let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
        let cursor_style = Style::default().fg(bg).bg(app.theme.text_bright);
        spans.extend(super::line_edit_spans(
            &app.list.input,
            app.input_cursor,
            avail,
            text_style,
            cursor_style,
        ));
    } else if app.list.input.is_empty() {
        spans.push(Span::styled(
            unicode::truncate_to_width(PLACEHOLDER, avail),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        // Draft kept across an Esc
        spans.push(Span::styled(
            unicode::truncate_to_width(&app.list.input, avail),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(paragraph, area);
}
