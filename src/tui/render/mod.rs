pub mod filter_bar;
pub mod help_overlay;
pub mod input_bar;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;

use super::app::App;
use crate::util::unicode;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: filter bar (2 rows) | input bar | task list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // filter tabs + separator
            Constraint::Length(1), // input bar
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    filter_bar::render_filter_bar(frame, app, chunks[0]);
    input_bar::render_input_bar(frame, app, chunks[1]);
    list_view::render_list_view(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}

/// Build spans for a single-line editor with a block cursor, windowed to
/// `width` display columns. The window slides so the cursor stays visible;
/// with the cursor at the end of the text the block sits on a trailing cell.
pub(super) fn line_edit_spans(
    text: &str,
    cursor: usize,
    width: usize,
    text_style: Style,
    cursor_style: Style,
) -> Vec<Span<'static>> {
    if width == 0 {
        return Vec::new();
    }
    let cursor = cursor.min(text.len());
    let cursor_col = unicode::byte_to_col(text, cursor);
    let start_col = (cursor_col + 1).saturating_sub(width);
    let start = unicode::col_to_byte(text, start_col);
    let end = unicode::col_to_byte(text, start_col + width);

    let mut spans = Vec::new();
    if cursor < end {
        if start < cursor {
            spans.push(Span::styled(text[start..cursor].to_string(), text_style));
        }
        let g_end = cursor + unicode::grapheme_at(text, cursor).len();
        spans.push(Span::styled(text[cursor..g_end].to_string(), cursor_style));
        if g_end < end {
            spans.push(Span::styled(text[g_end..end].to_string(), text_style));
        }
    } else {
        // Cursor past the visible text: block cursor on an empty cell
        if start < text.len() {
            spans.push(Span::styled(text[start..].to_string(), text_style));
        }
        spans.push(Span::styled(" ".to_string(), cursor_style));
    }
    spans
}
