use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Tasks", header_style)));
    add_binding(
        &mut lines,
        " \u{2191}\u{2193}/jk",
        "Move cursor up/down",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " g/G",
        "Jump to top/bottom",
        key_style,
        desc_style,
    );
    add_binding(&mut lines, " Space", "Toggle done", key_style, desc_style);
    add_binding(
        &mut lines,
        " Enter/e",
        "Edit task text",
        key_style,
        desc_style,
    );
    add_binding(&mut lines, " d/Del", "Delete task", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Entry", header_style)));
    add_binding(&mut lines, " a/i", "Add new tasks", key_style, desc_style);
    add_binding(
        &mut lines,
        " Enter",
        "Add and keep typing",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " Esc",
        "Back to the list",
        key_style,
        desc_style,
    );
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Filters", header_style)));
    add_binding(
        &mut lines,
        " 1/2/3",
        "All / Active / Completed",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " Tab/l/\u{2192}",
        "Next filter",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " h/\u{2190}",
        "Previous filter",
        key_style,
        desc_style,
    );
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Editing", header_style)));
    add_binding(&mut lines, " Enter", "Save changes", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Discard changes", key_style, desc_style);
    add_binding(
        &mut lines,
        " Ctrl+A/E",
        "Start/end of line",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " Alt+\u{2190}/\u{2192}",
        "Word left/right",
        key_style,
        desc_style,
    );
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " qq", "Quit", key_style, desc_style);
    add_binding(
        &mut lines,
        " Ctrl+Q",
        "Quit (immediate)",
        key_style,
        desc_style,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 16;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use crate::tui::render::test_helpers::*;

    #[test]
    fn overlay_lists_the_sections() {
        let app = sample_app();
        // Tall enough that no binding rows are clipped by the overlay
        let out = render_to_string(TERM_W, 40, |frame, area| {
            super::render_help_overlay(frame, &app, area);
        });
        assert!(out.contains("Key Bindings"));
        assert!(out.contains("Tasks"));
        assert!(out.contains("Filters"));
        assert!(out.contains("Toggle this help"));
        assert!(out.contains("Ctrl+Q"));
    }
}
