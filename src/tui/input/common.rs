use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode;

/// Apply a single-line editing key to a buffer and its byte cursor.
/// Shared between the entry draft and the edit scratch. Returns true
/// when the key was consumed.
pub(super) fn handle_line_edit_key(buf: &mut String, cursor: &mut usize, key: KeyEvent) -> bool {
    *cursor = (*cursor).min(buf.len());
    match (key.modifiers, key.code) {
        // Jump to start/end: Ctrl+A / Ctrl+E (readline), Home/End, Ctrl+arrows
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => {
            *cursor = 0;
            true
        }
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            *cursor = buf.len();
            true
        }
        (m, KeyCode::Left) if m.contains(KeyModifiers::CONTROL) => {
            *cursor = 0;
            true
        }
        (m, KeyCode::Right) if m.contains(KeyModifiers::CONTROL) => {
            *cursor = buf.len();
            true
        }
        (_, KeyCode::Home) => {
            *cursor = 0;
            true
        }
        (_, KeyCode::End) => {
            *cursor = buf.len();
            true
        }
        // Kill to start of line: Ctrl+U
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            buf.drain(..*cursor);
            *cursor = 0;
            true
        }
        // Word movement: Alt+arrow, or readline Alt+B / Alt+F
        (m, KeyCode::Left) if m.contains(KeyModifiers::ALT) => {
            *cursor = unicode::word_boundary_left(buf, *cursor);
            true
        }
        (m, KeyCode::Right) if m.contains(KeyModifiers::ALT) => {
            *cursor = unicode::word_boundary_right(buf, *cursor);
            true
        }
        (m, KeyCode::Char('b')) if m.contains(KeyModifiers::ALT) => {
            *cursor = unicode::word_boundary_left(buf, *cursor);
            true
        }
        (m, KeyCode::Char('f')) if m.contains(KeyModifiers::ALT) => {
            *cursor = unicode::word_boundary_right(buf, *cursor);
            true
        }
        // Single grapheme movement
        (_, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(buf, *cursor) {
                *cursor = prev;
            }
            true
        }
        (_, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(buf, *cursor) {
                *cursor = next;
            }
            true
        }
        // Word backspace (Alt or Ctrl)
        (m, KeyCode::Backspace)
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            let start = unicode::word_boundary_left(buf, *cursor);
            buf.drain(start..*cursor);
            *cursor = start;
            true
        }
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(buf, *cursor) {
                buf.drain(prev..*cursor);
                *cursor = prev;
            }
            true
        }
        // Delete forward, cursor stays put
        (KeyModifiers::NONE, KeyCode::Delete) => {
            if let Some(next) = unicode::next_grapheme_boundary(buf, *cursor) {
                buf.drain(*cursor..next);
            }
            true
        }
        // Type a character
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            buf.insert(*cursor, c);
            *cursor += c.len_utf8();
            true
        }
        _ => false,
    }
}
