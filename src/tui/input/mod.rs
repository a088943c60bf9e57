mod common;
mod edit;
mod insert;
mod normal;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

/// Handle a key event in the current mode.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl+Q quits from anywhere, no confirmation
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Normal => normal::handle_normal(app, key),
        Mode::Insert => insert::handle_insert(app, key),
        Mode::Edit => edit::handle_edit(app, key),
    }
}

/// Handle a bracketed paste. The text lands in whichever buffer the mode
/// is typing into; Normal mode drops it.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() {
        return;
    }
    let clean = sanitize_paste(text);
    match app.mode {
        Mode::Insert => {
            let at = app.input_cursor.min(app.list.input.len());
            app.list.input.insert_str(at, &clean);
            app.input_cursor = at + clean.len();
        }
        Mode::Edit => {
            if let Some(scratch) = app.list.edit_scratch_mut() {
                let at = app.edit_cursor.min(scratch.len());
                scratch.insert_str(at, &clean);
                app.edit_cursor = at + clean.len();
            }
        }
        Mode::Normal => {}
    }
}

/// Flatten pasted text to a single line: strip carriage returns, turn
/// newlines and tabs into spaces.
fn sanitize_paste(text: &str) -> String {
    text.replace('\r', "").replace(['\n', '\t'], " ")
}
