use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};
use crate::tui::input::common;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        // Commit; an all-whitespace scratch is rejected and editing continues
        KeyCode::Enter => {
            if app.list.commit_edit() {
                app.mode = Mode::Normal;
            }
        }
        KeyCode::Esc => {
            app.list.cancel_edit();
            app.mode = Mode::Normal;
        }
        _ => {
            if let Some(scratch) = app.list.edit_scratch_mut() {
                let mut cursor = app.edit_cursor.min(scratch.len());
                common::handle_line_edit_key(scratch, &mut cursor, key);
                app.edit_cursor = cursor;
            }
        }
    }
}
