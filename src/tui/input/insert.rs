use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};
use crate::tui::input::common;

pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match key.code {
        // Submit and stay in insert mode for rapid entry
        KeyCode::Enter => {
            if app.list.submit_input().is_some() {
                app.input_cursor = 0;
            }
        }
        // Back to normal mode, draft preserved
        KeyCode::Esc => {
            app.mode = Mode::Normal;
        }
        _ => {
            common::handle_line_edit_key(&mut app.list.input, &mut app.input_cursor, key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TodoList;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn insert_app() -> App {
        let mut app = App::new(TodoList::new());
        app.enter_insert();
        app
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_insert(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_then_enter_adds_a_task() {
        let mut app = insert_app();
        type_str(&mut app, "call mum");
        handle_insert(&mut app, key(KeyCode::Enter));
        assert_eq!(app.list.len(), 1);
        assert_eq!(app.list.tasks()[0].text, "call mum");
        assert_eq!(app.list.input, "");
        assert_eq!(app.input_cursor, 0);
        assert_eq!(app.mode, Mode::Insert);
    }

    #[test]
    fn blank_submit_keeps_draft_and_cursor() {
        let mut app = insert_app();
        type_str(&mut app, "   ");
        handle_insert(&mut app, key(KeyCode::Enter));
        assert_eq!(app.list.len(), 0);
        assert_eq!(app.list.input, "   ");
        assert_eq!(app.input_cursor, 3);
    }

    #[test]
    fn esc_returns_to_normal_with_draft_intact() {
        let mut app = insert_app();
        type_str(&mut app, "half a tho");
        handle_insert(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.list.input, "half a tho");
    }

    #[test]
    fn backspace_edits_the_draft() {
        let mut app = insert_app();
        type_str(&mut app, "groceriess");
        handle_insert(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.list.input, "groceries");
        assert_eq!(app.input_cursor, 9);
    }
}
