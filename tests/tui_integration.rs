//! End-to-end keystroke scenarios driven through the public input layer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use jot::model::{Filter, TodoList};
use jot::tui::app::{App, Mode};
use jot::tui::input::{handle_key, handle_paste};

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    handle_key(app, KeyEvent::new(code, modifiers));
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn texts(app: &App) -> Vec<(String, bool)> {
    app.list
        .tasks()
        .iter()
        .map(|t| (t.text.clone(), t.completed))
        .collect()
}

#[test]
fn rapid_entry_adds_tasks_in_order() {
    let mut app = App::new(TodoList::new());

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.mode, Mode::Insert);

    type_str(&mut app, "buy milk");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, Mode::Insert);

    type_str(&mut app, "walk the dog");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(
        texts(&app),
        vec![
            ("buy milk".to_string(), false),
            ("walk the dog".to_string(), false),
        ]
    );
}

#[test]
fn toggling_and_filters_work_together() {
    let mut app = App::new(TodoList::new());
    press(&mut app, KeyCode::Char('a'));
    for text in ["pay rent", "water the plants", "book dentist"] {
        type_str(&mut app, text);
        press(&mut app, KeyCode::Enter);
    }
    press(&mut app, KeyCode::Esc);

    // Complete the middle task
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char(' '));

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.list.filter(), Filter::Completed);
    assert_eq!(app.visible_len(), 1);

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.list.filter(), Filter::Active);
    assert_eq!(app.visible_len(), 2);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.list.filter(), Filter::Completed);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.list.filter(), Filter::All);
    assert_eq!(app.visible_len(), 3);
}

#[test]
fn editing_a_task_with_line_editing_keys() {
    let mut app = App::new(TodoList::new());
    press(&mut app, KeyCode::Char('a'));
    type_str(&mut app, "dentist");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.mode, Mode::Edit);

    // Prefix the text via Ctrl+A, then save
    press_with(&mut app, KeyCode::Char('a'), KeyModifiers::CONTROL);
    type_str(&mut app, "book ");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.list.tasks()[0].text, "book dentist");
}

#[test]
fn emptied_edit_cannot_be_saved_but_can_be_abandoned() {
    let mut app = App::new(TodoList::new());
    press(&mut app, KeyCode::Char('a'));
    type_str(&mut app, "old text");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('e'));
    press_with(&mut app, KeyCode::Char('e'), KeyModifiers::CONTROL);
    press_with(&mut app, KeyCode::Char('u'), KeyModifiers::CONTROL);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, Mode::Edit);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.list.tasks()[0].text, "old text");
}

#[test]
fn deleting_reports_and_keeps_cursor_valid() {
    let mut app = App::new(TodoList::new());
    press(&mut app, KeyCode::Char('a'));
    for text in ["one", "two", "three"] {
        type_str(&mut app, text);
        press(&mut app, KeyCode::Enter);
    }
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('G'));
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.status_message.as_deref(), Some("deleted \"three\""));
    assert_eq!(app.cursor, 1);
    assert_eq!(app.list.len(), 2);

    // Next keypress clears the message
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.status_message, None);
}

#[test]
fn quit_takes_two_presses_or_ctrl_q() {
    let mut app = App::new(TodoList::sample());

    press(&mut app, KeyCode::Char('q'));
    assert!(app.quit_pending);
    assert!(!app.should_quit);

    press(&mut app, KeyCode::Char('j'));
    assert!(!app.quit_pending);
    assert!(!app.should_quit);

    press(&mut app, KeyCode::Char('q'));
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);

    // Ctrl+Q is immediate, even mid-entry
    let mut app = App::new(TodoList::sample());
    press(&mut app, KeyCode::Char('a'));
    type_str(&mut app, "half typed");
    press_with(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL);
    assert!(app.should_quit);
}

#[test]
fn pasted_text_is_flattened_into_the_draft() {
    let mut app = App::new(TodoList::new());
    press(&mut app, KeyCode::Char('a'));
    handle_paste(&mut app, "pay\r\nrent\tnow");
    assert_eq!(app.list.input, "pay rent now");

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.list.tasks()[0].text, "pay rent now");
}

#[test]
fn help_overlay_swallows_keys_until_closed() {
    let mut app = App::new(TodoList::sample());

    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);

    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.cursor, 0);
    assert!(app.show_help);

    press(&mut app, KeyCode::Esc);
    assert!(!app.show_help);

    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.cursor, 1);
}

#[test]
fn an_afternoon_of_list_keeping() {
    let mut app = App::new(TodoList::new());

    // Jot down the errands
    press(&mut app, KeyCode::Char('a'));
    for text in ["pay rent", "water the plants", "call mum", "book dentist"] {
        type_str(&mut app, text);
        press(&mut app, KeyCode::Enter);
    }
    press(&mut app, KeyCode::Esc);

    // Plants watered
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char(' '));

    // The dentist can wait; the cursor lands on the call, fix its wording
    press(&mut app, KeyCode::Char('G'));
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Enter);
    press_with(&mut app, KeyCode::Char('e'), KeyModifiers::CONTROL);
    type_str(&mut app, " back");
    press(&mut app, KeyCode::Enter);

    // Rent paid, checked off from the active view
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('g'));
    press(&mut app, KeyCode::Char(' '));

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(
        texts(&app),
        vec![
            ("pay rent".to_string(), true),
            ("water the plants".to_string(), true),
            ("call mum back".to_string(), false),
        ]
    );
    assert_eq!(app.list.stats().active, 1);
}
