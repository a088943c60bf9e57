use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Filter;
use crate::tui::app::{App, Mode};

pub(super) fn handle_normal(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts its close keys
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    // Clear any transient status message on keypress
    app.status_message = None;
    app.status_alert = false;

    // Press-twice quit: second q confirms, any other key cancels
    if app.quit_pending {
        if matches!(
            (key.modifiers, key.code),
            (KeyModifiers::NONE, KeyCode::Char('q'))
        ) {
            app.should_quit = true;
        } else {
            app.quit_pending = false;
        }
        return;
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.quit_pending = true;
            app.status_message = Some("press q again to quit".to_string());
        }

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            if app.cursor + 1 < app.visible_len() {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => {
            app.cursor = 0;
        }
        (_, KeyCode::Char('G')) => {
            app.cursor = app.visible_len().saturating_sub(1);
        }

        // Check off / reopen the selected task
        (KeyModifiers::NONE, KeyCode::Char(' ')) => {
            if let Some(id) = app.selected_task_id() {
                app.list.toggle(id);
                app.clamp_cursor();
            }
        }

        // Edit the selected task's text
        (KeyModifiers::NONE, KeyCode::Char('e')) | (_, KeyCode::Enter) => {
            app.begin_edit_selected();
        }

        // Delete the selected task
        (KeyModifiers::NONE, KeyCode::Char('d')) | (_, KeyCode::Delete) => {
            delete_selected(app);
        }

        // New task entry
        (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Char('i')) => {
            app.enter_insert();
        }

        // Filters: direct selection
        (KeyModifiers::NONE, KeyCode::Char('1')) => app.apply_filter(Filter::All),
        (KeyModifiers::NONE, KeyCode::Char('2')) => app.apply_filter(Filter::Active),
        (KeyModifiers::NONE, KeyCode::Char('3')) => app.apply_filter(Filter::Completed),

        // Filters: cycle
        (_, KeyCode::Tab) | (KeyModifiers::NONE, KeyCode::Char('l')) | (_, KeyCode::Right) => {
            app.apply_filter(app.list.filter().next());
        }
        (_, KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::Char('h')) | (_, KeyCode::Left) => {
            app.apply_filter(app.list.filter().prev());
        }

        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        _ => {}
    }
}

fn delete_selected(app: &mut App) {
    let Some(id) = app.selected_task_id() else {
        return;
    };
    let text = app
        .list
        .task(id)
        .map(|t| t.text.clone())
        .unwrap_or_default();
    app.list.delete(id);
    app.clamp_cursor();
    app.status_message = Some(format!("deleted \"{}\"", text));
    app.status_alert = true;
}
