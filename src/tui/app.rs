use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Filter, TaskId, TodoList};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving around the list
    Normal,
    /// Typing into the entry draft
    Insert,
    /// Rewriting one task's text
    Edit,
}

/// Main application state
pub struct App {
    pub list: TodoList,
    pub mode: Mode,
    pub theme: Theme,
    pub should_quit: bool,
    /// First q of a press-twice quit has been seen
    pub quit_pending: bool,
    /// Cursor index into the visible (filtered) task list
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    /// Byte cursor into the entry draft (Insert mode)
    pub input_cursor: usize,
    /// Byte cursor into the edit scratch (Edit mode)
    pub edit_cursor: usize,
    /// Help overlay visible
    pub show_help: bool,
    /// Transient one-line message, cleared on the next keypress
    pub status_message: Option<String>,
    /// Render the status message in the destructive-action color
    pub status_alert: bool,
}

impl App {
    pub fn new(list: TodoList) -> Self {
        App {
            list,
            mode: Mode::Normal,
            theme: Theme::default(),
            should_quit: false,
            quit_pending: false,
            cursor: 0,
            scroll_offset: 0,
            input_cursor: 0,
            edit_cursor: 0,
            show_help: false,
            status_message: None,
            status_alert: false,
        }
    }

    /// Number of rows in the current filtered view.
    pub fn visible_len(&self) -> usize {
        self.list.visible_tasks().len()
    }

    /// Id of the task under the cursor, if any row is visible.
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.list.visible_tasks().get(self.cursor).map(|t| t.id)
    }

    /// Keep the cursor inside the visible list after it shrinks.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Switch filters, clamping the cursor into the new view.
    pub fn apply_filter(&mut self, filter: Filter) {
        self.list.set_filter(filter);
        self.clamp_cursor();
    }

    /// Enter Insert mode with the cursor at the end of the draft.
    pub fn enter_insert(&mut self) {
        self.mode = Mode::Insert;
        self.input_cursor = self.list.input.len();
    }

    /// Start editing the task under the cursor, if any.
    pub fn begin_edit_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        self.list.begin_edit(id);
        if let Some(scratch) = self.list.edit_scratch() {
            self.edit_cursor = scratch.len();
            self.mode = Mode::Edit;
        }
    }
}

/// Run the TUI until the user quits.
pub fn run(list: TodoList) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(list);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => {
                    input::handle_paste(app, &text);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
