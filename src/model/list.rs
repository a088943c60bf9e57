use super::task::{Task, TaskId};

/// Which slice of the list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Every filter, in display order.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Whether a task passes this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    /// Tab label shown in the filter bar.
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// The filter after this one in display order, wrapping around.
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// The filter before this one in display order, wrapping around.
    pub fn prev(self) -> Filter {
        match self {
            Filter::All => Filter::Completed,
            Filter::Active => Filter::All,
            Filter::Completed => Filter::Active,
        }
    }
}

/// Counts over the whole list, never narrowed by the active filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// An in-progress edit of one task's text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EditState {
    target: TaskId,
    scratch: String,
}

/// An in-memory checklist: the tasks, the entry draft, at most one
/// edit session, and the active filter.
///
/// Tasks keep insertion order. All mutation goes through methods here
/// so id uniqueness and non-blank task text hold throughout. Text is
/// stored as typed; trimming happens only to reject blank input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    tasks: Vec<Task>,
    next_id: u64,
    /// Draft text for the next task.
    pub input: String,
    edit: Option<EditState>,
    filter: Filter,
}

impl TodoList {
    pub fn new() -> Self {
        TodoList {
            tasks: Vec::new(),
            next_id: 1,
            input: String::new(),
            edit: None,
            filter: Filter::All,
        }
    }

    /// A small starter list for fresh sessions.
    pub fn sample() -> Self {
        let mut list = TodoList::new();
        list.add("Learn Rust");
        list.add("Build a project");
        if let Some(id) = list.add("Master the borrow checker") {
            list.toggle(id);
        }
        list
    }

    /// Append a task with `text` kept exactly as given. Returns the new
    /// id, or None when the text trims to nothing.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        if text.trim().is_empty() {
            return None;
        }
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, text.to_string()));
        Some(id)
    }

    /// Submit the entry draft as a new task. The draft is cleared on
    /// success; a draft that trims to nothing is rejected and left in
    /// place for the user to fix.
    pub fn submit_input(&mut self) -> Option<TaskId> {
        if self.input.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.input);
        self.add(&text)
    }

    /// Flip a task's completed flag. Unknown ids are ignored.
    pub fn toggle(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
    }

    /// Remove a task. Removing the task under edit also discards the
    /// edit session. Unknown ids are ignored.
    pub fn delete(&mut self, id: TaskId) {
        self.tasks.retain(|t| t.id != id);
        if self.editing() == Some(id) {
            self.edit = None;
        }
    }

    /// Start editing a task, seeding the scratch with its current text.
    /// Any edit already in progress is replaced. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: TaskId) {
        if let Some(task) = self.task(id) {
            self.edit = Some(EditState {
                target: id,
                scratch: task.text.clone(),
            });
        }
    }

    /// Replace the edit scratch text. No-op without an active edit.
    pub fn update_edit_scratch(&mut self, text: &str) {
        if let Some(edit) = &mut self.edit {
            edit.scratch = text.to_string();
        }
    }

    /// Mutable access to the edit scratch, for cursor-level editing.
    pub fn edit_scratch_mut(&mut self) -> Option<&mut String> {
        self.edit.as_mut().map(|e| &mut e.scratch)
    }

    /// Apply the edit scratch to its task verbatim and end the session.
    /// Returns false when the scratch trims to nothing; the session then
    /// stays open so the caller keeps its editing UI up.
    pub fn commit_edit(&mut self) -> bool {
        let Some(edit) = &self.edit else {
            return false;
        };
        if edit.scratch.trim().is_empty() {
            return false;
        }
        let text = edit.scratch.clone();
        let target = edit.target;
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == target) {
            task.text = text;
        }
        self.edit = None;
        true
    }

    /// Drop the edit session without touching the task.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Tasks passing the active filter, in insertion order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    /// Counts over the whole list, regardless of the active filter.
    pub fn stats(&self) -> Stats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        Stats {
            total,
            active: total - completed,
            completed,
        }
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Id of the task under edit, if any.
    pub fn editing(&self) -> Option<TaskId> {
        self.edit.as_ref().map(|e| e.target)
    }

    /// The edit scratch text, if an edit is active.
    pub fn edit_scratch(&self) -> Option<&str> {
        self.edit.as_ref().map(|e| e.scratch.as_str())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for TodoList {
    fn default() -> Self {
        TodoList::new()
    }
}
