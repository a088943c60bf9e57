/// Identifier assigned to a task by its owning list.
///
/// Ids come from a counter that only ever moves forward, so an id is
/// never reused within one session, even after its task is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub(crate) u64);

/// A single checklist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Stable identifier, fixed at creation
    pub id: TaskId,
    /// Description as typed; never blank after trimming
    pub text: String,
    /// Whether the entry is checked off
    pub completed: bool,
}

impl Task {
    pub(crate) fn new(id: TaskId, text: String) -> Self {
        Task {
            id,
            text,
            completed: false,
        }
    }
}
