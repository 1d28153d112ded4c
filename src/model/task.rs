use std::fmt;

use uuid::Uuid;

/// Opaque task identifier, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        TaskId(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Task description, stored exactly as entered
    pub text: String,
    pub completed: bool,
    /// True while the task is shown as an edit form instead of a row
    pub is_editing: bool,
}

impl Task {
    /// Create an open, non-editing task with a fresh ID
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            id: TaskId::new(),
            text: text.into(),
            completed: false,
            is_editing: false,
        }
    }
}
