use tracing::debug;

use crate::model::task::{Task, TaskId};

/// A requested change to the task list, emitted by UI components
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add(String),
    ToggleComplete(TaskId),
    Delete(TaskId),
    EnterEditMode(TaskId),
    CommitEdit { id: TaskId, text: String },
    ClearCompleted,
}

/// Owns the ordered task list and every mutation of it.
///
/// Operations on an unknown ID leave the list untouched. Every change that
/// actually alters the list bumps `revision`, so readers can tell a new
/// snapshot exists without diffing.
#[derive(Debug, Clone, Default)]
pub struct ListStore {
    tasks: Vec<Task>,
    revision: u64,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Counter bumped once per effective change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply an intent. Returns true if the list changed.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Add(text) => {
                self.add(text);
                true
            }
            Intent::ToggleComplete(id) => self.toggle_complete(id),
            Intent::Delete(id) => self.delete(id),
            Intent::EnterEditMode(id) => self.enter_edit_mode(id),
            Intent::CommitEdit { id, text } => self.commit_edit(id, text),
            Intent::ClearCompleted => self.clear_completed() > 0,
        }
    }

    /// Append a new open task. The text is stored as given, untrimmed.
    pub fn add(&mut self, text: impl Into<String>) -> TaskId {
        let task = Task::new(text);
        let id = task.id;
        debug!(%id, "add task");
        self.tasks.push(task);
        self.bump();
        id
    }

    /// Flip `completed` on the task with this ID
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        self.update(id, "toggle complete", |task| task.completed = !task.completed)
    }

    /// Remove the task with this ID
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return false;
        }
        debug!(%id, "delete task");
        self.bump();
        true
    }

    /// Flip `is_editing` on the task with this ID
    pub fn enter_edit_mode(&mut self, id: TaskId) -> bool {
        self.update(id, "toggle edit mode", |task| {
            task.is_editing = !task.is_editing
        })
    }

    /// Replace the text and flip `is_editing` (back off, in normal use)
    pub fn commit_edit(&mut self, id: TaskId, new_text: impl Into<String>) -> bool {
        let new_text = new_text.into();
        self.update(id, "commit edit", move |task| {
            task.text = new_text;
            task.is_editing = !task.is_editing;
        })
    }

    /// Remove every completed task. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            debug!(removed, "clear completed");
            self.bump();
        }
        removed
    }

    fn update<F>(&mut self, id: TaskId, op: &'static str, f: F) -> bool
    where
        F: FnOnce(&mut Task),
    {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(%id, op, "task not found, ignoring");
            return false;
        };
        f(task);
        debug!(%id, op, "task updated");
        self.bump();
        true
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
