use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::Line;

use super::FormOutcome;
use super::text_field::TextField;
use crate::ops::Intent;
use crate::tui::theme::Theme;

pub const NEW_TASK_PLACEHOLDER: &str = "What is the task today?";

/// The "add a task" input. Submitting hands the raw buffer to the list
/// and leaves the form empty for the next entry.
#[derive(Debug, Clone, Default)]
pub struct NewTaskForm {
    pub field: TextField,
}

impl NewTaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        match key.code {
            KeyCode::Enter => FormOutcome::Submit(Intent::Add(self.field.take())),
            KeyCode::Esc => FormOutcome::Leave,
            _ => {
                self.field.handle_key(key);
                FormOutcome::Continue
            }
        }
    }

    pub fn line(&self, focused: bool, theme: &Theme) -> Line<'static> {
        self.field.line(NEW_TASK_PLACEHOLDER, focused, theme)
    }
}
