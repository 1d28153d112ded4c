use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::FormOutcome;
use super::text_field::TextField;
use crate::model::task::{Task, TaskId};
use crate::ops::Intent;
use crate::tui::theme::Theme;

pub const EDIT_TASK_PLACEHOLDER: &str = "Update task";

/// Inline edit form shown in place of a task row while it is being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskForm {
    pub id: TaskId,
    pub field: TextField,
}

impl EditTaskForm {
    /// Seed the buffer from the task's current text
    pub fn new(task: &Task) -> Self {
        EditTaskForm {
            id: task.id,
            field: TextField::with_text(task.text.clone()),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        match key.code {
            KeyCode::Enter => FormOutcome::Submit(Intent::CommitEdit {
                id: self.id,
                text: self.field.value().to_string(),
            }),
            KeyCode::Esc => FormOutcome::Leave,
            _ => {
                self.field.handle_key(key);
                FormOutcome::Continue
            }
        }
    }

    pub fn line(&self, focused: bool, selected: bool, theme: &Theme) -> Line<'static> {
        let bg = if selected {
            theme.selection_bg
        } else {
            theme.background
        };
        let marker = if focused { " \u{270E} " } else { "   " };
        let mut spans = vec![Span::styled(
            marker,
            Style::default().fg(theme.highlight).bg(bg),
        )];
        spans.extend(
            self.field
                .line(EDIT_TASK_PLACEHOLDER, focused, theme)
                .spans,
        );
        if !focused {
            spans.push(Span::styled(
                "  (Enter to update)",
                Style::default().fg(theme.dim).bg(bg),
            ));
        }
        Line::from(spans)
    }
}
