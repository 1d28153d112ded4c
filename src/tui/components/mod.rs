pub mod edit_task_form;
pub mod new_task_form;
pub mod task_row;
pub mod text_field;

pub use edit_task_form::EditTaskForm;
pub use new_task_form::NewTaskForm;
pub use text_field::TextField;

use crate::ops::Intent;

/// Result of feeding a key to a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Key was consumed as text editing (or ignored)
    Continue,
    /// Form was submitted; apply this intent
    Submit(Intent),
    /// User left the form without submitting
    Leave,
}
