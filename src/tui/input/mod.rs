mod forms;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

use forms::{handle_edit_form, handle_new_task, handle_search};
use navigate::handle_navigate;

/// Handle a key event for whichever input has focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.focus {
        Focus::Navigate => handle_navigate(app, key),
        Focus::NewTask => handle_new_task(app, key),
        Focus::Search => handle_search(app, key),
        Focus::Edit(id) => handle_edit_form(app, id, key),
    }
}
