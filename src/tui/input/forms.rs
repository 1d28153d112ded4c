use crossterm::event::{KeyCode, KeyEvent};

use crate::model::TaskId;
use crate::tui::app::{App, Focus};
use crate::tui::components::FormOutcome;

pub(super) fn handle_new_task(app: &mut App, key: KeyEvent) {
    match app.new_task.handle_key(key) {
        FormOutcome::Submit(intent) => app.dispatch(intent),
        FormOutcome::Leave => app.focus = Focus::Navigate,
        FormOutcome::Continue => {}
    }
}

pub(super) fn handle_edit_form(app: &mut App, id: TaskId, key: KeyEvent) {
    let Some(form) = app.edit_forms.get_mut(&id) else {
        app.focus = Focus::Navigate;
        return;
    };
    match form.handle_key(key) {
        FormOutcome::Submit(intent) => {
            app.dispatch(intent);
            app.focus = Focus::Navigate;
        }
        FormOutcome::Leave => app.focus = Focus::Navigate,
        FormOutcome::Continue => {}
    }
}

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.focus = Focus::Navigate,
        KeyCode::Esc => {
            app.search.clear();
            app.focus = Focus::Navigate;
        }
        _ => {
            app.search.handle_key(key);
        }
    }
    // The view changes with every keystroke
    app.clamp_cursor();
}
