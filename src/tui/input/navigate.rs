use crossterm::event::{KeyCode, KeyEvent};

use crate::model::FilterMode;
use crate::tui::app::{App, Focus};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,

        // Cursor movement
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.visible().len().saturating_sub(1);
        }

        // Focus changes
        KeyCode::Char('a') | KeyCode::Char('i') => app.focus = Focus::NewTask,
        KeyCode::Char('/') => app.focus = Focus::Search,

        // Filter buttons
        KeyCode::Char('1') => app.set_filter(FilterMode::All),
        KeyCode::Char('2') => app.set_filter(FilterMode::Completed),
        KeyCode::Char('3') => app.set_filter(FilterMode::Uncompleted),
        KeyCode::Tab => app.set_filter(app.filter.next()),
        KeyCode::Char('C') => app.clear_completed(),

        // Row actions: toggle, edit (or refocus an open form), delete
        _ => app.act_on_selected(key),
    }
}
