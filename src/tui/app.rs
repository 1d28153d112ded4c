use std::collections::HashMap;
use std::io;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::model::{Config, FilterMode, Task, TaskId};
use crate::ops::view::{StatusLine, status_line, visible_tasks};
use crate::ops::{Intent, ListStore};

use super::components::task_row::row_intent;
use super::components::{EditTaskForm, NewTaskForm, TextField};
use super::input;
use super::render;
use super::theme::Theme;

/// Which input currently receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Cursor over the visible task rows
    Navigate,
    /// Typing into the new-task form
    NewTask,
    /// Typing into the search box
    Search,
    /// Typing into the edit form of this task
    Edit(TaskId),
}

/// Main application state
pub struct App {
    pub store: ListStore,
    pub filter: FilterMode,
    /// Search box; its value is the current query
    pub search: TextField,
    pub new_task: NewTaskForm,
    /// One form per task in edit mode
    pub edit_forms: HashMap<TaskId, EditTaskForm>,
    pub focus: Focus,
    /// Index into the visible task list
    pub cursor: usize,
    pub should_quit: bool,
    pub theme: Theme,
    pub date_format: String,
    pub show_key_hints: bool,
    /// Source of the header date, read on every render
    pub today: fn() -> NaiveDate,
    /// Store revision the edit forms were last synced against
    synced_revision: u64,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            store: ListStore::new(),
            filter: config.default_filter,
            search: TextField::new(),
            new_task: NewTaskForm::new(),
            edit_forms: HashMap::new(),
            focus: Focus::NewTask,
            cursor: 0,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            date_format: config.ui.date_format.clone(),
            show_key_hints: config.ui.show_key_hints,
            today: local_today,
            synced_revision: 0,
        }
    }

    pub fn query(&self) -> &str {
        self.search.value()
    }

    /// Tasks passing the current filter and query, in list order
    pub fn visible(&self) -> Vec<&Task> {
        visible_tasks(self.store.tasks(), self.filter, self.query())
    }

    /// Task under the cursor
    pub fn selected_task(&self) -> Option<&Task> {
        self.visible().get(self.cursor).copied()
    }

    pub fn status_line(&self, visible_len: usize) -> StatusLine {
        status_line(
            self.store.len(),
            visible_len,
            (self.today)(),
            &self.date_format,
        )
    }

    /// Apply an intent to the list, then bring forms, focus and cursor
    /// in line with the new snapshot. Entering edit mode focuses the form.
    pub fn dispatch(&mut self, intent: Intent) {
        debug!(?intent, "dispatch");
        let opened = match intent {
            Intent::EnterEditMode(id) => Some(id),
            _ => None,
        };
        self.store.apply(intent);
        if self.store.revision() != self.synced_revision {
            self.sync_edit_forms();
            self.synced_revision = self.store.revision();
        }
        if let Some(id) = opened
            && self.edit_forms.contains_key(&id)
        {
            self.focus = Focus::Edit(id);
        }
        self.clamp_cursor();
    }

    /// Clear completed tasks. Only offered while viewing completed tasks.
    pub fn clear_completed(&mut self) {
        if self.filter == FilterMode::Completed {
            self.dispatch(Intent::ClearCompleted);
        }
    }

    pub fn set_filter(&mut self, filter: FilterMode) {
        if self.filter != filter {
            info!(%filter, "filter changed");
        }
        self.filter = filter;
        self.clamp_cursor();
    }

    /// Apply a row key to the task under the cursor. A row in edit mode is
    /// drawn as its form, so `e`/Enter refocus that form and nothing else
    /// reaches the record.
    pub fn act_on_selected(&mut self, key: KeyEvent) {
        let Some(task) = self.selected_task() else {
            return;
        };
        if task.is_editing {
            let id = task.id;
            if matches!(key.code, KeyCode::Char('e') | KeyCode::Enter)
                && self.edit_forms.contains_key(&id)
            {
                self.focus = Focus::Edit(id);
            }
            return;
        }
        if let Some(intent) = row_intent(task, key) {
            self.dispatch(intent);
        }
    }

    /// Move the cursor by `delta`, staying within the visible list
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, len as isize - 1) as usize;
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    /// Edit forms follow the records: a task entering edit mode gets a form
    /// seeded from its text, a task leaving it (or deleted) loses its form.
    fn sync_edit_forms(&mut self) {
        let tasks = self.store.tasks();
        self.edit_forms
            .retain(|id, _| tasks.iter().any(|t| t.id == *id && t.is_editing));
        for task in tasks.iter().filter(|t| t.is_editing) {
            self.edit_forms
                .entry(task.id)
                .or_insert_with(|| EditTaskForm::new(task));
        }
        if let Focus::Edit(id) = self.focus
            && !self.edit_forms.contains_key(&id)
        {
            self.focus = Focus::Navigate;
        }
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);
    info!(filter = %app.filter, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal before the panic message is printed
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(tasks = app.store.len(), "exiting");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Redrawn every tick so the header date follows the clock
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
