use ratatui::Frame;
use ratatui::layout::{Alignment, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::ops::view::{QueryMatcher, StatusLine};
use crate::tui::app::{App, Focus};
use crate::tui::components::task_row::row_line;

/// Render the line above the list: empty / no-match message or the dated header
pub fn render_status_line(frame: &mut Frame, app: &App, visible_len: usize, area: Rect) {
    let status = app.status_line(visible_len);
    let color = match status {
        StatusLine::Header(_) => app.theme.text_bright,
        StatusLine::Empty | StatusLine::NoMatches => app.theme.dim,
    };
    let paragraph = Paragraph::new(Span::styled(
        status.text(),
        Style::default()
            .fg(color)
            .bg(app.theme.background)
            .add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Render the visible tasks, one line each. Tasks in edit mode show their
/// edit form instead of a row. Scrolls to keep the cursor on screen.
pub fn render_task_list(frame: &mut Frame, app: &App, visible: &[&Task], area: Rect) {
    let area = area.inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    let height = area.height as usize;
    if height == 0 {
        return;
    }

    let scroll = app.cursor.saturating_sub(height - 1);
    let matcher = QueryMatcher::new(app.query());
    let width = area.width as usize;
    let navigating = app.focus == Focus::Navigate;

    let lines: Vec<Line> = visible
        .iter()
        .enumerate()
        .skip(scroll)
        .take(height)
        .map(|(i, task)| {
            let selected = navigating && i == app.cursor;
            match app.edit_forms.get(&task.id) {
                Some(form) if task.is_editing => {
                    form.line(app.focus == Focus::Edit(task.id), selected, &app.theme)
                }
                _ => row_line(task, selected, &app.theme, matcher.as_ref(), width),
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
