use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::model::FilterMode;
use crate::tui::app::{App, Focus};

pub const SEARCH_PLACEHOLDER: &str = "Search tasks...";

/// Bordered box around a one-line input; the border lights up when focused
fn input_block(app: &App, title: &'static str, focused: bool) -> Block<'static> {
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    Block::bordered()
        .title(Span::styled(
            title,
            Style::default().fg(app.theme.text).bg(app.theme.background),
        ))
        .border_style(Style::default().fg(border_color).bg(app.theme.background))
        .style(Style::default().bg(app.theme.background))
}

pub fn render_new_task_form(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::NewTask;
    let line = app.new_task.line(focused, &app.theme);
    let paragraph = Paragraph::new(line).block(input_block(app, " New Task ", focused));
    frame.render_widget(paragraph, area);
}

pub fn render_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Search;
    let line = app.search.line(SEARCH_PLACEHOLDER, focused, &app.theme);
    let paragraph = Paragraph::new(line).block(input_block(app, " Search Tasks ", focused));
    frame.render_widget(paragraph, area);
}

/// Filter mode buttons, plus "Clear Completed" while viewing completed tasks
pub fn render_filter_buttons(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];

    for (i, mode) in FilterMode::ALL.into_iter().enumerate() {
        let style = if mode == app.filter {
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(app.theme.selection_bg)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, mode.label()), style));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    if app.filter == FilterMode::Completed {
        spans.push(Span::styled(" ", Style::default().bg(bg)));
        spans.push(Span::styled(
            " C Clear Completed ",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.red),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    #[test]
    fn filter_buttons_all() {
        let app = app_with_tasks(&[]);
        let output = render_to_string(60, 1, |frame, area| {
            render_filter_buttons(frame, &app, area);
        });
        assert_snapshot!(output.trim(), @"1 All   2 Completed   3 Uncompleted");
    }

    #[test]
    fn filter_buttons_completed_adds_clear() {
        let mut app = app_with_tasks(&[]);
        app.filter = FilterMode::Completed;
        let output = render_to_string(70, 1, |frame, area| {
            render_filter_buttons(frame, &app, area);
        });
        assert_snapshot!(
            output.trim(),
            @"1 All   2 Completed   3 Uncompleted    C Clear Completed"
        );
    }

    #[test]
    fn new_task_form_placeholder() {
        let app = app_with_tasks(&[]);
        let output = render_to_string(40, 3, |frame, area| {
            render_new_task_form(frame, &app, area);
        });
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("New Task"));
        assert!(lines[1].contains("What is the task today?"));
    }

    #[test]
    fn search_box_shows_query() {
        let mut app = app_with_tasks(&[]);
        for c in "milk".chars() {
            app.search.insert(c);
        }
        let output = render_to_string(40, 3, |frame, area| {
            render_search_box(frame, &app, area);
        });
        assert!(output.contains("Search Tasks"));
        assert!(output.contains("milk"));
        assert!(!output.contains(SEARCH_PLACEHOLDER));
    }
}
