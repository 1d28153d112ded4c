use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::FilterMode;
use crate::tui::app::{App, Focus};
use crate::util::text::cell_width;

/// Key hints for the focused input
pub fn key_hints(app: &App) -> &'static str {
    match app.focus {
        Focus::Navigate if app.filter == FilterMode::Completed => {
            "j/k move  space done  e edit  d del  a add  / search  1-3 filter  C clear  q quit"
        }
        Focus::Navigate => "j/k move  space done  e edit  d del  a add  / search  1-3 filter  q quit",
        Focus::NewTask => "Enter add  Esc back",
        Focus::Search => "Enter keep  Esc clear",
        Focus::Edit(_) => "Enter update  Esc back",
    }
}

/// Render the status row (bottom of screen): key hints left, counts right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let counts = format!(
        "{}/{} done ",
        app.store.completed_count(),
        app.store.len()
    );
    let hint = if app.show_key_hints {
        format!(" {}", key_hints(app))
    } else {
        String::new()
    };

    let mut spans = Vec::new();
    let hint_width = cell_width(&hint);
    let counts_width = cell_width(&counts);
    if hint_width + counts_width < width {
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        spans.push(Span::styled(
            " ".repeat(width - hint_width - counts_width),
            Style::default().bg(bg),
        ));
    }
    spans.push(Span::styled(counts, Style::default().fg(app.theme.text).bg(bg)));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    #[test]
    fn hints_follow_focus() {
        let mut app = app_with_tasks(&[]);
        assert!(key_hints(&app).contains("/ search"));
        assert!(!key_hints(&app).contains("C clear"));

        app.filter = FilterMode::Completed;
        assert!(key_hints(&app).contains("C clear"));

        app.focus = Focus::NewTask;
        assert_eq!(key_hints(&app), "Enter add  Esc back");
    }

    #[test]
    fn counts_without_hints() {
        let mut app = app_with_tasks(&[("a", true), ("b", false), ("c", false)]);
        app.show_key_hints = false;
        let output = render_to_string(30, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_snapshot!(output.trim(), @"1/3 done");
    }

    #[test]
    fn narrow_row_keeps_counts() {
        let app = app_with_tasks(&[("a", false)]);
        let output = render_to_string(20, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_snapshot!(output.trim(), @"0/1 done");
    }
}
