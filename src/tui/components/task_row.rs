use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::task::Task;
use crate::ops::Intent;
use crate::ops::view::QueryMatcher;
use crate::tui::render::push_highlighted_spans;
use crate::tui::theme::Theme;
use crate::util::text::{cell_width, fit_to_width};

const ROW_ACTIONS: &str = "e edit  d delete ";

/// Map a key pressed on a task row to the intent it stands for.
/// Rows in edit mode are rendered as forms and have no row actions.
pub fn row_intent(task: &Task, key: KeyEvent) -> Option<Intent> {
    if task.is_editing || !matches!(key.modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT) {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('x') => Some(Intent::ToggleComplete(task.id)),
        KeyCode::Char('e') | KeyCode::Enter => Some(Intent::EnterEditMode(task.id)),
        KeyCode::Char('d') | KeyCode::Delete => Some(Intent::Delete(task.id)),
        _ => None,
    }
}

/// Render one task as a row: checkbox, text, and on the selected row the
/// edit/delete affordances right-aligned.
pub fn row_line(
    task: &Task,
    selected: bool,
    theme: &Theme,
    matcher: Option<&QueryMatcher>,
    width: usize,
) -> Line<'static> {
    let bg = if selected {
        theme.selection_bg
    } else {
        theme.background
    };

    let checkbox = if task.completed { "[x] " } else { "[ ] " };
    let checkbox_color = if task.completed {
        theme.green
    } else {
        theme.text
    };

    let mut text_style = Style::default().fg(theme.text_bright).bg(bg);
    if task.completed {
        text_style = text_style
            .fg(theme.dim)
            .add_modifier(Modifier::CROSSED_OUT);
    }
    if selected {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }
    let match_style = Style::default()
        .fg(theme.search_match_fg)
        .bg(theme.search_match_bg);

    let actions_width = if selected { cell_width(ROW_ACTIONS) } else { 0 };
    let text_budget = width
        .saturating_sub(cell_width(checkbox))
        .saturating_sub(actions_width);
    let text = fit_to_width(&task.text, text_budget);

    let mut spans: Vec<Span<'static>> = vec![Span::styled(
        checkbox,
        Style::default().fg(checkbox_color).bg(bg),
    )];
    push_highlighted_spans(&mut spans, &text, text_style, match_style, matcher);

    if selected {
        let used: usize = spans.iter().map(|s| cell_width(&s.content)).sum();
        if used + actions_width < width {
            spans.push(Span::styled(
                " ".repeat(width - used - actions_width),
                Style::default().bg(bg),
            ));
        }
        spans.push(Span::styled(
            ROW_ACTIONS,
            Style::default().fg(theme.dim).bg(bg),
        ));
    }

    Line::from(spans)
}
