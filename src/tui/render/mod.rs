pub mod controls;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

use super::app::App;
use crate::ops::view::QueryMatcher;

pub const TITLE: &str = "Get Things Done!";

/// Main render function — lays out the screen and dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title | new task | search | filters | status | tasks | key hints
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(3), // new task form
            Constraint::Length(3), // search box
            Constraint::Length(1), // filter buttons
            Constraint::Length(1), // status line
            Constraint::Min(1),    // task list
            Constraint::Length(1), // key hints
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        TITLE,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    controls::render_new_task_form(frame, app, chunks[1]);
    controls::render_search_box(frame, app, chunks[2]);
    controls::render_filter_buttons(frame, app, chunks[3]);

    // The visible slice is derived fresh for every frame
    let visible = app.visible();
    task_list::render_status_line(frame, app, visible.len(), chunks[4]);
    task_list::render_task_list(frame, app, &visible, chunks[5]);

    status_row::render_status_row(frame, app, chunks[6]);
}

/// Push spans for text with search match highlighting. With no matcher or no
/// matches, pushes a single span with `base_style`. Otherwise splits text at
/// match boundaries.
pub(crate) fn push_highlighted_spans(
    spans: &mut Vec<Span<'static>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    matcher: Option<&QueryMatcher>,
) {
    let Some(matcher) = matcher else {
        spans.push(Span::styled(text.to_string(), base_style));
        return;
    };

    let mut last_end = 0;
    for range in matcher.match_ranges(text) {
        if range.start > last_end {
            spans.push(Span::styled(
                text[last_end..range.start].to_string(),
                base_style,
            ));
        }
        last_end = range.end;
        spans.push(Span::styled(text[range].to_string(), highlight_style));
    }
    if last_end < text.len() || text.is_empty() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}
