use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::tui::theme::Theme;
use crate::util::text::{grapheme_after, grapheme_before};

/// A single-line text buffer with a cursor (byte offset, always on a
/// grapheme boundary).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field seeded with text, cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let value = text.into();
        let cursor = value.len();
        TextField { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the grapheme before the cursor
    pub fn backspace(&mut self) {
        if let Some(start) = grapheme_before(&self.value, self.cursor) {
            self.value.replace_range(start..self.cursor, "");
            self.cursor = start;
        }
    }

    /// Remove the grapheme under the cursor
    pub fn delete(&mut self) {
        if let Some(end) = grapheme_after(&self.value, self.cursor) {
            self.value.replace_range(self.cursor..end, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = grapheme_before(&self.value, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = grapheme_after(&self.value, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Take the contents, leaving the field empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    /// Apply an editing key. Returns false for keys the field does not handle.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => self.insert(c),
            (_, KeyCode::Backspace) => self.backspace(),
            (_, KeyCode::Delete) => self.delete(),
            (_, KeyCode::Left) => self.move_left(),
            (_, KeyCode::Right) => self.move_right(),
            (_, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => self.cursor = 0,
            (_, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
                self.cursor = self.value.len()
            }
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => self.clear(),
            _ => return false,
        }
        true
    }

    /// Render the field content. An empty field shows the placeholder dimmed;
    /// a focused field gets a block cursor.
    pub fn line<'a>(&self, placeholder: &'a str, focused: bool, theme: &Theme) -> Line<'a> {
        let bg = theme.background;
        let text_style = Style::default().fg(theme.text_bright).bg(bg);
        let cursor_style = Style::default().fg(theme.background).bg(theme.highlight);

        if self.value.is_empty() {
            let mut spans = Vec::new();
            if focused {
                spans.push(Span::styled(" ", cursor_style));
            }
            spans.push(Span::styled(placeholder, Style::default().fg(theme.dim).bg(bg)));
            return Line::from(spans);
        }

        if !focused {
            return Line::from(Span::styled(self.value.clone(), text_style));
        }

        let before = self.value[..self.cursor].to_string();
        let (under, after) = match grapheme_after(&self.value, self.cursor) {
            Some(end) => (
                self.value[self.cursor..end].to_string(),
                self.value[end..].to_string(),
            ),
            None => (" ".to_string(), String::new()),
        };
        Line::from(vec![
            Span::styled(before, text_style),
            Span::styled(under, cursor_style),
            Span::styled(after, text_style),
        ])
    }
}
