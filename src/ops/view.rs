use std::fmt::Write;
use std::ops::Range;

use chrono::NaiveDate;
use regex::Regex;

use crate::model::filter::FilterMode;
use crate::model::task::Task;

/// Case-insensitive literal matcher for the search query.
///
/// Filtering and highlighting both run it over the same lowercased text, so
/// a task passes the search exactly when it has something to highlight.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    re: Regex,
}

impl QueryMatcher {
    /// `None` for an empty query, which matches everything.
    pub fn new(query: &str) -> Option<Self> {
        if query.is_empty() {
            return None;
        }
        let re = Regex::new(&regex::escape(&fold_case(query))).ok()?;
        Some(QueryMatcher { re })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.re.is_match(&fold_case(text))
    }

    /// Byte ranges of the matches, as offsets into `text` itself.
    /// A match covering part of a character's lowercase form covers the
    /// whole character.
    pub fn match_ranges(&self, text: &str) -> Vec<Range<usize>> {
        let mut folded = String::with_capacity(text.len());
        // Source character span for every byte of `folded`
        let mut origin: Vec<Range<usize>> = Vec::with_capacity(text.len());
        for (start, c) in text.char_indices() {
            let span = start..start + c.len_utf8();
            for lower in c.to_lowercase() {
                folded.push(lower);
                origin.extend(std::iter::repeat_n(span.clone(), lower.len_utf8()));
            }
        }

        let mut ranges: Vec<Range<usize>> = Vec::new();
        for m in self.re.find_iter(&folded) {
            if m.start() == m.end() {
                continue;
            }
            let mut start = origin[m.start()].start;
            let end = origin[m.end() - 1].end;
            if let Some(last) = ranges.last() {
                start = start.max(last.end);
            }
            if start < end {
                ranges.push(start..end);
            }
        }
        ranges
    }
}

/// Per-character lowercase, so folded offsets map back to source characters
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Derive the visible tasks from the full list, keeping list order.
/// An empty query matches everything.
pub fn visible_tasks<'a>(tasks: &'a [Task], filter: FilterMode, query: &str) -> Vec<&'a Task> {
    let matcher = QueryMatcher::new(query);
    tasks
        .iter()
        .filter(|t| filter.admits(t))
        .filter(|t| matcher.as_ref().is_none_or(|m| m.is_match(&t.text)))
        .collect()
}

/// The line shown above the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// The list holds no tasks at all
    Empty,
    /// Tasks exist but none pass the filter and query
    NoMatches,
    /// Header with the formatted current date
    Header(String),
}

impl StatusLine {
    pub fn text(&self) -> String {
        match self {
            StatusLine::Empty => "---Task list is empty---".to_string(),
            StatusLine::NoMatches => "---No matching tasks found---".to_string(),
            StatusLine::Header(date) => format!("~~~Tasks Of The Day - {}~~~", date),
        }
    }
}

/// Pick the status line. `today` is read by the caller on every render.
pub fn status_line(
    list_len: usize,
    visible_len: usize,
    today: NaiveDate,
    date_format: &str,
) -> StatusLine {
    if visible_len > 0 {
        StatusLine::Header(format_date(today, date_format))
    } else if list_len == 0 {
        StatusLine::Empty
    } else {
        StatusLine::NoMatches
    }
}

/// Format a date, falling back to ISO 8601 if the format string is invalid
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(date_format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}
