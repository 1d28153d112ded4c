use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width of a string in terminal cells
pub fn cell_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut a string down to `max_cells`, ending with `…` when something was dropped.
pub fn fit_to_width(s: &str, max_cells: usize) -> String {
    if cell_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = cell_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme that ends at `offset`, if any
pub fn grapheme_before(s: &str, offset: usize) -> Option<usize> {
    s[..offset].grapheme_indices(true).next_back().map(|(i, _)| i)
}

/// Byte offset just past the grapheme that starts at `offset`, if any
pub fn grapheme_after(s: &str, offset: usize) -> Option<usize> {
    s[offset..]
        .graphemes(true)
        .next()
        .map(|g| offset + g.len())
}
