use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells,
/// appending `…` if anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let gw = UnicodeWidthStr::width(g);
        if used + gw > budget {
            break;
        }
        used += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the next grapheme boundary after `offset`, or None at the end.
pub fn next_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset >= s.len() {
        return None;
    }
    s[offset..].graphemes(true).next().map(|g| offset + g.len())
}

/// Byte offset of the previous grapheme boundary before `offset`, or None at the start.
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset == 0 {
        return None;
    }
    s[..offset].grapheme_indices(true).last().map(|(i, _)| i)
}

/// The grapheme cluster starting at `offset`, or "" past the end.
pub fn grapheme_at(s: &str, offset: usize) -> &str {
    s.get(offset..)
        .and_then(|rest| rest.graphemes(true).next())
        .unwrap_or("")
}

/// Display column of a byte offset, clamped to the string length.
pub fn byte_to_col(s: &str, offset: usize) -> usize {
    display_width(&s[..offset.min(s.len())])
}

/// Byte offset where display column `col` begins, snapped to the start of
/// the grapheme that covers it. Past the end returns `s.len()`.
pub fn col_to_byte(s: &str, col: usize) -> usize {
    let mut acc = 0;
    for (i, g) in s.grapheme_indices(true) {
        let gw = UnicodeWidthStr::width(g);
        if acc + gw > col {
            return i;
        }
        acc += gw;
    }
    s.len()
}

/// Start of the word at or before `offset`, whitespace-delimited.
pub fn word_boundary_left(s: &str, offset: usize) -> usize {
    let trimmed = s[..offset].trim_end();
    match trimmed.char_indices().rev().find(|(_, c)| c.is_whitespace()) {
        Some((i, c)) => i + c.len_utf8(),
        None => 0,
    }
}

/// Start of the next word after `offset`, whitespace-delimited.
/// Returns `s.len()` when no further word exists.
pub fn word_boundary_right(s: &str, offset: usize) -> usize {
    let mut gap_seen = false;
    for (i, c) in s[offset..].char_indices() {
        if c.is_whitespace() {
            gap_seen = true;
        } else if gap_seen {
            return offset + i;
        }
    }
    s.len()
}
