//! Shared fixture helpers. Cursor positions in fixtures are marked with
//! `<|>`; selections with a pair of markers.

use crate::TextRange;

pub const CURSOR_MARKER: &str = "<|>";

/// Extracts a single `<|>` marker, returning its byte offset and the text
/// with the marker removed.
pub fn extract_offset(text: &str) -> (u32, String) {
    let idx = text
        .find(CURSOR_MARKER)
        .expect("fixture must contain a <|> marker");
    let mut cleaned = String::with_capacity(text.len() - CURSOR_MARKER.len());
    cleaned.push_str(&text[..idx]);
    cleaned.push_str(&text[idx + CURSOR_MARKER.len()..]);
    (idx as u32, cleaned)
}

/// Extracts a pair of `<|>` markers as a selection range.
pub fn extract_range(text: &str) -> (TextRange, String) {
    let (start, rest) = extract_offset(text);
    let (end, cleaned) = extract_offset(&rest);
    assert!(start <= end, "selection markers out of order");
    (TextRange::new(start, end), cleaned)
}

/// Re-inserts a `<|>` marker at `offset` for readable assertions.
pub fn add_cursor(text: &str, offset: u32) -> String {
    let offset = offset as usize;
    let mut out = String::with_capacity(text.len() + CURSOR_MARKER.len());
    out.push_str(&text[..offset]);
    out.push_str(CURSOR_MARKER);
    out.push_str(&text[offset..]);
    out
}

#[test]
fn extract_and_add_cursor_are_inverses() {
    let (offset, text) = extract_offset("fn ma<|>in() {}");
    assert_eq!(offset, 5);
    assert_eq!(text, "fn main() {}");
    assert_eq!(add_cursor(&text, offset), "fn ma<|>in() {}");
}
