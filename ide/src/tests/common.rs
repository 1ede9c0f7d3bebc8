//! Shared fixture helpers. Cursor positions in fixtures are marked with
//! `<|>`; selections with a pair of markers.

use syntax::TextRange;

use crate::{Analysis, AnalysisHost, FileId, Origin};

pub const CURSOR_MARKER: &str = "<|>";

pub const WORKSPACE_FILE: FileId = FileId(1);

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

/// One workspace file, snapshot taken.
pub fn single_file(text: &str) -> Analysis {
    let host = AnalysisHost::new();
    host.add_file(WORKSPACE_FILE, Origin::Workspace, text);
    host.analysis()
}

/// Applies `assist_id` at the `<|>` cursor in `before` and asserts the
/// resulting text plus cursor equal `after`.
pub fn check_assist(assist_id: &str, before: &str, after: &str) {
    let (offset, text) = extract_offset(before);
    check_assist_frange(assist_id, TextRange::empty(offset), &text, after);
}

/// Selection flavor: `before` carries two markers.
pub fn check_assist_range(assist_id: &str, before: &str, after: &str) {
    let (range, text) = extract_range(before);
    check_assist_frange(assist_id, range, &text, after);
}

fn check_assist_frange(assist_id: &str, frange: TextRange, text: &str, after: &str) {
    let analysis = single_file(text);
    let labels = analysis
        .list_assists(WORKSPACE_FILE, frange)
        .expect("listing failed");
    assert!(
        labels.iter().any(|l| l.id.0 == assist_id),
        "assist `{assist_id}` not offered; got {:?}",
        labels.iter().map(|l| l.id.0).collect::<Vec<_>>()
    );
    let edit = analysis
        .apply_assist(WORKSPACE_FILE, assist_id, &[frange])
        .expect("apply failed");
    let (applied, cursor) = edit
        .apply_rebasing(text, frange.start)
        .expect("edit application failed");
    assert_eq!(add_cursor(&applied, cursor), after);
}

/// Asserts the assist is not offered at the cursor.
pub fn check_assist_not_offered(assist_id: &str, before: &str) {
    let (offset, text) = extract_offset(before);
    let analysis = single_file(&text);
    let labels = analysis
        .list_assists(WORKSPACE_FILE, TextRange::empty(offset))
        .expect("listing failed");
    assert!(
        labels.iter().all(|l| l.id.0 != assist_id),
        "assist `{assist_id}` unexpectedly offered"
    );
}
