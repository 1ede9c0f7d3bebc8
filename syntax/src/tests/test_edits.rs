use crate::{EditBuilder, EditError, TextRange};

#[test]
fn apply_replaces_in_descending_order() {
    let mut builder = EditBuilder::new();
    builder.replace(TextRange::new(0, 1), "X");
    builder.replace(TextRange::new(2, 3), "YZ");
    let edits = builder.finish();
    assert_eq!(edits.apply("abcd").unwrap(), "XbYZd");
}

#[test]
fn apply_rejects_overlapping_ranges() {
    let mut builder = EditBuilder::new();
    builder.replace(TextRange::new(1, 3), "X");
    builder.replace(TextRange::new(2, 4), "Y");
    let err = builder.finish().apply("abcd").unwrap_err();
    assert_eq!(err, EditError::OverlappingEdits);
}

#[test]
fn apply_rejects_out_of_bounds_range() {
    let mut builder = EditBuilder::new();
    builder.replace(TextRange::new(0, 10), "X");
    let err = builder.finish().apply("abc").unwrap_err();
    assert_eq!(err, EditError::InvalidRange);
}

#[test]
fn apply_rejects_non_char_boundary() {
    let mut builder = EditBuilder::new();
    builder.replace(TextRange::new(0, 1), "X");
    // `é` is two bytes; offset 1 splits it.
    let err = builder.finish().apply("é").unwrap_err();
    assert_eq!(err, EditError::InvalidRange);
}

#[test]
fn rebase_shifts_cursor_after_edit() {
    let mut builder = EditBuilder::new();
    builder.replace(TextRange::new(1, 2), "XYZ");
    let (text, cursor) = builder.finish().apply_rebasing("abcd", 3).unwrap();
    assert_eq!(text, "aXYZcd");
    assert_eq!(cursor, 5);
}

#[test]
fn rebase_snaps_cursor_inside_replaced_range() {
    let mut builder = EditBuilder::new();
    builder.replace(TextRange::new(1, 3), "Q");
    let (_, cursor) = builder.finish().apply_rebasing("abcd", 2).unwrap();
    assert_eq!(cursor, 1);
}

#[test]
fn explicit_cursor_wins_over_rebasing() {
    let mut builder = EditBuilder::new();
    builder.insert(0, "xx");
    builder.set_cursor(1);
    let (_, cursor) = builder.finish().apply_rebasing("abcd", 3).unwrap();
    assert_eq!(cursor, 1);
}

#[test]
fn merge_combines_disjoint_sets() {
    let mut a = EditBuilder::new();
    a.replace(TextRange::new(0, 1), "X");
    let mut b = EditBuilder::new();
    b.replace(TextRange::new(2, 3), "Y");
    let merged = a.finish().merge(b.finish()).unwrap();
    assert_eq!(merged.apply("abcd").unwrap(), "XbYd");
}

#[test]
fn merge_fails_on_overlap() {
    let mut a = EditBuilder::new();
    a.replace(TextRange::new(0, 2), "X");
    let mut b = EditBuilder::new();
    b.replace(TextRange::new(1, 3), "Y");
    let err = a.finish().merge(b.finish()).unwrap_err();
    assert_eq!(err, EditError::OverlappingEdits);
}

#[test]
fn two_insertions_at_same_offset_do_not_overlap() {
    // Zero-length ranges at the same offset are disjoint under the
    // half-open overlap rule; merge keeps both.
    let mut a = EditBuilder::new();
    a.insert(1, "X");
    let mut b = EditBuilder::new();
    b.insert(1, "Y");
    let merged = a.finish().merge(b.finish()).unwrap();
    assert_eq!(merged.edits().len(), 2);
}
