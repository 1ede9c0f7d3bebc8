//! The text edit model: disjoint byte-range replacements plus an optional
//! resulting cursor, expressed as an offset into the post-edit text.
//!
//! Edits are values; nothing here mutates a tree. Appliers validate ranges
//! (in bounds, char boundaries, no overlap) before touching the source.

use crate::range::TextRange;

/// A single byte-range replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: TextRange,
    pub new_text: String,
}

/// Deterministic edit application errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    InvalidRange,
    OverlappingEdits,
}

impl EditError {
    pub fn message(self) -> &'static str {
        match self {
            EditError::InvalidRange => "Invalid edit range",
            EditError::OverlappingEdits => "Overlapping edits",
        }
    }
}

/// An ordered set of disjoint edits over one file plus an optional cursor
/// position in the post-edit text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditSet {
    edits: Vec<TextEdit>,
    cursor: Option<u32>,
}

impl EditSet {
    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    pub fn cursor(&self) -> Option<u32> {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Applies all edits to `source`, returning the new text.
    pub fn apply(&self, source: &str) -> Result<String, EditError> {
        validate(source, &self.edits)?;
        let mut updated = source.to_string();
        for edit in self.edits.iter().rev() {
            let start = edit.range.start as usize;
            let end = edit.range.end as usize;
            let mut next =
                String::with_capacity(updated.len() - (end - start) + edit.new_text.len());
            next.push_str(&updated[..start]);
            next.push_str(&edit.new_text);
            next.push_str(&updated[end..]);
            updated = next;
        }
        Ok(updated)
    }

    /// Applies the edits and rebases a pre-edit byte cursor through them.
    ///
    /// When the set carries its own resulting cursor, that wins. Otherwise:
    /// - edits fully before the cursor shift it by the byte delta
    /// - a cursor strictly inside a replaced range snaps to the edit start
    pub fn apply_rebasing(&self, source: &str, cursor: u32) -> Result<(String, u32), EditError> {
        let updated = self.apply(source)?;
        if let Some(own) = self.cursor {
            return Ok((updated, own));
        }
        let mut cursor = cursor;
        for edit in self.edits.iter().rev() {
            let replaced_len = edit.range.len();
            let inserted_len = edit.new_text.len() as u32;
            let delta = inserted_len as i64 - replaced_len as i64;
            if edit.range.end <= cursor {
                cursor = if delta >= 0 {
                    cursor.saturating_add(delta as u32)
                } else {
                    cursor.saturating_sub((-delta) as u32)
                };
            } else if edit.range.start < cursor && cursor < edit.range.end {
                cursor = edit.range.start;
            }
        }
        Ok((updated, cursor))
    }

    /// Merges two independently computed edit sets (e.g. per-cursor results).
    ///
    /// Fails when any two ranges overlap; the first set's cursor wins when
    /// both carry one.
    pub fn merge(mut self, other: EditSet) -> Result<EditSet, EditError> {
        for edit in &other.edits {
            if self.edits.iter().any(|e| e.range.overlaps(edit.range)) {
                return Err(EditError::OverlappingEdits);
            }
        }
        self.edits.extend(other.edits);
        self.edits
            .sort_by(|a, b| (a.range.start, a.range.end).cmp(&(b.range.start, b.range.end)));
        if self.cursor.is_none() {
            self.cursor = other.cursor;
        }
        Ok(self)
    }
}

fn validate(source: &str, edits: &[TextEdit]) -> Result<(), EditError> {
    let source_len = source.len() as u32;
    let mut prev_end = 0u32;
    for (index, edit) in edits.iter().enumerate() {
        if edit.range.end < edit.range.start || edit.range.end > source_len {
            return Err(EditError::InvalidRange);
        }
        if !source.is_char_boundary(edit.range.start as usize)
            || !source.is_char_boundary(edit.range.end as usize)
        {
            return Err(EditError::InvalidRange);
        }
        if index > 0 && edit.range.start < prev_end {
            return Err(EditError::OverlappingEdits);
        }
        prev_end = edit.range.end;
    }
    Ok(())
}

/// Incrementally collects edits; keeps them sorted on `finish`.
#[derive(Debug, Default)]
pub struct EditBuilder {
    edits: Vec<TextEdit>,
    cursor: Option<u32>,
}

impl EditBuilder {
    pub fn new() -> EditBuilder {
        EditBuilder::default()
    }

    pub fn replace(&mut self, range: TextRange, new_text: impl Into<String>) {
        self.edits.push(TextEdit {
            range,
            new_text: new_text.into(),
        });
    }

    pub fn insert(&mut self, offset: u32, text: impl Into<String>) {
        self.replace(TextRange::empty(offset), text);
    }

    pub fn delete(&mut self, range: TextRange) {
        self.replace(range, String::new());
    }

    /// Sets the resulting cursor, as an offset into the post-edit text.
    pub fn set_cursor(&mut self, offset: u32) {
        self.cursor = Some(offset);
    }

    pub fn finish(mut self) -> EditSet {
        self.edits
            .sort_by(|a, b| (a.range.start, a.range.end).cmp(&(b.range.start, b.range.end)));
        EditSet {
            edits: self.edits,
            cursor: self.cursor,
        }
    }
}
