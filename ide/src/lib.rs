//! Cursor-driven IDE core: assists, completion triggers, and a fuzzy
//! workspace symbol index, all protocol-agnostic.
//!
//! [`AnalysisHost`] owns the mutable state (file texts, parse trees, the
//! symbol index). [`Analysis`] is an immutable snapshot of that state; every
//! request runs against one snapshot, so a refresh never shifts the ground
//! under an in-flight request. All coordinates are UTF-8 byte offsets,
//! half-open `[start, end)`.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::error;

use syntax::ast::{self, AstNode};
use syntax::{EditSet, Parse, SyntaxKind, TextRange, parse};

mod assists;
mod highlight;
mod query;
mod structure;
mod symbol_index;
mod tests;
mod typing;

pub use assists::{Assist, AssistId, AssistLabel};
pub use highlight::{HighlightedRange, highlight};
pub use query::{KindFilter, OriginFilter, Query, parse_query};
pub use structure::{StructureNode, file_structure};
pub use symbol_index::{
    DEFAULT_SEARCH_LIMIT, DependencyMode, Origin, SearchConfig, SymbolEntry, SymbolKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FileId(pub u32);

/// Request-level failures. Everything else (no applicable assist, no
/// trigger, no matches) is a normal empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeError {
    /// The named assist does not match the current context.
    NotApplicable,
    /// The context changed between listing and applying.
    StaleContext,
    /// Unknown file, offset out of bounds, or not a char boundary.
    InvalidCursor,
    /// The index has not finished its initial build.
    IndexUnavailable,
}

impl IdeError {
    pub fn message(self) -> &'static str {
        match self {
            IdeError::NotApplicable => "Assist is not applicable here",
            IdeError::StaleContext => "Context changed since the assist was listed",
            IdeError::InvalidCursor => "Invalid cursor position",
            IdeError::IndexUnavailable => "Symbol index is not ready yet",
        }
    }
}

struct FileData {
    parse: Parse,
    origin: Origin,
}

/// Owns the analysis state and hands out [`Analysis`] snapshots.
pub struct AnalysisHost {
    files: RwLock<FxHashMap<FileId, Arc<FileData>>>,
    index: symbol_index::SymbolIndex,
    search_config: SearchConfig,
}

impl AnalysisHost {
    pub fn new() -> AnalysisHost {
        AnalysisHost::with_config(SearchConfig::default())
    }

    pub fn with_config(search_config: SearchConfig) -> AnalysisHost {
        AnalysisHost {
            files: RwLock::new(FxHashMap::default()),
            index: symbol_index::SymbolIndex::new(),
            search_config,
        }
    }

    /// Registers a file. Parsing and symbol extraction happen here; requests
    /// only read.
    pub fn add_file(&self, file_id: FileId, origin: Origin, text: &str) {
        self.install(file_id, origin, text);
    }

    /// Replaces a file's text, keeping its registered origin.
    pub fn change_file(&self, file_id: FileId, text: &str) {
        let origin = self
            .files
            .read()
            .get(&file_id)
            .map_or(Origin::Workspace, |data| data.origin);
        self.install(file_id, origin, text);
    }

    pub fn remove_file(&self, file_id: FileId) {
        self.files.write().remove(&file_id);
        self.index.remove_file(file_id);
    }

    /// A consistent point-in-time view of all files and the symbol index.
    pub fn analysis(&self) -> Analysis {
        Analysis {
            files: self.files.read().clone(),
            index: self.index.snapshot(),
            search_config: self.search_config,
        }
    }

    fn install(&self, file_id: FileId, origin: Origin, text: &str) {
        let parsed = parse(text);
        let symbols = symbol_index::file_symbols(file_id, origin, &parsed);
        self.files.write().insert(
            file_id,
            Arc::new(FileData {
                parse: parsed,
                origin,
            }),
        );
        self.index.replace_file(file_id, symbols);
    }
}

impl Default for AnalysisHost {
    fn default() -> AnalysisHost {
        AnalysisHost::new()
    }
}

/// Immutable request-scope snapshot. Cheap to take: file trees are shared
/// behind `Arc`.
pub struct Analysis {
    files: FxHashMap<FileId, Arc<FileData>>,
    index: Arc<symbol_index::IndexData>,
    search_config: SearchConfig,
}

impl Analysis {
    /// Applicable assists at the cursor, in registry order, without edit
    /// bodies.
    pub fn list_assists(
        &self,
        file_id: FileId,
        frange: TextRange,
    ) -> Result<Vec<AssistLabel>, IdeError> {
        let parsed = self.checked_parse(file_id, frange)?;
        Ok(assists::applicable_assists(parsed, frange)
            .iter()
            .map(AssistLabel::from)
            .collect())
    }

    /// Re-evaluates one named assist for each cursor and merges the edits.
    ///
    /// A provider that no longer matches reports [`IdeError::StaleContext`];
    /// overlapping per-cursor edits are an internal fault, logged and
    /// reported as [`IdeError::NotApplicable`].
    pub fn apply_assist(
        &self,
        file_id: FileId,
        assist_id: &str,
        cursors: &[TextRange],
    ) -> Result<EditSet, IdeError> {
        if !assists::is_known_assist(assist_id) || cursors.is_empty() {
            return Err(IdeError::NotApplicable);
        }
        let mut merged: Option<EditSet> = None;
        for &frange in cursors {
            let parsed = self.checked_parse(file_id, frange)?;
            let assist = assists::resolve_assist(parsed, frange, assist_id)
                .ok_or(IdeError::StaleContext)?;
            merged = Some(match merged {
                None => assist.edit,
                Some(acc) => acc.merge(assist.edit).map_err(|err| {
                    error!(
                        assist = assist_id,
                        "provider defect: cursor edits overlap: {}",
                        err.message()
                    );
                    IdeError::NotApplicable
                })?,
            });
        }
        merged.ok_or(IdeError::NotApplicable)
    }

    /// Classifies the last typed character; `Ok(None)` is the normal
    /// "no trigger" path.
    pub fn on_char_typed(
        &self,
        file_id: FileId,
        offset: u32,
        typed: char,
    ) -> Result<Option<EditSet>, IdeError> {
        let parsed = self.checked_parse(file_id, TextRange::empty(offset))?;
        let resolver = |name: &str| self.fn_has_params(name);
        Ok(typing::on_char_typed(parsed, offset, typed, &resolver))
    }

    /// Ranked symbol search per the `<fragment>[#][*]` grammar.
    pub fn search_symbols(&self, raw_query: &str) -> Result<Vec<SymbolEntry>, IdeError> {
        if !self.index.is_ready() {
            return Err(IdeError::IndexUnavailable);
        }
        let query = query::parse_query(raw_query);
        Ok(self.index.search(&query, &self.search_config))
    }

    /// The partner offset of the brace/bracket/paren at `offset`, if any.
    pub fn matching_brace(&self, file_id: FileId, offset: u32) -> Result<Option<u32>, IdeError> {
        let parsed = self.checked_parse(file_id, TextRange::empty(offset))?;
        Ok(matching_brace(parsed, offset))
    }

    /// Flat outline of the file's named declarations.
    pub fn file_structure(&self, file_id: FileId) -> Result<Vec<StructureNode>, IdeError> {
        let data = self.files.get(&file_id).ok_or(IdeError::InvalidCursor)?;
        Ok(structure::file_structure(&data.parse))
    }

    /// Tagged ranges for syntax coloring.
    pub fn highlight(&self, file_id: FileId) -> Result<Vec<HighlightedRange>, IdeError> {
        let data = self.files.get(&file_id).ok_or(IdeError::InvalidCursor)?;
        Ok(highlight::highlight(&data.parse))
    }

    fn checked_parse(&self, file_id: FileId, frange: TextRange) -> Result<&Parse, IdeError> {
        let data = self.files.get(&file_id).ok_or(IdeError::InvalidCursor)?;
        let text = data.parse.tree().text();
        let len = text.len() as u32;
        if frange.end < frange.start || frange.end > len {
            return Err(IdeError::InvalidCursor);
        }
        if !text.is_char_boundary(frange.start as usize)
            || !text.is_char_boundary(frange.end as usize)
        {
            return Err(IdeError::InvalidCursor);
        }
        Ok(&data.parse)
    }

    /// Whether a function with this name declares parameters, searching all
    /// files in the snapshot.
    fn fn_has_params(&self, name: &str) -> Option<bool> {
        self.files.values().find_map(|data| {
            data.parse
                .tree()
                .root()
                .descendants()
                .filter_map(ast::FnDef::cast)
                .find(|f| f.name().is_some_and(|n| n.text() == name))
                .map(|f| f.param_list().is_some_and(|p| p.has_params()))
        })
    }
}

const BRACE_KINDS: &[(SyntaxKind, SyntaxKind)] = &[
    (SyntaxKind::LParen, SyntaxKind::RParen),
    (SyntaxKind::LBrack, SyntaxKind::RBrack),
    (SyntaxKind::LCurly, SyntaxKind::RCurly),
];

/// Scans the sibling tokens of the brace at `offset`, counting nesting, and
/// returns the partner's offset.
fn matching_brace(parsed: &Parse, offset: u32) -> Option<u32> {
    let tree = parsed.tree();
    let token = tree
        .token_at_offset(offset)
        .filter(|t| brace_partner(t.kind()).is_some())
        .or_else(|| {
            tree.token_ending_at(offset)
                .filter(|t| brace_partner(t.kind()).is_some())
        })?;
    let (partner, forward) = brace_partner(token.kind())?;

    let mut depth = 0i32;
    let mut cursor = Some(token);
    while let Some(tok) = cursor {
        if tok.kind() == token.kind() {
            depth += 1;
        } else if tok.kind() == partner {
            depth -= 1;
            if depth == 0 {
                return Some(tok.range().start);
            }
        }
        cursor = if forward {
            tok.next_sibling()
        } else {
            tok.prev_sibling()
        };
    }
    None
}

fn brace_partner(kind: SyntaxKind) -> Option<(SyntaxKind, bool)> {
    BRACE_KINDS.iter().find_map(|&(open, close)| {
        if kind == open {
            Some((close, true))
        } else if kind == close {
            Some((open, false))
        } else {
            None
        }
    })
}
