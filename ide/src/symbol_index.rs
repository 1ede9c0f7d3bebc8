//! Workspace-wide symbol index with snapshot isolation.
//!
//! The index maps every named declaration to a [`SymbolEntry`]. Refreshes
//! replace a file's entries wholesale behind an `Arc` swap, so concurrent
//! searches always scan one consistent version and an abandoned search never
//! observes a partial refresh.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::debug;

use syntax::ast::{self, AstNode};
use syntax::{Parse, SyntaxKind, SyntaxNode, TextRange};

use crate::FileId;
use crate::query::{KindFilter, OriginFilter, Query};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum SymbolKind {
    Type,
    Function,
    Module,
    Other,
}

/// Whether a symbol comes from the primary project or a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Origin {
    Workspace,
    Dependency,
}

/// One declared symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolEntry {
    pub name: String,
    pub kind: SymbolKind,
    /// Enclosing module / impl-target path, `::`-joined, if any.
    pub container: Option<String>,
    pub origin: Origin,
    pub file_id: FileId,
    /// The declared name's range, for navigation.
    pub range: TextRange,
}

/// How the `*` qualifier treats workspace results.
///
/// The literal reading of the grammar is additive (`*` extends the corpus to
/// dependencies, keeping workspace hits); `Only` is the exclusive reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DependencyMode {
    #[default]
    Extend,
    Only,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Max results per query.
    pub limit: usize,
    pub dependency_mode: DependencyMode,
}

pub const DEFAULT_SEARCH_LIMIT: usize = 128;

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            limit: DEFAULT_SEARCH_LIMIT,
            dependency_mode: DependencyMode::Extend,
        }
    }
}

/// Shared, versioned index state. Mutated only through whole-file swaps.
pub(crate) struct SymbolIndex {
    inner: RwLock<Arc<IndexData>>,
}

#[derive(Debug, Default)]
pub(crate) struct IndexData {
    version: u64,
    ready: bool,
    by_file: FxHashMap<FileId, Arc<Vec<SymbolEntry>>>,
}

impl SymbolIndex {
    pub(crate) fn new() -> SymbolIndex {
        SymbolIndex {
            inner: RwLock::new(Arc::new(IndexData::default())),
        }
    }

    /// Atomically replaces all entries for `file_id`.
    pub(crate) fn replace_file(&self, file_id: FileId, symbols: Vec<SymbolEntry>) {
        let mut guard = self.inner.write();
        let old = guard.as_ref();
        let mut by_file = old.by_file.clone();
        by_file.insert(file_id, Arc::new(symbols));
        let next = IndexData {
            version: old.version + 1,
            ready: true,
            by_file,
        };
        debug!(version = next.version, file = file_id.0, "symbol index refreshed");
        *guard = Arc::new(next);
    }

    pub(crate) fn remove_file(&self, file_id: FileId) {
        let mut guard = self.inner.write();
        let old = guard.as_ref();
        let mut by_file = old.by_file.clone();
        by_file.remove(&file_id);
        *guard = Arc::new(IndexData {
            version: old.version + 1,
            ready: old.ready,
            by_file,
        });
    }

    pub(crate) fn snapshot(&self) -> Arc<IndexData> {
        self.inner.read().clone()
    }
}

impl IndexData {
    pub(crate) fn is_ready(&self) -> bool {
        self.ready
    }

    /// Ranked search over this snapshot.
    pub(crate) fn search(&self, query: &Query, config: &SearchConfig) -> Vec<SymbolEntry> {
        let fragment = query.text.to_lowercase();
        let mut hits: Vec<(MatchTier, &SymbolEntry)> = Vec::new();

        for entries in self.by_file.values() {
            for entry in entries.iter() {
                if !origin_admits(query.origin_filter, config.dependency_mode, entry.origin) {
                    continue;
                }
                if query.kind_filter == KindFilter::TypesOnly && entry.kind != SymbolKind::Type {
                    continue;
                }
                if let Some(tier) = match_fragment(&fragment, &entry.name) {
                    hits.push((tier, entry));
                }
            }
        }

        if fragment.is_empty() {
            // No fragment: everything ties, ordered by name alone.
            hits.sort_by(|a, b| a.1.name.cmp(&b.1.name));
        } else {
            hits.sort_by(|a, b| {
                a.0.cmp(&b.0)
                    .then_with(|| a.1.origin.cmp(&b.1.origin))
                    .then_with(|| a.1.name.cmp(&b.1.name))
            });
        }
        hits.truncate(config.limit);
        hits.into_iter().map(|(_, entry)| entry.clone()).collect()
    }
}

fn origin_admits(filter: OriginFilter, mode: DependencyMode, origin: Origin) -> bool {
    match filter {
        OriginFilter::WorkspaceOnly => origin == Origin::Workspace,
        OriginFilter::IncludeDependencies => match mode {
            DependencyMode::Extend => true,
            DependencyMode::Only => origin == Origin::Dependency,
        },
    }
}

/// Match quality, best first. Derived ordering makes lower variants rank
/// higher; gapped subsequences order by the sum of gaps between matched
/// characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchTier {
    Exact,
    Prefix,
    Substring,
    Subsequence { gap_sum: u32 },
}

fn match_fragment(fragment_lower: &str, name: &str) -> Option<MatchTier> {
    if fragment_lower.is_empty() {
        return Some(MatchTier::Exact);
    }
    let name_lower = name.to_lowercase();
    if name_lower == fragment_lower {
        return Some(MatchTier::Exact);
    }
    if name_lower.starts_with(fragment_lower) {
        return Some(MatchTier::Prefix);
    }
    if name_lower.contains(fragment_lower) {
        return Some(MatchTier::Substring);
    }

    // Subsequence scan: every fragment char must appear in order; the
    // penalty is the total distance skipped between matched characters.
    let mut gap_sum = 0u32;
    let mut last_pos: Option<usize> = None;
    let mut candidates = name_lower.chars().enumerate();
    'fragment: for fc in fragment_lower.chars() {
        for (pos, nc) in candidates.by_ref() {
            if nc == fc {
                if let Some(prev) = last_pos {
                    gap_sum += (pos - prev - 1) as u32;
                }
                last_pos = Some(pos);
                continue 'fragment;
            }
        }
        return None;
    }
    Some(MatchTier::Subsequence { gap_sum })
}

/// Derives all symbol entries for one parsed file.
pub(crate) fn file_symbols(file_id: FileId, origin: Origin, parse: &Parse) -> Vec<SymbolEntry> {
    let mut out = Vec::new();
    for node in parse.tree().root().descendants() {
        let Some((kind, name)) = declared_symbol(node) else {
            continue;
        };
        out.push(SymbolEntry {
            name: name.text().to_string(),
            kind,
            container: container_path(node),
            origin,
            file_id,
            range: name.syntax().range(),
        });
    }
    out
}

fn declared_symbol(node: SyntaxNode<'_>) -> Option<(SymbolKind, ast::Name<'_>)> {
    let (kind, name) = match node.kind() {
        SyntaxKind::FnDef => (SymbolKind::Function, ast::FnDef::cast(node)?.name()?),
        SyntaxKind::StructDef => (SymbolKind::Type, ast::StructDef::cast(node)?.name()?),
        SyntaxKind::EnumDef => (SymbolKind::Type, ast::EnumDef::cast(node)?.name()?),
        SyntaxKind::TraitDef => (SymbolKind::Type, ast::TraitDef::cast(node)?.name()?),
        SyntaxKind::ModDef => (SymbolKind::Module, ast::ModDef::cast(node)?.name()?),
        SyntaxKind::ConstDef => (SymbolKind::Other, ast::ConstDef::cast(node)?.name()?),
        _ => return None,
    };
    Some((kind, name))
}

fn container_path(node: SyntaxNode<'_>) -> Option<String> {
    let mut parts = Vec::new();
    for ancestor in node.ancestors().skip(1) {
        match ancestor.kind() {
            SyntaxKind::ModDef => {
                if let Some(name) = ast::ModDef::cast(ancestor).and_then(|m| m.name()) {
                    parts.push(name.text().to_string());
                }
            }
            SyntaxKind::ImplBlock => {
                if let Some(target) = ast::ImplBlock::cast(ancestor).and_then(|i| i.target_ref()) {
                    parts.push(target.syntax().text().to_string());
                }
            }
            SyntaxKind::TraitDef => {
                if let Some(name) = ast::TraitDef::cast(ancestor).and_then(|t| t.name()) {
                    parts.push(name.text().to_string());
                }
            }
            _ => {}
        }
    }
    if parts.is_empty() {
        return None;
    }
    parts.reverse();
    Some(parts.join("::"))
}

#[cfg(test)]
mod tests {
    use super::{MatchTier, match_fragment};

    #[test]
    fn match_tiers_rank_exact_prefix_substring_subsequence() {
        assert_eq!(match_fragment("foo", "Foo"), Some(MatchTier::Exact));
        assert_eq!(match_fragment("foo", "FooBar"), Some(MatchTier::Prefix));
        assert_eq!(match_fragment("foo", "xFooy"), Some(MatchTier::Substring));
        assert_eq!(
            match_fragment("fb", "FooBar"),
            Some(MatchTier::Subsequence { gap_sum: 2 })
        );
        assert_eq!(match_fragment("fz", "FooBar"), None);
    }

    #[test]
    fn gap_sum_orders_subsequences() {
        let tight = match_fragment("ab", "axb").unwrap();
        let loose = match_fragment("ab", "axxxb").unwrap();
        assert!(tight < loose);
    }
}
