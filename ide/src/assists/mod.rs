//! Cursor-context source transformations.
//!
//! Each provider is a pure function from (tree, cursor/selection) to at most
//! one candidate. The registry is a fixed ordered list; its order decides
//! display tie-breaks, nothing else. Providers decline instead of guessing:
//! "not applicable" is never an error.
//!
//! Every listed candidate's edit is verified to reparse cleanly before it is
//! offered; a provider whose edit breaks the syntax is a defect, so the
//! candidate is logged and withheld rather than surfaced.

use serde::Serialize;
use tracing::error;

use syntax::ast::{self, AstNode};
use syntax::{EditSet, Parse, SyntaxNode, TextRange, parse};

mod add_missing_impl_members;
mod change_visibility;
mod fill_match_arms;
mod fill_struct_fields;
mod flip_comma;
mod introduce_variable;
mod remove_dbg;
mod replace_if_let_with_match;
mod split_import;

/// Stable provider identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssistId(pub &'static str);

/// A fully computed candidate, edit included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assist {
    pub id: AssistId,
    pub label: String,
    /// Range the editor should anchor the action to.
    pub target: TextRange,
    pub edit: EditSet,
}

/// The cheap listing payload: no edit body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistLabel {
    pub id: AssistId,
    pub label: String,
    pub target: TextRange,
}

impl From<&Assist> for AssistLabel {
    fn from(assist: &Assist) -> AssistLabel {
        AssistLabel {
            id: assist.id,
            label: assist.label.clone(),
            target: assist.target,
        }
    }
}

/// Read-only request context handed to every provider.
pub(crate) struct AssistCtx<'a> {
    parse: &'a Parse,
    frange: TextRange,
}

impl<'a> AssistCtx<'a> {
    pub(crate) fn new(parse: &'a Parse, frange: TextRange) -> AssistCtx<'a> {
        AssistCtx { parse, frange }
    }

    pub(crate) fn offset(&self) -> u32 {
        self.frange.start
    }

    /// The selection, when non-empty.
    pub(crate) fn selection(&self) -> Option<TextRange> {
        (!self.frange.is_empty()).then_some(self.frange)
    }

    pub(crate) fn source(&self) -> &'a str {
        self.parse.tree().text()
    }

    pub(crate) fn tree(&self) -> &'a syntax::SyntaxTree {
        self.parse.tree()
    }

    /// The token under the cursor, preferring a containing token and falling
    /// back to the one ending exactly at the cursor.
    pub(crate) fn token_at_cursor(&self) -> Option<SyntaxNode<'a>> {
        let tree = self.parse.tree();
        tree.token_at_offset(self.offset())
            .or_else(|| tree.token_ending_at(self.offset()))
    }

    /// Climbs from the cursor token to the first ancestor castable to `N`.
    pub(crate) fn node_at_cursor<N: AstNode<'a>>(&self) -> Option<N> {
        self.token_at_cursor()?.ancestors().find_map(N::cast)
    }

    pub(crate) fn enum_def_named(&self, name: &str) -> Option<ast::EnumDef<'a>> {
        self.find_def(name, ast::EnumDef::cast, |def| def.name())
    }

    pub(crate) fn struct_def_named(&self, name: &str) -> Option<ast::StructDef<'a>> {
        self.find_def(name, ast::StructDef::cast, |def| def.name())
    }

    pub(crate) fn trait_def_named(&self, name: &str) -> Option<ast::TraitDef<'a>> {
        self.find_def(name, ast::TraitDef::cast, |def| def.name())
    }

    fn find_def<N: Copy>(
        &self,
        name: &str,
        cast: impl Fn(SyntaxNode<'a>) -> Option<N>,
        def_name: impl Fn(&N) -> Option<ast::Name<'a>>,
    ) -> Option<N> {
        self.parse
            .tree()
            .root()
            .descendants()
            .filter_map(cast)
            .find(|def| def_name(def).is_some_and(|n| n.text() == name))
    }

    /// The whitespace prefix of the line containing `offset`.
    pub(crate) fn indent_at(&self, offset: u32) -> &'a str {
        let text = self.source();
        let line_start = text[..offset as usize]
            .rfind('\n')
            .map_or(0, |idx| idx + 1);
        let line = &text[line_start..];
        let indent_len = line.len() - line.trim_start_matches([' ', '\t']).len();
        &line[..indent_len]
    }
}

type AssistHandler = for<'a> fn(&AssistCtx<'a>) -> Option<Assist>;

/// Fixed registry; the order here is the display order.
pub(crate) const PROVIDERS: &[(AssistId, AssistHandler)] = &[
    (AssistId("fill_match_arms"), fill_match_arms::fill_match_arms),
    (AssistId("fill_struct_fields"), fill_struct_fields::fill_struct_fields),
    (
        AssistId("add_missing_impl_members"),
        add_missing_impl_members::add_missing_impl_members,
    ),
    (AssistId("flip_comma"), flip_comma::flip_comma),
    (AssistId("split_import"), split_import::split_import),
    (AssistId("introduce_variable"), introduce_variable::introduce_variable),
    (AssistId("change_visibility"), change_visibility::change_visibility),
    (AssistId("remove_dbg"), remove_dbg::remove_dbg),
    (
        AssistId("replace_if_let_with_match"),
        replace_if_let_with_match::replace_if_let_with_match,
    ),
];

/// Runs every provider in registry order and keeps validated candidates.
///
/// No label deduplication: two providers may legitimately offer different
/// edits at the same cursor.
pub(crate) fn applicable_assists(parse: &Parse, frange: TextRange) -> Vec<Assist> {
    let ctx = AssistCtx::new(parse, frange);
    PROVIDERS
        .iter()
        .filter_map(|(_, handler)| handler(&ctx))
        .filter(|assist| edit_is_sound(parse, assist))
        .collect()
}

/// Re-evaluates one named provider against the current context.
pub(crate) fn resolve_assist(parse: &Parse, frange: TextRange, id: &str) -> Option<Assist> {
    let (_, handler) = PROVIDERS.iter().find(|(aid, _)| aid.0 == id)?;
    let ctx = AssistCtx::new(parse, frange);
    let assist = handler(&ctx)?;
    edit_is_sound(parse, &assist).then_some(assist)
}

pub(crate) fn is_known_assist(id: &str) -> bool {
    PROVIDERS.iter().any(|(aid, _)| aid.0 == id)
}

/// Post-condition: applying the edit must yield text that reparses without
/// errors. A violation is an internal fault, never user-visible.
fn edit_is_sound(original: &Parse, assist: &Assist) -> bool {
    let applied = match assist.edit.apply(original.tree().text()) {
        Ok(applied) => applied,
        Err(err) => {
            error!(assist = assist.id.0, "provider defect: {}", err.message());
            return false;
        }
    };
    let reparsed = parse(&applied);
    if !reparsed.ok() {
        error!(
            assist = assist.id.0,
            errors = reparsed.errors().len(),
            "provider defect: edit does not reparse"
        );
        return false;
    }
    true
}
