//! Split a `use` path at the `::` under the cursor into a brace group.

use syntax::ast::{self, AstNode, ancestor_of};
use syntax::{EditBuilder, SyntaxKind};

use super::{Assist, AssistCtx, AssistId};

pub(super) fn split_import(ctx: &AssistCtx<'_>) -> Option<Assist> {
    let colon_colon = ctx.token_at_cursor()?;
    if colon_colon.kind() != SyntaxKind::ColonColon {
        return None;
    }
    let use_tree = ancestor_of::<ast::UseTree>(colon_colon)?;
    ancestor_of::<ast::UseItem>(colon_colon)?;
    // A `::` directly in front of an existing brace group is already split;
    // only separators inside the path qualify.
    let path = use_tree.path()?;
    let path_range = path.syntax().range();
    if !path_range.contains_range(colon_colon.range()) {
        return None;
    }
    // Nothing to group when the `::` ends the path.
    if colon_colon.range().end >= path_range.end {
        return None;
    }

    // Close after the whole tree so an existing group or alias folds into
    // the new braces instead of nesting a second `use`.
    let close_at = use_tree.syntax().range().end;
    let mut builder = EditBuilder::new();
    builder.insert(colon_colon.range().end, "{");
    builder.insert(close_at, "}");
    builder.set_cursor(colon_colon.range().end + 1);
    Some(Assist {
        id: AssistId("split_import"),
        label: "Split import".to_string(),
        target: colon_colon.range(),
        edit: builder.finish(),
    })
}
