//! Unwrap a `dbg!(...)` invocation, leaving its argument in place.

use syntax::EditBuilder;
use syntax::ast::{self, AstNode};

use super::{Assist, AssistCtx, AssistId};

pub(super) fn remove_dbg(ctx: &AssistCtx<'_>) -> Option<Assist> {
    let macro_call = ctx.node_at_cursor::<ast::MacroCall>()?;
    if macro_call.path()?.last_segment_text()? != "dbg" {
        return None;
    }
    let token_tree = macro_call.token_tree()?;
    let tt_text = token_tree.text();
    // Delimiters are the tree's first and last byte.
    let inner = tt_text
        .strip_prefix(['(', '[', '{'])
        .and_then(|rest| rest.strip_suffix([')', ']', '}']))?
        .trim();
    if inner.is_empty() {
        return None;
    }

    let macro_range = macro_call.syntax().range();
    let mut builder = EditBuilder::new();
    builder.replace(macro_range, inner);
    builder.set_cursor(macro_range.start + inner.len() as u32);
    Some(Assist {
        id: AssistId("remove_dbg"),
        label: "Remove dbg!()".to_string(),
        target: macro_range,
        edit: builder.finish(),
    })
}
