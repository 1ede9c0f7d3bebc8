//! Add stubs for trait functions the impl does not define yet.
//!
//! Only required functions are stubbed: a trait function with a default body
//! is already satisfied.

use rustc_hash::FxHashSet;
use syntax::EditBuilder;
use syntax::ast::{self, AstNode};

use super::{Assist, AssistCtx, AssistId};

pub(super) fn add_missing_impl_members(ctx: &AssistCtx<'_>) -> Option<Assist> {
    let impl_block = ctx.node_at_cursor::<ast::ImplBlock>()?;
    let trait_name = impl_block.trait_ref()?.path()?.last_segment_text()?;
    let trait_def = ctx.trait_def_named(trait_name)?;
    let item_list = impl_block.item_list()?;

    let implemented: FxHashSet<&str> = impl_block
        .functions()
        .iter()
        .filter_map(|f| f.name())
        .map(|n| n.text())
        .collect();
    let missing: Vec<_> = trait_def
        .functions()
        .into_iter()
        .filter(|f| f.body().is_none())
        .filter(|f| {
            f.name()
                .map(|n| !implemented.contains(n.text()))
                .unwrap_or(false)
        })
        .collect();
    if missing.is_empty() {
        return None;
    }

    let indent = ctx.indent_at(impl_block.syntax().range().start);
    let inner = format!("{indent}    ");
    let mut buf = String::from("\n");
    for func in &missing {
        buf.push_str(&inner);
        buf.push_str(func.signature_text());
        buf.push_str(" {\n");
        buf.push_str(&inner);
        buf.push_str("    unimplemented!()\n");
        buf.push_str(&inner);
        buf.push_str("}\n");
    }
    buf.push_str(indent);

    // Just before the closing brace of the item list.
    let insert_at = item_list.syntax().range().end - 1;
    let mut builder = EditBuilder::new();
    builder.insert(insert_at, buf);
    builder.set_cursor(insert_at + 1 + inner.len() as u32);
    Some(Assist {
        id: AssistId("add_missing_impl_members"),
        label: "Add missing impl members".to_string(),
        target: impl_block.syntax().range(),
        edit: builder.finish(),
    })
}
