//! Fill an empty struct literal with all declared fields.

use syntax::EditBuilder;
use syntax::ast::{self, AstNode};

use super::{Assist, AssistCtx, AssistId};

pub(super) fn fill_struct_fields(ctx: &AssistCtx<'_>) -> Option<Assist> {
    let lit = ctx.node_at_cursor::<ast::StructLit>()?;
    let field_list = lit.field_list()?;
    if field_list.fields().next().is_some() {
        return None;
    }
    let struct_name = lit.path()?.last_segment_text()?;
    let struct_def = ctx.struct_def_named(struct_name)?;
    let fields = struct_def.record_fields();
    if fields.is_empty() {
        return None;
    }

    let indent = ctx.indent_at(lit.syntax().range().start);
    let inner = format!("{indent}    ");
    let mut buf = String::from("{\n");
    for field in &fields {
        let name = field.name()?.text();
        buf.push_str(&inner);
        buf.push_str(name);
        buf.push_str(": (),\n");
    }
    buf.push_str(indent);
    buf.push('}');

    let list_range = field_list.syntax().range();
    let mut builder = EditBuilder::new();
    builder.replace(list_range, buf);
    builder.set_cursor(list_range.start + 2 + inner.len() as u32);
    Some(Assist {
        id: AssistId("fill_struct_fields"),
        label: "Fill struct fields".to_string(),
        target: lit.syntax().range(),
        edit: builder.finish(),
    })
}
