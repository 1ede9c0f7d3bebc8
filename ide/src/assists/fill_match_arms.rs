//! Fill an empty `match` over an enum with one arm per variant.

use syntax::SyntaxKind;
use syntax::ast::{self, AstNode, VariantShape};
use syntax::{EditBuilder, SyntaxNode};

use super::{Assist, AssistCtx, AssistId};

pub(super) fn fill_match_arms(ctx: &AssistCtx<'_>) -> Option<Assist> {
    let match_expr = ctx.node_at_cursor::<ast::MatchExpr>()?;
    let arm_list = match_expr.arm_list()?;
    if arm_list.arms().next().is_some() {
        return None;
    }
    let enum_def = resolve_enum(ctx, match_expr.scrutinee()?)?;
    let enum_name = enum_def.name()?.text();
    let variants: Vec<_> = enum_def.variant_list()?.variants().collect();
    if variants.is_empty() {
        return None;
    }

    let indent = ctx.indent_at(match_expr.syntax().range().start);
    let inner = format!("{indent}    ");
    let mut buf = String::from("{\n");
    for variant in &variants {
        let name = variant.name()?.text();
        let pattern = match variant.shape() {
            VariantShape::Unit => format!("{enum_name}::{name}"),
            VariantShape::Tuple(arity) => {
                let wildcards = vec!["_"; arity].join(", ");
                format!("{enum_name}::{name}({wildcards})")
            }
            VariantShape::Record(fields) => {
                let fields: Vec<_> = fields.iter().map(|f| f.text()).collect();
                format!("{enum_name}::{name} {{ {} }}", fields.join(", "))
            }
        };
        buf.push_str(&inner);
        buf.push_str(&pattern);
        buf.push_str(" => (),\n");
    }
    buf.push_str(indent);
    buf.push('}');

    let list_range = arm_list.syntax().range();
    let mut builder = EditBuilder::new();
    builder.replace(list_range, buf);
    builder.set_cursor(list_range.start + 2 + inner.len() as u32);
    Some(Assist {
        id: AssistId("fill_match_arms"),
        label: "Fill match arms".to_string(),
        target: match_expr.syntax().range(),
        edit: builder.finish(),
    })
}

/// Same-file scrutinee typing: a qualified path names the enum directly; a
/// bare binding is chased through `let` annotations and parameter types.
fn resolve_enum<'a>(ctx: &AssistCtx<'a>, scrutinee: SyntaxNode<'a>) -> Option<ast::EnumDef<'a>> {
    let path_expr = match scrutinee.kind() {
        SyntaxKind::PathExpr => ast::PathExpr::cast(scrutinee)?,
        SyntaxKind::CallExpr => {
            ast::PathExpr::cast(ast::CallExpr::cast(scrutinee)?.callee()?)?
        }
        _ => return None,
    };
    let path = path_expr.path()?;
    let mut segments = path.segments();
    let first = segments.next()?;
    if segments.next().is_some() {
        return ctx.enum_def_named(first.syntax().text());
    }
    let type_name = binding_type_name(ctx, first.syntax().text())?;
    ctx.enum_def_named(type_name)
}

fn binding_type_name<'a>(ctx: &AssistCtx<'a>, binding: &str) -> Option<&'a str> {
    ctx.tree().root().descendants().find_map(|node| {
        let (pat, type_ref) = match node.kind() {
            SyntaxKind::LetStmt => {
                let stmt = ast::LetStmt::cast(node)?;
                (stmt.pat()?, stmt.type_ref()?)
            }
            SyntaxKind::Param => {
                let param = ast::Param::cast(node)?;
                (param.pat()?, param.type_ref()?)
            }
            _ => return None,
        };
        let bind = ast::BindPat::cast(pat)?;
        if bind.name()?.text() != binding {
            return None;
        }
        type_ref.path()?.last_segment_text()
    })
}
