//! Extract the selected expression into a `let` binding.
//!
//! Applies only when the selection covers a complete sub-expression inside a
//! block. The binding is inserted before the statement containing the
//! selection and the expression is replaced by the new name.

use syntax::ast::is_expr_kind;
use syntax::{EditBuilder, SyntaxKind, SyntaxNode, TextRange};

use super::{Assist, AssistCtx, AssistId};

const VAR_NAME: &str = "var_name";

pub(super) fn introduce_variable(ctx: &AssistCtx<'_>) -> Option<Assist> {
    let selection = ctx.selection()?;
    let expr = exact_expr(ctx, selection)?;
    let anchor = anchor_stmt(expr)?;
    let indent = ctx.indent_at(anchor.range().start);

    let mut builder = EditBuilder::new();
    if anchor.kind() == SyntaxKind::ExprStmt && is_whole_stmt_expr(anchor, expr) {
        // The selection is the entire statement: turn it into the binding.
        builder.insert(expr.range().start, format!("let {VAR_NAME} = "));
        builder.set_cursor(expr.range().start + 4);
    } else {
        let binding = format!("let {VAR_NAME} = {};\n{indent}", expr.text());
        builder.insert(anchor.range().start, binding);
        builder.replace(expr.range(), VAR_NAME);
        builder.set_cursor(anchor.range().start + 4);
    }
    Some(Assist {
        id: AssistId("introduce_variable"),
        label: "Introduce variable".to_string(),
        target: expr.range(),
        edit: builder.finish(),
    })
}

/// The expression node whose range is exactly the selection, if any.
fn exact_expr<'a>(ctx: &AssistCtx<'a>, selection: TextRange) -> Option<SyntaxNode<'a>> {
    ctx.tree()
        .covering_element(selection)
        .ancestors()
        .find(|node| !node.is_token() && node.range() == selection && is_expr_kind(node.kind()))
}

/// The statement-position ancestor the binding goes in front of.
fn anchor_stmt(expr: SyntaxNode<'_>) -> Option<SyntaxNode<'_>> {
    expr.ancestors().find(|node| {
        node.parent()
            .is_some_and(|parent| parent.kind() == SyntaxKind::Block)
    })
}

fn is_whole_stmt_expr(anchor: SyntaxNode<'_>, expr: SyntaxNode<'_>) -> bool {
    expr.parent().is_some_and(|parent| parent == anchor)
}
