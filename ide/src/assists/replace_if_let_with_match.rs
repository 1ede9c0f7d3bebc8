//! Rewrite an `if let` over one scrutinee as a `match`.
//!
//! Chained `else if let` branches on the same scrutinee fold into further
//! arms; anything else becomes the `_` arm. A missing `else` yields an empty
//! `_` arm so the rewrite never drops a path.

use syntax::EditBuilder;
use syntax::ast::{self, AstNode, ElseBranch};

use super::{Assist, AssistCtx, AssistId};

pub(super) fn replace_if_let_with_match(ctx: &AssistCtx<'_>) -> Option<Assist> {
    let if_expr = ctx.node_at_cursor::<ast::IfExpr>()?;
    let condition = if_expr.condition()?;
    if !condition.is_let() {
        return None;
    }
    let scrutinee = condition.expr()?.text();

    let mut arms = vec![(
        condition.pat()?.text().to_string(),
        if_expr.then_block()?.syntax().text().to_string(),
    )];
    let mut fallback = String::from("{}");
    let mut current = if_expr;
    loop {
        match current.else_branch() {
            None => break,
            Some(ElseBranch::Block(block)) => {
                fallback = block.syntax().text().to_string();
                break;
            }
            Some(ElseBranch::IfExpr(nested)) => {
                let same_scrutinee = nested.condition().is_some_and(|cond| {
                    cond.is_let() && cond.expr().is_some_and(|expr| expr.text() == scrutinee)
                });
                if !same_scrutinee {
                    fallback = nested.syntax().text().to_string();
                    break;
                }
                let cond = nested.condition()?;
                arms.push((
                    cond.pat()?.text().to_string(),
                    nested.then_block()?.syntax().text().to_string(),
                ));
                current = nested;
            }
        }
    }

    let indent = ctx.indent_at(if_expr.syntax().range().start);
    let inner = format!("{indent}    ");
    let mut buf = format!("match {scrutinee} {{\n");
    for (pat, body) in &arms {
        buf.push_str(&format!("{inner}{pat} => {body},\n"));
    }
    buf.push_str(&format!("{inner}_ => {fallback},\n{indent}}}"));

    let if_range = if_expr.syntax().range();
    let mut builder = EditBuilder::new();
    builder.replace(if_range, buf);
    builder.set_cursor(if_range.start);
    Some(Assist {
        id: AssistId("replace_if_let_with_match"),
        label: "Replace if let with match".to_string(),
        target: if_range,
        edit: builder.finish(),
    })
}
