//! Cycle an item's visibility: private, `pub(crate)`, `pub`, private again.

use syntax::ast::{self, AstNode, ancestor_of};
use syntax::{EditBuilder, SyntaxKind, SyntaxNode, TextRange};

use super::{Assist, AssistCtx, AssistId};

pub(super) fn change_visibility(ctx: &AssistCtx<'_>) -> Option<Assist> {
    let token = ctx.token_at_cursor()?;
    let item = item_for_token(token)?;
    let vis = item.children().find_map(ast::Visibility::cast);

    let mut builder = EditBuilder::new();
    let (label, target) = match vis {
        None => {
            let keyword = defining_keyword(item)?;
            builder.insert(keyword.range().start, "pub(crate) ");
            builder.set_cursor(keyword.range().start);
            ("Change visibility to pub(crate)", keyword.range())
        }
        Some(vis) if vis.syntax().text() == "pub(crate)" => {
            builder.replace(vis.syntax().range(), "pub");
            builder.set_cursor(vis.syntax().range().start);
            ("Change visibility to pub", vis.syntax().range())
        }
        Some(vis) if vis.syntax().text() == "pub" => {
            let mut range = vis.syntax().range();
            // Eat the following space too.
            if ctx.source().as_bytes().get(range.end as usize) == Some(&b' ') {
                range = TextRange::new(range.start, range.end + 1);
            }
            builder.delete(range);
            builder.set_cursor(range.start);
            ("Make private", vis.syntax().range())
        }
        Some(_) => return None,
    };
    Some(Assist {
        id: AssistId("change_visibility"),
        label: label.to_string(),
        target,
        edit: builder.finish(),
    })
}

/// The item whose visibility the cursor addresses: the cursor must sit on
/// the item's defining keyword or on its visibility.
fn item_for_token(token: SyntaxNode<'_>) -> Option<SyntaxNode<'_>> {
    if let Some(vis) = ancestor_of::<ast::Visibility>(token) {
        return vis.syntax().parent();
    }
    if !is_defining_keyword(token.kind()) {
        return None;
    }
    let parent = token.parent()?;
    parent.kind().is_item().then_some(parent)
}

fn defining_keyword(item: SyntaxNode<'_>) -> Option<SyntaxNode<'_>> {
    item.children()
        .find(|child| child.is_token() && is_defining_keyword(child.kind()))
}

fn is_defining_keyword(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::FnKw
            | SyntaxKind::StructKw
            | SyntaxKind::EnumKw
            | SyntaxKind::TraitKw
            | SyntaxKind::ModKw
            | SyntaxKind::UseKw
            | SyntaxKind::ConstKw
            | SyntaxKind::StaticKw
    )
}
