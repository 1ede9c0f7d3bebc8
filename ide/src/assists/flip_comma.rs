//! Swap the two list elements around the comma under the cursor.

use syntax::{EditBuilder, SyntaxKind};

use super::{Assist, AssistCtx, AssistId};

pub(super) fn flip_comma(ctx: &AssistCtx<'_>) -> Option<Assist> {
    let comma = ctx.token_at_cursor()?;
    if comma.kind() != SyntaxKind::Comma {
        return None;
    }
    let prev = comma.prev_sibling_non_trivia()?;
    let next = comma.next_sibling_non_trivia()?;
    // A trailing comma has a delimiter token as its neighbor.
    if prev.is_token() || next.is_token() {
        return None;
    }

    let mut builder = EditBuilder::new();
    builder.replace(prev.range(), next.text());
    builder.replace(next.range(), prev.text());
    Some(Assist {
        id: AssistId("flip_comma"),
        label: "Flip comma".to_string(),
        target: comma.range(),
        edit: builder.finish(),
    })
}
