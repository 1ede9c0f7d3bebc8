//! Syntax highlighting: one pass over the tree, one tag per colored range.

use serde::Serialize;

use syntax::ast::{self, AstNode};
use syntax::{Parse, SyntaxKind, SyntaxNode, TextRange};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightedRange {
    pub range: TextRange,
    pub tag: &'static str,
}

/// Tags every colorable element of the file, in source order. Syntax with
/// no tag simply has no entry; the editor falls back to its default style.
pub fn highlight(parse: &Parse) -> Vec<HighlightedRange> {
    let mut res = Vec::new();
    for node in parse.tree().root().descendants() {
        let tag = match node.kind() {
            SyntaxKind::Comment => "comment",
            SyntaxKind::String => "string",
            SyntaxKind::Attr => "attribute",
            SyntaxKind::NameRef => "text",
            SyntaxKind::Name => "function",
            SyntaxKind::IntNumber | SyntaxKind::Char => "literal",
            SyntaxKind::MacroCall => {
                // The `name!` head gets one combined tag; the plain idents
                // inside the path carry no tag of their own.
                if let Some(range) = macro_head_range(node) {
                    res.push(HighlightedRange { range, tag: "macro" });
                }
                continue;
            }
            kind if kind.is_keyword() => "keyword",
            _ => continue,
        };
        res.push(HighlightedRange {
            range: node.range(),
            tag,
        });
    }
    res
}

fn macro_head_range(node: SyntaxNode<'_>) -> Option<TextRange> {
    let call = ast::MacroCall::cast(node)?;
    let path = call.path()?;
    let excl = node.first_child_of_kind(SyntaxKind::Excl)?;
    Some(path.syntax().range().cover(excl.range()))
}
