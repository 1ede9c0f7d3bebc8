//! Flat file outline for breadcrumbs and symbol pickers.

use serde::Serialize;

use syntax::ast::{self, AstNode};
use syntax::{Parse, SyntaxKind, SyntaxNode, TextRange};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureNode {
    /// Index of the enclosing entry in the returned list.
    pub parent: Option<usize>,
    pub label: String,
    /// The declared name's range.
    pub navigation_range: TextRange,
    /// The whole declaration's range.
    pub node_range: TextRange,
    pub kind: SyntaxKind,
}

/// Single pass over the tree collecting named declarations in source order.
pub fn file_structure(parse: &Parse) -> Vec<StructureNode> {
    let mut out = Vec::new();
    collect(parse.tree().root(), None, &mut out);
    out
}

fn collect(node: SyntaxNode<'_>, parent: Option<usize>, out: &mut Vec<StructureNode>) {
    let own_idx = structure_node(node, parent).map(|entry| {
        out.push(entry);
        out.len() - 1
    });
    let parent_for_children = own_idx.or(parent);
    for child in node.children() {
        if !child.is_token() {
            collect(child, parent_for_children, out);
        }
    }
}

fn structure_node(node: SyntaxNode<'_>, parent: Option<usize>) -> Option<StructureNode> {
    let name = match node.kind() {
        SyntaxKind::FnDef => ast::FnDef::cast(node)?.name()?,
        SyntaxKind::StructDef => ast::StructDef::cast(node)?.name()?,
        SyntaxKind::EnumDef => ast::EnumDef::cast(node)?.name()?,
        SyntaxKind::TraitDef => ast::TraitDef::cast(node)?.name()?,
        SyntaxKind::ModDef => ast::ModDef::cast(node)?.name()?,
        SyntaxKind::ConstDef => ast::ConstDef::cast(node)?.name()?,
        SyntaxKind::ImplBlock => {
            let impl_block = ast::ImplBlock::cast(node)?;
            let target = impl_block.target_ref()?;
            let label = match impl_block.trait_ref() {
                Some(trait_ref) if trait_ref.syntax() != target.syntax() => {
                    format!("impl {} for {}", trait_ref.syntax().text(), target.syntax().text())
                }
                _ => format!("impl {}", target.syntax().text()),
            };
            return Some(StructureNode {
                parent,
                label,
                navigation_range: target.syntax().range(),
                node_range: node.range(),
                kind: node.kind(),
            });
        }
        _ => return None,
    };
    Some(StructureNode {
        parent,
        label: name.text().to_string(),
        navigation_range: name.syntax().range(),
        node_range: node.range(),
        kind: node.kind(),
    })
}
