//! Typed views over [`SyntaxNode`].
//!
//! Each wrapper is a zero-cost cast gated on the node kind; accessors walk
//! children structurally and return `Option` when a piece is missing (the
//! tree may come from partially erroneous input).

use crate::kind::SyntaxKind;
use crate::tree::SyntaxNode;

pub trait AstNode<'a>: Sized {
    fn cast(node: SyntaxNode<'a>) -> Option<Self>;
    fn syntax(&self) -> SyntaxNode<'a>;
}

macro_rules! ast_node {
    ($(#[$attr:meta])* $name:ident, $kind:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name<'a>(SyntaxNode<'a>);

        impl<'a> AstNode<'a> for $name<'a> {
            fn cast(node: SyntaxNode<'a>) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then_some($name(node))
            }
            fn syntax(&self) -> SyntaxNode<'a> {
                self.0
            }
        }
    };
}

ast_node!(Name, Name);
ast_node!(NameRef, NameRef);
ast_node!(Path, Path);
ast_node!(PathSegment, PathSegment);
ast_node!(Visibility, Visibility);
ast_node!(Attr, Attr);

ast_node!(FnDef, FnDef);
ast_node!(StructDef, StructDef);
ast_node!(EnumDef, EnumDef);
ast_node!(TraitDef, TraitDef);
ast_node!(ImplBlock, ImplBlock);
ast_node!(ModDef, ModDef);
ast_node!(UseItem, UseItem);
ast_node!(ConstDef, ConstDef);
ast_node!(ItemList, ItemList);

ast_node!(VariantList, VariantList);
ast_node!(EnumVariant, EnumVariant);
ast_node!(RecordFieldList, RecordFieldList);
ast_node!(RecordField, RecordField);
ast_node!(TupleFieldList, TupleFieldList);
ast_node!(TupleField, TupleField);
ast_node!(ParamList, ParamList);
ast_node!(Param, Param);
ast_node!(TypeRef, TypeRef);
ast_node!(UseTree, UseTree);
ast_node!(UseTreeList, UseTreeList);

ast_node!(Block, Block);
ast_node!(LetStmt, LetStmt);
ast_node!(ExprStmt, ExprStmt);
ast_node!(MatchExpr, MatchExpr);
ast_node!(MatchArmList, MatchArmList);
ast_node!(MatchArm, MatchArm);
ast_node!(IfExpr, IfExpr);
ast_node!(Condition, Condition);
ast_node!(StructLit, StructLit);
ast_node!(StructLitFieldList, StructLitFieldList);
ast_node!(StructLitField, StructLitField);
ast_node!(CallExpr, CallExpr);
ast_node!(ArgList, ArgList);
ast_node!(MacroCall, MacroCall);
ast_node!(FieldExpr, FieldExpr);
ast_node!(PathExpr, PathExpr);
ast_node!(BindPat, BindPat);

/// Kinds that form patterns.
pub fn is_pat_kind(kind: SyntaxKind) -> bool {
    use SyntaxKind::*;
    matches!(
        kind,
        PlaceholderPat
            | BindPat
            | PathPat
            | TupleStructPat
            | RecordPat
            | TuplePat
            | RefPat
            | LiteralPat
            | RestPat
    )
}

/// Kinds that form expressions; used to decide whether a selection is a
/// complete sub-expression.
pub fn is_expr_kind(kind: SyntaxKind) -> bool {
    use SyntaxKind::*;
    matches!(
        kind,
        PathExpr
            | Literal
            | ParenExpr
            | TupleExpr
            | PrefixExpr
            | RefExpr
            | BinExpr
            | CallExpr
            | MethodCallExpr
            | FieldExpr
            | TryExpr
            | IfExpr
            | MatchExpr
            | WhileExpr
            | LoopExpr
            | ReturnExpr
            | StructLit
            | MacroCall
            | Block
    )
}

impl<'a> Name<'a> {
    pub fn text(&self) -> &'a str {
        self.0.text()
    }
}

impl<'a> Path<'a> {
    pub fn segments(&self) -> impl Iterator<Item = PathSegment<'a>> + '_ {
        self.0.children().filter_map(PathSegment::cast)
    }

    pub fn last_segment_text(&self) -> Option<&'a str> {
        self.segments().last().map(|seg| seg.syntax().text())
    }
}

fn child_name<'a>(node: SyntaxNode<'a>) -> Option<Name<'a>> {
    node.children().find_map(Name::cast)
}

fn child_of_kind<'a>(node: SyntaxNode<'a>, kind: SyntaxKind) -> Option<SyntaxNode<'a>> {
    node.first_child_of_kind(kind)
}

impl<'a> FnDef<'a> {
    pub fn name(&self) -> Option<Name<'a>> {
        child_name(self.0)
    }

    pub fn param_list(&self) -> Option<ParamList<'a>> {
        self.0.children().find_map(ParamList::cast)
    }

    pub fn body(&self) -> Option<Block<'a>> {
        self.0.children().find_map(Block::cast)
    }

    /// The declared signature text: everything up to the body or `;`.
    pub fn signature_text(&self) -> &'a str {
        let full = self.0.text();
        let sig_end = self
            .body()
            .map(|body| (body.syntax().range().start - self.0.range().start) as usize)
            .unwrap_or_else(|| full.rfind(';').unwrap_or(full.len()));
        full[..sig_end].trim_end()
    }
}

impl<'a> ParamList<'a> {
    pub fn params(&self) -> impl Iterator<Item = Param<'a>> + '_ {
        self.0.children().filter_map(Param::cast)
    }

    pub fn has_params(&self) -> bool {
        self.params().next().is_some()
    }
}

impl<'a> Param<'a> {
    pub fn pat(&self) -> Option<SyntaxNode<'a>> {
        self.0.children_non_trivia().next()
    }

    pub fn type_ref(&self) -> Option<TypeRef<'a>> {
        self.0.children().find_map(TypeRef::cast)
    }
}

impl<'a> StructDef<'a> {
    pub fn name(&self) -> Option<Name<'a>> {
        child_name(self.0)
    }

    pub fn record_fields(&self) -> Vec<RecordField<'a>> {
        self.0
            .children()
            .find_map(RecordFieldList::cast)
            .map(|list| list.fields().collect())
            .unwrap_or_default()
    }
}

impl<'a> RecordFieldList<'a> {
    pub fn fields(&self) -> impl Iterator<Item = RecordField<'a>> + '_ {
        self.0.children().filter_map(RecordField::cast)
    }
}

impl<'a> RecordField<'a> {
    pub fn name(&self) -> Option<Name<'a>> {
        child_name(self.0)
    }
}

impl<'a> EnumDef<'a> {
    pub fn name(&self) -> Option<Name<'a>> {
        child_name(self.0)
    }

    pub fn variant_list(&self) -> Option<VariantList<'a>> {
        self.0.children().find_map(VariantList::cast)
    }
}

impl<'a> VariantList<'a> {
    pub fn variants(&self) -> impl Iterator<Item = EnumVariant<'a>> + '_ {
        self.0.children().filter_map(EnumVariant::cast)
    }
}

/// Payload shape of one enum variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantShape<'a> {
    Unit,
    Tuple(usize),
    Record(Vec<Name<'a>>),
}

impl<'a> EnumVariant<'a> {
    pub fn name(&self) -> Option<Name<'a>> {
        child_name(self.0)
    }

    pub fn shape(&self) -> VariantShape<'a> {
        if let Some(tuple) = self.0.children().find_map(TupleFieldList::cast) {
            let arity = tuple
                .syntax()
                .children()
                .filter(|c| c.kind() == SyntaxKind::TupleField)
                .count();
            return VariantShape::Tuple(arity);
        }
        if let Some(record) = self.0.children().find_map(RecordFieldList::cast) {
            let names = record.fields().filter_map(|f| f.name()).collect();
            return VariantShape::Record(names);
        }
        VariantShape::Unit
    }
}

impl<'a> TraitDef<'a> {
    pub fn name(&self) -> Option<Name<'a>> {
        child_name(self.0)
    }

    pub fn functions(&self) -> Vec<FnDef<'a>> {
        self.0
            .children()
            .find_map(ItemList::cast)
            .map(|list| list.syntax().children().filter_map(FnDef::cast).collect())
            .unwrap_or_default()
    }
}

impl<'a> ImplBlock<'a> {
    /// For `impl Trait for Type`, the trait's type reference.
    pub fn trait_ref(&self) -> Option<TypeRef<'a>> {
        let has_for = self
            .0
            .children()
            .any(|c| c.kind() == SyntaxKind::ForKw);
        if !has_for {
            return None;
        }
        self.0.children().find_map(TypeRef::cast)
    }

    pub fn target_ref(&self) -> Option<TypeRef<'a>> {
        self.0.children().filter_map(TypeRef::cast).last()
    }

    pub fn item_list(&self) -> Option<ItemList<'a>> {
        self.0.children().find_map(ItemList::cast)
    }

    pub fn functions(&self) -> Vec<FnDef<'a>> {
        self.item_list()
            .map(|list| list.syntax().children().filter_map(FnDef::cast).collect())
            .unwrap_or_default()
    }
}

impl<'a> TypeRef<'a> {
    pub fn path(&self) -> Option<Path<'a>> {
        self.0.children().find_map(Path::cast)
    }
}

impl<'a> ModDef<'a> {
    pub fn name(&self) -> Option<Name<'a>> {
        child_name(self.0)
    }
}

impl<'a> ConstDef<'a> {
    pub fn name(&self) -> Option<Name<'a>> {
        child_name(self.0)
    }
}

impl<'a> UseItem<'a> {
    pub fn use_tree(&self) -> Option<UseTree<'a>> {
        self.0.children().find_map(UseTree::cast)
    }
}

impl<'a> UseTree<'a> {
    pub fn path(&self) -> Option<Path<'a>> {
        self.0.children().find_map(Path::cast)
    }

    pub fn tree_list(&self) -> Option<UseTreeList<'a>> {
        self.0.children().find_map(UseTreeList::cast)
    }
}

impl<'a> LetStmt<'a> {
    pub fn pat(&self) -> Option<SyntaxNode<'a>> {
        self.0
            .children_non_trivia()
            .find(|c| is_pat_kind(c.kind()))
    }

    pub fn type_ref(&self) -> Option<TypeRef<'a>> {
        self.0.children().find_map(TypeRef::cast)
    }
}

impl<'a> MatchExpr<'a> {
    pub fn scrutinee(&self) -> Option<SyntaxNode<'a>> {
        self.0
            .children_non_trivia()
            .find(|child| is_expr_kind(child.kind()))
    }

    pub fn arm_list(&self) -> Option<MatchArmList<'a>> {
        self.0.children().find_map(MatchArmList::cast)
    }
}

impl<'a> MatchArmList<'a> {
    pub fn arms(&self) -> impl Iterator<Item = MatchArm<'a>> + '_ {
        self.0.children().filter_map(MatchArm::cast)
    }
}

/// The `else` side of an `if`: either a trailing block or a chained `if`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElseBranch<'a> {
    Block(Block<'a>),
    IfExpr(IfExpr<'a>),
}

impl<'a> IfExpr<'a> {
    pub fn condition(&self) -> Option<Condition<'a>> {
        self.0.children().find_map(Condition::cast)
    }

    pub fn then_block(&self) -> Option<Block<'a>> {
        self.0.children().find_map(Block::cast)
    }

    pub fn else_branch(&self) -> Option<ElseBranch<'a>> {
        let mut saw_else = false;
        for child in self.0.children_non_trivia() {
            if child.kind() == SyntaxKind::ElseKw {
                saw_else = true;
                continue;
            }
            if saw_else {
                if let Some(block) = Block::cast(child) {
                    return Some(ElseBranch::Block(block));
                }
                if let Some(nested) = IfExpr::cast(child) {
                    return Some(ElseBranch::IfExpr(nested));
                }
            }
        }
        None
    }
}

impl<'a> Condition<'a> {
    /// The bound pattern of an `if let` / `while let` condition.
    pub fn pat(&self) -> Option<SyntaxNode<'a>> {
        if !self.is_let() {
            return None;
        }
        self.0
            .children_non_trivia()
            .find(|c| is_pat_kind(c.kind()))
    }

    pub fn expr(&self) -> Option<SyntaxNode<'a>> {
        self.0
            .children_non_trivia()
            .filter(|child| is_expr_kind(child.kind()))
            .last()
    }

    pub fn is_let(&self) -> bool {
        child_of_kind(self.0, SyntaxKind::LetKw).is_some()
    }
}

impl<'a> StructLit<'a> {
    pub fn path(&self) -> Option<Path<'a>> {
        self.0.children().find_map(Path::cast)
    }

    pub fn field_list(&self) -> Option<StructLitFieldList<'a>> {
        self.0.children().find_map(StructLitFieldList::cast)
    }
}

impl<'a> StructLitFieldList<'a> {
    pub fn fields(&self) -> impl Iterator<Item = StructLitField<'a>> + '_ {
        self.0.children().filter_map(StructLitField::cast)
    }
}

impl<'a> CallExpr<'a> {
    pub fn callee(&self) -> Option<SyntaxNode<'a>> {
        self.0
            .children_non_trivia()
            .find(|child| is_expr_kind(child.kind()))
    }
}

impl<'a> MacroCall<'a> {
    pub fn path(&self) -> Option<Path<'a>> {
        self.0.children().find_map(Path::cast)
    }

    pub fn token_tree(&self) -> Option<SyntaxNode<'a>> {
        child_of_kind(self.0, SyntaxKind::TokenTree)
    }
}

impl<'a> FieldExpr<'a> {
    pub fn receiver(&self) -> Option<SyntaxNode<'a>> {
        self.0
            .children_non_trivia()
            .find(|child| is_expr_kind(child.kind()))
    }
}

impl<'a> PathExpr<'a> {
    pub fn path(&self) -> Option<Path<'a>> {
        self.0.children().find_map(Path::cast)
    }
}

impl<'a> BindPat<'a> {
    pub fn name(&self) -> Option<Name<'a>> {
        child_name(self.0)
    }
}

/// Climbs from `node` to the first ancestor castable to `N`.
pub fn ancestor_of<'a, N: AstNode<'a>>(node: SyntaxNode<'a>) -> Option<N> {
    node.ancestors().find_map(N::cast)
}
