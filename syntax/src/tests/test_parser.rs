use crate::ast::{self, AstNode};
use crate::{SyntaxKind, TextRange, parse};

fn root_text_roundtrips(text: &str) {
    let parsed = parse(text);
    assert_eq!(parsed.tree().text(), text);
    assert_eq!(parsed.tree().root().text(), text);
}

#[test]
fn parses_simple_file_without_errors() {
    let parsed = parse("fn main() { let x = 1 + 2; }");
    assert!(parsed.ok(), "unexpected errors: {:?}", parsed.errors());
}

#[test]
fn tree_is_lossless_even_with_errors() {
    let text = "fn main( { @@ let x = ; }";
    let parsed = parse(text);
    assert!(!parsed.ok());
    root_text_roundtrips(text);
}

#[test]
fn lossless_for_typical_items() {
    root_text_roundtrips(
        "use std::collections::HashMap;\n\npub struct Foo { a: i32, b: String }\n\nfn f(x: Foo) -> i32 { x.a }\n",
    );
}

#[test]
fn enum_variants_in_declaration_order() {
    let parsed = parse("enum E { A, B(String), C { x: usize } }");
    assert!(parsed.ok(), "unexpected errors: {:?}", parsed.errors());
    let root = parsed.tree().root();
    let enum_def = root
        .descendants()
        .find_map(ast::EnumDef::cast)
        .expect("expected an enum");
    let variants: Vec<_> = enum_def
        .variant_list()
        .expect("expected a variant list")
        .variants()
        .collect();
    let names: Vec<_> = variants
        .iter()
        .map(|v| v.name().expect("variant name").text())
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    assert_eq!(variants[0].shape(), ast::VariantShape::Unit);
    assert_eq!(variants[1].shape(), ast::VariantShape::Tuple(1));
    match variants[2].shape() {
        ast::VariantShape::Record(fields) => {
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].text(), "x");
        }
        other => panic!("expected record shape, got {other:?}"),
    }
}

#[test]
fn trait_members_and_default_bodies() {
    let parsed = parse("trait T { fn a(&self); fn b(&self) { } }");
    assert!(parsed.ok(), "unexpected errors: {:?}", parsed.errors());
    let trait_def = parsed
        .tree()
        .root()
        .descendants()
        .find_map(ast::TraitDef::cast)
        .expect("expected a trait");
    let fns = trait_def.functions();
    assert_eq!(fns.len(), 2);
    assert!(fns[0].body().is_none());
    assert!(fns[1].body().is_some());
    assert_eq!(fns[0].signature_text(), "fn a(&self)");
}

#[test]
fn impl_trait_for_type() {
    let parsed = parse("impl T for S { fn a(&self) { } }");
    assert!(parsed.ok(), "unexpected errors: {:?}", parsed.errors());
    let impl_block = parsed
        .tree()
        .root()
        .descendants()
        .find_map(ast::ImplBlock::cast)
        .expect("expected an impl");
    let trait_ref = impl_block.trait_ref().expect("expected a trait ref");
    assert_eq!(trait_ref.syntax().text(), "T");
    assert_eq!(impl_block.functions().len(), 1);
}

#[test]
fn inherent_impl_has_no_trait_ref() {
    let parsed = parse("impl S { fn a(&self) { } }");
    let impl_block = parsed
        .tree()
        .root()
        .descendants()
        .find_map(ast::ImplBlock::cast)
        .expect("expected an impl");
    assert!(impl_block.trait_ref().is_none());
}

#[test]
fn if_let_with_else_chain() {
    let parsed = parse("fn f() { if let Some(x) = opt { a() } else if let None = opt { b() } else { c() } }");
    assert!(parsed.ok(), "unexpected errors: {:?}", parsed.errors());
    let if_expr = parsed
        .tree()
        .root()
        .descendants()
        .find_map(ast::IfExpr::cast)
        .expect("expected an if");
    let cond = if_expr.condition().expect("condition");
    assert!(cond.is_let());
    assert_eq!(cond.pat().expect("pattern").text(), "Some(x)");
    assert_eq!(cond.expr().expect("scrutinee").text(), "opt");
    match if_expr.else_branch() {
        Some(ast::ElseBranch::IfExpr(_)) => {}
        other => panic!("expected a chained if, got {other:?}"),
    }
}

#[test]
fn use_tree_with_brace_group() {
    let text = "use foo::{bar, baz::qux};";
    let parsed = parse(text);
    assert!(parsed.ok(), "unexpected errors: {:?}", parsed.errors());
    root_text_roundtrips(text);
    let use_item = parsed
        .tree()
        .root()
        .descendants()
        .find_map(ast::UseItem::cast)
        .expect("expected a use item");
    let tree = use_item.use_tree().expect("use tree");
    assert_eq!(tree.path().expect("path").last_segment_text(), Some("foo"));
    assert!(tree.tree_list().is_some());
}

#[test]
fn match_with_arms() {
    let parsed = parse("fn f() { match x { A => 1, B(y) => 2, _ => 3 } }");
    assert!(parsed.ok(), "unexpected errors: {:?}", parsed.errors());
    let match_expr = parsed
        .tree()
        .root()
        .descendants()
        .find_map(ast::MatchExpr::cast)
        .expect("expected a match");
    assert_eq!(match_expr.scrutinee().expect("scrutinee").text(), "x");
    let arms = match_expr.arm_list().expect("arm list").arms().count();
    assert_eq!(arms, 3);
}

#[test]
fn macro_call_with_token_tree() {
    let parsed = parse("fn f() { dbg!(1 + 2); }");
    assert!(parsed.ok(), "unexpected errors: {:?}", parsed.errors());
    let mac = parsed
        .tree()
        .root()
        .descendants()
        .find_map(ast::MacroCall::cast)
        .expect("expected a macro call");
    assert_eq!(mac.path().expect("path").last_segment_text(), Some("dbg"));
    assert_eq!(mac.token_tree().expect("token tree").text(), "(1 + 2)");
}

#[test]
fn keyword_after_dot_keeps_receiver_in_tree() {
    // `expr.if` is not valid source, but the completion engine needs the
    // receiver to survive in the tree.
    let parsed = parse("fn f() { foo().if }");
    assert!(!parsed.ok());
    let field = parsed
        .tree()
        .root()
        .descendants()
        .find_map(ast::FieldExpr::cast)
        .expect("expected a field expr");
    assert_eq!(field.receiver().expect("receiver").text(), "foo()");
}

#[test]
fn covering_element_finds_smallest_node() {
    let text = "fn f() { g(1 + 2) }";
    let parsed = parse(text);
    let start = text.find("1 + 2").unwrap() as u32;
    let range = TextRange::new(start, start + 5);
    let covering = parsed.tree().covering_element(range);
    assert_eq!(covering.kind(), SyntaxKind::BinExpr);
    assert_eq!(covering.range(), range);
}

#[test]
fn token_at_offset_respects_half_open_ranges() {
    let text = "fn f() {}";
    let parsed = parse(text);
    let token = parsed.tree().token_at_offset(0).expect("token");
    assert_eq!(token.kind(), SyntaxKind::FnKw);
    let token = parsed.tree().token_ending_at(2).expect("token");
    assert_eq!(token.kind(), SyntaxKind::FnKw);
    assert!(parsed.tree().token_at_offset(text.len() as u32).is_none());
}

#[test]
fn parens_group_and_tuples_are_distinct() {
    fn expr_kind(text: &str) -> SyntaxKind {
        let parsed = parse(text);
        assert!(parsed.ok(), "unexpected errors: {:?}", parsed.errors());
        parsed
            .tree()
            .root()
            .descendants()
            .find(|n| matches!(n.kind(), SyntaxKind::ParenExpr | SyntaxKind::TupleExpr))
            .expect("expected a paren or tuple expr")
            .kind()
    }
    assert_eq!(expr_kind("fn f() { (a) }"), SyntaxKind::ParenExpr);
    assert_eq!(expr_kind("fn f() { () }"), SyntaxKind::TupleExpr);
    assert_eq!(expr_kind("fn f() { (a,) }"), SyntaxKind::TupleExpr);
    assert_eq!(expr_kind("fn f() { (a, b) }"), SyntaxKind::TupleExpr);
}

#[test]
fn struct_literal_not_parsed_in_condition() {
    let parsed = parse("fn f() { if x { } }");
    assert!(parsed.ok(), "unexpected errors: {:?}", parsed.errors());
    let if_expr = parsed
        .tree()
        .root()
        .descendants()
        .find_map(ast::IfExpr::cast)
        .expect("expected an if");
    let cond_expr = if_expr.condition().unwrap().expr().unwrap();
    assert_eq!(cond_expr.kind(), SyntaxKind::PathExpr);
}
