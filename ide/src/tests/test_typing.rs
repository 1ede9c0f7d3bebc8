use crate::tests::common::{WORKSPACE_FILE, add_cursor, extract_offset, single_file};

/// Runs the typed-char engine and renders the result with a cursor marker,
/// or `None` when no trigger fired.
fn type_char(before: &str, typed: char) -> Option<String> {
    let (offset, text) = extract_offset(before);
    let analysis = single_file(&text);
    let edit = analysis
        .on_char_typed(WORKSPACE_FILE, offset, typed)
        .expect("request failed")?;
    let (applied, cursor) = edit.apply_rebasing(&text, offset).unwrap();
    Some(add_cursor(&applied, cursor))
}

#[test]
fn postfix_if_wraps_the_receiver() {
    assert_eq!(
        type_char("fn main() {\n    foo().if<|>\n}", 'f').unwrap(),
        "fn main() {\n    if foo() {<|>}\n}"
    );
}

#[test]
fn postfix_dbg_wraps_in_macro_with_cursor_before_close() {
    assert_eq!(
        type_char("fn main() {\n    foo().dbg<|>\n}", 'g').unwrap(),
        "fn main() {\n    dbg!(foo()<|>)\n}"
    );
}

#[test]
fn postfix_not_prefixes_bang() {
    assert_eq!(
        type_char("fn main() {\n    x.not<|>\n}", 't').unwrap(),
        "fn main() {\n    !x<|>\n}"
    );
}

#[test]
fn postfix_refm_prefixes_mutable_borrow() {
    assert_eq!(
        type_char("fn main() {\n    x.refm<|>\n}", 'm').unwrap(),
        "fn main() {\n    &mut x<|>\n}"
    );
}

#[test]
fn keyword_if_gets_braces() {
    assert_eq!(
        type_char("fn main() { if<|> }", 'f').unwrap(),
        "fn main() { if {<|>} }"
    );
}

#[test]
fn keyword_brace_declines_when_brace_follows() {
    assert_eq!(type_char("fn main() { if<|> {} }", 'f'), None);
}

#[test]
fn call_parens_with_params_puts_cursor_inside() {
    assert_eq!(
        type_char("fn frobnicate(x: u32) {}\nfn main() { frobnicate<|> }", 'e').unwrap(),
        "fn frobnicate(x: u32) {}\nfn main() { frobnicate(<|>) }"
    );
}

#[test]
fn call_parens_without_params_puts_cursor_after() {
    assert_eq!(
        type_char("fn ping() {}\nfn main() { ping<|> }", 'g').unwrap(),
        "fn ping() {}\nfn main() { ping()<|> }"
    );
}

#[test]
fn snippet_pd_expands_in_expression_position() {
    assert_eq!(
        type_char("fn main() { pd<|> }", 'd').unwrap(),
        "fn main() { eprintln!(\"{:?}\", <|>); }"
    );
}

#[test]
fn snippet_tfn_expands_in_item_position() {
    assert_eq!(type_char("tfn<|>", 'n').unwrap(), "#[test]\nfn <|>() {\n}");
}

#[test]
fn snippet_tfn_does_not_expand_in_expression_position() {
    assert_eq!(type_char("fn main() { tfn<|> }", 'n'), None);
}

#[test]
fn unclassifiable_input_is_a_no_op() {
    assert_eq!(type_char("fn main() { qq<|> }", 'q'), None);
}
