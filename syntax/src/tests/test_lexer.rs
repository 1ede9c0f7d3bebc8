use crate::SyntaxKind::*;
use crate::lex;

fn kinds(text: &str) -> Vec<crate::SyntaxKind> {
    lex(text)
        .into_iter()
        .map(|t| t.kind)
        .filter(|k| !k.is_trivia() && *k != Eof)
        .collect()
}

#[test]
fn lexes_keywords_and_idents() {
    assert_eq!(
        kinds("fn foo struct Bar"),
        vec![FnKw, Ident, StructKw, Ident]
    );
}

#[test]
fn lexes_compound_punctuation() {
    assert_eq!(
        kinds("a::b -> c => d == e != f"),
        vec![
            Ident, ColonColon, Ident, Arrow, Ident, FatArrow, Ident, EqEq, Ident, NotEq, Ident
        ]
    );
}

#[test]
fn lexes_strings_with_escapes() {
    assert_eq!(kinds(r#""a\"b" x"#), vec![String, Ident]);
}

#[test]
fn lexes_comments_as_trivia() {
    let tokens = lex("a // line\n/* block */ b");
    let comments: Vec<_> = tokens.iter().filter(|t| t.kind == Comment).collect();
    assert_eq!(comments.len(), 2);
}

#[test]
fn token_ranges_cover_input_exactly() {
    let text = "fn main() { let x = 1 + 2; }";
    let tokens = lex(text);
    let mut pos = 0u32;
    for token in &tokens {
        assert_eq!(token.range.start, pos, "gap before {:?}", token.kind);
        pos = token.range.end;
    }
    assert_eq!(pos, text.len() as u32);
}

#[test]
fn underscore_is_its_own_token() {
    assert_eq!(kinds("_ _x"), vec![Underscore, Ident]);
}
