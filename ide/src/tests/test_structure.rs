use syntax::{SyntaxKind, parse};

use crate::tests::common::{WORKSPACE_FILE, extract_offset, single_file};
use crate::{FileId, IdeError, file_structure};

#[test]
fn outline_lists_declarations_with_parents() {
    let text = "fn main() {}\nmod outer {\n    struct Inner;\n}\nimpl Display for Foo {\n    fn fmt(&self) {}\n}\n";
    let nodes = file_structure(&parse(text));

    let labels: Vec<_> = nodes.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(
        labels,
        ["main", "outer", "Inner", "impl Display for Foo", "fmt"]
    );
    let parents: Vec<_> = nodes.iter().map(|n| n.parent).collect();
    assert_eq!(parents, [None, None, Some(1), None, Some(3)]);
    let kinds: Vec<_> = nodes.iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        [
            SyntaxKind::FnDef,
            SyntaxKind::ModDef,
            SyntaxKind::StructDef,
            SyntaxKind::ImplBlock,
            SyntaxKind::FnDef,
        ]
    );

    // The impl entry navigates to its target type.
    let impl_entry = &nodes[3];
    let nav = impl_entry.navigation_range.start as usize..impl_entry.navigation_range.end as usize;
    assert_eq!(&text[nav], "Foo");
}

#[test]
fn matching_brace_finds_the_partner_both_ways() {
    let (offset, text) = extract_offset("fn main() <|>{ g(x); }");
    let analysis = single_file(&text);
    let close = text.rfind('}').unwrap() as u32;
    assert_eq!(
        analysis.matching_brace(WORKSPACE_FILE, offset).unwrap(),
        Some(close)
    );
    assert_eq!(
        analysis.matching_brace(WORKSPACE_FILE, close).unwrap(),
        Some(offset)
    );
}

#[test]
fn matching_brace_works_on_parens() {
    let (offset, text) = extract_offset("fn main() { g<|>(x); }");
    let analysis = single_file(&text);
    // `find` would land on the `)` of `main()`.
    let close = text.rfind(')').unwrap() as u32;
    assert_eq!(
        analysis.matching_brace(WORKSPACE_FILE, offset).unwrap(),
        Some(close)
    );
}

#[test]
fn matching_brace_accepts_cursor_right_after_a_brace() {
    let (offset, text) = extract_offset("fn main() {}<|>");
    let analysis = single_file(&text);
    let open = text.find('{').unwrap() as u32;
    assert_eq!(
        analysis.matching_brace(WORKSPACE_FILE, offset).unwrap(),
        Some(open)
    );
}

#[test]
fn matching_brace_is_none_off_brace() {
    let (offset, text) = extract_offset("fn main() { <|>g(x); }");
    let analysis = single_file(&text);
    assert_eq!(analysis.matching_brace(WORKSPACE_FILE, offset).unwrap(), None);
}

#[test]
fn requests_on_unknown_files_are_invalid() {
    let analysis = single_file("fn main() {}");
    assert_eq!(
        analysis.matching_brace(FileId(9), 0),
        Err(IdeError::InvalidCursor)
    );
    assert_eq!(
        analysis.file_structure(FileId(9)),
        Err(IdeError::InvalidCursor)
    );
}
