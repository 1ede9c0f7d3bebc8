use crate::tests::common::{WORKSPACE_FILE, single_file};
use crate::{FileId, IdeError};

fn tagged_slices(text: &str) -> Vec<(&'static str, String)> {
    let analysis = single_file(text);
    analysis
        .highlight(WORKSPACE_FILE)
        .expect("request failed")
        .into_iter()
        .map(|h| {
            let slice = text[h.range.start as usize..h.range.end as usize].to_string();
            (h.tag, slice)
        })
        .collect()
}

#[test]
fn highlight_tags_keywords_names_literals_and_macros() {
    let tagged = tagged_slices("fn main() {\n    let x = dbg!(92);\n}\n");
    let expected: Vec<(&str, String)> = [
        ("keyword", "fn"),
        ("function", "main"),
        ("keyword", "let"),
        ("function", "x"),
        ("macro", "dbg!"),
        ("literal", "92"),
    ]
    .iter()
    .map(|&(tag, slice)| (tag, slice.to_string()))
    .collect();
    assert_eq!(tagged, expected);
}

#[test]
fn highlight_covers_attributes_comments_and_strings() {
    let tagged = tagged_slices("#[test]\nfn t() {\n    // check\n    f(\"hi\");\n}\n");
    let expected: Vec<(&str, String)> = [
        ("attribute", "#[test]"),
        ("keyword", "fn"),
        ("function", "t"),
        ("comment", "// check"),
        ("string", "\"hi\""),
    ]
    .iter()
    .map(|&(tag, slice)| (tag, slice.to_string()))
    .collect();
    assert_eq!(tagged, expected);
}

#[test]
fn highlight_on_unknown_file_is_invalid() {
    let analysis = single_file("fn main() {}");
    assert_eq!(analysis.highlight(FileId(9)), Err(IdeError::InvalidCursor));
}
