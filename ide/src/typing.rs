//! Completion trigger engine: classifies the last typed character against
//! the node at the cursor and produces an edit, or nothing.
//!
//! Trigger classes in precedence order: postfix template, keyword brace,
//! call parenthesis, snippet. An unclassifiable position is the normal
//! no-op path, not a failure.

use syntax::ast::{self, AstNode};
use syntax::{EditBuilder, EditSet, Parse, SyntaxKind, SyntaxNode};

/// Resolves a function name to "declares one or more parameters".
pub(crate) type FnResolver<'a> = &'a dyn Fn(&str) -> Option<bool>;

pub(crate) fn on_char_typed(
    parse: &Parse,
    offset: u32,
    typed: char,
    resolve_fn: FnResolver<'_>,
) -> Option<EditSet> {
    postfix_expansion(parse, offset, typed)
        .or_else(|| keyword_brace(parse, offset, typed))
        .or_else(|| call_parens(parse, offset, typed, resolve_fn))
        .or_else(|| snippet_expansion(parse, offset, typed))
}

// Postfix templates ------------------------------------------------------

struct PostfixTemplate {
    key: &'static str,
    before: &'static str,
    after: &'static str,
    /// Cursor offset inside `after`; `None` puts the cursor at the end.
    cursor_in_after: Option<u32>,
}

const POSTFIX_TEMPLATES: &[PostfixTemplate] = &[
    PostfixTemplate { key: "if", before: "if ", after: " {}", cursor_in_after: Some(2) },
    PostfixTemplate { key: "match", before: "match ", after: " {}", cursor_in_after: Some(2) },
    PostfixTemplate { key: "while", before: "while ", after: " {}", cursor_in_after: Some(2) },
    PostfixTemplate { key: "ref", before: "&", after: "", cursor_in_after: None },
    PostfixTemplate { key: "refm", before: "&mut ", after: "", cursor_in_after: None },
    PostfixTemplate { key: "not", before: "!", after: "", cursor_in_after: None },
    PostfixTemplate { key: "dbg", before: "dbg!(", after: ")", cursor_in_after: Some(0) },
];

/// Expands `<expr>.<key>` into the registered template, substituting the
/// receiver's text verbatim.
fn postfix_expansion(parse: &Parse, offset: u32, typed: char) -> Option<EditSet> {
    let word = parse.tree().token_ending_at(offset)?;
    if !is_word_token(word) || !word.text().ends_with(typed) {
        return None;
    }
    let template = POSTFIX_TEMPLATES.iter().find(|t| t.key == word.text())?;

    let field_expr = word.ancestors().find_map(ast::FieldExpr::cast)?;
    let receiver = field_expr.receiver()?;
    // The suffix word must be the field position of this very expression.
    if field_expr.syntax().range().end != offset {
        return None;
    }

    let expr_text = receiver.text();
    let new_text = format!("{}{}{}", template.before, expr_text, template.after);
    let replace_range = field_expr.syntax().range();

    let cursor_tail = match template.cursor_in_after {
        Some(in_after) => in_after,
        None => template.after.len() as u32,
    };
    let cursor =
        replace_range.start + template.before.len() as u32 + expr_text.len() as u32 + cursor_tail;

    let mut builder = EditBuilder::new();
    builder.replace(replace_range, new_text);
    builder.set_cursor(cursor);
    Some(builder.finish())
}

// Keyword braces ---------------------------------------------------------

const BRACE_KEYWORDS: &[SyntaxKind] = &[
    SyntaxKind::IfKw,
    SyntaxKind::ElseKw,
    SyntaxKind::WhileKw,
    SyntaxKind::LoopKw,
];

/// After a completed `if`/`else`/`while`/`loop` keyword with no brace yet,
/// inserts ` {}` and parks the cursor between the braces.
fn keyword_brace(parse: &Parse, offset: u32, typed: char) -> Option<EditSet> {
    let token = parse.tree().token_ending_at(offset)?;
    if !BRACE_KEYWORDS.contains(&token.kind()) || !token.text().ends_with(typed) {
        return None;
    }
    // A keyword in field position belongs to the postfix class.
    if token.parent().is_some_and(|p| p.kind() == SyntaxKind::NameRef) {
        return None;
    }
    let rest = &parse.tree().text()[offset as usize..];
    if rest.trim_start().starts_with('{') {
        return None;
    }

    let mut builder = EditBuilder::new();
    builder.insert(offset, " {}");
    builder.set_cursor(offset + 2);
    Some(builder.finish())
}

// Call parentheses -------------------------------------------------------

/// After accepting a function-name completion, appends `()`; the cursor
/// lands inside the parens when the function declares parameters.
fn call_parens(
    parse: &Parse,
    offset: u32,
    typed: char,
    resolve_fn: FnResolver<'_>,
) -> Option<EditSet> {
    let token = parse.tree().token_ending_at(offset)?;
    if token.kind() != SyntaxKind::Ident || !token.text().ends_with(typed) {
        return None;
    }
    // Expression position only.
    token.ancestors().find_map(ast::PathExpr::cast)?;
    let rest = &parse.tree().text()[offset as usize..];
    if rest.trim_start().starts_with('(') {
        return None;
    }

    let has_params = resolve_fn(token.text())?;
    let mut builder = EditBuilder::new();
    builder.insert(offset, "()");
    builder.set_cursor(if has_params { offset + 1 } else { offset + 2 });
    Some(builder.finish())
}

// Snippets ---------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnippetPosition {
    Expr,
    Item,
}

struct Snippet {
    trigger: &'static str,
    position: SnippetPosition,
    template: &'static str,
    /// Cursor offset inside `template`.
    cursor: u32,
}

const SNIPPETS: &[Snippet] = &[
    Snippet {
        trigger: "pd",
        position: SnippetPosition::Expr,
        template: "eprintln!(\"{:?}\", );",
        cursor: 18,
    },
    Snippet {
        trigger: "tfn",
        position: SnippetPosition::Item,
        template: "#[test]\nfn () {\n}",
        cursor: 11,
    },
];

/// Exact-match snippet expansion, valid only in the matching syntactic
/// position; snippets are never fuzzy-matched.
fn snippet_expansion(parse: &Parse, offset: u32, typed: char) -> Option<EditSet> {
    let token = parse.tree().token_ending_at(offset)?;
    if token.kind() != SyntaxKind::Ident || !token.text().ends_with(typed) {
        return None;
    }
    let position = position_of(token);
    let snippet = SNIPPETS
        .iter()
        .find(|s| s.trigger == token.text() && s.position == position)?;

    let mut builder = EditBuilder::new();
    builder.replace(token.range(), snippet.template);
    builder.set_cursor(token.range().start + snippet.cursor);
    Some(builder.finish())
}

fn position_of(token: SyntaxNode<'_>) -> SnippetPosition {
    for ancestor in token.ancestors() {
        match ancestor.kind() {
            SyntaxKind::Block => return SnippetPosition::Expr,
            SyntaxKind::SourceFile | SyntaxKind::ItemList => return SnippetPosition::Item,
            _ => {}
        }
    }
    SnippetPosition::Item
}

fn is_word_token(token: SyntaxNode<'_>) -> bool {
    token.kind() == SyntaxKind::Ident || token.kind().is_keyword()
}
