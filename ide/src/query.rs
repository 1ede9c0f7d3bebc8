//! Search query grammar: `<fragment>[#][*]`.
//!
//! Trailing qualifiers are order-insensitive. `#` widens the kind filter
//! from types-only to all symbols; `*` extends the searched corpus to
//! dependencies. Everything before the qualifiers is the fuzzy fragment.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KindFilter {
    TypesOnly,
    AllSymbols,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OriginFilter {
    WorkspaceOnly,
    IncludeDependencies,
}

/// A structured symbol-search query, derived deterministically from raw
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub text: String,
    pub kind_filter: KindFilter,
    pub origin_filter: OriginFilter,
}

pub fn parse_query(raw: &str) -> Query {
    let mut fragment = raw;
    let mut kind_filter = KindFilter::TypesOnly;
    let mut origin_filter = OriginFilter::WorkspaceOnly;

    loop {
        if let Some(rest) = fragment.strip_suffix('*') {
            origin_filter = OriginFilter::IncludeDependencies;
            fragment = rest;
        } else if let Some(rest) = fragment.strip_suffix('#') {
            kind_filter = KindFilter::AllSymbols;
            fragment = rest;
        } else {
            break;
        }
    }

    Query {
        text: fragment.to_string(),
        kind_filter,
        origin_filter,
    }
}

#[cfg(test)]
mod tests {
    use super::{KindFilter, OriginFilter, parse_query};

    #[test]
    fn plain_fragment_defaults_to_types_in_workspace() {
        let q = parse_query("Foo");
        assert_eq!(q.text, "Foo");
        assert_eq!(q.kind_filter, KindFilter::TypesOnly);
        assert_eq!(q.origin_filter, OriginFilter::WorkspaceOnly);
    }

    #[test]
    fn hash_widens_kinds() {
        let q = parse_query("foo#");
        assert_eq!(q.text, "foo");
        assert_eq!(q.kind_filter, KindFilter::AllSymbols);
        assert_eq!(q.origin_filter, OriginFilter::WorkspaceOnly);
    }

    #[test]
    fn star_extends_to_dependencies() {
        let q = parse_query("Foo*");
        assert_eq!(q.text, "Foo");
        assert_eq!(q.kind_filter, KindFilter::TypesOnly);
        assert_eq!(q.origin_filter, OriginFilter::IncludeDependencies);
    }

    #[test]
    fn qualifiers_combine_in_either_order() {
        for raw in ["foo#*", "foo*#"] {
            let q = parse_query(raw);
            assert_eq!(q.text, "foo", "raw: {raw}");
            assert_eq!(q.kind_filter, KindFilter::AllSymbols);
            assert_eq!(q.origin_filter, OriginFilter::IncludeDependencies);
        }
    }

    #[test]
    fn empty_fragment_is_allowed() {
        let q = parse_query("#");
        assert_eq!(q.text, "");
        assert_eq!(q.kind_filter, KindFilter::AllSymbols);
    }

    #[test]
    fn inner_qualifier_chars_stay_in_fragment() {
        let q = parse_query("a#b");
        assert_eq!(q.text, "a#b");
        assert_eq!(q.kind_filter, KindFilter::TypesOnly);
    }

    #[test]
    fn parsed_query_shape() {
        insta::assert_debug_snapshot!(parse_query("Foo#*"), @r#"
        Query {
            text: "Foo",
            kind_filter: AllSymbols,
            origin_filter: IncludeDependencies,
        }
        "#);
    }
}
