//! Lossless syntax trees for a Rust-like source language.
//!
//! Pipeline: lex → parse → immutable range-addressed tree.
//! All coordinates are UTF-8 byte offsets into the original source, using
//! half-open `[start, end)` ranges. The tree reproduces its input text
//! byte-for-byte; erroneous input still parses, with errors on the side.

pub mod ast;
mod kind;
mod lexer;
mod parser;
mod range;
mod text_edit;
mod tree;

mod tests;

pub use kind::SyntaxKind;
pub use lexer::{Token, lex};
pub use parser::{Parse, SyntaxError, parse};
pub use range::TextRange;
pub use text_edit::{EditBuilder, EditError, EditSet, TextEdit};
pub use tree::{SyntaxNode, SyntaxTree, TreeBuilder};
