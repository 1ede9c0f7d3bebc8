//! Hand-written lexer producing a flat token stream over UTF-8 byte offsets.
//! Trivia (whitespace, comments) is kept in the stream so the parser can
//! build a lossless tree.

use crate::kind::SyntaxKind;
use crate::range::TextRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub range: TextRange,
}

pub fn lex(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let bytes = text.as_bytes();
    let mut pos = 0usize;

    while pos < bytes.len() {
        let start = pos;
        let kind = scan_token(text, &mut pos);
        debug_assert!(pos > start, "lexer must always make progress");
        tokens.push(Token {
            kind,
            range: TextRange::new(start as u32, pos as u32),
        });
    }

    tokens.push(Token {
        kind: SyntaxKind::Eof,
        range: TextRange::empty(text.len() as u32),
    });
    tokens
}

fn scan_token(text: &str, pos: &mut usize) -> SyntaxKind {
    let bytes = text.as_bytes();
    let c = bytes[*pos];

    if c.is_ascii_whitespace() {
        while *pos < bytes.len() && bytes[*pos].is_ascii_whitespace() {
            *pos += 1;
        }
        return SyntaxKind::Whitespace;
    }

    if c == b'/' && bytes.get(*pos + 1) == Some(&b'/') {
        while *pos < bytes.len() && bytes[*pos] != b'\n' {
            *pos += 1;
        }
        return SyntaxKind::Comment;
    }

    if c == b'/' && bytes.get(*pos + 1) == Some(&b'*') {
        *pos += 2;
        let mut depth = 1usize;
        while *pos < bytes.len() && depth > 0 {
            if bytes[*pos] == b'/' && bytes.get(*pos + 1) == Some(&b'*') {
                depth += 1;
                *pos += 2;
            } else if bytes[*pos] == b'*' && bytes.get(*pos + 1) == Some(&b'/') {
                depth -= 1;
                *pos += 2;
            } else {
                *pos += next_char_len(text, *pos);
            }
        }
        return SyntaxKind::Comment;
    }

    if c == b'_' || c.is_ascii_alphabetic() || c >= 0x80 {
        let start = *pos;
        while *pos < bytes.len() && is_ident_continue(text, *pos) {
            *pos += next_char_len(text, *pos);
        }
        let ident = &text[start..*pos];
        if ident == "_" {
            return SyntaxKind::Underscore;
        }
        return SyntaxKind::from_keyword(ident).unwrap_or(SyntaxKind::Ident);
    }

    if c.is_ascii_digit() {
        while *pos < bytes.len() && (bytes[*pos].is_ascii_alphanumeric() || bytes[*pos] == b'_') {
            *pos += 1;
        }
        return SyntaxKind::IntNumber;
    }

    if c == b'"' {
        *pos += 1;
        while *pos < bytes.len() {
            match bytes[*pos] {
                b'\\' => *pos += usize::min(2, bytes.len() - *pos),
                b'"' => {
                    *pos += 1;
                    break;
                }
                _ => *pos += next_char_len(text, *pos),
            }
        }
        return SyntaxKind::String;
    }

    if c == b'\'' {
        // Char literal: 'x' or '\n'. A lone quote lexes as an error token.
        let mut p = *pos + 1;
        if p < bytes.len() && bytes[p] == b'\\' {
            p += 2;
        } else if p < bytes.len() {
            p += next_char_len(text, p);
        }
        if p < bytes.len() && bytes[p] == b'\'' {
            *pos = p + 1;
            return SyntaxKind::Char;
        }
        *pos += 1;
        return SyntaxKind::ErrorToken;
    }

    // Two-byte punctuation first.
    if *pos + 1 < bytes.len() {
        let two = &text[*pos..*pos + 2];
        let kind = match two {
            "::" => Some(SyntaxKind::ColonColon),
            "->" => Some(SyntaxKind::Arrow),
            "=>" => Some(SyntaxKind::FatArrow),
            "==" => Some(SyntaxKind::EqEq),
            "!=" => Some(SyntaxKind::NotEq),
            "<=" => Some(SyntaxKind::LtEq),
            ">=" => Some(SyntaxKind::GtEq),
            "&&" => Some(SyntaxKind::AmpAmp),
            "||" => Some(SyntaxKind::PipePipe),
            ".." => Some(SyntaxKind::DotDot),
            _ => None,
        };
        if let Some(kind) = kind {
            *pos += 2;
            return kind;
        }
    }

    let kind = match c {
        b'(' => SyntaxKind::LParen,
        b')' => SyntaxKind::RParen,
        b'{' => SyntaxKind::LCurly,
        b'}' => SyntaxKind::RCurly,
        b'[' => SyntaxKind::LBrack,
        b']' => SyntaxKind::RBrack,
        b'<' => SyntaxKind::LAngle,
        b'>' => SyntaxKind::RAngle,
        b',' => SyntaxKind::Comma,
        b';' => SyntaxKind::Semicolon,
        b':' => SyntaxKind::Colon,
        b'=' => SyntaxKind::Eq,
        b'.' => SyntaxKind::Dot,
        b'&' => SyntaxKind::Amp,
        b'|' => SyntaxKind::Pipe,
        b'!' => SyntaxKind::Excl,
        b'?' => SyntaxKind::Question,
        b'+' => SyntaxKind::Plus,
        b'-' => SyntaxKind::Minus,
        b'*' => SyntaxKind::Star,
        b'/' => SyntaxKind::Slash,
        b'%' => SyntaxKind::Percent,
        b'#' => SyntaxKind::Hash,
        _ => SyntaxKind::ErrorToken,
    };
    *pos += if kind == SyntaxKind::ErrorToken {
        next_char_len(text, *pos)
    } else {
        1
    };
    kind
}

fn is_ident_continue(text: &str, pos: usize) -> bool {
    let b = text.as_bytes()[pos];
    b == b'_' || b.is_ascii_alphanumeric() || b >= 0x80
}

fn next_char_len(text: &str, pos: usize) -> usize {
    text[pos..].chars().next().map_or(1, char::len_utf8)
}
