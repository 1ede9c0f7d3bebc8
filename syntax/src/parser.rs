//! Recursive-descent parser building a lossless tree.
//!
//! The grammar is the Rust-like subset the IDE layer operates on. Parsing
//! never fails: unexpected input is wrapped in `Error` nodes, an error is
//! recorded, and the parser moves on. The resulting tree always reproduces
//! the input text byte-for-byte.

// The kind glob also exports a `String` variant; the explicit import keeps
// the owned-string type resolvable.
use std::string::String;

use tracing::debug;

use crate::kind::SyntaxKind::{self, *};
use crate::lexer::{Token, lex};
use crate::range::TextRange;
use crate::tree::{Checkpoint, SyntaxTree, TreeBuilder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

/// A parsed file: the tree plus any syntax errors found along the way.
#[derive(Debug)]
pub struct Parse {
    tree: SyntaxTree,
    errors: Vec<SyntaxError>,
}

impl Parse {
    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parses `text` into a lossless syntax tree.
pub fn parse(text: &str) -> Parse {
    let tokens = lex(text);
    let parser = Parser {
        tokens,
        pos: 0,
        builder: TreeBuilder::new(text.to_string()),
        errors: Vec::new(),
    };
    parser.parse_source_file()
}

struct Parser {
    tokens: Vec<Token>,
    /// Index of the next unemitted token, trivia included.
    pos: usize,
    builder: TreeBuilder,
    errors: Vec<SyntaxError>,
}

impl Parser {
    // Token access -------------------------------------------------------

    fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map_or(Eof, |t| t.kind)
    }

    fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    fn current_range(&self) -> TextRange {
        self.tokens[self.pos..]
            .iter()
            .find(|t| !t.kind.is_trivia())
            .map_or_else(|| TextRange::empty(0), |t| t.range)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    fn flush_trivia(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            let token = self.tokens[self.pos];
            self.builder.token(token.kind, token.range);
            self.pos += 1;
        }
    }

    fn bump(&mut self) {
        self.flush_trivia();
        if self.pos < self.tokens.len() {
            let token = self.tokens[self.pos];
            if token.kind == Eof {
                return;
            }
            self.builder.token(token.kind, token.range);
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) {
        if !self.eat(kind) {
            self.error(format!("expected {:?}", kind));
        }
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(SyntaxError {
            message: message.into(),
            range: self.current_range(),
        });
    }

    fn err_and_bump(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(range = ?self.current_range(), "recovering: {message}");
        self.error(message);
        self.start(Error);
        self.bump();
        self.builder.finish_node();
    }

    fn start(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        self.builder.start_node(kind);
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.flush_trivia();
        self.builder.checkpoint()
    }

    // Entry --------------------------------------------------------------

    fn parse_source_file(mut self) -> Parse {
        self.builder.start_node(SourceFile);
        while !self.at(Eof) {
            self.item();
        }
        self.flush_trivia();
        self.builder.finish_node();
        Parse {
            tree: self.builder.finish(),
            errors: self.errors,
        }
    }

    // Items --------------------------------------------------------------

    fn item(&mut self) {
        let cp = self.checkpoint();
        while self.at(Hash) {
            self.attr();
        }
        if self.at(PubKw) {
            self.visibility();
        }
        match self.current() {
            FnKw => self.fn_def(cp),
            StructKw => self.struct_def(cp),
            EnumKw => self.enum_def(cp),
            TraitKw => self.trait_def(cp),
            ImplKw => self.impl_block(cp),
            ModKw => self.mod_def(cp),
            UseKw => self.use_item(cp),
            ConstKw | StaticKw => self.const_def(cp),
            Eof => {}
            _ => self.err_and_bump("expected an item"),
        }
    }

    fn attr(&mut self) {
        self.start(Attr);
        self.bump(); // `#`
        if self.at(LBrack) {
            let mut depth = 0usize;
            loop {
                match self.current() {
                    LBrack => depth += 1,
                    RBrack => {
                        self.bump();
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                        continue;
                    }
                    Eof => {
                        self.error("unterminated attribute");
                        break;
                    }
                    _ => {}
                }
                self.bump();
            }
        } else {
            self.error("expected `[` after `#`");
        }
        self.builder.finish_node();
    }

    fn visibility(&mut self) {
        self.start(Visibility);
        self.bump(); // `pub`
        if self.at(LParen) {
            self.bump();
            match self.current() {
                CrateKw | SelfKw | SuperKw => self.bump(),
                _ => self.error("expected `crate`, `self` or `super`"),
            }
            self.expect(RParen);
        }
        self.builder.finish_node();
    }

    fn name(&mut self) {
        if self.at(Ident) {
            self.start(Name);
            self.bump();
            self.builder.finish_node();
        } else {
            self.error("expected a name");
        }
    }

    fn fn_def(&mut self, cp: Checkpoint) {
        self.builder.start_node_at(cp, FnDef);
        self.bump(); // `fn`
        self.name();
        if self.at(LParen) {
            self.param_list();
        } else {
            self.error("expected parameter list");
        }
        if self.at(Arrow) {
            self.start(RetType);
            self.bump();
            self.type_ref();
            self.builder.finish_node();
        }
        if self.at(LCurly) {
            self.block();
        } else {
            self.expect(Semicolon);
        }
        self.builder.finish_node();
    }

    fn param_list(&mut self) {
        self.start(ParamList);
        self.bump(); // `(`
        while !self.at(RParen) && !self.at(Eof) {
            if self.at(Amp) && (self.nth(1) == SelfKw || (self.nth(1) == MutKw && self.nth(2) == SelfKw))
                || self.at(SelfKw)
                || (self.at(MutKw) && self.nth(1) == SelfKw)
            {
                self.start(SelfParam);
                self.eat(Amp);
                self.eat(MutKw);
                self.expect(SelfKw);
                self.builder.finish_node();
            } else {
                self.start(Param);
                self.pattern();
                self.expect(Colon);
                self.type_ref();
                self.builder.finish_node();
            }
            if !self.at(RParen) {
                self.expect(Comma);
            }
        }
        self.expect(RParen);
        self.builder.finish_node();
    }

    fn struct_def(&mut self, cp: Checkpoint) {
        self.builder.start_node_at(cp, StructDef);
        self.bump(); // `struct`
        self.name();
        match self.current() {
            LCurly => self.record_field_list(),
            LParen => {
                self.tuple_field_list();
                self.expect(Semicolon);
            }
            Semicolon => self.bump(),
            _ => self.error("expected `{`, `(` or `;`"),
        }
        self.builder.finish_node();
    }

    fn record_field_list(&mut self) {
        self.start(RecordFieldList);
        self.bump(); // `{`
        while !self.at(RCurly) && !self.at(Eof) {
            self.start(RecordField);
            while self.at(Hash) {
                self.attr();
            }
            if self.at(PubKw) {
                self.visibility();
            }
            self.name();
            self.expect(Colon);
            self.type_ref();
            self.builder.finish_node();
            if !self.at(RCurly) {
                self.expect(Comma);
            }
        }
        self.expect(RCurly);
        self.builder.finish_node();
    }

    fn tuple_field_list(&mut self) {
        self.start(TupleFieldList);
        self.bump(); // `(`
        while !self.at(RParen) && !self.at(Eof) {
            self.start(TupleField);
            if self.at(PubKw) {
                self.visibility();
            }
            self.type_ref();
            self.builder.finish_node();
            if !self.at(RParen) {
                self.expect(Comma);
            }
        }
        self.expect(RParen);
        self.builder.finish_node();
    }

    fn enum_def(&mut self, cp: Checkpoint) {
        self.builder.start_node_at(cp, EnumDef);
        self.bump(); // `enum`
        self.name();
        if self.at(LCurly) {
            self.start(VariantList);
            self.bump();
            while !self.at(RCurly) && !self.at(Eof) {
                self.start(EnumVariant);
                while self.at(Hash) {
                    self.attr();
                }
                self.name();
                match self.current() {
                    LParen => self.tuple_field_list(),
                    LCurly => self.record_field_list(),
                    _ => {}
                }
                self.builder.finish_node();
                if !self.at(RCurly) {
                    self.expect(Comma);
                }
            }
            self.expect(RCurly);
            self.builder.finish_node();
        } else {
            self.error("expected `{`");
        }
        self.builder.finish_node();
    }

    fn trait_def(&mut self, cp: Checkpoint) {
        self.builder.start_node_at(cp, TraitDef);
        self.bump(); // `trait`
        self.name();
        if self.at(LCurly) {
            self.item_list();
        } else {
            self.error("expected `{`");
        }
        self.builder.finish_node();
    }

    fn impl_block(&mut self, cp: Checkpoint) {
        self.builder.start_node_at(cp, ImplBlock);
        self.bump(); // `impl`
        self.type_ref();
        if self.eat(ForKw) {
            self.type_ref();
        }
        if self.at(LCurly) {
            self.item_list();
        } else {
            self.error("expected `{`");
        }
        self.builder.finish_node();
    }

    fn item_list(&mut self) {
        self.start(ItemList);
        self.bump(); // `{`
        while !self.at(RCurly) && !self.at(Eof) {
            self.item();
        }
        self.expect(RCurly);
        self.builder.finish_node();
    }

    fn mod_def(&mut self, cp: Checkpoint) {
        self.builder.start_node_at(cp, ModDef);
        self.bump(); // `mod`
        self.name();
        match self.current() {
            Semicolon => self.bump(),
            LCurly => self.item_list(),
            _ => self.error("expected `;` or `{`"),
        }
        self.builder.finish_node();
    }

    fn use_item(&mut self, cp: Checkpoint) {
        self.builder.start_node_at(cp, UseItem);
        self.bump(); // `use`
        self.use_tree();
        self.expect(Semicolon);
        self.builder.finish_node();
    }

    fn use_tree(&mut self) {
        self.start(UseTree);
        if self.at(Star) {
            self.bump();
        } else if self.at(LCurly) {
            self.use_tree_list();
        } else {
            self.start(Path);
            self.path_segment();
            while self.at(ColonColon) && !matches!(self.nth(1), LCurly | Star) {
                self.bump();
                self.path_segment();
            }
            self.builder.finish_node();
            if self.at(ColonColon) {
                self.bump();
                if self.at(Star) {
                    self.bump();
                } else {
                    self.use_tree_list();
                }
            }
            if self.eat(AsKw) {
                self.name();
            }
        }
        self.builder.finish_node();
    }

    fn use_tree_list(&mut self) {
        self.start(UseTreeList);
        self.expect(LCurly);
        while !self.at(RCurly) && !self.at(Eof) {
            self.use_tree();
            if !self.at(RCurly) {
                self.expect(Comma);
            }
        }
        self.expect(RCurly);
        self.builder.finish_node();
    }

    fn const_def(&mut self, cp: Checkpoint) {
        self.builder.start_node_at(cp, ConstDef);
        self.bump(); // `const` or `static`
        self.eat(MutKw);
        self.name();
        self.expect(Colon);
        self.type_ref();
        self.expect(Eq);
        self.expr();
        self.expect(Semicolon);
        self.builder.finish_node();
    }

    // Types --------------------------------------------------------------

    fn type_ref(&mut self) {
        self.start(TypeRef);
        match self.current() {
            Amp => {
                self.bump();
                self.eat(MutKw);
                self.type_ref();
            }
            LParen => {
                self.bump();
                while !self.at(RParen) && !self.at(Eof) {
                    self.type_ref();
                    if !self.at(RParen) {
                        self.expect(Comma);
                    }
                }
                self.expect(RParen);
            }
            Underscore => self.bump(),
            Ident | SelfKw | CrateKw | SuperKw => {
                self.path();
                if self.at(LAngle) {
                    self.type_arg_list();
                }
            }
            _ => self.error("expected a type"),
        }
        self.builder.finish_node();
    }

    fn type_arg_list(&mut self) {
        self.start(TypeArgList);
        self.bump(); // `<`
        while !self.at(RAngle) && !self.at(Eof) {
            self.type_ref();
            if !self.at(RAngle) {
                self.expect(Comma);
            }
        }
        self.expect(RAngle);
        self.builder.finish_node();
    }

    // Paths --------------------------------------------------------------

    fn path(&mut self) {
        self.start(Path);
        self.path_segment();
        while self.at(ColonColon) {
            self.bump();
            self.path_segment();
        }
        self.builder.finish_node();
    }

    fn path_segment(&mut self) {
        self.start(PathSegment);
        match self.current() {
            Ident | SelfKw | CrateKw | SuperKw => self.bump(),
            _ => self.error("expected a path segment"),
        }
        self.builder.finish_node();
    }

    // Blocks and statements ----------------------------------------------

    fn block(&mut self) {
        self.start(Block);
        self.bump(); // `{`
        while !self.at(RCurly) && !self.at(Eof) {
            self.stmt();
        }
        self.expect(RCurly);
        self.builder.finish_node();
    }

    fn stmt(&mut self) {
        match self.current() {
            LetKw => self.let_stmt(),
            FnKw | StructKw | EnumKw | TraitKw | ImplKw | ModKw | UseKw | ConstKw | StaticKw => {
                self.item()
            }
            Semicolon => {
                // Stray semicolon; tolerated as an empty statement.
                self.start(ExprStmt);
                self.bump();
                self.builder.finish_node();
            }
            _ => {
                let cp = self.checkpoint();
                let block_like = self.expr();
                if self.at(Semicolon) {
                    self.builder.start_node_at(cp, ExprStmt);
                    self.bump();
                    self.builder.finish_node();
                } else if !self.at(RCurly) {
                    if block_like {
                        self.builder.start_node_at(cp, ExprStmt);
                        self.builder.finish_node();
                    } else {
                        self.error("expected `;`");
                        self.builder.start_node_at(cp, ExprStmt);
                        self.builder.finish_node();
                    }
                }
                // At `}` the expression stays bare: it is the block's tail.
            }
        }
    }

    fn let_stmt(&mut self) {
        self.start(LetStmt);
        self.bump(); // `let`
        self.pattern();
        if self.eat(Colon) {
            self.type_ref();
        }
        if self.eat(Eq) {
            self.expr();
        }
        self.expect(Semicolon);
        self.builder.finish_node();
    }

    // Expressions --------------------------------------------------------

    /// Parses one expression. Returns true when the expression is
    /// block-like (no trailing `;` required in statement position).
    fn expr(&mut self) -> bool {
        self.expr_bp(0, true)
    }

    fn expr_no_struct(&mut self) -> bool {
        self.expr_bp(0, false)
    }

    fn expr_bp(&mut self, min_bp: u8, allow_struct: bool) -> bool {
        let cp = self.checkpoint();
        let mut block_like = self.lhs(allow_struct);

        loop {
            let (l_bp, r_bp) = match self.current() {
                Eq => (2, 1),
                PipePipe => (3, 4),
                AmpAmp => (5, 6),
                EqEq | NotEq => (7, 8),
                LAngle | RAngle | LtEq | GtEq => (9, 10),
                Plus | Minus => (11, 12),
                Star | Slash | Percent => (13, 14),
                _ => break,
            };
            if l_bp < min_bp {
                break;
            }
            self.builder.start_node_at(cp, BinExpr);
            self.bump(); // the operator
            self.expr_bp(r_bp, allow_struct);
            self.builder.finish_node();
            block_like = false;
        }
        block_like
    }

    /// Prefix operators, an atom, then postfix operators.
    fn lhs(&mut self, allow_struct: bool) -> bool {
        match self.current() {
            Excl | Minus | Star => {
                self.start(PrefixExpr);
                self.bump();
                self.expr_bp(15, allow_struct);
                self.builder.finish_node();
                return false;
            }
            Amp => {
                self.start(RefExpr);
                self.bump();
                self.eat(MutKw);
                self.expr_bp(15, allow_struct);
                self.builder.finish_node();
                return false;
            }
            _ => {}
        }

        let cp = self.checkpoint();
        let block_like = self.atom(cp, allow_struct);
        let had_postfix = self.postfix(cp);
        block_like && !had_postfix
    }

    /// Returns true for block-like atoms.
    fn atom(&mut self, cp: Checkpoint, allow_struct: bool) -> bool {
        match self.current() {
            IntNumber | String | Char | TrueKw | FalseKw => {
                self.start(Literal);
                self.bump();
                self.builder.finish_node();
                false
            }
            LParen => {
                let cp = self.checkpoint();
                self.bump();
                let mut items = 0usize;
                let mut saw_comma = false;
                while !self.at(RParen) && !self.at(Eof) {
                    self.expr();
                    items += 1;
                    if self.at(Comma) {
                        self.bump();
                        saw_comma = true;
                    } else {
                        break;
                    }
                }
                self.expect(RParen);
                // `(a)` groups; `()`, `(a,)` and longer are tuples.
                let kind = if items == 1 && !saw_comma { ParenExpr } else { TupleExpr };
                self.builder.start_node_at(cp, kind);
                self.builder.finish_node();
                false
            }
            LCurly => {
                self.block();
                true
            }
            IfKw => {
                self.if_expr();
                true
            }
            MatchKw => {
                self.match_expr();
                true
            }
            WhileKw => {
                self.start(WhileExpr);
                self.bump();
                self.condition();
                if self.at(LCurly) {
                    self.block();
                } else {
                    self.error("expected `{`");
                }
                self.builder.finish_node();
                true
            }
            LoopKw => {
                self.start(LoopExpr);
                self.bump();
                if self.at(LCurly) {
                    self.block();
                } else {
                    self.error("expected `{`");
                }
                self.builder.finish_node();
                true
            }
            ReturnKw => {
                self.start(ReturnExpr);
                self.bump();
                if !matches!(self.current(), Semicolon | RCurly | RParen | Comma | Eof) {
                    self.expr_bp(0, allow_struct);
                }
                self.builder.finish_node();
                false
            }
            Ident | SelfKw | CrateKw | SuperKw => {
                self.path();
                if self.at(Excl) {
                    self.builder.start_node_at(cp, MacroCall);
                    self.bump();
                    if matches!(self.current(), LParen | LBrack | LCurly) {
                        self.token_tree();
                    } else {
                        self.error("expected a macro delimiter");
                    }
                    self.builder.finish_node();
                } else if self.at(LCurly) && allow_struct {
                    self.builder.start_node_at(cp, StructLit);
                    self.struct_lit_field_list();
                    self.builder.finish_node();
                } else {
                    self.builder.start_node_at(cp, PathExpr);
                    self.builder.finish_node();
                }
                false
            }
            _ => {
                self.err_and_bump("expected an expression");
                false
            }
        }
    }

    /// Returns true when at least one postfix node was produced.
    fn postfix(&mut self, cp: Checkpoint) -> bool {
        let mut any = false;
        loop {
            match self.current() {
                LParen => {
                    self.builder.start_node_at(cp, CallExpr);
                    self.arg_list();
                    self.builder.finish_node();
                }
                Question => {
                    self.builder.start_node_at(cp, TryExpr);
                    self.bump();
                    self.builder.finish_node();
                }
                Dot => {
                    // Method calls, field access, and (for completion
                    // triggers) a keyword after the dot. The keyword case is
                    // a recorded error but keeps the receiver in the tree.
                    let next = self.nth(1);
                    if next == Ident && self.nth(2) == LParen {
                        self.builder.start_node_at(cp, MethodCallExpr);
                        self.bump(); // `.`
                        self.start(NameRef);
                        self.bump();
                        self.builder.finish_node();
                        self.arg_list();
                        self.builder.finish_node();
                    } else if next == Ident || next == IntNumber || next.is_keyword() {
                        self.builder.start_node_at(cp, FieldExpr);
                        self.bump(); // `.`
                        if next.is_keyword() {
                            self.error("expected a field name");
                        }
                        self.start(NameRef);
                        self.bump();
                        self.builder.finish_node();
                        self.builder.finish_node();
                    } else {
                        self.builder.start_node_at(cp, FieldExpr);
                        self.bump(); // `.`
                        self.error("expected a field name");
                        self.builder.finish_node();
                    }
                }
                _ => break,
            }
            any = true;
        }
        any
    }

    fn arg_list(&mut self) {
        self.start(ArgList);
        self.bump(); // `(`
        while !self.at(RParen) && !self.at(Eof) {
            self.expr();
            if !self.at(RParen) {
                self.expect(Comma);
            }
        }
        self.expect(RParen);
        self.builder.finish_node();
    }

    fn token_tree(&mut self) {
        self.start(TokenTree);
        let mut depth = 0usize;
        loop {
            match self.current() {
                LParen | LBrack | LCurly => depth += 1,
                RParen | RBrack | RCurly => {
                    self.bump();
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                    continue;
                }
                Eof => {
                    self.error("unterminated token tree");
                    break;
                }
                _ => {}
            }
            self.bump();
        }
        self.builder.finish_node();
    }

    fn if_expr(&mut self) {
        self.start(IfExpr);
        self.bump(); // `if`
        self.condition();
        if self.at(LCurly) {
            self.block();
        } else {
            self.error("expected `{`");
        }
        if self.eat(ElseKw) {
            if self.at(IfKw) {
                self.if_expr();
            } else if self.at(LCurly) {
                self.block();
            } else {
                self.error("expected `if` or `{` after `else`");
            }
        }
        self.builder.finish_node();
    }

    fn condition(&mut self) {
        self.start(Condition);
        if self.eat(LetKw) {
            self.pattern();
            self.expect(Eq);
        }
        self.expr_no_struct();
        self.builder.finish_node();
    }

    fn match_expr(&mut self) {
        self.start(MatchExpr);
        self.bump(); // `match`
        self.expr_no_struct();
        if self.at(LCurly) {
            self.start(MatchArmList);
            self.bump();
            while !self.at(RCurly) && !self.at(Eof) {
                self.match_arm();
                if !self.at(RCurly) {
                    self.eat(Comma);
                }
            }
            self.expect(RCurly);
            self.builder.finish_node();
        } else {
            self.error("expected `{`");
        }
        self.builder.finish_node();
    }

    fn match_arm(&mut self) {
        self.start(MatchArm);
        self.pattern();
        if self.at(IfKw) {
            self.start(MatchGuard);
            self.bump();
            self.expr_no_struct();
            self.builder.finish_node();
        }
        self.expect(FatArrow);
        self.expr();
        self.builder.finish_node();
    }

    fn struct_lit_field_list(&mut self) {
        self.start(StructLitFieldList);
        self.bump(); // `{`
        while !self.at(RCurly) && !self.at(Eof) {
            self.start(StructLitField);
            if self.at(DotDot) {
                self.bump();
                self.expr();
            } else {
                self.start(NameRef);
                self.expect(Ident);
                self.builder.finish_node();
                if self.eat(Colon) {
                    self.expr();
                }
            }
            self.builder.finish_node();
            if !self.at(RCurly) {
                self.expect(Comma);
            }
        }
        self.expect(RCurly);
        self.builder.finish_node();
    }

    // Patterns -----------------------------------------------------------

    fn pattern(&mut self) {
        match self.current() {
            Underscore => {
                self.start(PlaceholderPat);
                self.bump();
                self.builder.finish_node();
            }
            DotDot => {
                self.start(RestPat);
                self.bump();
                self.builder.finish_node();
            }
            Amp => {
                self.start(RefPat);
                self.bump();
                self.eat(MutKw);
                self.pattern();
                self.builder.finish_node();
            }
            MutKw => {
                self.start(BindPat);
                self.bump();
                self.name();
                self.builder.finish_node();
            }
            LParen => {
                self.start(TuplePat);
                self.bump();
                while !self.at(RParen) && !self.at(Eof) {
                    self.pattern();
                    if !self.at(RParen) {
                        self.expect(Comma);
                    }
                }
                self.expect(RParen);
                self.builder.finish_node();
            }
            IntNumber | String | Char | TrueKw | FalseKw => {
                self.start(LiteralPat);
                self.bump();
                self.builder.finish_node();
            }
            Ident | SelfKw | CrateKw | SuperKw => {
                // A single lowercase-style segment with no qualifier and no
                // payload is a binding; everything else is a path pattern.
                let cp = self.checkpoint();
                let multi_segment = self.nth(1) == ColonColon;
                if !multi_segment && self.nth(1) != LParen && self.nth(1) != LCurly {
                    self.builder.start_node_at(cp, BindPat);
                    self.name();
                    self.builder.finish_node();
                    return;
                }
                self.path();
                match self.current() {
                    LParen => {
                        self.builder.start_node_at(cp, TupleStructPat);
                        self.bump();
                        while !self.at(RParen) && !self.at(Eof) {
                            self.pattern();
                            if !self.at(RParen) {
                                self.expect(Comma);
                            }
                        }
                        self.expect(RParen);
                        self.builder.finish_node();
                    }
                    LCurly => {
                        self.builder.start_node_at(cp, RecordPat);
                        self.bump();
                        while !self.at(RCurly) && !self.at(Eof) {
                            self.start(RecordPatField);
                            if self.at(DotDot) {
                                self.bump();
                            } else {
                                self.name();
                                if self.eat(Colon) {
                                    self.pattern();
                                }
                            }
                            self.builder.finish_node();
                            if !self.at(RCurly) {
                                self.expect(Comma);
                            }
                        }
                        self.expect(RCurly);
                        self.builder.finish_node();
                    }
                    _ => {
                        self.builder.start_node_at(cp, PathPat);
                        self.builder.finish_node();
                    }
                }
            }
            _ => self.err_and_bump("expected a pattern"),
        }
    }
}
