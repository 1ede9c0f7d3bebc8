/// Node and token kinds for the syntax tree.
///
/// Token kinds are leaves produced by the lexer; the remaining kinds are
/// interior nodes produced by the parser. One flat enum keeps tree navigation
/// uniform: every element in the tree carries a `SyntaxKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum SyntaxKind {
    // Tokens: trivia
    Whitespace,
    Comment,

    // Tokens: literals and names
    Ident,
    IntNumber,
    String,
    Char,

    // Tokens: keywords
    FnKw,
    StructKw,
    EnumKw,
    TraitKw,
    ImplKw,
    ModKw,
    UseKw,
    ConstKw,
    StaticKw,
    LetKw,
    IfKw,
    ElseKw,
    MatchKw,
    WhileKw,
    LoopKw,
    ForKw,
    InKw,
    ReturnKw,
    PubKw,
    CrateKw,
    SelfKw,
    SuperKw,
    MutKw,
    AsKw,
    TrueKw,
    FalseKw,

    // Tokens: punctuation
    LParen,
    RParen,
    LCurly,
    RCurly,
    LBrack,
    RBrack,
    LAngle,
    RAngle,
    Comma,
    Semicolon,
    Colon,
    ColonColon,
    Arrow,
    FatArrow,
    Eq,
    EqEq,
    NotEq,
    LtEq,
    GtEq,
    AmpAmp,
    PipePipe,
    Dot,
    DotDot,
    Amp,
    Pipe,
    Excl,
    Question,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Hash,
    Underscore,

    // Tokens: special
    ErrorToken,
    Eof,

    // Nodes: items
    SourceFile,
    FnDef,
    StructDef,
    EnumDef,
    TraitDef,
    ImplBlock,
    ModDef,
    UseItem,
    ConstDef,
    Visibility,
    Attr,
    Name,
    NameRef,
    ItemList,

    // Nodes: item pieces
    VariantList,
    EnumVariant,
    RecordFieldList,
    RecordField,
    TupleFieldList,
    TupleField,
    ParamList,
    Param,
    SelfParam,
    RetType,
    TypeRef,
    UseTree,
    UseTreeList,

    // Nodes: paths
    Path,
    PathSegment,
    TypeArgList,

    // Nodes: statements and expressions
    Block,
    LetStmt,
    ExprStmt,
    PathExpr,
    Literal,
    ParenExpr,
    TupleExpr,
    PrefixExpr,
    RefExpr,
    BinExpr,
    CallExpr,
    MethodCallExpr,
    FieldExpr,
    TryExpr,
    ArgList,
    IfExpr,
    Condition,
    MatchExpr,
    MatchArmList,
    MatchArm,
    MatchGuard,
    WhileExpr,
    LoopExpr,
    ReturnExpr,
    StructLit,
    StructLitFieldList,
    StructLitField,
    MacroCall,
    TokenTree,

    // Nodes: patterns
    PlaceholderPat,
    BindPat,
    PathPat,
    TupleStructPat,
    RecordPat,
    RecordPatField,
    TuplePat,
    RefPat,
    LiteralPat,
    RestPat,

    // Node: error recovery
    Error,
}

impl SyntaxKind {
    pub fn is_trivia(self) -> bool {
        matches!(self, SyntaxKind::Whitespace | SyntaxKind::Comment)
    }

    pub fn is_keyword(self) -> bool {
        use SyntaxKind::*;
        matches!(
            self,
            FnKw | StructKw
                | EnumKw
                | TraitKw
                | ImplKw
                | ModKw
                | UseKw
                | ConstKw
                | StaticKw
                | LetKw
                | IfKw
                | ElseKw
                | MatchKw
                | WhileKw
                | LoopKw
                | ForKw
                | InKw
                | ReturnKw
                | PubKw
                | CrateKw
                | SelfKw
                | SuperKw
                | MutKw
                | AsKw
                | TrueKw
                | FalseKw
        )
    }

    /// Maps an identifier's text to its keyword kind, if any.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        use SyntaxKind::*;
        let kind = match text {
            "fn" => FnKw,
            "struct" => StructKw,
            "enum" => EnumKw,
            "trait" => TraitKw,
            "impl" => ImplKw,
            "mod" => ModKw,
            "use" => UseKw,
            "const" => ConstKw,
            "static" => StaticKw,
            "let" => LetKw,
            "if" => IfKw,
            "else" => ElseKw,
            "match" => MatchKw,
            "while" => WhileKw,
            "loop" => LoopKw,
            "for" => ForKw,
            "in" => InKw,
            "return" => ReturnKw,
            "pub" => PubKw,
            "crate" => CrateKw,
            "self" => SelfKw,
            "super" => SuperKw,
            "mut" => MutKw,
            "as" => AsKw,
            "true" => TrueKw,
            "false" => FalseKw,
            _ => return None,
        };
        Some(kind)
    }

    /// Kinds that declare something with a name at item level.
    pub fn is_item(self) -> bool {
        use SyntaxKind::*;
        matches!(
            self,
            FnDef | StructDef | EnumDef | TraitDef | ImplBlock | ModDef | UseItem | ConstDef
        )
    }
}
