//! JavaScript token kinds.
//!
//! [`TokenKind`] is a closed, payload-free enum: literal text and numeric
//! values live in the scanner's token slots, not in the kind. Keeping the
//! kind a single byte lets the parser match on it without touching memory.

use std::fmt;

/// Every kind of token the scanner can produce.
///
/// `Whitespace` and `Uninitialized` are internal to the scanner and are
/// never returned from its public surface.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // === Punctuators ===
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Colon,
    Semicolon,
    Comma,
    Period,
    Ellipsis,
    /// `?`
    Conditional,
    /// `?.`
    QuestionPeriod,
    /// `??`
    Nullish,
    /// `=>`
    Arrow,
    /// `++`
    Inc,
    /// `--`
    Dec,

    // Assignment operators
    Assign,
    AssignNullish,
    AssignOr,
    AssignAnd,
    AssignBitOr,
    AssignBitXor,
    AssignBitAnd,
    AssignShl,
    AssignSar,
    AssignShr,
    AssignMul,
    AssignDiv,
    AssignMod,
    AssignExp,
    AssignAdd,
    AssignSub,

    // Binary operators
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    Shl,
    /// `>>` (arithmetic shift)
    Sar,
    /// `>>>` (logical shift)
    Shr,
    Mul,
    Div,
    Mod,
    Exp,
    Add,
    Sub,

    // Unary operators
    Not,
    BitNot,

    // Comparison operators
    Eq,
    Ne,
    EqStrict,
    NeStrict,
    Lt,
    Gt,
    Lte,
    Gte,

    // === Literals ===
    Number,
    /// Non-negative integer small enough for the parser's fast path.
    Smi,
    BigInt,
    String,
    /// Template chunk ending in `${`.
    TemplateSpan,
    /// Template chunk ending in the closing backtick.
    TemplateTail,
    /// `#name`
    PrivateName,
    Identifier,

    // === Keywords ===
    Async,
    Await,
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Enum,
    Export,
    Extends,
    False,
    Finally,
    For,
    Function,
    Get,
    If,
    Implements,
    Import,
    In,
    InstanceOf,
    Interface,
    Let,
    New,
    Null,
    Package,
    Private,
    Protected,
    Public,
    Return,
    Set,
    Static,
    Super,
    Switch,
    This,
    Throw,
    True,
    Try,
    TypeOf,
    Var,
    Void,
    While,
    With,
    Yield,

    /// A reserved word spelled with `\u` escapes.
    EscapedKeyword,
    /// A strict-mode reserved word spelled with `\u` escapes.
    EscapedStrictReservedWord,

    // === Scanner-internal and terminal kinds ===
    Whitespace,
    Illegal,
    EndOfInput,
    /// Marks a lookahead slot that holds no token yet.
    Uninitialized,
}

crate::static_assert_size!(TokenKind, 1);

impl TokenKind {
    /// Every punctuator, in declaration order.
    pub const PUNCTUATORS: &'static [TokenKind] = &[
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::Comma,
        TokenKind::Period,
        TokenKind::Ellipsis,
        TokenKind::Conditional,
        TokenKind::QuestionPeriod,
        TokenKind::Nullish,
        TokenKind::Arrow,
        TokenKind::Inc,
        TokenKind::Dec,
        TokenKind::Assign,
        TokenKind::AssignNullish,
        TokenKind::AssignOr,
        TokenKind::AssignAnd,
        TokenKind::AssignBitOr,
        TokenKind::AssignBitXor,
        TokenKind::AssignBitAnd,
        TokenKind::AssignShl,
        TokenKind::AssignSar,
        TokenKind::AssignShr,
        TokenKind::AssignMul,
        TokenKind::AssignDiv,
        TokenKind::AssignMod,
        TokenKind::AssignExp,
        TokenKind::AssignAdd,
        TokenKind::AssignSub,
        TokenKind::Or,
        TokenKind::And,
        TokenKind::BitOr,
        TokenKind::BitXor,
        TokenKind::BitAnd,
        TokenKind::Shl,
        TokenKind::Sar,
        TokenKind::Shr,
        TokenKind::Mul,
        TokenKind::Div,
        TokenKind::Mod,
        TokenKind::Exp,
        TokenKind::Add,
        TokenKind::Sub,
        TokenKind::Not,
        TokenKind::BitNot,
        TokenKind::Eq,
        TokenKind::Ne,
        TokenKind::EqStrict,
        TokenKind::NeStrict,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::Lte,
        TokenKind::Gte,
    ];

    /// Fixed source spelling of punctuators and keywords.
    ///
    /// Returns `None` for kinds whose text varies (literals, identifiers,
    /// escaped words) and for the internal kinds.
    pub const fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Period => ".",
            TokenKind::Ellipsis => "...",
            TokenKind::Conditional => "?",
            TokenKind::QuestionPeriod => "?.",
            TokenKind::Nullish => "??",
            TokenKind::Arrow => "=>",
            TokenKind::Inc => "++",
            TokenKind::Dec => "--",
            TokenKind::Assign => "=",
            TokenKind::AssignNullish => "??=",
            TokenKind::AssignOr => "||=",
            TokenKind::AssignAnd => "&&=",
            TokenKind::AssignBitOr => "|=",
            TokenKind::AssignBitXor => "^=",
            TokenKind::AssignBitAnd => "&=",
            TokenKind::AssignShl => "<<=",
            TokenKind::AssignSar => ">>=",
            TokenKind::AssignShr => ">>>=",
            TokenKind::AssignMul => "*=",
            TokenKind::AssignDiv => "/=",
            TokenKind::AssignMod => "%=",
            TokenKind::AssignExp => "**=",
            TokenKind::AssignAdd => "+=",
            TokenKind::AssignSub => "-=",
            TokenKind::Or => "||",
            TokenKind::And => "&&",
            TokenKind::BitOr => "|",
            TokenKind::BitXor => "^",
            TokenKind::BitAnd => "&",
            TokenKind::Shl => "<<",
            TokenKind::Sar => ">>",
            TokenKind::Shr => ">>>",
            TokenKind::Mul => "*",
            TokenKind::Div => "/",
            TokenKind::Mod => "%",
            TokenKind::Exp => "**",
            TokenKind::Add => "+",
            TokenKind::Sub => "-",
            TokenKind::Not => "!",
            TokenKind::BitNot => "~",
            TokenKind::Eq => "==",
            TokenKind::Ne => "!=",
            TokenKind::EqStrict => "===",
            TokenKind::NeStrict => "!==",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Lte => "<=",
            TokenKind::Gte => ">=",

            TokenKind::Async => "async",
            TokenKind::Await => "await",
            TokenKind::Break => "break",
            TokenKind::Case => "case",
            TokenKind::Catch => "catch",
            TokenKind::Class => "class",
            TokenKind::Const => "const",
            TokenKind::Continue => "continue",
            TokenKind::Debugger => "debugger",
            TokenKind::Default => "default",
            TokenKind::Delete => "delete",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::Enum => "enum",
            TokenKind::Export => "export",
            TokenKind::Extends => "extends",
            TokenKind::False => "false",
            TokenKind::Finally => "finally",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::Get => "get",
            TokenKind::If => "if",
            TokenKind::Implements => "implements",
            TokenKind::Import => "import",
            TokenKind::In => "in",
            TokenKind::InstanceOf => "instanceof",
            TokenKind::Interface => "interface",
            TokenKind::Let => "let",
            TokenKind::New => "new",
            TokenKind::Null => "null",
            TokenKind::Package => "package",
            TokenKind::Private => "private",
            TokenKind::Protected => "protected",
            TokenKind::Public => "public",
            TokenKind::Return => "return",
            TokenKind::Set => "set",
            TokenKind::Static => "static",
            TokenKind::Super => "super",
            TokenKind::Switch => "switch",
            TokenKind::This => "this",
            TokenKind::Throw => "throw",
            TokenKind::True => "true",
            TokenKind::Try => "try",
            TokenKind::TypeOf => "typeof",
            TokenKind::Var => "var",
            TokenKind::Void => "void",
            TokenKind::While => "while",
            TokenKind::With => "with",
            TokenKind::Yield => "yield",

            TokenKind::Number
            | TokenKind::Smi
            | TokenKind::BigInt
            | TokenKind::String
            | TokenKind::TemplateSpan
            | TokenKind::TemplateTail
            | TokenKind::PrivateName
            | TokenKind::Identifier
            | TokenKind::EscapedKeyword
            | TokenKind::EscapedStrictReservedWord
            | TokenKind::Whitespace
            | TokenKind::Illegal
            | TokenKind::EndOfInput
            | TokenKind::Uninitialized => return None,
        };
        Some(text)
    }

    /// Human-readable name for diagnostics and dumps.
    pub fn display_name(self) -> &'static str {
        if let Some(text) = self.lexeme() {
            return text;
        }
        match self {
            TokenKind::Number => "number",
            TokenKind::Smi => "small integer",
            TokenKind::BigInt => "bigint",
            TokenKind::String => "string",
            TokenKind::TemplateSpan => "template span",
            TokenKind::TemplateTail => "template tail",
            TokenKind::PrivateName => "private name",
            TokenKind::Identifier => "identifier",
            TokenKind::EscapedKeyword => "escaped keyword",
            TokenKind::EscapedStrictReservedWord => "escaped reserved word",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Illegal => "illegal token",
            TokenKind::EndOfInput => "end of input",
            TokenKind::Uninitialized => "uninitialized",
            _ => "token",
        }
    }

    /// Words that act as identifiers outside specific syntactic positions.
    ///
    /// Escaping one of these still yields its own kind; the parser decides
    /// whether the escape is allowed.
    #[inline]
    pub fn is_contextual_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Async
                | TokenKind::Await
                | TokenKind::Get
                | TokenKind::Set
                | TokenKind::Yield
        )
    }

    /// Words reserved only in strict mode code.
    #[inline]
    pub fn is_strict_reserved_word(self) -> bool {
        matches!(
            self,
            TokenKind::Implements
                | TokenKind::Interface
                | TokenKind::Package
                | TokenKind::Private
                | TokenKind::Protected
                | TokenKind::Public
                | TokenKind::Let
                | TokenKind::Static
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
