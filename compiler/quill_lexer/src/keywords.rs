//! Keyword classification.
//!
//! Identifier text is bucketed by length first (keywords are 2-10 bytes
//! and start with a lowercase ASCII letter), then matched against the
//! handful of keywords of that length. The scan-flag table is derived from
//! [`KEYWORDS`] at compile time, so the fast path only calls [`classify`]
//! for text whose every character occurs in some keyword.

use quill_ir::TokenKind;

/// Every word with its own [`TokenKind`].
pub(crate) const KEYWORDS: &[&str] = &[
    "async",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "get",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "set",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Map identifier text to its keyword kind, or [`TokenKind::Identifier`].
///
/// Total over every string; the scanner only asks about text that passed
/// the can-be-keyword filter, but any input is safe.
pub fn classify(text: &str) -> TokenKind {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-10 chars and start with a lowercase letter
    if !(2..=10).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return TokenKind::Identifier;
    }

    match len {
        2 => match text {
            "do" => TokenKind::Do,
            "if" => TokenKind::If,
            "in" => TokenKind::In,
            _ => TokenKind::Identifier,
        },
        3 => match text {
            "for" => TokenKind::For,
            "get" => TokenKind::Get,
            "let" => TokenKind::Let,
            "new" => TokenKind::New,
            "set" => TokenKind::Set,
            "try" => TokenKind::Try,
            "var" => TokenKind::Var,
            _ => TokenKind::Identifier,
        },
        4 => match text {
            "case" => TokenKind::Case,
            "else" => TokenKind::Else,
            "enum" => TokenKind::Enum,
            "null" => TokenKind::Null,
            "this" => TokenKind::This,
            "true" => TokenKind::True,
            "void" => TokenKind::Void,
            "with" => TokenKind::With,
            _ => TokenKind::Identifier,
        },
        5 => match text {
            "async" => TokenKind::Async,
            "await" => TokenKind::Await,
            "break" => TokenKind::Break,
            "catch" => TokenKind::Catch,
            "class" => TokenKind::Class,
            "const" => TokenKind::Const,
            "false" => TokenKind::False,
            "super" => TokenKind::Super,
            "throw" => TokenKind::Throw,
            "while" => TokenKind::While,
            "yield" => TokenKind::Yield,
            _ => TokenKind::Identifier,
        },
        6 => match text {
            "delete" => TokenKind::Delete,
            "export" => TokenKind::Export,
            "import" => TokenKind::Import,
            "public" => TokenKind::Public,
            "return" => TokenKind::Return,
            "static" => TokenKind::Static,
            "switch" => TokenKind::Switch,
            "typeof" => TokenKind::TypeOf,
            _ => TokenKind::Identifier,
        },
        7 => match text {
            "default" => TokenKind::Default,
            "extends" => TokenKind::Extends,
            "finally" => TokenKind::Finally,
            "package" => TokenKind::Package,
            "private" => TokenKind::Private,
            _ => TokenKind::Identifier,
        },
        8 => match text {
            "continue" => TokenKind::Continue,
            "debugger" => TokenKind::Debugger,
            "function" => TokenKind::Function,
            _ => TokenKind::Identifier,
        },
        9 => match text {
            "interface" => TokenKind::Interface,
            "protected" => TokenKind::Protected,
            _ => TokenKind::Identifier,
        },
        10 => match text {
            "implements" => TokenKind::Implements,
            "instanceof" => TokenKind::InstanceOf,
            _ => TokenKind::Identifier,
        },
        _ => TokenKind::Identifier,
    }
}

#[cfg(test)]
mod tests;
