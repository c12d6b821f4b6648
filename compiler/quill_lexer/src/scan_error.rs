//! Scan errors.
//!
//! Every `Illegal` token carries a [`ScanError`] on its slot: WHERE
//! (`location`) and WHAT (`kind`). Two kinds are fatal; a caller
//! that wants to stop on them uses [`Scanner::try_advance`](crate::Scanner::try_advance)
//! or checks [`ScanError::is_fatal`].

use std::fmt;

use quill_ir::Location;

/// What went wrong, or what a deferred strict-mode diagnostic is about.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MessageKind {
    // === Deferred strict-mode diagnostics ===
    /// Legacy octal literal such as `017`.
    StrictOctalLiteral,
    /// Decimal literal with a leading zero such as `089`.
    StrictDecimalWithLeadingZero,

    // === Numeric Errors ===
    /// `0_1`
    ZeroDigitNumericSeparator,
    /// `1__0`
    ContinuousNumericSeparator,
    /// `1_`
    TrailingNumericSeparator,
    /// `0x_1`, `1._5`
    LeadingNumericSeparator,
    /// `0x`, `1e+`
    MissingDigits,
    /// `3in`, `0b12`
    IdentifierAfterNumber,
    BigIntTooBig,

    // === Literal Errors ===
    UnterminatedString,
    UnterminatedTemplate,
    UnterminatedComment,

    // === Character Errors ===
    /// `<!--` or `-->` in module code.
    HtmlCommentInModule,
    /// `#` not followed by an identifier.
    InvalidPrivateName,
    InvalidUnicodeEscape,
    InvalidCharacter,
}

impl MessageKind {
    pub const fn message(self) -> &'static str {
        match self {
            MessageKind::StrictOctalLiteral => {
                "octal literals are not allowed in strict mode"
            }
            MessageKind::StrictDecimalWithLeadingZero => {
                "decimals with leading zeros are not allowed in strict mode"
            }
            MessageKind::ZeroDigitNumericSeparator => {
                "numeric separator can not be used after leading 0"
            }
            MessageKind::ContinuousNumericSeparator => {
                "only one underscore is allowed as numeric separator"
            }
            MessageKind::TrailingNumericSeparator => {
                "numeric separators are not allowed at the end of numeric literals"
            }
            MessageKind::LeadingNumericSeparator => {
                "numeric separators are not allowed at the start of a digit sequence"
            }
            MessageKind::MissingDigits => "expected digits in numeric literal",
            MessageKind::IdentifierAfterNumber => {
                "identifier starts immediately after numeric literal"
            }
            MessageKind::BigIntTooBig => "bigint literal is too big",
            MessageKind::UnterminatedString => "unterminated string literal",
            MessageKind::UnterminatedTemplate => "unterminated template literal",
            MessageKind::UnterminatedComment => "unterminated multi-line comment",
            MessageKind::HtmlCommentInModule => "HTML comments are not allowed in modules",
            MessageKind::InvalidPrivateName => "invalid private name",
            MessageKind::InvalidUnicodeEscape => "invalid Unicode escape sequence",
            MessageKind::InvalidCharacter => "invalid or unexpected token",
        }
    }

    /// Errors the scanner cannot recover from inside the current goal.
    pub const fn is_fatal(self) -> bool {
        matches!(
            self,
            MessageKind::HtmlCommentInModule | MessageKind::InvalidPrivateName
        )
    }

    /// Diagnostics that only matter in strict mode code.
    pub const fn is_strict_only(self) -> bool {
        matches!(
            self,
            MessageKind::StrictOctalLiteral | MessageKind::StrictDecimalWithLeadingZero
        )
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A located scan error.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {location}")]
pub struct ScanError {
    pub location: Location,
    pub kind: MessageKind,
}

impl ScanError {
    #[cold]
    pub fn new(location: Location, kind: MessageKind) -> Self {
        Self { location, kind }
    }

    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }
}
