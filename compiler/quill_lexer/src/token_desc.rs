//! Token slots and owned token snapshots.

use quill_ir::{Location, TokenKind};

use crate::{LiteralBuffer, NumberKind, ScanError};

/// One of the scanner's three token slots.
///
/// Slots are reused: their buffers survive from one token to the next,
/// so text read from a slot is only valid until the scanner moves on.
/// [`to_token`](Self::to_token) copies everything out.
#[derive(Clone, Debug)]
pub struct TokenDesc {
    pub(crate) kind: TokenKind,
    pub(crate) location: Location,
    pub(crate) literal: LiteralBuffer,
    pub(crate) raw_literal: LiteralBuffer,
    pub(crate) after_line_terminator: bool,
    pub(crate) smi_value: Option<u32>,
    pub(crate) number_kind: Option<NumberKind>,
    pub(crate) contains_escapes: bool,
    pub(crate) error: Option<ScanError>,
}

impl TokenDesc {
    pub(crate) fn new() -> Self {
        Self {
            kind: TokenKind::Uninitialized,
            location: Location::INVALID,
            literal: LiteralBuffer::new(),
            raw_literal: LiteralBuffer::new(),
            after_line_terminator: false,
            smi_value: None,
            number_kind: None,
            contains_escapes: false,
            error: None,
        }
    }

    /// Forget the previous token's payload before scanning into this slot.
    ///
    /// `after_line_terminator` is owned by the rotation protocol and the
    /// location is rewritten by dispatch, so neither is touched here.
    pub(crate) fn reset(&mut self) {
        self.literal.start();
        self.raw_literal.start();
        self.smi_value = None;
        self.number_kind = None;
        self.contains_escapes = false;
        self.error = None;
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Cooked text: identifier name, string contents, digits without
    /// separators, template text with normalized line terminators.
    #[inline]
    pub fn literal(&self) -> &str {
        self.literal.as_str()
    }

    /// Raw text for templates and numbers. Empty for other kinds.
    #[inline]
    pub fn raw_literal(&self) -> &str {
        self.raw_literal.as_str()
    }

    pub fn is_one_byte(&self) -> bool {
        self.literal.is_one_byte()
    }

    /// `true` if a line terminator appeared between the previous token
    /// and this one.
    #[inline]
    pub fn after_line_terminator(&self) -> bool {
        self.after_line_terminator
    }

    #[inline]
    pub fn smi_value(&self) -> Option<u32> {
        self.smi_value
    }

    #[inline]
    pub fn number_kind(&self) -> Option<NumberKind> {
        self.number_kind
    }

    /// `true` if the identifier was spelled with `\u` escapes.
    #[inline]
    pub fn contains_escapes(&self) -> bool {
        self.contains_escapes
    }

    #[inline]
    pub fn error(&self) -> Option<&ScanError> {
        self.error.as_ref()
    }

    pub fn to_token(&self) -> Token {
        Token {
            kind: self.kind,
            location: self.location,
            literal: self.literal.as_str().to_owned(),
            raw_literal: self.raw_literal.as_str().to_owned(),
            after_line_terminator: self.after_line_terminator,
            smi_value: self.smi_value,
            number_kind: self.number_kind,
            error: self.error,
        }
    }
}

/// Owned copy of a scanned token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub location: Location,
    pub literal: String,
    pub raw_literal: String,
    pub after_line_terminator: bool,
    pub smi_value: Option<u32>,
    pub number_kind: Option<NumberKind>,
    pub error: Option<ScanError>,
}
