//! The token scanner.
//!
//! [`Scanner`] pulls code points from a [`CharacterSource`] and keeps up to
//! three tokens in flight: the current token, the next one, and (on demand)
//! the one after. Each token lives in one of three reusable [`TokenDesc`]
//! slots; advancing rotates the slot roles instead of moving data.
//!
//! # Scan protocol
//!
//! Every scan writes into the slot indexed by `next`. Sub-scanners run
//! with `c0` holding the first unconsumed code point and leave it on the
//! first code point after the token.
//!
//! - [`advance`](Scanner::advance) scans a fresh token only when no token
//!   was already scanned by [`peek_ahead`](Scanner::peek_ahead).
//! - `peek_ahead` temporarily points `next` at the spare slot, scans into
//!   it, then installs it as `next_next`.
//!
//! No span of source is ever tokenized twice.

mod dispatch;
mod identifier;
mod literal;
mod numeric;
mod trivia;

pub use numeric::NumberKind;

use quill_ir::{Location, TokenKind};
use quill_lexer_core::CharacterSource;
use tracing::{debug, trace};

use crate::{MessageKind, ScanError, ScannerConfig, TokenDesc};

/// Names one of the three token roles.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Slot {
    /// The token most recently returned by [`Scanner::advance`].
    Current,
    /// One token of lookahead, always scanned.
    Next,
    /// Two tokens of lookahead, scanned by [`Scanner::peek_ahead`].
    NextNext,
}

/// JavaScript scanner with two tokens of lookahead.
///
/// ```
/// use quill_ir::TokenKind;
/// use quill_lexer::{Scanner, ScannerConfig};
/// use quill_lexer_core::SourceBuffer;
///
/// let buffer = SourceBuffer::new("let x = 1;");
/// let mut scanner = Scanner::new(buffer.cursor(), ScannerConfig::default());
/// scanner.initialize();
/// assert_eq!(scanner.advance(), TokenKind::Let);
/// assert_eq!(scanner.peek(), TokenKind::Identifier);
/// assert_eq!(scanner.peek_ahead(), TokenKind::Assign);
/// ```
pub struct Scanner<S: CharacterSource> {
    source: S,
    /// First unconsumed code point. `None` at end of input.
    c0: Option<char>,
    config: ScannerConfig,
    tokens: [TokenDesc; 3],
    current: usize,
    next: usize,
    next_next: usize,
    found_html_comment: bool,
    /// Legacy octal or leading-zero literal seen since the last take.
    octal_diagnostic: Option<(Location, MessageKind)>,
    source_url: Option<String>,
    source_mapping_url: Option<String>,
}

impl<S: CharacterSource> Scanner<S> {
    pub fn new(source: S, config: ScannerConfig) -> Self {
        Self {
            source,
            c0: None,
            config,
            tokens: [TokenDesc::new(), TokenDesc::new(), TokenDesc::new()],
            current: 0,
            next: 1,
            next_next: 2,
            found_html_comment: false,
            octal_diagnostic: None,
            source_url: None,
            source_mapping_url: None,
        }
    }

    /// Prime the scanner and scan the first token into the next slot.
    ///
    /// The first token counts as preceded by a line terminator, so a
    /// leading `-->` is an HTML comment.
    pub fn initialize(&mut self) {
        self.advance_char();
        if self.config.hashbang {
            self.skip_hashbang();
        }
        self.tokens[self.next].after_line_terminator = true;
        self.scan();
    }

    // ─── Token Stream ──────────────────────────────────────────────────

    /// Commit to the next token and return its kind.
    pub fn advance(&mut self) -> TokenKind {
        let previous = self.current;
        self.current = self.next;
        if self.tokens[self.next_next].kind == TokenKind::Uninitialized {
            self.next = previous;
            self.tokens[previous].after_line_terminator = false;
            self.scan();
        } else {
            self.next = self.next_next;
            self.next_next = previous;
            self.tokens[previous].kind = TokenKind::Uninitialized;
        }

        let token = &self.tokens[self.current];
        trace!(
            kind = %token.kind.display_name(),
            begin = token.location.begin,
            end = token.location.end,
            "advance"
        );
        token.kind
    }

    /// [`advance`](Self::advance), turning an `Illegal` token into its error.
    pub fn try_advance(&mut self) -> Result<TokenKind, ScanError> {
        let kind = self.advance();
        match self.tokens[self.current].error {
            Some(error) => Err(error),
            None => Ok(kind),
        }
    }

    /// Scan the token after next, if not already scanned.
    pub fn peek_ahead(&mut self) -> TokenKind {
        if self.tokens[self.next_next].kind != TokenKind::Uninitialized {
            return self.tokens[self.next_next].kind;
        }
        let saved = self.next;
        self.next = self.next_next;
        self.tokens[self.next].after_line_terminator = false;
        self.scan();
        self.next_next = self.next;
        self.next = saved;

        let token = &self.tokens[self.next_next];
        trace!(
            kind = %token.kind.display_name(),
            begin = token.location.begin,
            end = token.location.end,
            "peek_ahead"
        );
        token.kind
    }

    /// Re-scan the next token, a `}` closing a template substitution, as
    /// the template span that continues after it.
    ///
    /// The parser calls this when it reaches the end of `${ ... }`. The
    /// span keeps the `}` as its first byte.
    ///
    /// Returns `Illegal` and leaves every slot untouched if the next token
    /// is not `}` or a further token is already buffered by
    /// [`peek_ahead`](Self::peek_ahead).
    pub fn scan_template_continuation(&mut self) -> TokenKind {
        if self.tokens[self.next].kind != TokenKind::RightBrace
            || self.tokens[self.next_next].kind != TokenKind::Uninitialized
        {
            debug!(
                next = %self.tokens[self.next].kind.display_name(),
                buffered = self.tokens[self.next_next].kind != TokenKind::Uninitialized,
                "template continuation without a pending `}}`"
            );
            return TokenKind::Illegal;
        }
        let slot = self.next;
        let opening = self.tokens[slot].location.begin;
        self.tokens[slot].reset();
        let kind = self.scan_template_span(opening);
        self.finish_scan(slot, kind);
        kind
    }

    /// Scan one token into the next slot.
    fn scan(&mut self) {
        let slot = self.next;
        self.tokens[slot].reset();
        let kind = self.scan_single_token();
        self.finish_scan(slot, kind);
    }

    fn finish_scan(&mut self, slot: usize, kind: TokenKind) {
        let end = self.source_pos();
        let desc = &mut self.tokens[slot];
        desc.kind = kind;
        desc.location.end = end;
        if kind == TokenKind::Illegal && desc.error.is_none() {
            desc.error = Some(ScanError::new(desc.location, MessageKind::InvalidCharacter));
        }
    }

    // ─── Accessors ─────────────────────────────────────────────────────

    #[inline]
    fn slot_index(&self, slot: Slot) -> usize {
        match slot {
            Slot::Current => self.current,
            Slot::Next => self.next,
            Slot::NextNext => self.next_next,
        }
    }

    /// The token in `slot`. Only valid until the next `advance`.
    #[inline]
    pub fn token(&self, slot: Slot) -> &TokenDesc {
        &self.tokens[self.slot_index(slot)]
    }

    #[inline]
    pub fn current(&self) -> TokenKind {
        self.tokens[self.current].kind
    }

    #[inline]
    pub fn peek(&self) -> TokenKind {
        self.tokens[self.next].kind
    }

    #[inline]
    pub fn current_location(&self) -> Location {
        self.tokens[self.current].location
    }

    #[inline]
    pub fn peek_location(&self) -> Location {
        self.tokens[self.next].location
    }

    pub fn peek_ahead_location(&mut self) -> Location {
        self.peek_ahead();
        self.tokens[self.next_next].location
    }

    pub fn literal_text(&self, slot: Slot) -> &str {
        self.token(slot).literal()
    }

    pub fn raw_literal_text(&self, slot: Slot) -> &str {
        self.token(slot).raw_literal()
    }

    /// Value of the current token if it is a [`TokenKind::Smi`].
    #[inline]
    pub fn small_int_value(&self) -> Option<u32> {
        self.tokens[self.current].smi_value
    }

    /// Numeric value of the current `Number`, `Smi` or `BigInt` token.
    pub fn double_value(&self) -> Option<f64> {
        let token = &self.tokens[self.current];
        if let Some(value) = token.smi_value {
            return Some(f64::from(value));
        }
        numeric::numeric_value(token.literal(), token.number_kind?)
    }

    #[inline]
    pub fn preceded_by_line_terminator(&self, slot: Slot) -> bool {
        self.token(slot).after_line_terminator
    }

    /// Is there a line terminator between the next token and the one
    /// after it? Scans ahead if needed.
    pub fn has_line_terminator_after_next(&mut self) -> bool {
        self.peek_ahead();
        self.tokens[self.next_next].after_line_terminator
    }

    pub fn error(&self, slot: Slot) -> Option<ScanError> {
        self.token(slot).error
    }

    pub fn current_literal_equals(&self, text: &str) -> bool {
        self.tokens[self.current].literal() == text
    }

    /// Does the next token's literal read exactly `text`, with no escapes?
    pub fn next_literal_equals(&self, text: &str) -> bool {
        let token = &self.tokens[self.next];
        !token.contains_escapes && token.literal() == text
    }

    /// Deferred strict-mode diagnostic, if a legacy octal or leading-zero
    /// literal was scanned.
    #[inline]
    pub fn pending_octal_diagnostic(&self) -> Option<(Location, MessageKind)> {
        self.octal_diagnostic
    }

    /// Consume the deferred strict-mode diagnostic.
    pub fn take_octal_diagnostic(&mut self) -> Option<(Location, MessageKind)> {
        self.octal_diagnostic.take()
    }

    #[inline]
    pub fn found_html_comment(&self) -> bool {
        self.found_html_comment
    }

    /// Value of the last valid `//# sourceURL=` comment.
    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    /// Value of the last valid `//# sourceMappingURL=` comment.
    pub fn source_mapping_url(&self) -> Option<&str> {
        self.source_mapping_url.as_deref()
    }

    #[inline]
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    // ─── Character Helpers ─────────────────────────────────────────────

    #[inline]
    fn advance_char(&mut self) {
        self.c0 = self.source.advance();
    }

    /// Offset of `c0`, or the input length at end of input.
    #[inline]
    fn source_pos(&self) -> u32 {
        self.source.position()
    }

    #[inline]
    fn peek_char(&self) -> Option<char> {
        self.source.peek()
    }

    /// Step back one code point; `previous` becomes `c0` again.
    fn push_back(&mut self, previous: char) {
        self.source.push_back(previous);
        self.c0 = Some(previous);
    }

    #[inline]
    fn add_literal_char(&mut self, c: char) {
        self.tokens[self.next].literal.add_char(c);
    }

    #[inline]
    fn add_raw_char(&mut self, c: char) {
        self.tokens[self.next].raw_literal.add_char(c);
    }

    /// Append `c0` to the literal and consume it.
    #[inline]
    fn add_literal_char_advance(&mut self) {
        if let Some(c) = self.c0 {
            self.add_literal_char(c);
        }
        self.advance_char();
    }

    /// Consume `c0` and return `kind`.
    #[inline]
    fn select(&mut self, kind: TokenKind) -> TokenKind {
        self.advance_char();
        kind
    }

    /// Consume `c0`; if the following code point is `expected`, consume it
    /// too and return `then`, else return `otherwise`.
    #[inline]
    fn select_if(&mut self, expected: char, then: TokenKind, otherwise: TokenKind) -> TokenKind {
        self.advance_char();
        if self.c0 == Some(expected) {
            self.advance_char();
            then
        } else {
            otherwise
        }
    }

    /// Location of `c0`, empty at end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8 is at most 4"
    )]
    fn current_char_location(&self) -> Location {
        let pos = self.source_pos();
        let width = self.c0.map_or(0, |c| c.len_utf8() as u32);
        Location::new(pos, pos + width)
    }

    // ─── Diagnostics ───────────────────────────────────────────────────

    /// Record a scan error on the slot being scanned. The first error of a
    /// token wins.
    #[cold]
    fn report(&mut self, location: Location, kind: MessageKind) -> TokenKind {
        let desc = &mut self.tokens[self.next];
        if desc.error.is_none() {
            debug!(%location, message = %kind, "scan error");
            desc.error = Some(ScanError::new(location, kind));
        }
        TokenKind::Illegal
    }

    fn report_error(&mut self, error: ScanError) -> TokenKind {
        self.report(error.location, error.kind)
    }

    fn record_octal(&mut self, location: Location, kind: MessageKind) {
        debug!(%location, message = %kind, "deferred strict-mode diagnostic");
        self.octal_diagnostic = Some((location, kind));
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
