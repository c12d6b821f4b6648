//! JavaScript scanner for Quill.
//!
//! The [`Scanner`] turns source text into tokens on demand, holding up to
//! three at a time (current, next, and one further on request). Literal
//! text lives in reusable per-slot buffers; [`TokenDesc::to_token`] copies
//! a token out when it must outlive the next `advance`.
//!
//! # Architecture
//!
//! - `quill_lexer_core` supplies the [`CharacterSource`](quill_lexer_core::CharacterSource)
//!   the scanner reads from, and character classification.
//! - `scanner` dispatches on the first character and runs one sub-scanner
//!   per token family (punctuators, numbers, strings, templates,
//!   identifiers, trivia).
//! - [`classify`] maps identifier text to keyword kinds.
//!
//! [`tokenize`] runs a scanner over a whole string for tools and tests.

mod config;
mod keywords;
mod literal_buffer;
mod scan_error;
mod scan_flags;
mod scanner;
mod token_desc;

pub use config::{ScannerConfig, SourceMode, DEFAULT_MAX_BIGINT_LENGTH_BITS};
pub use keywords::classify;
pub use literal_buffer::LiteralBuffer;
pub use scan_error::{MessageKind, ScanError};
pub use scan_flags::{character_scan_flags, ScanFlags};
pub use scanner::{NumberKind, Scanner, Slot};
pub use token_desc::{Token, TokenDesc};

use quill_ir::{Location, TokenKind};
use quill_lexer_core::SourceBuffer;

/// Result of scanning a whole source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexOutput {
    /// Every token up to and including `EndOfInput`, or up to the first
    /// fatal error.
    pub tokens: Vec<Token>,
    /// Errors carried by `Illegal` tokens, in source order.
    pub errors: Vec<ScanError>,
    /// Deferred strict-mode diagnostics for legacy octal literals.
    pub strict_diagnostics: Vec<ScanError>,
    pub found_html_comment: bool,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn push_strict_diagnostic(&mut self, diagnostic: Option<(Location, MessageKind)>) {
        if let Some((location, kind)) = diagnostic {
            debug_assert!(kind.is_strict_only());
            self.strict_diagnostics.push(ScanError::new(location, kind));
        }
    }

    /// Token kinds, for quick comparisons.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|token| token.kind).collect()
    }
}

/// Scan all of `source`.
///
/// Scanning continues past recoverable `Illegal` tokens and stops after a
/// fatal one.
///
/// ```
/// use quill_ir::TokenKind;
/// use quill_lexer::{tokenize, ScannerConfig};
///
/// let output = tokenize("a + 1", ScannerConfig::default());
/// assert_eq!(
///     output.kinds(),
///     vec![TokenKind::Identifier, TokenKind::Add, TokenKind::Smi, TokenKind::EndOfInput]
/// );
/// ```
pub fn tokenize(source: &str, config: ScannerConfig) -> LexOutput {
    let buffer = SourceBuffer::new(source);
    let mut scanner = Scanner::new(buffer.cursor(), config);
    scanner.initialize();

    // The scanner runs one token ahead, so each deferred diagnostic belongs
    // to the token just scanned into the next slot.
    let mut output = LexOutput::default();
    output.push_strict_diagnostic(scanner.take_octal_diagnostic());
    loop {
        let kind = scanner.advance();
        let upcoming = scanner.take_octal_diagnostic();
        let token = scanner.token(Slot::Current);
        let fatal = token.error().is_some_and(ScanError::is_fatal);
        if let Some(error) = token.error() {
            output.errors.push(*error);
        }
        output.tokens.push(token.to_token());
        if kind == TokenKind::EndOfInput || fatal {
            break;
        }
        output.push_strict_diagnostic(upcoming);
    }
    output.found_html_comment = scanner.found_html_comment();
    output
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
