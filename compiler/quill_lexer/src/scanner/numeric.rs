//! Numeric literals.
//!
//! The cooked literal holds the digits (with radix prefix, `.` and
//! exponent) minus separators and the BigInt `n`. The raw literal holds
//! the source text verbatim. Short decimal integers skip both and come
//! back as [`TokenKind::Smi`] with their value already computed.

use quill_ir::{Location, TokenKind};
use quill_lexer_core::char_class::{
    is_binary_digit, is_decimal_digit, is_hex_digit, is_identifier_start, is_non_octal_decimal_digit,
    is_octal_digit,
};
use quill_lexer_core::CharacterSource;

use super::Scanner;
use crate::{MessageKind, ScanError};

/// Largest value a [`TokenKind::Smi`] may carry.
const SMI_MAX: u32 = (1 << 31) - 1;

/// Longest cooked literal the small-integer fast path accepts.
const SMI_MAX_DIGITS: usize = 10;

/// How a numeric literal was spelled.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NumberKind {
    /// Legacy `017`.
    ImplicitOctal,
    /// `0b101`
    Binary,
    /// `0o17`
    Octal,
    /// `0x1F`
    Hex,
    Decimal,
    /// `089`, `08.5`: a leading zero followed by an `8` or `9` somewhere.
    DecimalWithLeadingZero,
}

impl NumberKind {
    /// May carry a fraction and exponent.
    #[inline]
    pub const fn is_decimal(self) -> bool {
        matches!(
            self,
            NumberKind::Decimal | NumberKind::DecimalWithLeadingZero
        )
    }

    /// May take the BigInt `n` suffix.
    #[inline]
    pub const fn is_valid_bigint(self) -> bool {
        matches!(
            self,
            NumberKind::Decimal | NumberKind::Hex | NumberKind::Octal | NumberKind::Binary
        )
    }

    /// Length of the `0x` / `0o` / `0b` prefix.
    #[inline]
    pub const fn prefix_len(self) -> u32 {
        match self {
            NumberKind::Binary | NumberKind::Octal | NumberKind::Hex => 2,
            NumberKind::ImplicitOctal | NumberKind::Decimal | NumberKind::DecimalWithLeadingZero => {
                0
            }
        }
    }

    pub const fn radix(self) -> u32 {
        match self {
            NumberKind::Binary => 2,
            NumberKind::ImplicitOctal | NumberKind::Octal => 8,
            NumberKind::Hex => 16,
            NumberKind::Decimal | NumberKind::DecimalWithLeadingZero => 10,
        }
    }
}

/// Value of a cooked numeric literal of the given kind.
///
/// Radix literals are folded digit by digit, so values past 2^53 round
/// the way repeated multiplication rounds.
pub(crate) fn numeric_value(literal: &str, kind: NumberKind) -> Option<f64> {
    let digits = match kind {
        NumberKind::Decimal | NumberKind::DecimalWithLeadingZero => return literal.parse().ok(),
        NumberKind::ImplicitOctal => literal.get(1..)?,
        NumberKind::Binary | NumberKind::Octal | NumberKind::Hex => literal.get(2..)?,
    };
    let radix = kind.radix();
    digits.chars().try_fold(0.0_f64, |value, c| {
        c.to_digit(radix)
            .map(|digit| value * f64::from(radix) + f64::from(digit))
    })
}

impl<S: CharacterSource> Scanner<S> {
    /// Scan a numeric literal.
    ///
    /// `c0` is the first digit, or the first fraction digit when
    /// `seen_period` is set (the `.` is already consumed).
    pub(super) fn scan_number(&mut self, seen_period: bool) -> TokenKind {
        match self.scan_number_inner(seen_period) {
            Ok(kind) => kind,
            Err(error) => self.report_error(error),
        }
    }

    fn scan_number_inner(&mut self, mut seen_period: bool) -> Result<TokenKind, ScanError> {
        let start = self.tokens[self.next].location.begin;
        let mut kind = NumberKind::Decimal;
        let mut at_start = !seen_period;

        if seen_period {
            self.add_number_char('.');
            self.scan_digits(is_decimal_digit, true, true, |_| {})?;
        } else {
            if self.c0 == Some('0') {
                self.add_number_char_advance();
                match self.c0 {
                    Some('x' | 'X') => {
                        kind = NumberKind::Hex;
                        self.add_number_char_advance();
                        self.scan_digits(is_hex_digit, true, true, |_| {})?;
                    }
                    Some('o' | 'O') => {
                        kind = NumberKind::Octal;
                        self.add_number_char_advance();
                        self.scan_digits(is_octal_digit, true, true, |_| {})?;
                    }
                    Some('b' | 'B') => {
                        kind = NumberKind::Binary;
                        self.add_number_char_advance();
                        self.scan_digits(is_binary_digit, true, true, |_| {})?;
                    }
                    Some(c) if is_octal_digit(c) => {
                        kind = self.scan_implicit_octal_digits();
                        at_start = false;
                    }
                    Some(c) if is_non_octal_decimal_digit(c) => {
                        kind = NumberKind::DecimalWithLeadingZero;
                        at_start = false;
                    }
                    Some('_') if self.config.numeric_separators => {
                        return Err(ScanError::new(
                            self.current_char_location(),
                            MessageKind::ZeroDigitNumericSeparator,
                        ));
                    }
                    _ => {}
                }
            }

            if kind.is_decimal() {
                let allow_separators = kind != NumberKind::DecimalWithLeadingZero;
                if at_start {
                    if let Some(value) = self.scan_decimal_as_smi(allow_separators)? {
                        let desc = &mut self.tokens[self.next];
                        desc.smi_value = Some(value);
                        desc.number_kind = Some(kind);
                        return Ok(TokenKind::Smi);
                    }
                }

                self.scan_digits(is_decimal_digit, allow_separators, false, |_| {})?;
                if self.c0 == Some('.') {
                    seen_period = true;
                    self.add_number_char_advance();
                    self.scan_digits(is_decimal_digit, allow_separators, false, |_| {})?;
                }
            }
        }

        let mut is_bigint = false;
        if self.c0 == Some('n') && !seen_period && kind.is_valid_bigint() {
            let length = self
                .source_pos()
                .saturating_sub(start + kind.prefix_len());
            if length > self.config.max_bigint_digits() {
                return Err(ScanError::new(
                    Location::new(start, self.source_pos()),
                    MessageKind::BigIntTooBig,
                ));
            }
            is_bigint = true;
            self.add_raw_char('n');
            self.advance_char();
        } else if matches!(self.c0, Some('e' | 'E')) {
            if !kind.is_decimal() {
                return Err(ScanError::new(
                    self.current_char_location(),
                    MessageKind::IdentifierAfterNumber,
                ));
            }
            self.add_number_char_advance();
            if matches!(self.c0, Some('+' | '-')) {
                self.add_number_char_advance();
            }
            let allow_separators = kind != NumberKind::DecimalWithLeadingZero;
            self.scan_digits(is_decimal_digit, allow_separators, true, |_| {})?;
        }

        // A literal may not run straight into an identifier or another digit
        if self
            .c0
            .is_some_and(|c| is_decimal_digit(c) || is_identifier_start(c))
        {
            return Err(ScanError::new(
                self.current_char_location(),
                MessageKind::IdentifierAfterNumber,
            ));
        }

        self.tokens[self.next].number_kind = Some(kind);
        // Only a literal that scanned cleanly carries a strict-mode diagnostic
        let strict = match kind {
            NumberKind::ImplicitOctal => Some(MessageKind::StrictOctalLiteral),
            NumberKind::DecimalWithLeadingZero => Some(MessageKind::StrictDecimalWithLeadingZero),
            _ => None,
        };
        if let Some(message) = strict {
            self.record_octal(Location::new(start, self.source_pos()), message);
        }
        Ok(if is_bigint {
            TokenKind::BigInt
        } else {
            TokenKind::Number
        })
    }

    /// Scan the digits of a plain decimal integer, accumulating its value.
    ///
    /// Returns the value if the literal qualifies as a small integer:
    /// at most ten digits, at most [`SMI_MAX`], and not followed by a `.`
    /// or an identifier start. Otherwise the digits stay in the buffers
    /// for the general path.
    fn scan_decimal_as_smi(&mut self, allow_separators: bool) -> Result<Option<u32>, ScanError> {
        let mut value: u64 = 0;
        self.scan_digits(is_decimal_digit, allow_separators, false, |digit| {
            value = value.saturating_mul(10).saturating_add(u64::from(digit));
        })?;

        let fits = self.tokens[self.next].literal.len() <= SMI_MAX_DIGITS
            && self.c0 != Some('.')
            && !self.c0.is_some_and(is_identifier_start);
        Ok(u32::try_from(value)
            .ok()
            .filter(|&smi| fits && smi <= SMI_MAX))
    }

    /// Digits of a legacy octal literal after its leading `0`.
    ///
    /// An `8` or `9` turns the literal into a decimal with a leading zero;
    /// the caller scans the rest.
    fn scan_implicit_octal_digits(&mut self) -> NumberKind {
        loop {
            match self.c0 {
                Some(c) if is_non_octal_decimal_digit(c) => {
                    return NumberKind::DecimalWithLeadingZero;
                }
                Some(c) if is_octal_digit(c) => self.add_number_char_advance(),
                _ => return NumberKind::ImplicitOctal,
            }
        }
    }

    /// Scan a run of digits accepted by `is_digit`, with `_` separators
    /// between digits when `allow_separators` is set and enabled.
    ///
    /// `require_digit` demands at least one digit. `on_digit` sees the
    /// value of each digit in order. Separators go to the raw literal only.
    fn scan_digits(
        &mut self,
        is_digit: fn(char) -> bool,
        allow_separators: bool,
        require_digit: bool,
        mut on_digit: impl FnMut(u32),
    ) -> Result<(), ScanError> {
        let separators = allow_separators && self.config.numeric_separators;
        if require_digit && !self.c0.is_some_and(is_digit) {
            let kind = if separators && self.c0 == Some('_') {
                MessageKind::LeadingNumericSeparator
            } else {
                MessageKind::MissingDigits
            };
            return Err(ScanError::new(self.current_char_location(), kind));
        }

        let mut seen_digit = false;
        let mut last_separator: Option<Location> = None;
        loop {
            match self.c0 {
                Some(c) if is_digit(c) => {
                    on_digit(c.to_digit(16).unwrap_or(0));
                    seen_digit = true;
                    last_separator = None;
                    self.add_number_char_advance();
                }
                Some('_') if separators => {
                    let location = self.current_char_location();
                    if !seen_digit {
                        return Err(ScanError::new(
                            location,
                            MessageKind::LeadingNumericSeparator,
                        ));
                    }
                    if last_separator.is_some() {
                        return Err(ScanError::new(
                            location,
                            MessageKind::ContinuousNumericSeparator,
                        ));
                    }
                    last_separator = Some(location);
                    self.add_raw_char('_');
                    self.advance_char();
                }
                _ => break,
            }
        }

        match last_separator {
            Some(location) => Err(ScanError::new(
                location,
                MessageKind::TrailingNumericSeparator,
            )),
            None => Ok(()),
        }
    }

    /// Append `c` to both the cooked and raw literal.
    fn add_number_char(&mut self, c: char) {
        self.add_literal_char(c);
        self.add_raw_char(c);
    }

    /// Append `c0` to both literals and consume it.
    fn add_number_char_advance(&mut self) {
        if let Some(c) = self.c0 {
            self.add_number_char(c);
        }
        self.advance_char();
    }
}
