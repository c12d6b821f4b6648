//! Identifiers, keywords and private names.
//!
//! Plain ASCII identifiers take a fast path that tracks a running
//! [`ScanFlags`](crate::ScanFlags) mask and only consults the keyword
//! classifier when every character could belong to a keyword. Escapes and
//! non-ASCII characters continue on the slow path.

use quill_ir::{Location, TokenKind};
use quill_lexer_core::char_class::{is_identifier_part, is_identifier_start};
use quill_lexer_core::CharacterSource;

use super::Scanner;
use crate::keywords::classify;
use crate::scan_flags::{char_can_be_keyword, character_scan_flags};
use crate::MessageKind;

impl<S: CharacterSource> Scanner<S> {
    /// Scan an identifier or keyword. `c0` is an identifier start.
    pub(super) fn scan_identifier_or_keyword(&mut self) -> TokenKind {
        let Some(first) = self.c0 else {
            return TokenKind::Illegal;
        };

        let can_be_keyword = if first == '\\' {
            let begin = self.source_pos();
            match self.scan_identifier_unicode_escape() {
                Some(c) if c != '\\' && is_identifier_start(c) => {
                    self.tokens[self.next].contains_escapes = true;
                    self.add_literal_char(c);
                    char_can_be_keyword(c)
                }
                _ => return self.report_invalid_escape(begin),
            }
        } else if first.is_ascii() {
            let mut flags = character_scan_flags(first).for_identifier_start();
            let literal = &mut self.tokens[self.next].literal;
            literal.add_char(first);
            self.c0 = self.source.advance_until(|c| {
                let char_flags = character_scan_flags(c);
                flags |= char_flags;
                if char_flags.terminates_literal() {
                    return true;
                }
                literal.add_char(c);
                false
            });

            if !flags.identifier_needs_slow_path() {
                if !flags.can_be_keyword() {
                    return TokenKind::Identifier;
                }
                return classify(self.tokens[self.next].literal.as_str());
            }
            flags.can_be_keyword()
        } else {
            self.add_literal_char_advance();
            false
        };

        self.scan_identifier_slow(can_be_keyword)
    }

    /// Continue an identifier through escapes and non-ASCII characters.
    fn scan_identifier_slow(&mut self, mut can_be_keyword: bool) -> TokenKind {
        loop {
            match self.c0 {
                Some('\\') => {
                    let begin = self.source_pos();
                    match self.scan_identifier_unicode_escape() {
                        Some(c) if c != '\\' && is_identifier_part(c) => {
                            self.tokens[self.next].contains_escapes = true;
                            can_be_keyword = can_be_keyword && char_can_be_keyword(c);
                            self.add_literal_char(c);
                        }
                        _ => return self.report_invalid_escape(begin),
                    }
                }
                Some(c) if is_identifier_part(c) => {
                    can_be_keyword = can_be_keyword && char_can_be_keyword(c);
                    self.add_literal_char_advance();
                }
                _ => break,
            }
        }

        let desc = &self.tokens[self.next];
        if !can_be_keyword || !desc.literal.is_one_byte() {
            return TokenKind::Identifier;
        }
        let kind = classify(desc.literal.as_str());
        if kind == TokenKind::Identifier || kind.is_contextual_keyword() || !desc.contains_escapes
        {
            return kind;
        }
        if kind.is_strict_reserved_word() {
            return TokenKind::EscapedStrictReservedWord;
        }
        TokenKind::EscapedKeyword
    }

    /// Decode `\uXXXX` or `\u{X...}`. `c0` is the backslash.
    fn scan_identifier_unicode_escape(&mut self) -> Option<char> {
        self.advance_char();
        if self.c0 != Some('u') {
            return None;
        }
        self.advance_char();
        self.scan_unicode_escape()
    }

    /// Decode the hex part of a unicode escape. `c0` follows the `u`.
    fn scan_unicode_escape(&mut self) -> Option<char> {
        let mut value: u32 = 0;
        if self.c0 == Some('{') {
            self.advance_char();
            let mut digits = 0;
            while let Some(digit) = self.c0.and_then(|c| c.to_digit(16)) {
                value = value * 16 + digit;
                if value > u32::from(char::MAX) {
                    return None;
                }
                digits += 1;
                self.advance_char();
            }
            if digits == 0 || self.c0 != Some('}') {
                return None;
            }
            self.advance_char();
            return char::from_u32(value);
        }

        for _ in 0..4 {
            let digit = self.c0.and_then(|c| c.to_digit(16))?;
            value = value * 16 + digit;
            self.advance_char();
        }
        char::from_u32(value)
    }

    fn report_invalid_escape(&mut self, begin: u32) -> TokenKind {
        let location = Location::new(begin, self.source_pos());
        self.report(location, MessageKind::InvalidUnicodeEscape)
    }

    /// Scan `#name`. The literal keeps the `#`.
    pub(super) fn scan_private_name(&mut self) -> TokenKind {
        if !self.peek_char().is_some_and(is_identifier_start) {
            let location = self.current_char_location();
            self.advance_char();
            return self.report(location, MessageKind::InvalidPrivateName);
        }
        self.add_literal_char_advance();
        match self.scan_identifier_or_keyword() {
            TokenKind::Illegal => TokenKind::Illegal,
            _ => TokenKind::PrivateName,
        }
    }
}
