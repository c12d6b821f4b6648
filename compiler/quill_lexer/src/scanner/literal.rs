//! String and template literals.

use quill_ir::{Location, TokenKind};
use quill_lexer_core::CharacterSource;

use super::Scanner;
use crate::scan_flags::character_scan_flags;
use crate::MessageKind;

impl<S: CharacterSource> Scanner<S> {
    /// Scan a string literal. `c0` is the opening `quote`.
    ///
    /// The literal keeps escapes verbatim: a backslash and the code point
    /// after it (both of a CRLF pair) are appended unchanged.
    pub(super) fn scan_string(&mut self, quote: char) -> TokenKind {
        let opening = self.source_pos();
        loop {
            let literal = &mut self.tokens[self.next].literal;
            self.c0 = self.source.advance_until(|c| {
                if character_scan_flags(c).may_terminate_string() {
                    return true;
                }
                literal.add_char(c);
                false
            });

            while self.c0 == Some('\\') {
                self.add_literal_char_advance();
                match self.c0 {
                    None => break,
                    Some('\r') => {
                        self.add_literal_char_advance();
                        if self.c0 == Some('\n') {
                            self.add_literal_char_advance();
                        }
                    }
                    Some(_) => self.add_literal_char_advance(),
                }
            }

            match self.c0 {
                Some(c) if c == quote => {
                    self.advance_char();
                    return TokenKind::String;
                }
                None | Some('\n' | '\r') => {
                    return self.report(
                        Location::new(opening, opening + 1),
                        MessageKind::UnterminatedString,
                    );
                }
                // The other quote, or whatever followed an escape.
                Some(c) => self.add_literal_char(c),
            }
        }
    }

    /// Scan template characters up to `` ` `` or `${`.
    ///
    /// `c0` is the first code point after the opening backtick or `}`,
    /// which sits at `opening`. Escapes are kept verbatim in both buffers;
    /// CR and CRLF become LF in both.
    pub(super) fn scan_template_span(&mut self, opening: u32) -> TokenKind {
        loop {
            match self.c0 {
                None => {
                    return self.report(
                        Location::new(opening, opening + 1),
                        MessageKind::UnterminatedTemplate,
                    );
                }
                Some('`') => {
                    self.advance_char();
                    return TokenKind::TemplateTail;
                }
                Some('$') if self.peek_char() == Some('{') => {
                    self.advance_char();
                    self.advance_char();
                    return TokenKind::TemplateSpan;
                }
                Some('\\') => {
                    self.advance_char();
                    self.add_template_char('\\');
                    if let Some(escaped) = self.c0 {
                        self.advance_char();
                        self.add_template_char_normalized(escaped);
                    }
                }
                Some(c) => {
                    self.advance_char();
                    self.add_template_char_normalized(c);
                }
            }
        }
    }

    fn add_template_char(&mut self, c: char) {
        self.add_literal_char(c);
        self.add_raw_char(c);
    }

    /// Append the just-consumed `c`, folding CR and CRLF into LF.
    fn add_template_char_normalized(&mut self, c: char) {
        if c == '\r' {
            if self.c0 == Some('\n') {
                self.advance_char();
            }
            self.add_template_char('\n');
        } else {
            self.add_template_char(c);
        }
    }
}
