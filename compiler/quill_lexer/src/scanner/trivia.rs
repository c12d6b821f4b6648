//! Whitespace, comments and magic comments.
//!
//! Every skip returns [`TokenKind::Whitespace`] so dispatch loops back for
//! the next real token, or [`TokenKind::Illegal`] with a recorded error.

use quill_ir::{Location, TokenKind};
use quill_lexer_core::char_class::{
    is_line_terminator, is_white_space, is_white_space_or_line_terminator,
};
use quill_lexer_core::CharacterSource;

use super::Scanner;
use crate::MessageKind;

/// Which magic comment a `//# name=value` line sets.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum MagicComment {
    SourceUrl,
    SourceMappingUrl,
}

impl<S: CharacterSource> Scanner<S> {
    /// Skip a run of whitespace and line terminators.
    ///
    /// Crossing a line terminator marks the token being scanned as
    /// preceded by one.
    pub(super) fn skip_white_space(&mut self) -> TokenKind {
        let start = self.source_pos();
        while let Some(c) = self.c0 {
            if !is_white_space_or_line_terminator(c) {
                break;
            }
            if is_line_terminator(c) {
                self.tokens[self.next].after_line_terminator = true;
            }
            self.advance_char();
        }
        if self.source_pos() == start {
            return TokenKind::Illegal;
        }
        TokenKind::Whitespace
    }

    /// Skip to the next line terminator. `c0` is inside the comment.
    pub(super) fn skip_single_line_comment(&mut self) -> TokenKind {
        self.c0 = self.source.skip_to_line_terminator();
        TokenKind::Whitespace
    }

    /// `<!--` anywhere or `-->` at line start. Module code rejects both.
    pub(super) fn skip_single_html_comment(&mut self) -> TokenKind {
        if self.config.is_module() {
            let begin = self.tokens[self.next].location.begin;
            let location = Location::new(begin, self.source_pos());
            return self.report(location, MessageKind::HtmlCommentInModule);
        }
        self.skip_single_line_comment()
    }

    /// Entered on the `!` of `<!`. Anything but `<!--` rescans as `<`.
    pub(super) fn scan_html_comment(&mut self) -> TokenKind {
        self.advance_char();
        if self.c0 != Some('-') || self.peek_char() != Some('-') {
            self.push_back('!');
            return TokenKind::Lt;
        }
        self.advance_char();
        self.found_html_comment = true;
        self.skip_single_html_comment()
    }

    /// Skip a `/* */` comment. `c0` is the opening `*`.
    ///
    /// Until the first line terminator the search also stops on line
    /// terminators so the flag can be set; after that only `*` matters.
    pub(super) fn skip_multi_line_comment(&mut self) -> TokenKind {
        if !self.tokens[self.next].after_line_terminator {
            loop {
                self.c0 = self.source.skip_to_comment_delimiter();
                if self.skip_comment_close() {
                    return TokenKind::Whitespace;
                }
                match self.c0 {
                    None => return self.report_unterminated_comment(),
                    Some(c) if is_line_terminator(c) => {
                        self.tokens[self.next].after_line_terminator = true;
                        break;
                    }
                    Some(_) => {}
                }
            }
        }

        while self.c0.is_some() {
            self.c0 = self.source.skip_to_asterisk();
            if self.skip_comment_close() {
                return TokenKind::Whitespace;
            }
        }
        self.report_unterminated_comment()
    }

    /// Consume a run of `*`; `true` if it ends in `*/`, which is consumed.
    fn skip_comment_close(&mut self) -> bool {
        while self.c0 == Some('*') {
            self.advance_char();
            if self.c0 == Some('/') {
                self.advance_char();
                return true;
            }
        }
        false
    }

    fn report_unterminated_comment(&mut self) -> TokenKind {
        let begin = self.tokens[self.next].location.begin;
        let location = Location::new(begin, self.source_pos());
        self.report(location, MessageKind::UnterminatedComment)
    }

    /// Skip a `#!` line at the very start of the source.
    pub(super) fn skip_hashbang(&mut self) {
        if self.c0 == Some('#') && self.peek_char() == Some('!') && self.source_pos() == 0 {
            self.skip_single_line_comment();
        }
    }

    // ─── Magic Comments ────────────────────────────────────────────────

    /// Entered after `//#` or `//@`.
    pub(super) fn skip_source_url_comment(&mut self) -> TokenKind {
        self.try_to_parse_magic_comment();
        if self.c0.is_some_and(|c| !is_line_terminator(c)) {
            return self.skip_single_line_comment();
        }
        TokenKind::Whitespace
    }

    /// Parse ` <name>=<value>` and record the value for known names.
    ///
    /// Leaves `c0` wherever parsing stopped; the caller skips the rest of
    /// the line.
    fn try_to_parse_magic_comment(&mut self) {
        if !self.c0.is_some_and(is_white_space) {
            return;
        }
        self.advance_char();

        let mut name = String::new();
        while let Some(c) = self.c0 {
            if c == '=' || is_white_space_or_line_terminator(c) {
                break;
            }
            name.push(c);
            self.advance_char();
        }
        let target = match name.as_str() {
            "sourceURL" => MagicComment::SourceUrl,
            "sourceMappingURL" => MagicComment::SourceMappingUrl,
            _ => return,
        };
        if self.c0 != Some('=') {
            return;
        }
        self.advance_char();
        while self.c0.is_some_and(is_white_space) {
            self.advance_char();
        }

        let value = self.scan_magic_comment_value();
        match target {
            MagicComment::SourceUrl => self.source_url = value,
            MagicComment::SourceMappingUrl => self.source_mapping_url = value,
        }
    }

    /// Quotes, or anything but whitespace after the value, invalidate it.
    fn scan_magic_comment_value(&mut self) -> Option<String> {
        let mut value = String::new();
        while let Some(c) = self.c0 {
            if c == '"' || c == '\'' {
                return None;
            }
            if is_white_space_or_line_terminator(c) {
                break;
            }
            value.push(c);
            self.advance_char();
        }
        while let Some(c) = self.c0 {
            if is_line_terminator(c) {
                break;
            }
            if !is_white_space(c) {
                return None;
            }
            self.advance_char();
        }
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}
