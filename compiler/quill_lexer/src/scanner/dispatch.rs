//! Main token dispatch.
//!
//! A 128-entry table gives each ASCII character a coarse token kind. Fixed
//! one-character punctuators are returned straight from the table; the
//! other entries pick a sub-scanner or resolve a longer punctuator.

use quill_ir::TokenKind;
use quill_lexer_core::char_class::{
    is_decimal_digit, is_identifier_start, is_white_space_or_line_terminator,
};
use quill_lexer_core::CharacterSource;

use super::Scanner;
use crate::MessageKind;

const fn one_char_token(b: u8) -> TokenKind {
    match b {
        b'(' => TokenKind::LeftParen,
        b')' => TokenKind::RightParen,
        b'{' => TokenKind::LeftBrace,
        b'}' => TokenKind::RightBrace,
        b'[' => TokenKind::LeftBracket,
        b']' => TokenKind::RightBracket,
        b':' => TokenKind::Colon,
        b';' => TokenKind::Semicolon,
        b',' => TokenKind::Comma,
        b'~' => TokenKind::BitNot,
        b'.' => TokenKind::Period,
        b'?' => TokenKind::Conditional,
        b'<' => TokenKind::Lt,
        b'>' => TokenKind::Gt,
        b'=' => TokenKind::Assign,
        b'!' => TokenKind::Not,
        b'+' => TokenKind::Add,
        b'-' => TokenKind::Sub,
        b'*' => TokenKind::Mul,
        b'/' => TokenKind::Div,
        b'%' => TokenKind::Mod,
        b'&' => TokenKind::BitAnd,
        b'|' => TokenKind::BitOr,
        b'^' => TokenKind::BitXor,
        b'"' | b'\'' => TokenKind::String,
        b'`' => TokenKind::TemplateSpan,
        b'#' => TokenKind::PrivateName,
        b'0'..=b'9' => TokenKind::Number,
        b'a'..=b'z' | b'A'..=b'Z' | b'$' | b'_' | b'\\' => TokenKind::Identifier,
        b'\t' | 0x0B | 0x0C | b' ' | b'\n' | b'\r' => TokenKind::Whitespace,
        _ => TokenKind::Illegal,
    }
}

static ONE_CHAR_TOKENS: [TokenKind; 128] = {
    let mut table = [TokenKind::Illegal; 128];
    let mut i = 0u8;
    while i < 128 {
        table[i as usize] = one_char_token(i);
        i += 1;
    }
    table
};

impl<S: CharacterSource> Scanner<S> {
    /// Scan one token into the next slot, skipping trivia.
    ///
    /// Never returns [`TokenKind::Whitespace`].
    pub(super) fn scan_single_token(&mut self) -> TokenKind {
        loop {
            self.tokens[self.next].location.begin = self.source_pos();
            let Some(c) = self.c0 else {
                return TokenKind::EndOfInput;
            };
            let kind = if c.is_ascii() {
                self.scan_ascii(c, ONE_CHAR_TOKENS[c as usize])
            } else {
                self.scan_non_ascii(c)
            };
            if kind != TokenKind::Whitespace {
                return kind;
            }
        }
    }

    fn scan_ascii(&mut self, c: char, token: TokenKind) -> TokenKind {
        match token {
            TokenKind::Illegal => self.scan_illegal(),
            TokenKind::String => self.scan_string(c),
            TokenKind::TemplateSpan => {
                let opening = self.source_pos();
                self.advance_char();
                self.scan_template_span(opening)
            }
            TokenKind::PrivateName => self.scan_private_name(),
            TokenKind::Number => self.scan_number(false),
            TokenKind::Identifier => self.scan_identifier_or_keyword(),
            TokenKind::Whitespace => self.skip_white_space(),

            TokenKind::Lt => {
                // < <= << <<= <!--
                self.advance_char();
                match self.c0 {
                    Some('=') => self.select(TokenKind::Lte),
                    Some('<') => self.select_if('=', TokenKind::AssignShl, TokenKind::Shl),
                    Some('!') => self.scan_html_comment(),
                    _ => TokenKind::Lt,
                }
            }
            TokenKind::Gt => {
                // > >= >> >>= >>> >>>=
                self.advance_char();
                match self.c0 {
                    Some('=') => self.select(TokenKind::Gte),
                    Some('>') => {
                        self.advance_char();
                        match self.c0 {
                            Some('=') => self.select(TokenKind::AssignSar),
                            Some('>') => {
                                self.select_if('=', TokenKind::AssignShr, TokenKind::Shr)
                            }
                            _ => TokenKind::Sar,
                        }
                    }
                    _ => TokenKind::Gt,
                }
            }
            TokenKind::Assign => {
                // = == === =>
                self.advance_char();
                match self.c0 {
                    Some('=') => self.select_if('=', TokenKind::EqStrict, TokenKind::Eq),
                    Some('>') => self.select(TokenKind::Arrow),
                    _ => TokenKind::Assign,
                }
            }
            TokenKind::Not => {
                // ! != !==
                self.advance_char();
                if self.c0 == Some('=') {
                    return self.select_if('=', TokenKind::NeStrict, TokenKind::Ne);
                }
                TokenKind::Not
            }
            TokenKind::Add => {
                // + ++ +=
                self.advance_char();
                match self.c0 {
                    Some('+') => self.select(TokenKind::Inc),
                    Some('=') => self.select(TokenKind::AssignAdd),
                    _ => TokenKind::Add,
                }
            }
            TokenKind::Sub => {
                // - -- --> -=
                self.advance_char();
                match self.c0 {
                    Some('-') => {
                        self.advance_char();
                        if self.c0 == Some('>') && self.tokens[self.next].after_line_terminator {
                            return self.skip_single_html_comment();
                        }
                        TokenKind::Dec
                    }
                    Some('=') => self.select(TokenKind::AssignSub),
                    _ => TokenKind::Sub,
                }
            }
            TokenKind::Mul => {
                // * *= ** **=
                self.advance_char();
                match self.c0 {
                    Some('*') => self.select_if('=', TokenKind::AssignExp, TokenKind::Exp),
                    Some('=') => self.select(TokenKind::AssignMul),
                    _ => TokenKind::Mul,
                }
            }
            TokenKind::Mod => self.select_if('=', TokenKind::AssignMod, TokenKind::Mod),
            TokenKind::Div => {
                // /  //  /*  /=
                self.advance_char();
                match self.c0 {
                    Some('/') => {
                        if matches!(self.peek_char(), Some('#' | '@')) {
                            self.advance_char();
                            self.advance_char();
                            return self.skip_source_url_comment();
                        }
                        self.skip_single_line_comment()
                    }
                    Some('*') => self.skip_multi_line_comment(),
                    Some('=') => self.select(TokenKind::AssignDiv),
                    _ => TokenKind::Div,
                }
            }
            TokenKind::BitAnd => {
                // & && &= &&=
                self.advance_char();
                match self.c0 {
                    Some('&') => self.select_if('=', TokenKind::AssignAnd, TokenKind::And),
                    Some('=') => self.select(TokenKind::AssignBitAnd),
                    _ => TokenKind::BitAnd,
                }
            }
            TokenKind::BitOr => {
                // | || |= ||=
                self.advance_char();
                match self.c0 {
                    Some('|') => self.select_if('=', TokenKind::AssignOr, TokenKind::Or),
                    Some('=') => self.select(TokenKind::AssignBitOr),
                    _ => TokenKind::BitOr,
                }
            }
            TokenKind::BitXor => self.select_if('=', TokenKind::AssignBitXor, TokenKind::BitXor),
            TokenKind::Period => {
                // . ... Number
                self.advance_char();
                if self.c0.is_some_and(is_decimal_digit) {
                    return self.scan_number(true);
                }
                if self.c0 == Some('.') && self.peek_char() == Some('.') {
                    self.advance_char();
                    self.advance_char();
                    return TokenKind::Ellipsis;
                }
                TokenKind::Period
            }
            TokenKind::Conditional => {
                // ? ?. ?? ??=
                self.advance_char();
                match self.c0 {
                    Some('.') => {
                        self.advance_char();
                        if !self.c0.is_some_and(is_decimal_digit) {
                            return TokenKind::QuestionPeriod;
                        }
                        // `a?.5:b` is a conditional with a fraction
                        self.push_back('.');
                        TokenKind::Conditional
                    }
                    Some('?') => self.select_if('=', TokenKind::AssignNullish, TokenKind::Nullish),
                    _ => TokenKind::Conditional,
                }
            }

            // ( ) { } [ ] : ; , ~
            kind => self.select(kind),
        }
    }

    fn scan_non_ascii(&mut self, c: char) -> TokenKind {
        if is_identifier_start(c) {
            return self.scan_identifier_or_keyword();
        }
        if is_white_space_or_line_terminator(c) {
            return self.skip_white_space();
        }
        self.scan_illegal()
    }

    /// Consume `c0` as an illegal token.
    fn scan_illegal(&mut self) -> TokenKind {
        let location = self.current_char_location();
        self.advance_char();
        self.report(location, MessageKind::InvalidCharacter)
    }
}
