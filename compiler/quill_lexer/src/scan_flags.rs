//! Per-character scan flags for the identifier and string fast paths.
//!
//! One byte per ASCII character, computed at compile time from the keyword
//! list. The identifier fast path ORs together the flags of every character
//! it consumes and inspects the union once at the end, so the common case
//! (a plain ASCII identifier that cannot be a keyword) never reaches the
//! classifier.

use bitflags::bitflags;
use quill_lexer_core::char_class::is_ascii_identifier;

use crate::keywords::KEYWORDS;

bitflags! {
    /// Facts about a single character that the fast paths care about.
    ///
    /// `CANNOT_BE_KEYWORD_START` sits exactly one bit above
    /// `CANNOT_BE_KEYWORD`: shifting the first character's flags right by
    /// one turns "cannot start a keyword" into "cannot be a keyword" and
    /// drops `TERMINATES_LITERAL`. See [`ScanFlags::for_identifier_start`].
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ScanFlags: u8 {
        /// Not an ASCII identifier character. Ends the identifier fast path.
        const TERMINATES_LITERAL = 1 << 0;
        /// Identifier character that occurs in no keyword.
        const CANNOT_BE_KEYWORD = 1 << 1;
        /// Character that starts no keyword.
        const CANNOT_BE_KEYWORD_START = 1 << 2;
        /// Quote, backslash, CR or LF: ends the string fast path.
        const STRING_TERMINATOR = 1 << 3;
        /// `\` or non-ASCII: identifier needs the escape-aware path.
        const IDENTIFIER_NEEDS_SLOW_PATH = 1 << 4;
    }
}

/// `true` at index `b` when ASCII `b` appears in some keyword.
const KEYWORD_CHARS: [bool; 128] = keyword_table(false);

/// `true` at index `b` when some keyword starts with ASCII `b`.
const KEYWORD_STARTS: [bool; 128] = keyword_table(true);

const fn keyword_table(starts_only: bool) -> [bool; 128] {
    let mut table = [false; 128];
    let mut k = 0;
    while k < KEYWORDS.len() {
        let bytes = KEYWORDS[k].as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            table[bytes[i] as usize] = true;
            if starts_only {
                break;
            }
            i += 1;
        }
        k += 1;
    }
    table
}

const fn ascii_scan_flags(b: u8) -> ScanFlags {
    let c = b as char;
    let mut bits = 0;
    if is_ascii_identifier(c) && !KEYWORD_CHARS[b as usize] {
        bits |= ScanFlags::CANNOT_BE_KEYWORD.bits();
    }
    if !KEYWORD_STARTS[b as usize] {
        bits |= ScanFlags::CANNOT_BE_KEYWORD_START.bits();
    }
    if !is_ascii_identifier(c) {
        bits |= ScanFlags::TERMINATES_LITERAL.bits();
    }
    if matches!(b, b'\'' | b'"' | b'\n' | b'\r' | b'\\') {
        bits |= ScanFlags::STRING_TERMINATOR.bits();
    }
    if b == b'\\' {
        bits |= ScanFlags::IDENTIFIER_NEEDS_SLOW_PATH.bits();
    }
    ScanFlags::from_bits_retain(bits)
}

static CHARACTER_SCAN_FLAGS: [ScanFlags; 128] = {
    let mut table = [ScanFlags::empty(); 128];
    let mut i = 0u8;
    while i < 128 {
        table[i as usize] = ascii_scan_flags(i);
        i += 1;
    }
    table
};

/// Scan flags for `c`.
///
/// Every non-ASCII character terminates the fast path and sends an
/// identifier to the slow path; none can be part of a keyword.
#[inline]
pub fn character_scan_flags(c: char) -> ScanFlags {
    if c.is_ascii() {
        CHARACTER_SCAN_FLAGS[c as usize]
    } else {
        ScanFlags::TERMINATES_LITERAL
            | ScanFlags::IDENTIFIER_NEEDS_SLOW_PATH
            | ScanFlags::CANNOT_BE_KEYWORD
    }
}

/// May `c` appear in a keyword? Used by the slow path after an escape.
#[inline]
pub(crate) fn char_can_be_keyword(c: char) -> bool {
    c.is_ascii() && KEYWORD_CHARS[c as usize]
}

impl ScanFlags {
    #[inline]
    pub fn terminates_literal(self) -> bool {
        self.contains(ScanFlags::TERMINATES_LITERAL)
    }

    #[inline]
    pub fn can_be_keyword(self) -> bool {
        !self.contains(ScanFlags::CANNOT_BE_KEYWORD)
    }

    #[inline]
    pub fn identifier_needs_slow_path(self) -> bool {
        self.contains(ScanFlags::IDENTIFIER_NEEDS_SLOW_PATH)
    }

    #[inline]
    pub fn may_terminate_string(self) -> bool {
        self.contains(ScanFlags::STRING_TERMINATOR)
    }

    /// Seed for the running identifier mask.
    #[inline]
    #[must_use]
    pub fn for_identifier_start(self) -> ScanFlags {
        ScanFlags::from_bits_retain(self.bits() >> 1)
    }
}

#[cfg(test)]
mod tests;
