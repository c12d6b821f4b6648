//! ECMAScript character classification.
//!
//! ASCII answers come from const-built 128-entry tables; everything above
//! ASCII goes through `unicode-ident` (`XID_Start` / `XID_Continue`) or an
//! explicit match on the handful of non-ASCII whitespace code points.

/// ZERO WIDTH NON-JOINER, allowed inside identifiers.
pub const ZWNJ: char = '\u{200C}';
/// ZERO WIDTH JOINER, allowed inside identifiers.
pub const ZWJ: char = '\u{200D}';

/// `true` at index `b` when ASCII `b` may start an identifier.
///
/// Includes `\`, which introduces a `\u` escape.
static ASCII_IDENTIFIER_START: [bool; 128] = {
    let mut table = [false; 128];
    let mut i = 0u8;
    while i < 128 {
        table[i as usize] = matches!(i, b'a'..=b'z' | b'A'..=b'Z' | b'$' | b'_' | b'\\');
        i += 1;
    }
    table
};

/// `true` at index `b` when ASCII `b` may continue an identifier.
static ASCII_IDENTIFIER_PART: [bool; 128] = {
    let mut table = [false; 128];
    let mut i = 0u8;
    while i < 128 {
        table[i as usize] =
            matches!(i, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'$' | b'_' | b'\\');
        i += 1;
    }
    table
};

/// LF, CR, LINE SEPARATOR, PARAGRAPH SEPARATOR.
#[inline]
pub const fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// The ECMAScript `WhiteSpace` production (line terminators excluded).
#[inline]
pub const fn is_white_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{0B}'
            | '\u{0C}'
            | ' '
            | '\u{A0}'
            | '\u{FEFF}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

#[inline]
pub const fn is_white_space_or_line_terminator(c: char) -> bool {
    is_white_space(c) || is_line_terminator(c)
}

#[inline]
pub const fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub const fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

#[inline]
pub const fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

#[inline]
pub const fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

/// `8` or `9`: decimal digits that end an implicit octal literal.
#[inline]
pub const fn is_non_octal_decimal_digit(c: char) -> bool {
    matches!(c, '8' | '9')
}

/// `[A-Za-z0-9$_]`.
#[inline]
pub const fn is_ascii_identifier(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '$' || c == '_'
}

/// May `c` start an identifier? `\` counts, since it may begin an escape.
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    if c.is_ascii() {
        ASCII_IDENTIFIER_START[c as usize]
    } else {
        unicode_ident::is_xid_start(c)
    }
}

/// May `c` continue an identifier?
#[inline]
pub fn is_identifier_part(c: char) -> bool {
    if c.is_ascii() {
        ASCII_IDENTIFIER_PART[c as usize]
    } else {
        c == ZWNJ || c == ZWJ || unicode_ident::is_xid_continue(c)
    }
}

#[cfg(test)]
mod tests;
