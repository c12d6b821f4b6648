//! UTF-8 code point cursor over a sentinel-terminated buffer.
//!
//! The cursor decodes one code point at a time. ASCII is decoded straight
//! from the lead byte; multi-byte sequences go through `str::from_utf8` on
//! at most four bytes. End of input is a zero byte at or past the source
//! length, so interior U+0000 stays ordinary content.
//!
//! Comment skipping is the hottest non-token path in minified and
//! heavily documented code, so [`Cursor`] overrides the
//! [`CharacterSource`] skip methods with memchr searches.

use crate::CharacterSource;

/// Lead byte of the UTF-8 encodings of U+2028 and U+2029.
const SEPARATOR_LEAD: u8 = 0xE2;

/// `true` if `bytes` starts with the UTF-8 encoding of U+2028 or U+2029.
#[inline]
fn starts_with_separator(bytes: &[u8]) -> bool {
    matches!(bytes, [SEPARATOR_LEAD, 0x80, 0xA8 | 0xA9, ..])
}

/// Offset of the first delimiter in `bytes`: the first hit of `find`, or
/// an earlier U+2028 or U+2029 when `separators` is set.
///
/// `find` runs once over `bytes`. Separator candidates are verified only in
/// the prefix before its hit, so each byte is searched at most twice.
fn first_delimiter(
    bytes: &[u8],
    find: impl FnOnce(&[u8]) -> Option<usize>,
    separators: bool,
) -> Option<usize> {
    let hit = find(bytes);
    if !separators {
        return hit;
    }
    let limit = hit.unwrap_or(bytes.len());
    memchr::memchr_iter(SEPARATOR_LEAD, &bytes[..limit])
        .find(|&at| starts_with_separator(&bytes[at..]))
        .or(hit)
}

/// Returns the number of bytes in the UTF-8 sequence led by `byte`.
///
/// Continuation and invalid lead bytes count as one byte.
#[inline]
pub(crate) fn utf8_char_width(byte: u8) -> u32 {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Code point cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a snapshot is a plain assignment.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`. The bytes
/// before `source_len` are valid UTF-8. Both hold by construction in
/// [`SourceBuffer::new`](crate::SourceBuffer::new).
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Byte offset of the next unread code point.
    pos: u32,
    /// Byte offset of the current code point.
    current: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer) + 3 * u32 = 28, padded to 32.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        Self {
            buf,
            pos: 0,
            current: 0,
            source_len,
        }
    }

    /// Length of the source content in bytes.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Decode the code point starting at `pos`, with its width in bytes.
    #[inline]
    fn decode_at(&self, pos: u32) -> Option<(char, u32)> {
        let lead = self.buf[pos as usize];
        if lead < 0x80 {
            if lead == 0 && pos >= self.source_len {
                return None;
            }
            return Some((char::from(lead), 1));
        }
        let width = utf8_char_width(lead);
        let start = pos as usize;
        let end = (start + width as usize).min(self.source_len as usize);
        let c = std::str::from_utf8(&self.buf[start..end])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Some((c, width))
    }

    /// Move `pos` forward to the first delimiter in the unread input and
    /// make that code point current. See [`first_delimiter`].
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len, which fits in u32"
    )]
    fn seek(
        &mut self,
        find: impl FnOnce(&[u8]) -> Option<usize>,
        separators: bool,
    ) -> Option<char> {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match first_delimiter(remaining, find, separators) {
            Some(at) => self.pos += at as u32,
            None => self.pos = self.source_len,
        }
        self.advance()
    }
}

impl CharacterSource for Cursor<'_> {
    #[inline]
    fn advance(&mut self) -> Option<char> {
        self.current = self.pos;
        let (c, width) = self.decode_at(self.pos)?;
        self.pos += width;
        Some(c)
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.decode_at(self.pos).map(|(c, _)| c)
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8 is at most 4"
    )]
    fn push_back(&mut self, previous: char) {
        self.pos = self.current;
        self.current = self.current.saturating_sub(previous.len_utf8() as u32);
    }

    #[inline]
    fn position(&self) -> u32 {
        self.current
    }

    fn skip_to_line_terminator(&mut self) -> Option<char> {
        self.seek(|bytes| memchr::memchr2(b'\n', b'\r', bytes), true)
    }

    fn skip_to_comment_delimiter(&mut self) -> Option<char> {
        self.seek(|bytes| memchr::memchr3(b'*', b'\n', b'\r', bytes), true)
    }

    fn skip_to_asterisk(&mut self) -> Option<char> {
        self.seek(|bytes| memchr::memchr(b'*', bytes), false)
    }
}

/// Reference line-terminator skip over a plain `&str`, for property tests.
///
/// Returns the byte offset of the first line terminator at or after
/// `from`, or the length of `text`.
#[cfg(test)]
fn scalar_line_terminator_offset(text: &str, from: usize) -> usize {
    text[from..]
        .char_indices()
        .find(|&(_, c)| crate::char_class::is_line_terminator(c))
        .map_or(text.len(), |(i, _)| from + i)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
