//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content so
//! the cursor can decode the byte at its position without a bounds check in
//! the common case. The total size is rounded up to the next 64-byte
//! boundary, which also keeps multi-byte lookahead near the end in bounds.
//!
//! JavaScript allows U+0000 inside string literals and comments, so a zero
//! byte is only end of input once the position reaches the source length.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Owned copy of the source text followed by a sentinel and zero padding.
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a padded, sentinel-terminated buffer.
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to the first
    /// `u32::MAX` bytes worth of offsets; locations could not address them.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = u32::try_from(source_bytes.len()).unwrap_or(u32::MAX);
        let content_len = source_len as usize;

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (content_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..content_len].copy_from_slice(&source_bytes[..content_len]);

        Self { buf, source_len }
    }

    /// The source bytes, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// A [`Cursor`] positioned before the first code point.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

#[cfg(test)]
mod tests;
