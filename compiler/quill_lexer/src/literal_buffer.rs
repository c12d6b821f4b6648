//! Per-token literal text accumulator.

/// Decoded text of one literal, reused across tokens.
///
/// [`start`](Self::start) clears the text but keeps the allocation, so a
/// scanner's three buffers stop allocating once they have grown to the
/// longest literal seen.
///
/// The one-byte flag records whether every code point so far fits in
/// Latin-1. Consumers that keep a compact one-byte string representation
/// can skip re-checking the text.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LiteralBuffer {
    text: String,
    is_one_byte: bool,
}

impl Default for LiteralBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LiteralBuffer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            is_one_byte: true,
        }
    }

    /// Clear for a new literal.
    #[inline]
    pub fn start(&mut self) {
        self.text.clear();
        self.is_one_byte = true;
    }

    #[inline]
    pub fn add_char(&mut self, c: char) {
        if u32::from(c) > 0xFF {
            self.is_one_byte = false;
        }
        self.text.push(c);
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is_one_byte(&self) -> bool {
        self.is_one_byte
    }

    /// Length in bytes of the UTF-8 text.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl AsRef<str> for LiteralBuffer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests;
