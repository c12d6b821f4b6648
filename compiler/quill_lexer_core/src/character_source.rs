//! The contract between the scanner and the text it reads.

use crate::char_class::is_line_terminator;

/// Sequential code point cursor consumed by the scanner.
///
/// The source always has a *current* code point: the one most recently
/// returned by [`advance`](Self::advance). [`position`](Self::position)
/// reports where that code point starts. Once the input is exhausted,
/// `advance` keeps returning `None` and `position` reports the input length.
///
/// Offsets are in whatever unit the implementation chooses, as long as
/// they are monotonic. [`Cursor`](crate::Cursor) uses UTF-8 byte offsets.
pub trait CharacterSource {
    /// Consume the next code point and make it current.
    fn advance(&mut self) -> Option<char>;

    /// The code point after the current one, without consuming it.
    fn peek(&self) -> Option<char>;

    /// Undo one [`advance`](Self::advance). `previous` is the code point
    /// that becomes current again.
    fn push_back(&mut self, previous: char);

    /// Offset of the current code point.
    fn position(&self) -> u32;

    /// Advance until `pred` holds for a code point, which becomes current.
    ///
    /// The current code point is not tested. Returns `None` when the input
    /// runs out first.
    fn advance_until(&mut self, mut pred: impl FnMut(char) -> bool) -> Option<char>
    where
        Self: Sized,
    {
        loop {
            let c = self.advance()?;
            if pred(c) {
                return Some(c);
            }
        }
    }

    /// Advance to the next line terminator, which becomes current.
    fn skip_to_line_terminator(&mut self) -> Option<char>
    where
        Self: Sized,
    {
        self.advance_until(is_line_terminator)
    }

    /// Advance to the next `*` or line terminator, which becomes current.
    fn skip_to_comment_delimiter(&mut self) -> Option<char>
    where
        Self: Sized,
    {
        self.advance_until(|c| c == '*' || is_line_terminator(c))
    }

    /// Advance to the next `*`, which becomes current.
    fn skip_to_asterisk(&mut self) -> Option<char>
    where
        Self: Sized,
    {
        self.advance_until(|c| c == '*')
    }
}
