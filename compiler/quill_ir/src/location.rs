//! Source locations.
//!
//! A [`Location`] is a compact 8-byte half-open byte range. Tokens that
//! have not been scanned yet, and diagnostics with no position, carry the
//! [`Location::INVALID`] sentinel.

use std::fmt;
use std::ops::Range;

/// Error when creating a location from a range that exceeds `u32::MAX`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// Range start exceeds `u32::MAX`.
    #[error("location begin {0} (0x{0:X}) exceeds u32::MAX")]
    BeginTooLarge(usize),
    /// Range end exceeds `u32::MAX`.
    #[error("location end {0} (0x{0:X}) exceeds u32::MAX")]
    EndTooLarge(usize),
}

/// Half-open byte range `[begin, end)` in the source text.
///
/// Layout: 8 bytes total
/// - begin: u32 - byte offset of the first byte
/// - end: u32 - byte offset one past the last byte
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(C)]
pub struct Location {
    pub begin: u32,
    pub end: u32,
}

crate::static_assert_size!(Location, 8);

impl Location {
    /// Sentinel for "no location". Both ends are `u32::MAX`.
    pub const INVALID: Location = Location {
        begin: u32::MAX,
        end: u32::MAX,
    };

    #[inline]
    pub const fn new(begin: u32, end: u32) -> Self {
        Location { begin, end }
    }

    /// Try to create a location from a byte range.
    ///
    /// Returns an error if either end exceeds `u32::MAX`.
    pub fn try_from_range(range: Range<usize>) -> Result<Self, LocationError> {
        let begin =
            u32::try_from(range.start).map_err(|_| LocationError::BeginTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| LocationError::EndTooLarge(range.end))?;
        Ok(Location { begin, end })
    }

    /// `true` unless this is the [`INVALID`](Self::INVALID) sentinel or
    /// `begin` lies past `end`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.begin != u32::MAX && self.begin <= self.end
    }

    /// Length in bytes. Zero for invalid locations.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.begin)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert to a `usize` range for slicing source text.
    #[inline]
    pub fn to_range(self) -> Range<usize> {
        self.begin as usize..self.end as usize
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<Location> for Range<usize> {
    fn from(location: Location) -> Self {
        location.to_range()
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::INVALID {
            write!(f, "<invalid>")
        } else {
            write!(f, "{}..{}", self.begin, self.end)
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests;
