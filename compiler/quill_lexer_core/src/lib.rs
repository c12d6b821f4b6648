//! Character-level foundation for the Quill JavaScript scanner.
//!
//! This crate knows nothing about tokens. It provides:
//! - [`SourceBuffer`]: owned, sentinel-terminated copy of the source text
//! - [`Cursor`]: UTF-8 code point cursor over a [`SourceBuffer`]
//! - [`CharacterSource`]: the advance/peek/push-back contract the scanner
//!   consumes, implemented by [`Cursor`]
//! - [`char_class`]: ECMAScript character classification predicates

pub mod char_class;
mod character_source;
mod cursor;
mod source_buffer;

pub use character_source::CharacterSource;
pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
