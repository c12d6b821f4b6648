//! Quill IR - shared scanner vocabulary
//!
//! This crate holds the types every layer of the Quill scanner agrees on:
//! - [`Location`] for half-open byte ranges in the source
//! - [`TokenKind`] for the closed set of JavaScript token kinds
//!
//! It has no knowledge of characters or scanning; `quill_lexer` produces
//! these values and downstream consumers (a parser, the `quill` driver)
//! read them.

mod location;
mod token;

pub use location::{Location, LocationError};
pub use token::TokenKind;

/// Compile-time assertion that a type has a specific size.
///
/// Used to keep hot, frequently-copied types from growing by accident.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}
