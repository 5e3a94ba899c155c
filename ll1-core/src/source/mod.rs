//! Input source abstraction
//!
//! Any stream-like type becomes scannable by implementing [`InputSource`].
//! Everything above this module works only through its three operations.

mod reader;
mod slice;

pub use reader::ReaderSource;
pub use slice::SliceSource;

use crate::char_unit::CharUnit;
use std::iter::Peekable;

/// A stream of characters with one character of lookahead
///
/// `None` is the end-of-input sentinel. Implementations must keep the three
/// operations consistent:
/// - `look_ahead` is idempotent until the next `read`
/// - `read` returns what `look_ahead` returned just before
/// - `is_end` holds exactly when `look_ahead` returns `None`
pub trait InputSource {
    /// Character width of this source
    type Char: CharUnit;

    /// Next character, without consuming it
    fn look_ahead(&mut self) -> Option<Self::Char>;

    /// Consume and return the next character
    fn read(&mut self) -> Option<Self::Char>;

    /// Whether the source is exhausted
    fn is_end(&mut self) -> bool {
        self.look_ahead().is_none()
    }
}

impl<S: InputSource + ?Sized> InputSource for &mut S {
    type Char = S::Char;

    #[inline]
    fn look_ahead(&mut self) -> Option<Self::Char> {
        (**self).look_ahead()
    }

    #[inline]
    fn read(&mut self) -> Option<Self::Char> {
        (**self).read()
    }

    #[inline]
    fn is_end(&mut self) -> bool {
        (**self).is_end()
    }
}

/// Any peekable iterator of characters is a source, e.g.
/// `"text".chars().peekable()` or `"text".encode_utf16().peekable()`.
impl<I> InputSource for Peekable<I>
where
    I: Iterator,
    I::Item: CharUnit,
{
    type Char = I::Item;

    #[inline]
    fn look_ahead(&mut self) -> Option<Self::Char> {
        self.peek().copied()
    }

    #[inline]
    fn read(&mut self) -> Option<Self::Char> {
        self.next()
    }
}
