//! LL1 Core - single-character lookahead scanning primitives
//!
//! Building blocks for hand-written recursive-descent scanners:
//! - [`InputSource`]: adapter trait over any character stream and width
//! - predicates: [`is`], [`is_not`], [`is_one_of`], [`is_none_of`]
//! - consuming operations: [`read`], [`expect`], [`ignore_if`], [`ignore_while`]
//! - [`Position`]: row/column of the next character
//!
//! Everything is caller-owned: the source and the position are passed into
//! each call and nothing is kept between calls.
//!
//! ```
//! use ll1_core::{expect, ignore_if, is, read, Position, DIGIT};
//!
//! let mut src = "-42".chars().peekable();
//! let mut pos = Position::start();
//!
//! let digit = |c: Option<char>| c.and_then(|c| c.to_digit(10)).unwrap();
//!
//! let negative = ignore_if(&mut src, &mut pos, '-');
//! let mut value = digit(expect(&mut src, &mut pos, DIGIT).unwrap()) as i64;
//! while is(&mut src, DIGIT) {
//!     value = value * 10 + digit(read(&mut src, &mut pos)) as i64;
//! }
//! assert_eq!(if negative { -value } else { value }, -42);
//! assert_eq!(pos, Position::new(1, 4));
//! ```

pub mod char_unit;
pub mod class;
pub mod combinator;
pub mod cursor;
pub mod error;
pub mod position;
pub mod source;
pub mod target;

pub use char_unit::CharUnit;
pub use class::{
    Class, ALNUM, ALPHA, BLANK, CHARACTER, CNTRL, DIGIT, END, GRAPH, LOWER, PRINT, PUNCT, SPACE,
    UPPER, XDIGIT,
};
pub use combinator::{expect, ignore_if, ignore_while, is, is_none_of, is_not, is_one_of, read};
pub use cursor::Cursor;
pub use error::{Diagnostic, UnexpectedToken};
pub use position::Position;
pub use source::{InputSource, ReaderSource, SliceSource};
pub use target::{satisfies, Satisfies, Target, TargetSet};
