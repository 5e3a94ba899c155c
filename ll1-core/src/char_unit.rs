//! Character units
//!
//! The atomic symbol a source yields. Supported widths:
//! - `u8`: narrow, classified as ASCII (C locale)
//! - `u16`: UTF-16 code unit, surrogates have no scalar value
//! - `u32`: UTF-32 code unit, invalid values have no scalar value
//! - `char`: Unicode scalar

use std::fmt::Debug;

/// A character of some fixed width
///
/// Classification tags work on the unit's Unicode scalar value; a unit
/// without one still compares equal to itself and counts as a character.
pub trait CharUnit: Copy + Eq + Debug {
    /// Unicode scalar value of this unit, if it has one
    fn to_char(self) -> Option<char>;

    /// Numeric value of the unit
    fn code(self) -> u32;

    /// Whether consuming this unit starts a new row
    fn is_newline(self) -> bool {
        self.to_char() == Some('\n')
    }

    /// Escaped form of the unit, e.g. `\u{D800}`
    fn escape(self) -> String {
        format!("\\u{{{:04X}}}", self.code())
    }
}

impl CharUnit for char {
    #[inline]
    fn to_char(self) -> Option<char> {
        Some(self)
    }

    #[inline]
    fn code(self) -> u32 {
        u32::from(self)
    }
}

impl CharUnit for u8 {
    #[inline]
    fn to_char(self) -> Option<char> {
        self.is_ascii().then_some(self as char)
    }

    #[inline]
    fn code(self) -> u32 {
        u32::from(self)
    }

    fn escape(self) -> String {
        format!("\\x{:02X}", self)
    }
}

impl CharUnit for u16 {
    #[inline]
    fn to_char(self) -> Option<char> {
        char::from_u32(u32::from(self))
    }

    #[inline]
    fn code(self) -> u32 {
        u32::from(self)
    }
}

impl CharUnit for u32 {
    #[inline]
    fn to_char(self) -> Option<char> {
        char::from_u32(self)
    }

    #[inline]
    fn code(self) -> u32 {
        self
    }
}
