//! Source position tracking
//!
//! `row`/`column` are both 1-based and count character units, so a wide
//! source and a narrow source over the same text may disagree on columns.

use crate::char_unit::CharUnit;
use std::fmt;

/// Location of the character that will be read next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row, 1-based
    pub row: usize,
    /// Column, 1-based
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Start of input, `(1, 1)`
    pub fn start() -> Self {
        Self { row: 1, column: 1 }
    }

    /// Advance past one consumed character
    pub fn advance<C: CharUnit>(&mut self, c: C) {
        if c.is_newline() {
            self.row += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
