//! Scanning errors
//!
//! [`UnexpectedToken`] is the only failure the combinators raise. It carries
//! nothing; at the point it is returned the source and position are still
//! untouched, so the caller reads them back to build a [`Diagnostic`].

use std::fmt;

use crate::char_unit::CharUnit;
use crate::position::Position;

/// Lookahead did not match what `expect` required
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("unexpected token")]
pub struct UnexpectedToken;

/// Caller-side report of an [`UnexpectedToken`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic<C: CharUnit> {
    /// Lookahead at the failure, `None` at end of input
    pub found: Option<C>,
    pub position: Position,
}

impl<C: CharUnit> Diagnostic<C> {
    pub fn new(found: Option<C>, position: Position) -> Self {
        Self { found, position }
    }

    /// Get row (1-based)
    pub fn row(&self) -> usize {
        self.position.row
    }

    /// Get column (1-based)
    pub fn column(&self) -> usize {
        self.position.column
    }
}

impl<C: CharUnit> fmt::Display for Diagnostic<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.found {
            None => write!(f, "unexpected end of input at {}", self.position),
            Some(c) => match c.to_char() {
                Some(ch) => write!(f, "unexpected token '{}' at {}", ch, self.position),
                None => write!(f, "unexpected token '{}' at {}", c.escape(), self.position),
            },
        }
    }
}

impl<C: CharUnit> std::error::Error for Diagnostic<C> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_token_display() {
        assert_eq!(UnexpectedToken.to_string(), "unexpected token");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(Some(b'a'), Position::new(1, 3));
        assert_eq!(diag.to_string(), "unexpected token 'a' at (1, 3)");
        assert_eq!(diag.row(), 1);
        assert_eq!(diag.column(), 3);
    }

    #[test]
    fn test_diagnostic_display_at_end() {
        let diag = Diagnostic::<char>::new(None, Position::new(2, 1));
        assert_eq!(diag.to_string(), "unexpected end of input at (2, 1)");
    }

    #[test]
    fn test_diagnostic_display_without_scalar() {
        let diag = Diagnostic::new(Some(0xD800u16), Position::start());
        assert_eq!(diag.to_string(), "unexpected token '\\u{D800}' at (1, 1)");
    }

    #[test]
    fn test_diagnostic_display_non_ascii_byte() {
        let diag = Diagnostic::new(Some(0xC3u8), Position::new(1, 3));
        assert_eq!(diag.to_string(), "unexpected token '\\xC3' at (1, 3)");
    }
}
