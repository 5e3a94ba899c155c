//! Source and position bundled together
//!
//! Same operations as [`crate::combinator`], as methods. Handy when a
//! scanner is a set of methods rather than free functions.

use crate::combinator;
use crate::error::{Diagnostic, UnexpectedToken};
use crate::position::Position;
use crate::source::InputSource;
use crate::target::{Target, TargetSet};

/// An input source with its own position tracker
#[derive(Debug, Clone)]
pub struct Cursor<S> {
    source: S,
    position: Position,
}

impl<S: InputSource> Cursor<S> {
    /// Wrap a source, starting at `(1, 1)`
    pub fn new(source: S) -> Self {
        Self::with_position(source, Position::start())
    }

    /// Wrap a source that does not start at the beginning of its text
    pub fn with_position(source: S, position: Position) -> Self {
        Self { source, position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Direct access to the source. Reading through it bypasses position
    /// tracking.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> (S, Position) {
        (self.source, self.position)
    }

    pub fn look_ahead(&mut self) -> Option<S::Char> {
        self.source.look_ahead()
    }

    pub fn is_end(&mut self) -> bool {
        self.source.is_end()
    }

    pub fn is<T: Target<S::Char>>(&mut self, target: T) -> bool {
        combinator::is(&mut self.source, target)
    }

    pub fn is_not<T: Target<S::Char>>(&mut self, target: T) -> bool {
        combinator::is_not(&mut self.source, target)
    }

    pub fn is_one_of<TS: TargetSet<S::Char>>(&mut self, targets: TS) -> bool {
        combinator::is_one_of(&mut self.source, targets)
    }

    pub fn is_none_of<TS: TargetSet<S::Char>>(&mut self, targets: TS) -> bool {
        combinator::is_none_of(&mut self.source, targets)
    }

    pub fn read(&mut self) -> Option<S::Char> {
        combinator::read(&mut self.source, &mut self.position)
    }

    pub fn expect<T: Target<S::Char>>(
        &mut self,
        target: T,
    ) -> Result<Option<S::Char>, UnexpectedToken> {
        combinator::expect(&mut self.source, &mut self.position, target)
    }

    pub fn ignore_if<T: Target<S::Char>>(&mut self, target: T) -> bool {
        combinator::ignore_if(&mut self.source, &mut self.position, target)
    }

    pub fn ignore_while<T: Target<S::Char>>(&mut self, target: T) -> usize {
        combinator::ignore_while(&mut self.source, &mut self.position, target)
    }

    /// Snapshot of the current lookahead and position, for reporting an
    /// [`UnexpectedToken`]
    pub fn unexpected(&mut self) -> Diagnostic<S::Char> {
        Diagnostic::new(self.source.look_ahead(), self.position)
    }
}
