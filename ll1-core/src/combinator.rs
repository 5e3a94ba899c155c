//! Predicates and consuming combinators
//!
//! Existence tests (`is`, `is_not`, `is_one_of`, `is_none_of`) only look
//! ahead. Consuming operations (`read`, `expect`, `ignore_if`,
//! `ignore_while`) advance the source and the caller's [`Position`]
//! together, one character at a time.

use tracing::trace;

use crate::error::UnexpectedToken;
use crate::position::Position;
use crate::source::InputSource;
use crate::target::{Target, TargetSet};

/// Whether the lookahead matches `target`
#[inline]
pub fn is<S, T>(source: &mut S, target: T) -> bool
where
    S: InputSource + ?Sized,
    T: Target<S::Char>,
{
    target.accepts(source.look_ahead())
}

#[inline]
pub fn is_not<S, T>(source: &mut S, target: T) -> bool
where
    S: InputSource + ?Sized,
    T: Target<S::Char>,
{
    !is(source, target)
}

/// Whether the lookahead matches any of `targets`; false for an empty set
#[inline]
pub fn is_one_of<S, TS>(source: &mut S, targets: TS) -> bool
where
    S: InputSource + ?Sized,
    TS: TargetSet<S::Char>,
{
    targets.any_accepts(source.look_ahead())
}

#[inline]
pub fn is_none_of<S, TS>(source: &mut S, targets: TS) -> bool
where
    S: InputSource + ?Sized,
    TS: TargetSet<S::Char>,
{
    !is_one_of(source, targets)
}

/// Consume one character unconditionally
///
/// At end of input nothing is consumed and `position` is left as is.
pub fn read<S>(source: &mut S, position: &mut Position) -> Option<S::Char>
where
    S: InputSource + ?Sized,
{
    let c = source.read()?;
    position.advance(c);
    Some(c)
}

/// Consume one character if it matches `target`, fail otherwise
///
/// On failure neither `source` nor `position` has moved. The value is
/// `None` only when `target` accepts end of input and the source is there.
pub fn expect<S, T>(
    source: &mut S,
    position: &mut Position,
    target: T,
) -> Result<Option<S::Char>, UnexpectedToken>
where
    S: InputSource + ?Sized,
    T: Target<S::Char>,
{
    let next = source.look_ahead();
    if !target.accepts(next) {
        trace!(
            row = position.row,
            column = position.column,
            found = ?next,
            "expectation failed"
        );
        return Err(UnexpectedToken);
    }
    Ok(read(source, position))
}

/// Consume one character if it matches `target`; returns whether it did
pub fn ignore_if<S, T>(source: &mut S, position: &mut Position, target: T) -> bool
where
    S: InputSource + ?Sized,
    T: Target<S::Char>,
{
    target.accepts(source.look_ahead()) && read(source, position).is_some()
}

/// Consume characters while they match `target`; returns how many
///
/// Stops at the first mismatch or at end of input, whichever comes first.
pub fn ignore_while<S, T>(source: &mut S, position: &mut Position, target: T) -> usize
where
    S: InputSource + ?Sized,
    T: Target<S::Char>,
{
    let mut count = 0;
    while target.accepts(source.look_ahead()) {
        if read(source, position).is_none() {
            break;
        }
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{CHARACTER, DIGIT, END, SPACE};
    use crate::source::SliceSource;
    use crate::target::satisfies;

    #[test]
    fn test_is_does_not_consume() {
        let mut src = "ab".chars().peekable();
        for _ in 0..3 {
            assert!(is(&mut src, 'a'));
            assert!(is_not(&mut src, 'b'));
            assert!(is_one_of(&mut src, ['b', 'a']));
            assert!(is_none_of(&mut src, ['b', 'c']));
        }
        assert_eq!(src.look_ahead(), Some('a'));
    }

    #[test]
    fn test_is_one_of_empty_is_false() {
        let mut src = "a".chars().peekable();
        assert!(!is_one_of(&mut src, [] as [char; 0]));
        assert!(is_none_of(&mut src, ()));
    }

    #[test]
    fn test_is_one_of_mixed_targets() {
        let mut src = "-1".chars().peekable();
        assert!(is_one_of(&mut src, ('+', '-', DIGIT)));
        assert!(is_none_of(&mut src, (SPACE, END)));
    }

    #[test]
    fn test_read_updates_position() {
        let mut src = "a\nb".chars().peekable();
        let mut pos = Position::start();

        assert_eq!(read(&mut src, &mut pos), Some('a'));
        assert_eq!(pos, Position::new(1, 2));
        assert_eq!(read(&mut src, &mut pos), Some('\n'));
        assert_eq!(pos, Position::new(2, 1));
        assert_eq!(read(&mut src, &mut pos), Some('b'));
        assert_eq!(pos, Position::new(2, 2));
    }

    #[test]
    fn test_read_at_end_keeps_position() {
        let mut src = "".chars().peekable();
        let mut pos = Position::new(4, 9);
        assert_eq!(read(&mut src, &mut pos), None);
        assert_eq!(pos, Position::new(4, 9));
    }

    #[test]
    fn test_expect_consumes_match() {
        let mut src = "7x".chars().peekable();
        let mut pos = Position::start();

        assert_eq!(expect(&mut src, &mut pos, DIGIT), Ok(Some('7')));
        assert_eq!(pos, Position::new(1, 2));
        assert_eq!(expect(&mut src, &mut pos, 'x'), Ok(Some('x')));
        assert_eq!(expect(&mut src, &mut pos, END), Ok(None));
        assert_eq!(pos, Position::new(1, 3));
    }

    #[test]
    fn test_expect_failure_leaves_state() {
        let mut src = "x".chars().peekable();
        let mut pos = Position::new(3, 5);

        assert_eq!(expect(&mut src, &mut pos, DIGIT), Err(UnexpectedToken));
        assert_eq!(expect(&mut src, &mut pos, END), Err(UnexpectedToken));
        assert_eq!(pos, Position::new(3, 5));
        assert_eq!(src.look_ahead(), Some('x'));
    }

    #[test]
    fn test_expect_at_end() {
        let mut src = SliceSource::<u8>::new(b"");
        let mut pos = Position::start();

        assert_eq!(expect(&mut src, &mut pos, CHARACTER), Err(UnexpectedToken));
        assert_eq!(expect(&mut src, &mut pos, b'a'), Err(UnexpectedToken));
        assert_eq!(expect(&mut src, &mut pos, END), Ok(None));
        assert_eq!(pos, Position::start());
    }

    #[test]
    fn test_ignore_if() {
        let mut src = "--1".chars().peekable();
        let mut pos = Position::start();

        assert!(ignore_if(&mut src, &mut pos, '-'));
        assert!(!ignore_if(&mut src, &mut pos, '+'));
        assert_eq!(pos, Position::new(1, 2));
        assert!(ignore_if(&mut src, &mut pos, '-'));
        assert!(ignore_if(&mut src, &mut pos, DIGIT));
        assert!(!ignore_if(&mut src, &mut pos, CHARACTER));
        assert!(!ignore_if(&mut src, &mut pos, END));
        assert_eq!(pos, Position::new(1, 4));
    }

    #[test]
    fn test_ignore_while_stops_at_mismatch() {
        let mut src = " \t\n  X".chars().peekable();
        let mut pos = Position::start();

        assert_eq!(ignore_while(&mut src, &mut pos, SPACE), 5);
        assert_eq!(src.look_ahead(), Some('X'));
        assert_eq!(pos, Position::new(2, 3));
        assert_eq!(ignore_while(&mut src, &mut pos, SPACE), 0);
    }

    #[test]
    fn test_ignore_while_stops_at_end() {
        let mut src = "123".chars().peekable();
        let mut pos = Position::start();

        assert_eq!(ignore_while(&mut src, &mut pos, DIGIT), 3);
        assert!(src.is_end());
        assert_eq!(ignore_while(&mut src, &mut pos, END), 0);
        assert_eq!(ignore_while(&mut src, &mut pos, CHARACTER), 0);
        assert_eq!(pos, Position::new(1, 4));
    }

    #[test]
    fn test_ignore_while_with_predicate() {
        let mut src = "aaab".chars().peekable();
        let mut pos = Position::start();
        assert_eq!(ignore_while(&mut src, &mut pos, satisfies(|c: char| c == 'a')), 3);
        assert_eq!(src.look_ahead(), Some('b'));
    }
}
