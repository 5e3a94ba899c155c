//! Targets: what a lookahead character is tested against
//!
//! A [`Target`] is a literal character, a [`Class`] tag or a caller
//! predicate wrapped with [`satisfies`]. A [`TargetSet`] is a finite list
//! of targets for the one-of / none-of tests.

use crate::char_unit::CharUnit;
use crate::class::Class;

/// Something a lookahead character can match
///
/// `next` is `None` at end of input.
pub trait Target<C: CharUnit> {
    fn accepts(&self, next: Option<C>) -> bool;
}

/// Literal character
impl<C: CharUnit> Target<C> for C {
    #[inline]
    fn accepts(&self, next: Option<C>) -> bool {
        next == Some(*self)
    }
}

impl<C: CharUnit> Target<C> for Class {
    #[inline]
    fn accepts(&self, next: Option<C>) -> bool {
        match (*self, next) {
            (Class::End, next) => next.is_none(),
            (Class::Character, next) => next.is_some(),
            (class, Some(c)) => c.to_char().is_some_and(|c| class.contains(c)),
            (_, None) => false,
        }
    }
}

/// Caller predicate as a target, never called at end of input
#[derive(Debug, Clone, Copy)]
pub struct Satisfies<F>(F);

/// Wrap a predicate over a character as a target
pub fn satisfies<C, F>(f: F) -> Satisfies<F>
where
    C: CharUnit,
    F: Fn(C) -> bool,
{
    Satisfies(f)
}

impl<C: CharUnit, F: Fn(C) -> bool> Target<C> for Satisfies<F> {
    #[inline]
    fn accepts(&self, next: Option<C>) -> bool {
        next.is_some_and(|c| (self.0)(c))
    }
}

/// Finite, ordered list of targets
///
/// Order only affects how early the test short-circuits. An empty set
/// accepts nothing.
pub trait TargetSet<C: CharUnit> {
    fn any_accepts(&self, next: Option<C>) -> bool;
}

impl<C: CharUnit, T: Target<C>> TargetSet<C> for [T] {
    fn any_accepts(&self, next: Option<C>) -> bool {
        self.iter().any(|t| t.accepts(next))
    }
}

impl<C: CharUnit, T: Target<C>, const N: usize> TargetSet<C> for [T; N] {
    fn any_accepts(&self, next: Option<C>) -> bool {
        self.as_slice().any_accepts(next)
    }
}

impl<C: CharUnit, T: Target<C>> TargetSet<C> for Vec<T> {
    fn any_accepts(&self, next: Option<C>) -> bool {
        self.as_slice().any_accepts(next)
    }
}

impl<C: CharUnit, S: TargetSet<C> + ?Sized> TargetSet<C> for &S {
    fn any_accepts(&self, next: Option<C>) -> bool {
        (**self).any_accepts(next)
    }
}

impl<C: CharUnit> TargetSet<C> for () {
    fn any_accepts(&self, _next: Option<C>) -> bool {
        false
    }
}

// Tuples let literals and tags mix: `('-', DIGIT)`.
macro_rules! tuple_target_set {
    ($($name:ident . $idx:tt),+) => {
        impl<C: CharUnit, $($name: Target<C>),+> TargetSet<C> for ($($name,)+) {
            fn any_accepts(&self, next: Option<C>) -> bool {
                $(self.$idx.accepts(next))||+
            }
        }
    };
}

tuple_target_set!(A.0);
tuple_target_set!(A.0, B.1);
tuple_target_set!(A.0, B.1, D.2);
tuple_target_set!(A.0, B.1, D.2, E.3);
tuple_target_set!(A.0, B.1, D.2, E.3, F.4);
tuple_target_set!(A.0, B.1, D.2, E.3, F.4, G.5);
tuple_target_set!(A.0, B.1, D.2, E.3, F.4, G.5, H.6);
tuple_target_set!(A.0, B.1, D.2, E.3, F.4, G.5, H.6, I.7);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{CHARACTER, DIGIT, END, SPACE};

    #[test]
    fn test_literal_target() {
        assert!('a'.accepts(Some('a')));
        assert!(!'a'.accepts(Some('b')));
        assert!(!'a'.accepts(None));
    }

    #[test]
    fn test_class_target_at_end() {
        assert!(Target::<u8>::accepts(&END, None));
        assert!(!Target::<u8>::accepts(&CHARACTER, None));
        assert!(!Target::<u8>::accepts(&DIGIT, None));
        assert!(!Target::<u8>::accepts(&END, Some(b'a')));
    }

    #[test]
    fn test_class_target_without_scalar() {
        let lone_surrogate = 0xD800u16;
        assert!(CHARACTER.accepts(Some(lone_surrogate)));
        assert!(!SPACE.accepts(Some(lone_surrogate)));
        assert!(lone_surrogate.accepts(Some(lone_surrogate)));
    }

    #[test]
    fn test_satisfies_target() {
        let vowel = satisfies(|c: char| "aeiou".contains(c));
        assert!(vowel.accepts(Some('e')));
        assert!(!vowel.accepts(Some('z')));
        assert!(!vowel.accepts(None));
    }

    #[test]
    fn test_target_sets() {
        assert!(['a', 'b'].any_accepts(Some('b')));
        assert!(!['a', 'b'].any_accepts(Some('c')));
        assert!(!TargetSet::<char>::any_accepts(&[] as &[char; 0], Some('a')));
        assert!(!TargetSet::<char>::any_accepts(&(), Some('a')));
        assert!(vec![DIGIT, SPACE].any_accepts(Some(' ')));
        assert!(('-', DIGIT).any_accepts(Some('7')));
        assert!(('-', DIGIT).any_accepts(Some('-')));
        assert!(!('-', DIGIT).any_accepts(None));
        assert!(('x', END).any_accepts(None));
    }
}
