use crate::char_unit::CharUnit;
use crate::source::InputSource;

/// In-memory source over a slice of character units
///
/// Suited to wide buffers, e.g. `&[u16]` read from a UTF-16 file.
#[derive(Debug, Clone)]
pub struct SliceSource<'a, C> {
    units: &'a [C],
    offset: usize,
}

impl<'a, C: CharUnit> SliceSource<'a, C> {
    pub fn new(units: &'a [C]) -> Self {
        Self { units, offset: 0 }
    }

    /// Number of units consumed so far
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Units not yet consumed
    pub fn remaining(&self) -> &'a [C] {
        &self.units[self.offset..]
    }
}

impl<'a, C: CharUnit> InputSource for SliceSource<'a, C> {
    type Char = C;

    #[inline]
    fn look_ahead(&mut self) -> Option<C> {
        self.units.get(self.offset).copied()
    }

    #[inline]
    fn read(&mut self) -> Option<C> {
        let c = self.look_ahead()?;
        self.offset += 1;
        Some(c)
    }

    #[inline]
    fn is_end(&mut self) -> bool {
        self.offset >= self.units.len()
    }
}
