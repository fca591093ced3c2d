//! One 3x3 subboard stored as a pair of bitmasks

use super::{Cell, Mark, CELLS};

/// Bits 0-8 set
pub const FULL_MASK: u16 = 0b1_1111_1111;

/// A 3x3 subboard with its cached result
///
/// Bit `i` of `x` / `o` is set when cell `i` holds that mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SubBoard {
    x: u16,
    o: u16,
    result: Option<Mark>,
}

impl SubBoard {
    /// Create an empty, undecided subboard
    pub const fn new() -> Self {
        Self {
            x: 0,
            o: 0,
            result: None,
        }
    }

    /// Get cell contents
    #[inline]
    pub fn get(&self, cell: u8) -> Cell {
        let bit = 1u16 << cell;
        if self.x & bit != 0 {
            Cell::X
        } else if self.o & bit != 0 {
            Cell::O
        } else {
            Cell::Empty
        }
    }

    #[inline]
    pub fn is_empty_at(&self, cell: u8) -> bool {
        (self.x | self.o) & (1u16 << cell) == 0
    }

    /// Place a mark without any rule processing
    #[inline]
    pub fn place(&mut self, cell: u8, mark: Mark) {
        debug_assert!((cell as usize) < CELLS);
        let bit = 1u16 << cell;
        match mark {
            Mark::X => {
                self.x |= bit;
                self.o &= !bit;
            }
            Mark::O => {
                self.o |= bit;
                self.x &= !bit;
            }
        }
    }

    /// Remove every mark and the result
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Bitmask of cells holding `mark`
    #[inline]
    pub fn mask(&self, mark: Mark) -> u16 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Bitmask of empty cells
    #[inline]
    pub fn empty_mask(&self) -> u16 {
        !(self.x | self.o) & FULL_MASK
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_mask() == 0
    }

    /// Number of cells holding `mark`
    #[inline]
    pub fn count(&self, mark: Mark) -> u32 {
        self.mask(mark).count_ones()
    }

    /// Winner of this subboard, if decided
    #[inline]
    pub fn result(&self) -> Option<Mark> {
        self.result
    }

    #[inline]
    pub fn is_decided(&self) -> bool {
        self.result.is_some()
    }

    #[inline]
    pub(crate) fn set_result(&mut self, result: Option<Mark>) {
        self.result = result;
    }

    /// Same subboard with X and O exchanged
    #[inline]
    pub fn swapped(&self) -> Self {
        Self {
            x: self.o,
            o: self.x,
            result: self.result.map(Mark::opponent),
        }
    }
}
