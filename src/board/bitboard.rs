//! Bitboard implementation for fast pattern matching

use super::{Cell, TOTAL_CELLS};

/// Mask of the 9 bits that map to board cells
pub const SIGNIFICANT_BITS: u16 = 0x1FF;

/// Population counts for every 9-bit value, built at compile time
const POPCOUNT_TABLE: [u8; 1 << TOTAL_CELLS] = build_popcount_table();

const fn build_popcount_table() -> [u8; 1 << TOTAL_CELLS] {
    let mut table = [0u8; 1 << TOTAL_CELLS];
    let mut i = 0;
    while i < table.len() {
        table[i] = (i as u32).count_ones() as u8;
        i += 1;
    }
    table
}

/// Count set bits among the low 9 bits of `x`.
///
/// Bits above the board are masked off before the table lookup, so this is
/// total over every `u16`.
#[inline]
pub fn popcount(x: u16) -> u32 {
    POPCOUNT_TABLE[(x & SIGNIFICANT_BITS) as usize] as u32
}

/// Occupancy set for one side (or for the whole board).
/// Bit `i` set means cell `i` is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u16);

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self(0)
    }

    /// Wrap raw bits. Bits above the board are dropped.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & SIGNIFICANT_BITS)
    }

    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Set the bit for a cell
    #[inline]
    pub fn set(&mut self, cell: Cell) {
        self.0 |= 1 << cell.index();
    }

    /// Copy with the bit for a cell set
    #[inline]
    #[must_use]
    pub fn with(self, cell: Cell) -> Self {
        Self(self.0 | (1 << cell.index()))
    }

    /// Check if bit is set for a cell
    #[inline]
    pub fn get(self, cell: Cell) -> bool {
        (self.0 >> cell.index()) & 1 == 1
    }

    /// Count set bits (table popcount)
    #[inline]
    pub fn count(self) -> u32 {
        popcount(self.0)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when all 9 cells are set
    #[inline]
    pub fn is_full(self) -> bool {
        self.count() == TOTAL_CELLS as u32
    }

    /// Cells not covered by this set
    #[inline]
    pub fn free_cells(self) -> Bitboard {
        Self(!self.0 & SIGNIFICANT_BITS)
    }

    /// True when every bit of `mask` is set here
    #[inline]
    pub fn covers(self, mask: Bitboard) -> bool {
        self.0 & mask.0 == mask.0
    }

    /// Lowest set cell, if any
    #[inline]
    pub fn lowest(self) -> Option<Cell> {
        if self.0 == 0 {
            None
        } else {
            Some(Cell::new(self.0.trailing_zeros() as u8))
        }
    }

    /// Iterate over set cells, lowest index first
    pub fn iter_ones(self) -> BitboardIter {
        BitboardIter { bits: self.0 }
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl From<Cell> for Bitboard {
    fn from(cell: Cell) -> Self {
        cell.bit()
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u16,
}

impl Iterator for BitboardIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        let idx = self.bits.trailing_zeros() as u8;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(Cell::new(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = popcount(self.bits) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}
