//! Position: the pair of occupancy sets that makes up a game state

use super::bitboard::Bitboard;
use super::{Cell, Side};
use crate::error::MoveError;

/// Game position.
///
/// The shared board is never stored; [`Position::occupied`] derives it from
/// the two sides, so `board == cpu | player` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Computer's cells
    pub cpu: Bitboard,
    /// Human's cells
    pub player: Bitboard,
}

impl Position {
    /// Build a position from two occupancy sets.
    ///
    /// The sets must be disjoint; overlapping sets are a caller bug.
    #[inline]
    pub fn new(cpu: Bitboard, player: Bitboard) -> Self {
        debug_assert!(
            (cpu & player).is_empty(),
            "cpu {:#011b} and player {:#011b} overlap",
            cpu.bits(),
            player.bits()
        );
        Self { cpu, player }
    }

    /// Build a position from raw bit patterns
    #[inline]
    pub fn from_bits(cpu: u16, player: u16) -> Self {
        Self::new(Bitboard::from_bits(cpu), Bitboard::from_bits(player))
    }

    pub const fn empty() -> Self {
        Self {
            cpu: Bitboard::new(),
            player: Bitboard::new(),
        }
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.cpu | self.player
    }

    #[inline]
    pub fn free_cells(&self) -> Bitboard {
        self.occupied().free_cells()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        !self.occupied().get(cell)
    }

    /// Side occupying a cell, if any
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Side> {
        if self.cpu.get(cell) {
            Some(Side::Cpu)
        } else if self.player.get(cell) {
            Some(Side::Player)
        } else {
            None
        }
    }

    /// Occupancy set of one side
    #[inline]
    pub fn stones(&self, side: Side) -> Bitboard {
        match side {
            Side::Cpu => self.cpu,
            Side::Player => self.player,
        }
    }

    /// Total marks on the board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.occupied().count()
    }

    /// Copy of this position with `side` occupying `cell`.
    /// The cell must be free.
    #[inline]
    #[must_use]
    pub fn with_move(self, cell: Cell, side: Side) -> Position {
        debug_assert!(self.is_free(cell), "cell {cell} is occupied");
        match side {
            Side::Cpu => Position {
                cpu: self.cpu.with(cell),
                player: self.player,
            },
            Side::Player => Position {
                cpu: self.cpu,
                player: self.player.with(cell),
            },
        }
    }

    /// Place a mark after checking the cell is free
    pub fn place(&mut self, cell: Cell, side: Side) -> Result<(), MoveError> {
        if !self.is_free(cell) {
            return Err(MoveError::Occupied(cell));
        }
        *self = self.with_move(cell, side);
        Ok(())
    }

    /// Side to move, given which side opened the game
    #[inline]
    pub fn side_to_move(&self, first: Side) -> Side {
        let (first_count, second_count) = match first {
            Side::Cpu => (self.cpu.count(), self.player.count()),
            Side::Player => (self.player.count(), self.cpu.count()),
        };
        if first_count == second_count {
            first
        } else {
            first.opponent()
        }
    }
}
