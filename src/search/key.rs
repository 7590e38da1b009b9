//! Packed search keys for the memo table
//!
//! A key identifies one minimax subproblem: both occupancy sets plus the
//! side to move. The shared board is not packed because it is always
//! `cpu | player`, so leaving it out cannot make two states collide.
//!
//! Layout (19 bits used):
//! ```text
//! bits [0..9]   player occupancy
//! bits [9..18]  cpu occupancy
//! bit  [18]     maximizing (computer to move)
//! ```
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Cell, Position, Side};
//! use tictactoe::search::SearchKey;
//!
//! let pos = Position::empty().with_move(Cell::new(4), Side::Cpu);
//! let key = SearchKey::new(&pos, false);
//! assert_eq!(key.unpack(), (pos, false));
//! ```

use crate::board::{Position, TOTAL_CELLS};

const CPU_SHIFT: u32 = TOTAL_CELLS as u32;
const TURN_SHIFT: u32 = 2 * TOTAL_CELLS as u32;
const SET_MASK: u32 = (1 << TOTAL_CELLS) - 1;

/// Collision-free key for a (position, side-to-move) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SearchKey(u32);

impl SearchKey {
    #[inline]
    pub fn new(pos: &Position, maximizing: bool) -> Self {
        Self(
            pos.player.bits() as u32
                | (pos.cpu.bits() as u32) << CPU_SHIFT
                | (maximizing as u32) << TURN_SHIFT,
        )
    }

    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    /// Recover the position and side-to-move flag
    pub fn unpack(self) -> (Position, bool) {
        let player = (self.0 & SET_MASK) as u16;
        let cpu = ((self.0 >> CPU_SHIFT) & SET_MASK) as u16;
        let maximizing = (self.0 >> TURN_SHIFT) & 1 == 1;
        (Position::from_bits(cpu, player), maximizing)
    }
}
