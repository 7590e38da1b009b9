//! Board representation for tic-tac-toe

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::{popcount, Bitboard, SIGNIFICANT_BITS};
pub use board::Position;

/// Board size (3x3)
pub const BOARD_SIZE: usize = 3;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 9

/// The two sides of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The engine
    Cpu,
    /// The human opponent
    Player,
}

impl Side {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Cpu => Side::Player,
            Side::Player => Side::Cpu,
        }
    }

    /// Board glyph used by the text front end
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Side::Cpu => '@',
            Side::Player => 'X',
        }
    }
}

/// Cell on the board.
///
/// Indices are row-major with row 0 at the bottom and column 0 on the left,
/// so cell `i` owns bit `i` of a [`Bitboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    #[inline]
    pub fn new(index: u8) -> Self {
        debug_assert!(
            (index as usize) < TOTAL_CELLS,
            "cell index {index} out of range"
        );
        Self(index)
    }

    /// Checked constructor for indices coming from outside the engine
    #[inline]
    pub fn try_new(index: usize) -> Option<Self> {
        (index < TOTAL_CELLS).then(|| Self(index as u8))
    }

    #[inline]
    pub fn from_row_col(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
        Self(row * BOARD_SIZE as u8 + col)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.0 / BOARD_SIZE as u8
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.0 % BOARD_SIZE as u8
    }

    /// Single-bit mask for this cell
    #[inline]
    pub fn bit(self) -> Bitboard {
        Bitboard::from_bits(1 << self.0)
    }
}

impl std::fmt::Display for Cell {
    /// 1-based number, as typed by the human player
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}
