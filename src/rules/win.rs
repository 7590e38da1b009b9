//! End-of-game detection
//!
//! A game ends when one side covers one of the 8 lines, or when the board
//! is full with no line covered (a draw).

use crate::board::{Bitboard, Position, Side};
use crate::eval::{Verdict, PATTERNS};

/// Outcome of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Side with a completed line, if any
pub fn check_winner(pos: &Position) -> Option<Side> {
    match Verdict::of(pos.cpu, pos.player) {
        Verdict::Win => Some(Side::Cpu),
        Verdict::Loss => Some(Side::Player),
        Verdict::Heuristic(_) => None,
    }
}

/// Full board and nobody has a line
pub fn is_draw(pos: &Position) -> bool {
    pos.is_full() && check_winner(pos).is_none()
}

/// Classify a position for the turn loop
pub fn status(pos: &Position) -> GameStatus {
    if let Some(side) = check_winner(pos) {
        GameStatus::Won(side)
    } else if pos.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// First completed line for `side`, lowest pattern first
pub fn find_winning_line(pos: &Position, side: Side) -> Option<Bitboard> {
    let stones = pos.stones(side);
    PATTERNS.into_iter().find(|&pattern| stones.covers(pattern))
}
