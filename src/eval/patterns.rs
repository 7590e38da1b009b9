//! Winning lines and score constants for tic-tac-toe evaluation

use crate::board::Bitboard;

/// The 8 winning lines. Each mask has exactly 3 bits set.
pub const PATTERNS: [Bitboard; 8] = [
    Bitboard::from_bits(0b100_100_100), // column 2
    Bitboard::from_bits(0b010_010_010), // column 1
    Bitboard::from_bits(0b001_001_001), // column 0
    Bitboard::from_bits(0b111_000_000), // row 2
    Bitboard::from_bits(0b000_111_000), // row 1
    Bitboard::from_bits(0b000_000_111), // row 0
    Bitboard::from_bits(0b100_010_001), // diagonal 0-4-8
    Bitboard::from_bits(0b001_010_100), // diagonal 2-4-6
];

/// Scores returned by the evaluator, from the computer's point of view
pub struct PatternScore;

impl PatternScore {
    /// Computer has completed a line
    pub const WIN: i32 = 10;
    /// Human has completed a line
    pub const LOSS: i32 = -10;
    /// Full board, no line
    pub const DRAW: i32 = 0;

    /// Two marks in a line the opponent has not touched
    pub const NEAR_WIN: i32 = 3;
    /// One mark in a line the opponent has not touched
    pub const OPEN_LINE: i32 = 1;

    /// Window bound used by the root search. Larger than any reachable score.
    pub const INF: i32 = 1000;
}

/// Heuristic contribution of one line given both sides' counts inside it.
///
/// Symmetric: `line_score(a, b) == -line_score(b, a)`.
#[inline]
pub fn line_score(cpu_count: u32, player_count: u32) -> i32 {
    match (cpu_count, player_count) {
        (2, 0) => PatternScore::NEAR_WIN,
        (0, 2) => -PatternScore::NEAR_WIN,
        (1, 0) => PatternScore::OPEN_LINE,
        (0, 1) => -PatternScore::OPEN_LINE,
        _ => 0,
    }
}
