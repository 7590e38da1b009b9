//! Evaluation function for tic-tac-toe positions
//!
//! Scores are always from the computer's point of view:
//! - `PatternScore::WIN` when the computer has completed a line
//! - `PatternScore::LOSS` when the human has completed a line
//! - `PatternScore::DRAW` on a full board with no completed line
//! - otherwise a line-counting heuristic in `-24..=24`
//!
//! A heuristic value can coincide numerically with `WIN` or `LOSS`, so
//! callers that need to know whether a position is terminal use
//! [`Verdict::of`] instead of comparing scores.

use crate::board::{popcount, Bitboard};

use super::patterns::{line_score, PatternScore, PATTERNS};

/// Terminal classification of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Computer has a completed line
    Win,
    /// Human has a completed line
    Loss,
    /// No completed line; carries the heuristic score
    Heuristic(i32),
}

impl Verdict {
    /// Classify a position.
    ///
    /// Each pattern checks the computer before the human. Legal play can
    /// never complete lines for both sides, so the order only matters for
    /// malformed input.
    #[must_use]
    pub fn of(cpu: Bitboard, player: Bitboard) -> Verdict {
        for pattern in PATTERNS {
            if cpu.covers(pattern) {
                return Verdict::Win;
            }
            if player.covers(pattern) {
                return Verdict::Loss;
            }
        }
        if (cpu | player).is_full() {
            return Verdict::Heuristic(PatternScore::DRAW);
        }
        Verdict::Heuristic(heuristic(cpu, player))
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Verdict::Heuristic(_))
    }

    /// Numeric score for this verdict
    #[inline]
    pub fn score(self) -> i32 {
        match self {
            Verdict::Win => PatternScore::WIN,
            Verdict::Loss => PatternScore::LOSS,
            Verdict::Heuristic(score) => score,
        }
    }
}

/// Evaluate a position from the computer's point of view.
///
/// # Arguments
/// * `cpu` - The computer's occupancy set
/// * `player` - The human's occupancy set
///
/// # Returns
/// `WIN` (+10), `LOSS` (-10), or the heuristic sum over all 8 lines
#[must_use]
pub fn evaluate(cpu: Bitboard, player: Bitboard) -> i32 {
    Verdict::of(cpu, player).score()
}

/// Sum of per-line contributions. Only meaningful when no line is complete.
fn heuristic(cpu: Bitboard, player: Bitboard) -> i32 {
    PATTERNS
        .iter()
        .map(|&pattern| {
            let cpu_count = popcount((cpu & pattern).bits());
            let player_count = popcount((player & pattern).bits());
            line_score(cpu_count, player_count)
        })
        .sum()
}
