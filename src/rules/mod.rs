//! Game rules for tic-tac-toe
//!
//! Win and draw detection for the turn loop. The search does not use this
//! module; it works directly on evaluator verdicts.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_winning_line, is_draw, status, GameStatus};
