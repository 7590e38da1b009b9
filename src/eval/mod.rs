//! Evaluation module for tic-tac-toe positions
//!
//! This module provides line recognition and scoring for board positions.
//! The evaluation considers:
//! - Completed lines (terminal win/loss)
//! - Lines held by only one side (near-wins and open lines)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, Verdict};
pub use patterns::{PatternScore, PATTERNS};
