//! Alpha-Beta minimax with a memo table
//!
//! This module implements the core search algorithm for the tic-tac-toe AI.
//! It is a plain minimax (scores always from the computer's point of view)
//! with alpha-beta pruning, searched all the way to the end of the game.
//!
//! # Features
//!
//! - Fail-soft alpha-beta with `beta <= alpha` cutoffs
//! - Memo table keyed by the full (position, side-to-move) state
//! - Bound-typed memo entries, so windowed results are never reused as exact
//! - Lowest-cell-first move order (bit-scan), which fixes tie-breaking
//!
//! # Example
//!
//! ```
//! use tictactoe::board::Position;
//! use tictactoe::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! // Perfect play from the empty board is a draw
//! let score = searcher.minimax(Position::empty(), true, -1000, 1000);
//! assert_eq!(score, 0);
//! ```

use crate::board::{Position, Side};
use crate::eval::{PatternScore, Verdict};

use super::{EntryType, MemoStats, MemoTable, SearchKey};

/// Whether the searcher keeps a memo table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemoPolicy {
    /// Memoize with bound-typed entries
    #[default]
    Bounded,
    /// Plain alpha-beta, nothing cached
    Disabled,
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered (including memo hits)
    pub nodes: u64,
    /// Memo probes
    pub memo_probes: u64,
    /// Probes that returned a usable score
    pub memo_hits: u64,
    /// Terminal positions reached (win, loss or full board)
    pub terminals: u64,
    /// Sibling cutoffs (`beta <= alpha`)
    pub cutoffs: u64,
}

impl SearchStats {
    /// Memo hit rate in percent
    pub fn memo_hit_rate(&self) -> f64 {
        if self.memo_probes == 0 {
            0.0
        } else {
            self.memo_hits as f64 / self.memo_probes as f64 * 100.0
        }
    }

    /// Merge another stats into this one
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.memo_probes += other.memo_probes;
        self.memo_hits += other.memo_hits;
        self.terminals += other.terminals;
        self.cutoffs += other.cutoffs;
    }
}

/// Minimax searcher. Owns the memo table exclusively.
pub struct Searcher {
    memo: MemoTable,
    policy: MemoPolicy,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher with a memo table
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(MemoPolicy::Bounded)
    }

    #[must_use]
    pub fn with_policy(policy: MemoPolicy) -> Self {
        let memo = match policy {
            MemoPolicy::Bounded => MemoTable::new(),
            MemoPolicy::Disabled => MemoTable::with_capacity(0),
        };
        Self {
            memo,
            policy,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn policy(&self) -> MemoPolicy {
        self.policy
    }

    /// Minimax value of `pos` with alpha-beta pruning.
    ///
    /// `maximizing` is true when the computer is to move. The returned
    /// score is exact when it lies strictly inside `(alpha, beta)`;
    /// otherwise it is a bound on the true value in the direction of the
    /// cutoff.
    ///
    /// # Arguments
    ///
    /// * `pos` - Position to search; the two sets must be disjoint
    /// * `maximizing` - Computer to move
    /// * `alpha` - Lower window bound
    /// * `beta` - Upper window bound
    pub fn minimax(
        &mut self,
        pos: Position,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        let key = SearchKey::new(&pos, maximizing);
        if self.policy == MemoPolicy::Bounded {
            self.stats.memo_probes += 1;
            if let Some(score) = self.memo.probe(key, alpha, beta) {
                self.stats.memo_hits += 1;
                return score;
            }
        }

        // Terminal: the only point where a score is exact regardless of window
        let verdict = Verdict::of(pos.cpu, pos.player);
        if verdict.is_terminal() || pos.is_full() {
            self.stats.terminals += 1;
            let score = if verdict.is_terminal() {
                verdict.score()
            } else {
                PatternScore::DRAW
            };
            self.remember(key, score, EntryType::Exact);
            return score;
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let mover = if maximizing { Side::Cpu } else { Side::Player };
        let mut best_score = if maximizing {
            -PatternScore::INF
        } else {
            PatternScore::INF
        };

        for cell in pos.free_cells().iter_ones() {
            let child = pos.with_move(cell, mover);
            let score = self.minimax(child, !maximizing, alpha, beta);

            if maximizing {
                best_score = best_score.max(score);
                alpha = alpha.max(best_score);
            } else {
                best_score = best_score.min(score);
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        self.remember(
            key,
            best_score,
            EntryType::classify(best_score, alpha_orig, beta_orig),
        );
        best_score
    }

    #[inline]
    fn remember(&mut self, key: SearchKey, score: i32, entry_type: EntryType) {
        if self.policy == MemoPolicy::Bounded {
            self.memo.store(key, score, entry_type);
        }
    }

    /// Statistics accumulated since the last reset
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Drop every memoized result
    pub fn clear_memo(&mut self) {
        self.memo.clear();
    }

    #[must_use]
    pub fn memo_stats(&self) -> MemoStats {
        self.memo.stats()
    }

    /// Read access to the memo table, for diagnostics and tests
    #[must_use]
    pub fn memo(&self) -> &MemoTable {
        &self.memo
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
