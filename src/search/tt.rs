//! Memo table for caching minimax results
//!
//! The table stores search results indexed by [`SearchKey`], enabling reuse
//! of previous results for subproblems we've seen before.
//!
//! Every search runs to the end of the game, so there is no depth to track.
//! What does matter is the alpha-beta window: a node that was cut off only
//! proves a bound on its value. Each entry therefore records whether its
//! score is exact or a bound, and [`MemoTable::probe`] only hands a score
//! back when it is valid for the caller's window.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::Position;
//! use tictactoe::search::{EntryType, MemoTable, SearchKey};
//!
//! let mut memo = MemoTable::new();
//! let key = SearchKey::new(&Position::empty(), true);
//!
//! memo.store(key, 0, EntryType::Exact);
//! assert_eq!(memo.probe(key, -1000, 1000), Some(0));
//! ```

use std::collections::HashMap;

use super::SearchKey;

/// Enough slots for every reachable (position, turn) pair
const DEFAULT_CAPACITY: usize = 8192;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the node was searched with no cutoff affecting it
    Exact,
    /// Lower bound - true score >= stored value (fail-high)
    LowerBound,
    /// Upper bound - true score <= stored value (fail-low)
    UpperBound,
}

impl EntryType {
    /// Classify a node result against the window it was searched with
    #[inline]
    pub fn classify(score: i32, alpha: i32, beta: i32) -> Self {
        if score <= alpha {
            EntryType::UpperBound
        } else if score >= beta {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        }
    }
}

/// Memo table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoEntry {
    /// Score from the computer's point of view
    pub score: i32,
    /// How the score relates to the true minimax value
    pub entry_type: EntryType,
}

/// Memo table owned by one searcher.
pub struct MemoTable {
    entries: HashMap<SearchKey, MemoEntry>,
}

impl MemoTable {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Probe the table for a subproblem.
    ///
    /// Returns `Some(score)` only if an entry exists and its score is usable
    /// for the current window:
    /// - `Exact` entries always
    /// - `LowerBound` entries when the bound already reaches `beta`
    /// - `UpperBound` entries when the bound is already at or below `alpha`
    #[must_use]
    pub fn probe(&self, key: SearchKey, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entries.get(&key)?;
        match entry.entry_type {
            EntryType::Exact => Some(entry.score),
            EntryType::LowerBound if entry.score >= beta => Some(entry.score),
            EntryType::UpperBound if entry.score <= alpha => Some(entry.score),
            _ => None,
        }
    }

    /// Raw entry lookup, ignoring windows
    #[must_use]
    pub fn get(&self, key: SearchKey) -> Option<MemoEntry> {
        self.entries.get(&key).copied()
    }

    /// Store a result.
    ///
    /// An exact entry is never downgraded to a bound; anything else is
    /// replaced by the newer result.
    pub fn store(&mut self, key: SearchKey, score: i32, entry_type: EntryType) {
        let new_entry = MemoEntry { score, entry_type };
        self.entries
            .entry(key)
            .and_modify(|existing| {
                if existing.entry_type != EntryType::Exact || entry_type == EntryType::Exact {
                    *existing = new_entry;
                }
            })
            .or_insert(new_entry);
    }

    /// Number of stored subproblems
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries in the table.
    ///
    /// This should be called when starting a new game if memory is a
    /// concern; entries stay valid across games.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get statistics about table contents.
    #[must_use]
    pub fn stats(&self) -> MemoStats {
        let mut stats = MemoStats {
            entries: self.entries.len(),
            ..MemoStats::default()
        };
        for entry in self.entries.values() {
            match entry.entry_type {
                EntryType::Exact => stats.exact += 1,
                EntryType::LowerBound => stats.lower_bounds += 1,
                EntryType::UpperBound => stats.upper_bounds += 1,
            }
        }
        stats
    }
}

impl Default for MemoTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about memo table contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Total stored subproblems
    pub entries: usize,
    /// Entries holding exact scores
    pub exact: usize,
    /// Entries holding fail-high bounds
    pub lower_bounds: usize,
    /// Entries holding fail-low bounds
    pub upper_bounds: usize,
}
