//! Main AI engine exposing the move decision
//!
//! The engine picks the computer's move in two steps:
//!
//! 1. **Immediate win**: play the first free cell that completes a line
//! 2. **Minimax**: search every free cell to the end of the game and keep
//!    the best score, first cell winning ties
//!
//! # Example
//!
//! ```
//! use tictactoe::{Cell, Engine, Position, Side};
//!
//! let mut engine = Engine::new();
//! let mut pos = Position::empty();
//! pos.place(Cell::new(4), Side::Player).unwrap();
//!
//! let result = engine.choose_move_with_stats(&pos);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ns", result.elapsed.as_nanos());
//! ```

use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::board::{Cell, Position, Side};
use crate::eval::{evaluate, PatternScore, Verdict};
use crate::search::{MemoPolicy, MemoStats, SearchStats, Searcher};

/// Which step of the decision produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// A free cell completes a computer line right away
    ImmediateWin,
    /// Full minimax search
    Minimax,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` only on a full board
    pub best_move: Option<Cell>,
    /// Minimax value of the position after the move
    pub score: i32,
    /// Step that found this move
    pub search_type: SearchType,
    /// Wall time spent deciding
    pub elapsed: Duration,
    /// Number of nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

impl MoveResult {
    #[inline]
    fn immediate_win(cell: Cell, elapsed: Duration) -> Self {
        Self {
            best_move: Some(cell),
            score: PatternScore::WIN,
            search_type: SearchType::ImmediateWin,
            elapsed,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    fn minimax(best_move: Option<Cell>, score: i32, elapsed: Duration, stats: SearchStats) -> Self {
        Self {
            best_move,
            score,
            search_type: SearchType::Minimax,
            elapsed,
            nodes: stats.nodes,
            stats,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Memo table usage
    pub memo_policy: MemoPolicy,
    /// Clear the memo table in [`Engine::new_game`]
    pub clear_between_games: bool,
    /// Look for a one-move win before searching
    pub immediate_win_check: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            memo_policy: MemoPolicy::Bounded,
            clear_between_games: true,
            immediate_win_check: true,
        }
    }
}

/// Perfect-play tic-tac-toe engine. Always plays the computer's side.
pub struct Engine {
    searcher: Searcher,
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use tictactoe::{Engine, EngineConfig, MemoPolicy};
    ///
    /// let engine = Engine::with_config(EngineConfig {
    ///     memo_policy: MemoPolicy::Disabled,
    ///     ..EngineConfig::default()
    /// });
    /// ```
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::with_policy(config.memo_policy),
            config,
        }
    }

    /// Get the computer's move for the given position.
    ///
    /// Returns `None` only when the board is full. The returned cell is
    /// always free.
    #[must_use]
    pub fn choose_move(&mut self, pos: &Position) -> Option<Cell> {
        self.choose_move_with_stats(pos).best_move
    }

    /// Get the computer's move with search statistics.
    ///
    /// The position must be legal and not already decided.
    #[must_use]
    pub fn choose_move_with_stats(&mut self, pos: &Position) -> MoveResult {
        debug_assert!(
            !Verdict::of(pos.cpu, pos.player).is_terminal(),
            "choose_move called on a finished game"
        );
        let start = Instant::now();
        self.searcher.reset_stats();

        if self.config.immediate_win_check {
            if let Some(cell) = find_immediate_win(pos) {
                let result = MoveResult::immediate_win(cell, start.elapsed());
                log_decision(pos, &result);
                return result;
            }
        }

        let mut best_move = None;
        let mut best_score = -PatternScore::INF;

        for cell in pos.free_cells().iter_ones() {
            let child = pos.with_move(cell, Side::Cpu);
            let score = self
                .searcher
                .minimax(child, false, -PatternScore::INF, PatternScore::INF);
            // Strictly greater: the first cell wins ties
            if score > best_score {
                best_score = score;
                best_move = Some(cell);
            }
        }

        if best_move.is_none() {
            best_score = evaluate(pos.cpu, pos.player);
        }

        let result = MoveResult::minimax(
            best_move,
            best_score,
            start.elapsed(),
            self.searcher.stats(),
        );
        log_decision(pos, &result);
        result
    }

    /// Start a new game.
    ///
    /// Clears the memo table unless the engine was configured to keep it.
    pub fn new_game(&mut self) {
        if self.config.clear_between_games {
            trace!(
                "clearing memo table ({} entries)",
                self.searcher.memo().len()
            );
            self.searcher.clear_memo();
        }
        self.searcher.reset_stats();
    }

    /// Clear the memo table unconditionally.
    pub fn clear_cache(&mut self) {
        self.searcher.clear_memo();
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get memo table statistics.
    #[must_use]
    pub fn memo_stats(&self) -> MemoStats {
        self.searcher.memo_stats()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// First free cell (lowest index) that completes a computer line.
fn find_immediate_win(pos: &Position) -> Option<Cell> {
    pos.free_cells()
        .iter_ones()
        .find(|&cell| Verdict::of(pos.cpu.with(cell), pos.player) == Verdict::Win)
}

fn log_decision(pos: &Position, result: &MoveResult) {
    debug!(
        "cpu={:#011b} player={:#011b} -> move={:?} score={} type={:?} nodes={} memo_hits={} elapsed={}ns",
        pos.cpu.bits(),
        pos.player.bits(),
        result.best_move.map(|c| c.index()),
        result.score,
        result.search_type,
        result.nodes,
        result.stats.memo_hits,
        result.elapsed.as_nanos()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(cpu: u16, player: u16) -> Position {
        Position::from_bits(cpu, player)
    }

    #[test]
    fn test_engine_default_config() {
        let engine = Engine::new();
        assert_eq!(engine.config(), &EngineConfig::default());
        assert_eq!(engine.config().memo_policy, MemoPolicy::Bounded);
        assert!(engine.config().immediate_win_check);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        // cpu holds 0 and 1, cell 2 completes row 0
        let mut engine = Engine::new();
        let result = engine.choose_move_with_stats(&pos(0b000_000_011, 0b000_011_000));

        assert_eq!(result.best_move, Some(Cell::new(2)));
        assert_eq!(result.best_move.unwrap().bit().bits(), 0b000_000_100);
        assert_eq!(result.search_type, SearchType::ImmediateWin);
        assert_eq!(result.score, PatternScore::WIN);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_immediate_win_prefers_lowest_cell() {
        // cpu: 0, 4, 6   player: 1, 3, 7 -> cells 2 and 8 both win
        let mut engine = Engine::new();
        let p = pos(0b001_010_001, 0b010_001_010);
        assert_eq!(engine.choose_move(&p), Some(Cell::new(2)));
    }

    #[test]
    fn test_search_finds_same_win_without_shortcut() {
        let mut engine = Engine::with_config(EngineConfig {
            immediate_win_check: false,
            ..EngineConfig::default()
        });
        let result = engine.choose_move_with_stats(&pos(0b000_000_011, 0b000_011_000));

        assert_eq!(result.best_move, Some(Cell::new(2)));
        assert_eq!(result.search_type, SearchType::Minimax);
        assert_eq!(result.score, PatternScore::WIN);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        // player holds 3 and 4, cell 5 completes row 1; cpu has no win
        let mut engine = Engine::new();
        let result = engine.choose_move_with_stats(&pos(0b100_000_001, 0b000_011_000));

        assert_eq!(result.best_move, Some(Cell::new(5)));
        assert_eq!(result.search_type, SearchType::Minimax);
    }

    #[test]
    fn test_engine_empty_board_not_losing() {
        let mut engine = Engine::new();
        let result = engine.choose_move_with_stats(&Position::empty());

        assert!(result.best_move.is_some());
        assert!(result.score >= PatternScore::DRAW);
        // All openings draw under perfect play, so the first cell is kept
        assert_eq!(result.best_move, Some(Cell::new(0)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut engine = Engine::new();
        let result = engine.choose_move_with_stats(&pos(0b110_001_101, 0b001_110_010));
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, PatternScore::DRAW);
    }

    #[test]
    fn test_chosen_cell_is_free() {
        let mut engine = Engine::new();
        let p = pos(0b000_010_000, 0b000_000_001);
        let cell = engine.choose_move(&p).unwrap();
        assert!(p.is_free(cell));
    }

    #[test]
    fn test_engine_deterministic() {
        let p = pos(0b000_000_001, 0b000_010_000);

        let mut warm = Engine::new();
        let first = warm.choose_move(&p);
        let second = warm.choose_move(&p);

        let mut cold = Engine::new();
        let third = cold.choose_move(&p);

        assert_eq!(first, second);
        assert_eq!(first, third);
    }

    #[test]
    fn test_new_game_clears_memo() {
        let mut engine = Engine::new();
        let _ = engine.choose_move(&Position::empty());
        assert!(engine.memo_stats().entries > 0);

        engine.new_game();
        assert_eq!(engine.memo_stats().entries, 0);
    }

    #[test]
    fn test_new_game_can_keep_memo() {
        let mut engine = Engine::with_config(EngineConfig {
            clear_between_games: false,
            ..EngineConfig::default()
        });
        let _ = engine.choose_move(&Position::empty());
        let entries = engine.memo_stats().entries;

        engine.new_game();
        assert_eq!(engine.memo_stats().entries, entries);

        // Warm table answers the same question with far fewer nodes
        let result = engine.choose_move_with_stats(&Position::empty());
        assert_eq!(result.nodes, 9);
    }

    #[test]
    fn test_clear_cache() {
        let mut engine = Engine::new();
        let _ = engine.choose_move(&Position::empty());
        engine.clear_cache();
        assert_eq!(engine.memo_stats().entries, 0);
    }

    #[test]
    fn test_memo_disabled_engine_agrees() {
        let mut memo = Engine::new();
        let mut plain = Engine::with_config(EngineConfig {
            memo_policy: MemoPolicy::Disabled,
            ..EngineConfig::default()
        });
        let p = pos(0b000_000_100, 0b000_010_000);

        let a = memo.choose_move_with_stats(&p);
        let b = plain.choose_move_with_stats(&p);
        assert_eq!(a.best_move, b.best_move);
        assert_eq!(a.score, b.score);
        assert_eq!(plain.memo_stats().entries, 0);
    }
}
