//! Game state management for the terminal front end

use crate::board::{Cell, Position, Side};
use crate::engine::{Engine, EngineConfig, MoveResult};
use crate::error::MoveError;
use crate::rules::{self, GameStatus};
use crate::search::SearchStats;

/// Main game state: one human against the engine
pub struct GameState {
    pub position: Position,
    /// Side that opened the game
    pub first: Side,
    pub current_turn: Side,
    status: GameStatus,
    pub last_move: Option<Cell>,
    pub move_history: Vec<(Cell, Side)>,
    /// Search statistics summed over the engine's moves this game
    pub search_totals: SearchStats,
    engine: Engine,
}

impl GameState {
    pub fn new(first: Side, config: EngineConfig) -> Self {
        Self {
            position: Position::empty(),
            first,
            current_turn: first,
            status: GameStatus::InProgress,
            last_move: None,
            move_history: Vec::new(),
            search_totals: SearchStats::default(),
            engine: Engine::with_config(config),
        }
    }

    /// Start over, optionally with a different opening side.
    /// Tells the engine a new game has begun.
    pub fn reset(&mut self, first: Side) {
        self.position = Position::empty();
        self.first = first;
        self.current_turn = first;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.move_history.clear();
        self.search_totals = SearchStats::default();
        self.engine.new_game();
    }

    /// Result of the game so far
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_human_turn(&self) -> bool {
        !self.status.is_over() && self.current_turn == Side::Player
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.status.is_over() && self.current_turn == Side::Cpu
    }

    /// Attempt to place the human's mark
    pub fn apply_human_move(&mut self, cell: Cell) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        debug_assert_eq!(self.current_turn, Side::Player, "not the human's turn");

        self.position.place(cell, Side::Player)?;
        self.record_move(cell, Side::Player);
        Ok(())
    }

    /// Ask the engine for its move and play it.
    ///
    /// Returns the engine's result, or `None` if it is not the engine's turn.
    pub fn play_engine_move(&mut self) -> Option<MoveResult> {
        if !self.is_ai_turn() {
            return None;
        }

        let result = self.engine.choose_move_with_stats(&self.position);
        self.search_totals.merge(&result.stats);

        if let Some(cell) = result.best_move {
            // The engine only returns free cells
            self.position = self.position.with_move(cell, Side::Cpu);
            self.record_move(cell, Side::Cpu);
        }
        Some(result)
    }

    fn record_move(&mut self, cell: Cell, side: Side) {
        self.move_history.push((cell, side));
        self.last_move = Some(cell);

        self.status = rules::status(&self.position);
        if !self.status.is_over() {
            self.current_turn = side.opponent();
        }
    }

    /// Take back the human's last move and the engine's reply to it.
    ///
    /// Does nothing before the human has moved.
    pub fn undo(&mut self) {
        // Undo back to the last human move (inclusive)
        let Some(keep) = self
            .move_history
            .iter()
            .rposition(|&(_, side)| side == Side::Player)
        else {
            return;
        };
        let moves: Vec<_> = self.move_history.drain(..keep).collect();

        // Simple undo: reset and replay
        self.position = Position::empty();
        self.current_turn = self.first;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.move_history.clear();

        for (cell, side) in moves {
            self.position = self.position.with_move(cell, side);
            self.move_history.push((cell, side));
            self.last_move = Some(cell);
            self.current_turn = side.opponent();
        }
    }

    /// Engine handle, for diagnostics
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}
