//! Perfect-play tic-tac-toe engine
//!
//! The computer never loses: every move is chosen by a full-depth
//! alpha-beta minimax over the 3x3 board.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: 9-bit bitboards, cells and positions
//! - [`eval`]: Line patterns, terminal verdicts and the heuristic
//! - [`search`]: Alpha-Beta minimax with a bound-aware memo table
//! - [`engine`]: Move decision integrating all components
//! - [`rules`]: Win and draw detection for the turn loop
//! - [`ui`]: Text board and input handling for the terminal game
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Cell, Engine, Position, Side};
//!
//! let mut pos = Position::empty();
//! let mut engine = Engine::new();
//!
//! pos.place(Cell::new(4), Side::Player).unwrap();
//!
//! // Computer responds
//! if let Some(cell) = engine.choose_move(&pos) {
//!     pos.place(cell, Side::Cpu).unwrap();
//!     println!("Computer plays cell {}", cell);
//! }
//! ```
//!
//! # Decision Order
//!
//! 1. Immediate winning move (lowest cell first)
//! 2. Alpha-Beta minimax over every free cell, first cell winning ties

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Bitboard, Cell, Position, Side, BOARD_SIZE};
pub use engine::{Engine, EngineConfig, MoveResult, SearchType};
pub use error::MoveError;
pub use eval::{evaluate, Verdict};
pub use rules::GameStatus;
pub use search::MemoPolicy;
