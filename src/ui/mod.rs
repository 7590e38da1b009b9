//! Terminal front end for playing against the engine
//!
//! This module provides the text board, input parsing and the game state
//! driven by the binary's turn loop.

mod game_state;
mod input;
mod render;

pub use game_state::GameState;
pub use input::{parse_cell, parse_command, Command};
pub use render::{describe_winning_line, render_board};
