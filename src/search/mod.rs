//! Search module for the tic-tac-toe AI
//!
//! Contains:
//! - Packed search keys for position identification
//! - Memo table for caching search results
//! - Alpha-Beta minimax to the end of the game

pub mod alphabeta;
pub mod key;
pub mod tt;

pub use alphabeta::{MemoPolicy, SearchStats, Searcher};
pub use key::SearchKey;
pub use tt::{EntryType, MemoEntry, MemoStats, MemoTable};
