//! Shared helpers for the integration tests

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use tictactoe::{Position, Side, Verdict};

/// Every position reachable from the empty board when `first` opens,
/// stopping at finished games.
pub fn reachable_positions(first: Side) -> HashSet<Position> {
    let mut seen = HashSet::new();
    let mut stack = vec![Position::empty()];

    while let Some(pos) = stack.pop() {
        if !seen.insert(pos) {
            continue;
        }
        if is_finished(&pos) {
            continue;
        }
        let mover = pos.side_to_move(first);
        for cell in pos.free_cells().iter_ones() {
            stack.push(pos.with_move(cell, mover));
        }
    }

    seen
}

pub fn is_finished(pos: &Position) -> bool {
    Verdict::of(pos.cpu, pos.player).is_terminal() || pos.is_full()
}

/// Plain minimax without pruning. Results are cached per (position, turn),
/// which is exact because nothing here depends on a search window.
pub struct Reference {
    cache: HashMap<(Position, bool), i32>,
}

impl Reference {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub fn value(&mut self, pos: Position, maximizing: bool) -> i32 {
        if let Some(&score) = self.cache.get(&(pos, maximizing)) {
            return score;
        }

        let verdict = Verdict::of(pos.cpu, pos.player);
        let score = if verdict.is_terminal() {
            verdict.score()
        } else if pos.is_full() {
            0
        } else {
            let mover = if maximizing { Side::Cpu } else { Side::Player };
            let children = pos
                .free_cells()
                .iter_ones()
                .map(|cell| self.value(pos.with_move(cell, mover), !maximizing))
                .collect::<Vec<_>>();
            if maximizing {
                children.into_iter().max().unwrap_or(0)
            } else {
                children.into_iter().min().unwrap_or(0)
            }
        };

        self.cache.insert((pos, maximizing), score);
        score
    }
}
