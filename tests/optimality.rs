//! Exhaustive checks over the whole game tree

mod common;

use common::{is_finished, reachable_positions, Reference};
use tictactoe::eval::PatternScore;
use tictactoe::rules::{status, GameStatus};
use tictactoe::search::{MemoPolicy, Searcher};
use tictactoe::{Engine, EngineConfig, Position, Side};

/// Non-terminal positions with the computer to move, for either opener
fn cpu_to_move_positions() -> Vec<Position> {
    let mut positions: Vec<Position> = [Side::Cpu, Side::Player]
        .into_iter()
        .flat_map(|first| {
            reachable_positions(first)
                .into_iter()
                .filter(move |pos| !is_finished(pos) && pos.side_to_move(first) == Side::Cpu)
        })
        .collect();
    positions.sort_by_key(|p| (p.cpu.bits(), p.player.bits()));
    positions.dedup();
    positions
}

#[test]
fn test_reachable_state_count() {
    assert_eq!(reachable_positions(Side::Cpu).len(), 5478);
    assert_eq!(reachable_positions(Side::Player).len(), 5478);
}

#[test]
fn test_engine_plays_optimally_everywhere() {
    let mut reference = Reference::new();
    let mut engine = Engine::new();

    for pos in cpu_to_move_positions() {
        let expected = reference.value(pos, true);
        let result = engine.choose_move_with_stats(&pos);

        let cell = result.best_move.expect("non-terminal position has a move");
        assert!(pos.is_free(cell), "engine chose occupied cell in {pos:?}");
        assert_eq!(result.score, expected, "root score differs in {pos:?}");
        assert_eq!(
            reference.value(pos.with_move(cell, Side::Cpu), false),
            expected,
            "chosen move {cell} does not achieve the value of {pos:?}"
        );
    }
}

#[test]
fn test_memo_scores_match_reference() {
    let mut reference = Reference::new();
    let mut searcher = Searcher::new();
    let inf = PatternScore::INF;

    for first in [Side::Cpu, Side::Player] {
        for pos in reachable_positions(first) {
            let maximizing = pos.side_to_move(first) == Side::Cpu;
            let expected = reference.value(pos, maximizing);
            assert_eq!(
                searcher.minimax(pos, maximizing, -inf, inf),
                expected,
                "full-window score differs in {pos:?}"
            );
        }
    }
}

#[test]
fn test_windowed_scores_are_sound_bounds() {
    let mut reference = Reference::new();
    // One searcher for every window so stored bounds get reused across them
    let mut searcher = Searcher::new();
    let windows = [(-1, 1), (0, 1), (-1, 0), (-10, 0), (0, 10), (-3, 3)];

    for pos in reachable_positions(Side::Cpu) {
        let maximizing = pos.side_to_move(Side::Cpu) == Side::Cpu;
        let exact = reference.value(pos, maximizing);

        for (alpha, beta) in windows {
            let score = searcher.minimax(pos, maximizing, alpha, beta);
            if score <= alpha {
                assert!(exact <= score, "fail-low {score} above true {exact} in {pos:?}");
            } else if score >= beta {
                assert!(exact >= score, "fail-high {score} below true {exact} in {pos:?}");
            } else {
                assert_eq!(score, exact, "in-window score not exact in {pos:?}");
            }
        }
    }
}

#[test]
fn test_disabled_memo_matches_reference() {
    let mut reference = Reference::new();
    let mut searcher = Searcher::with_policy(MemoPolicy::Disabled);
    let inf = PatternScore::INF;

    // Openings and their replies keep the unmemoized search affordable
    for pos in cpu_to_move_positions()
        .into_iter()
        .filter(|p| p.stone_count() <= 2)
    {
        assert_eq!(searcher.minimax(pos, true, -inf, inf), reference.value(pos, true));
    }
    assert_eq!(searcher.memo_stats().entries, 0);
}

/// Play every human line against the engine and report the worst outcome
fn explore(engine: &mut Engine, pos: Position, to_move: Side, losses: &mut Vec<Position>) {
    match status(&pos) {
        GameStatus::Won(Side::Player) => {
            losses.push(pos);
            return;
        }
        GameStatus::Won(Side::Cpu) | GameStatus::Draw => return,
        GameStatus::InProgress => {}
    }

    match to_move {
        Side::Cpu => {
            let cell = engine.choose_move(&pos).expect("game in progress");
            explore(engine, pos.with_move(cell, Side::Cpu), Side::Player, losses);
        }
        Side::Player => {
            for cell in pos.free_cells().iter_ones() {
                explore(engine, pos.with_move(cell, Side::Player), Side::Cpu, losses);
            }
        }
    }
}

#[test]
fn test_engine_never_loses() {
    for first in [Side::Cpu, Side::Player] {
        let mut engine = Engine::new();
        let mut losses = Vec::new();
        explore(&mut engine, Position::empty(), first, &mut losses);
        assert!(losses.is_empty(), "engine lost with {first:?} first: {losses:?}");
    }
}

#[test]
fn test_choice_independent_of_memo_state() {
    let mut warm = Engine::new();
    let mut plain = Engine::with_config(EngineConfig {
        memo_policy: MemoPolicy::Disabled,
        ..EngineConfig::default()
    });

    for pos in cpu_to_move_positions()
        .into_iter()
        .filter(|p| p.stone_count() >= 2)
    {
        let mut cold = Engine::new();
        let expected = cold.choose_move(&pos);
        assert_eq!(warm.choose_move(&pos), expected, "warm engine differs in {pos:?}");
        assert_eq!(warm.choose_move(&pos), expected, "repeat call differs in {pos:?}");
        if pos.stone_count() >= 4 {
            assert_eq!(plain.choose_move(&pos), expected, "memo-free engine differs in {pos:?}");
        }
    }
}
