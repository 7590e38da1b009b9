//! Tic-tac-toe against a perfect-play engine
//!
//! A terminal game: the computer (`@`) plays first unless `--player-first`
//! is given, and the human (`X`) types cell numbers laid out like a keypad.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tictactoe::rules::GameStatus;
use tictactoe::search::MemoPolicy;
use tictactoe::ui::{describe_winning_line, parse_command, render_board, Command, GameState};
use tictactoe::{EngineConfig, Side};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Let the human make the first move
    #[arg(long)]
    player_first: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Search without the memo table
    #[arg(long)]
    no_memo: bool,

    /// Keep the memo table between games
    #[arg(long)]
    keep_memo: bool,

    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: u32,
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            memo_policy: if self.no_memo {
                MemoPolicy::Disabled
            } else {
                MemoPolicy::Bounded
            },
            clear_between_games: !self.keep_memo,
            ..EngineConfig::default()
        }
    }

    fn first_side(&self) -> Side {
        if self.player_first {
            Side::Player
        } else {
            Side::Cpu
        }
    }
}

/// How a single game ended
enum Outcome {
    Won(Side),
    Draw,
    Quit,
}

impl Outcome {
    /// Closing line for a finished game, `None` if the human quit
    fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Won(Side::Cpu) => Some("The computer has won!"),
            Outcome::Won(Side::Player) => Some("The player has won!"),
            Outcome::Draw => Some("Draw!"),
            Outcome::Quit => None,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .init();

    info!("starting with {:?}", args);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let mut game = GameState::new(args.first_side(), args.engine_config());

    for round in 1..=args.games {
        if round > 1 {
            game.reset(args.first_side());
            writeln!(out, "\nGame {round} of {}", args.games)?;
        }

        let outcome = play_game(&mut game, &mut input, &mut out)?;
        let Some(message) = outcome.message() else {
            break;
        };
        writeln!(out, "{}", render_board(&game.position, false))?;
        if let Some(line) = describe_winning_line(&game.position) {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "{message}")?;

        let memo = game.engine().memo_stats();
        let totals = game.search_totals;
        info!(
            "game {round} finished: {} nodes searched, memo hit rate {:.1}%, memo holds {} entries",
            totals.nodes,
            totals.memo_hit_rate(),
            memo.entries
        );
    }

    Ok(())
}

fn play_game<R: BufRead, W: Write>(
    game: &mut GameState,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome> {
    loop {
        match game.status() {
            GameStatus::Won(side) => return Ok(Outcome::Won(side)),
            GameStatus::Draw => return Ok(Outcome::Draw),
            GameStatus::InProgress => {}
        }

        if game.is_ai_turn() {
            if let Some(result) = game.play_engine_move() {
                let nanos = result.elapsed.as_nanos();
                writeln!(out, "Search time (nanoseconds): {nanos}")?;
                writeln!(out, "Search time (seconds): {}", result.elapsed.as_secs_f64())?;
            }
            continue;
        }

        writeln!(out, "Current board:")?;
        writeln!(out, "{}", render_board(&game.position, true))?;
        write!(out, "Choose a free cell: ")?;

        loop {
            out.flush().context("failed to flush stdout")?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .context("failed to read from stdin")?;
            if read == 0 {
                // End of input
                writeln!(out)?;
                return Ok(Outcome::Quit);
            }

            match parse_command(&line, &game.position) {
                Ok(Command::Play(cell)) => match game.apply_human_move(cell) {
                    Ok(()) => break,
                    Err(err) => write!(out, "Invalid choice ({err}). Choose a free cell: ")?,
                },
                Ok(Command::Undo) => {
                    game.undo();
                    break;
                }
                Ok(Command::Quit) => return Ok(Outcome::Quit),
                Err(err) => write!(out, "Invalid choice ({err}). Choose a free cell: ")?,
            }
        }
    }
}
