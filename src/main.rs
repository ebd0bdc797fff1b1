//! Tic-tac-toe AI - terminal CLI
//!
//! Play against the minimax solver, watch it play itself, or ask it for a move.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use std::path::Path;
use tictactoe_ai::{AppConfig, run_selfplay, run_terminal, side_to_move, suggest};
use tictactoe_engine::{Board, Difficulty, GameMode, Player};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe_engine=debug")),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            ai_player,
            seed,
        } => run_play(cli.config.as_deref(), mode, difficulty, ai_player, seed),
        Command::Selfplay {
            games,
            one,
            two,
            seed,
            json,
        } => run_selfplay_command(games, one, two, seed, json),
        Command::Suggest { board, player } => run_suggest(board, player),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config_path))]
fn run_play(
    config_path: Option<&Path>,
    mode: Option<GameMode>,
    difficulty: Option<Difficulty>,
    ai_player: Option<Player>,
    seed: Option<u64>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    }
    .with_overrides(mode, difficulty, ai_player, seed);

    info!(
        mode = %config.mode(),
        difficulty = %config.difficulty(),
        ai_player = %config.ai_player(),
        "Starting game"
    );

    let mut game = config.build_game();
    let stdin = io::stdin();
    run_terminal(&mut game, stdin.lock(), io::stdout())
}

/// Run a batch of solver-vs-solver games
#[instrument]
fn run_selfplay_command(
    games: u32,
    one: Difficulty,
    two: Difficulty,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let report = run_selfplay(games, one, two, seed)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

/// Print the best move for a position
#[instrument(skip(board), fields(board = %board))]
fn run_suggest(board: Board, player: Option<Player>) -> Result<()> {
    let player = player.unwrap_or_else(|| side_to_move(&board));
    let suggestion = suggest(&board, player)?;
    println!("{}", board);
    println!("{}", suggestion);
    Ok(())
}
