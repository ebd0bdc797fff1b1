//! Command-line interface for tictactoe_ai.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::{Board, Difficulty, GameMode, Player};

/// Tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_ai")]
#[command(about = "Tic-tac-toe with a perfect-play opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (enter moves as "row col")
    Play {
        /// player_vs_player or player_vs_ai
        #[arg(long)]
        mode: Option<GameMode>,

        /// easy or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Side the AI plays (one or two)
        #[arg(long)]
        ai_player: Option<Player>,

        /// Seed for easy-mode picks
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit two solvers against each other
    Selfplay {
        /// Number of games
        #[arg(short = 'n', long, default_value = "10")]
        games: u32,

        /// Strategy for player one (X)
        #[arg(long, default_value = "hard")]
        one: Difficulty,

        /// Strategy for player two (O)
        #[arg(long, default_value = "hard")]
        two: Difficulty,

        /// Seed for easy-mode picks
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the best move for a position
    Suggest {
        /// Nine cells in row-major order, e.g. "X.O.X...."
        #[arg(short, long)]
        board: Board,

        /// Side to move; inferred from the mark counts when omitted
        #[arg(short, long)]
        player: Option<Player>,
    },
}
