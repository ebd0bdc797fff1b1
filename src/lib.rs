//! Terminal front end for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Config**: TOML settings plus command-line overrides
//! - **Terminal**: line-driven play against a human or the solver
//! - **Self-play**: solver-versus-solver batches with a tally
//! - **Suggest**: one-shot analysis of a position
//!
//! Game rules and the solver live in [`tictactoe_engine`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod selfplay;
mod suggest;
mod terminal;

pub use config::{AppConfig, ConfigError};
pub use selfplay::{SelfPlayReport, play_game, run_selfplay};
pub use suggest::{Suggestion, side_to_move, suggest};
pub use terminal::{Command, CommandParseError, run_terminal};
