//! Tic-tac-toe game state and move selection.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, legal moves, and win/draw evaluation
//! - **Solver**: the automated opponent (random on easy, minimax on hard)
//! - **Game**: turn-taking driver tying a board to a solver and a mode
//!
//! Nothing here renders or reads input; a presentation layer drives
//! [`Game`] (or [`Board`] and [`Solver`] directly) and draws the result.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Difficulty, Outcome, Player, Position, Solver};
//!
//! let mut board = Board::new();
//! board.mark(Position::Center, Player::One)?;
//!
//! let mut solver = Solver::seeded(Difficulty::Hard, Player::Two, 7);
//! let reply = solver.choose_move(&board)?;
//! board.mark(reply, Player::Two)?;
//!
//! assert_eq!(board.evaluate(), Outcome::NoResult);
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
pub mod solver;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, BoardParseError};
pub use game::Game;
pub use outcome::{Outcome, WinningLine};
pub use position::Position;
pub use solver::{MoveSource, ScriptedSource, SearchResult, Solver};
pub use types::{BOARD_SIZE, CELL_COUNT, Cell, Difficulty, GameConfig, GameMode, Player};
