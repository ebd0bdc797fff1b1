//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record which player
//! marked which cell and can be replayed onto a fresh board.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player.symbol(), self.position)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),

    /// The coordinates fall outside the grid.
    #[display("Position ({row}, {col}) is outside the 3x3 grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A move was requested from a full board.
    #[display("No legal moves remain")]
    NoLegalMoves,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The solver was asked to move on a human's turn.
    #[display("It is not the AI's turn")]
    NotAiTurn,
}

impl MoveError {
    /// True for errors caused by a bad target cell.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            MoveError::SquareOccupied(_) | MoveError::OutOfBounds { .. }
        )
    }
}

impl std::error::Error for MoveError {}
