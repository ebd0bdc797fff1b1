//! Exhaustive minimax search.
//!
//! Player one is always the maximizing side and player two the minimizing
//! side: a line for one scores `+1`, a line for two scores `-1`, a draw
//! scores `0`. The tree is at most nine plies deep, so every branch is
//! searched to the end with no pruning and no heuristic.

use crate::{Board, MoveError, Player, Position};
use serde::{Deserialize, Serialize};

/// Value of a searched position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    score: i8,
    best_move: Option<Position>,
    nodes: u64,
}

impl SearchResult {
    /// Game-theoretic value: `+1` one wins, `-1` two wins, `0` draw.
    pub fn score(&self) -> i8 {
        self.score
    }

    /// Best move for the side to move; `None` at a terminal position.
    pub fn best_move(&self) -> Option<Position> {
        self.best_move
    }

    /// Number of positions visited, root included.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Searches `board` to the end with `maximizing` choosing at the root.
///
/// Ties keep the first move in [`Board::empty_positions`] order.
///
/// # Errors
///
/// Only fails if a child mark is rejected, which a consistent board
/// never does.
pub fn minimax(board: &Board, maximizing: bool) -> Result<SearchResult, MoveError> {
    let mut nodes = 0;
    let (score, best_move) = search(board, maximizing, &mut nodes)?;
    Ok(SearchResult {
        score,
        best_move,
        nodes,
    })
}

fn search(
    board: &Board,
    maximizing: bool,
    nodes: &mut u64,
) -> Result<(i8, Option<Position>), MoveError> {
    *nodes += 1;

    if let Some(score) = board.evaluate().score() {
        return Ok((score, None));
    }

    let (player, mut best_score) = if maximizing {
        (Player::One, i8::MIN)
    } else {
        (Player::Two, i8::MAX)
    };
    let mut best_move = None;

    for position in board.empty_positions() {
        let mut child = *board;
        child.mark(position, player)?;
        let (score, _) = search(&child, !maximizing, nodes)?;

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(position);
        }
    }

    Ok((best_score, best_move))
}
