//! History consistency invariant: replaying the moves rebuilds the board.

use super::Invariant;
use crate::{Board, Game};

/// Invariant: the board is exactly the replay of the move history.
///
/// Replaying also proves marks are monotonic: a move onto a square that
/// was already marked fails the replay.
pub struct HistoryConsistentInvariant;

impl<S> Invariant<Game<S>> for HistoryConsistentInvariant {
    fn holds(game: &Game<S>) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if reconstructed.mark(mov.position, mov.player).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board matches a replay of the move history"
    }
}
