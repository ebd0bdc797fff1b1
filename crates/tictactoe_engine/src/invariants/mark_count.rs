//! Mark count invariant: the counter matches the occupied cells.

use super::Invariant;
use crate::{Board, Cell, Game};

/// Invariant: the board's mark counter equals its number of occupied cells.
pub struct MarkCountInvariant;

impl Invariant<Board> for MarkCountInvariant {
    fn holds(board: &Board) -> bool {
        let occupied = board.cells().iter().filter(|c| **c != Cell::Empty).count();
        occupied == board.mark_count()
    }

    fn description() -> &'static str {
        "Mark counter matches number of occupied squares"
    }
}

impl<S> Invariant<Game<S>> for MarkCountInvariant {
    fn holds(game: &Game<S>) -> bool {
        <Self as Invariant<Board>>::holds(game.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}
