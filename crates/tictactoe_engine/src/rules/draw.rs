//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::find_winning_line;

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && find_winning_line(board).is_none()
}
