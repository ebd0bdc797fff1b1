//! Win detection logic for tic-tac-toe.

use super::super::{Board, Position, WinningLine};

/// Every three-in-a-row line, in scan order.
///
/// Rows top to bottom, columns left to right, then the main and anti
/// diagonals. Only a malformed grid can hold two lines at once, in which
/// case the first one here is reported.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first completed line on the board.
///
/// Returns the line's end cells and owner, or `None` if no player has
/// three in a row.
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let player = board.get(a).player()?;
        (board.get(b).player() == Some(player) && board.get(c).player() == Some(player))
            .then(|| WinningLine::new(a, c, player))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.mark(pos, player).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::One),
            (Position::TopCenter, Player::One),
            (Position::TopRight, Player::One),
        ]);
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.player(), Player::One);
        assert_eq!(line.endpoints(), [Position::TopLeft, Position::TopRight]);
    }

    #[test]
    fn test_winner_middle_column() {
        let board = board_with(&[
            (Position::TopCenter, Player::Two),
            (Position::Center, Player::Two),
            (Position::BottomCenter, Player::Two),
        ]);
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.player(), Player::Two);
        assert_eq!(line.endpoints(), [Position::TopCenter, Position::BottomCenter]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::One),
            (Position::Center, Player::One),
            (Position::BottomLeft, Player::One),
        ]);
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.endpoints(), [Position::TopRight, Position::BottomLeft]);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_with(&[
            (Position::TopLeft, Player::One),
            (Position::TopCenter, Player::Two),
            (Position::TopRight, Player::One),
        ]);
        assert_eq!(find_winning_line(&board), None);
    }

    #[test]
    fn test_rows_reported_before_columns() {
        // Malformed grid: top row and left column both belong to one.
        let board = board_with(&[
            (Position::TopLeft, Player::One),
            (Position::TopCenter, Player::One),
            (Position::TopRight, Player::One),
            (Position::MiddleLeft, Player::One),
            (Position::BottomLeft, Player::One),
        ]);
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.endpoints(), [Position::TopLeft, Position::TopRight]);
    }
}
