//! The 3x3 grid and its structural queries.

use super::action::MoveError;
use super::invariants::{Invariant, MarkCountInvariant};
use super::outcome::{Outcome, WinningLine};
use super::rules;
use super::types::{BOARD_SIZE, CELL_COUNT, Cell, Player};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// 3x3 tic-tac-toe board.
///
/// The board is `Copy`: the solver branches by copying it rather than
/// undoing marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    pub(crate) cells: [Cell; CELL_COUNT],
    /// Number of marks placed since the board was created or reset.
    pub(crate) marked: usize,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
            marked: 0,
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Places `player`'s mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the cell already holds a
    /// mark. The grid and the mark counter are left untouched.
    pub fn mark(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            warn!(position = %pos, player = %player, "Rejected mark on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        self.cells[pos.to_index()] = Cell::Marked(player);
        self.marked += 1;

        debug_assert!(
            <MarkCountInvariant as Invariant<Board>>::holds(self),
            "{}",
            <MarkCountInvariant as Invariant<Board>>::description()
        );
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// All unmarked cells in row-major order.
    ///
    /// This order is the search's tie-break order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Number of marks on the board.
    pub fn mark_count(&self) -> usize {
        self.marked
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.player() == Some(player))
            .count()
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        self.marked == CELL_COUNT
    }

    /// Checks if no cell is marked.
    pub fn is_empty_board(&self) -> bool {
        self.marked == 0
    }

    /// Evaluates the grid.
    ///
    /// Rows, then columns, then both diagonals are scanned for three
    /// matching marks. A full grid without such a line is a draw.
    pub fn evaluate(&self) -> Outcome {
        if let Some(line) = rules::find_winning_line(self) {
            return Outcome::won_by(line.player());
        }
        if rules::is_draw(self) {
            Outcome::Draw
        } else {
            Outcome::NoResult
        }
    }

    /// The completed line, if any, for drawing a strike-through.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::find_winning_line(self)
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = cells.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text did not hold exactly nine cells.
    #[display("Expected 9 cells, found {_0}")]
    WrongLength(usize),
    /// A character that is not `X`, `O`, `.` or `_`.
    #[display("Unrecognized cell character '{_0}'")]
    InvalidCell(char),
}

impl std::error::Error for BoardParseError {}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order, ignoring whitespace.
    ///
    /// `X` is player one, `O` is player two, `.` or `_` is empty. Mark
    /// counts are not checked for balance.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != CELL_COUNT {
            return Err(BoardParseError::WrongLength(symbols.len()));
        }

        let mut board = Board::new();
        for (pos, symbol) in Position::ALL.iter().zip(symbols) {
            let owner = match symbol {
                'X' | 'x' => Some(Player::One),
                'O' | 'o' => Some(Player::Two),
                '.' | '_' => None,
                other => return Err(BoardParseError::InvalidCell(other)),
            };
            if let Some(player) = owner {
                board.cells[pos.to_index()] = Cell::Marked(player);
                board.marked += 1;
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert!(board.is_empty_board());
        assert!(!board.is_full());
        assert_eq!(board.evaluate(), Outcome::NoResult);
        assert_eq!(board.empty_positions(), Position::ALL.to_vec());
    }

    #[test]
    fn test_mark_counts_and_clears_emptiness() {
        let mut board = Board::new();
        board.mark(Position::Center, Player::One).unwrap();
        assert_eq!(board.mark_count(), 1);
        assert!(!board.is_empty(Position::Center));
        assert!(!board.is_empty_board());
        assert_eq!(board.get(Position::Center), Cell::Marked(Player::One));
    }

    #[test]
    fn test_mark_occupied_leaves_board_unchanged() {
        let mut board = Board::new();
        board.mark(Position::TopLeft, Player::One).unwrap();
        let before = board;

        let result = board.mark(Position::TopLeft, Player::Two);

        assert_eq!(result, Err(MoveError::SquareOccupied(Position::TopLeft)));
        assert_eq!(board, before);
        assert_eq!(board.mark_count(), 1);
    }

    #[test]
    fn test_empty_positions_row_major() {
        let mut board = Board::new();
        board.mark(Position::TopCenter, Player::One).unwrap();
        board.mark(Position::Center, Player::Two).unwrap();
        assert_eq!(
            board.empty_positions(),
            vec![
                Position::TopLeft,
                Position::TopRight,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ]
        );
    }

    #[test]
    fn test_evaluate_draw_matches_draw_rule() {
        // X O X / O X X / O X O
        let drawn: Board = "XOXOXXOXO".parse().unwrap();
        assert!(rules::is_draw(&drawn));
        assert_eq!(drawn.evaluate(), Outcome::Draw);

        // Full, but X holds the top row.
        let won: Board = "XXXOOXXOO".parse().unwrap();
        assert!(won.is_full());
        assert!(!rules::is_draw(&won));
        assert_eq!(won.evaluate(), Outcome::PlayerOneWins);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board: Board = "XO. .X. ..O".parse().unwrap();
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO. .X. ..O".parse().unwrap();
        assert_eq!(board.mark_count(), 4);
        assert_eq!(board.count(Player::One), 2);
        assert_eq!(board.to_string(), "X O .\n. X .\n. . O");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::WrongLength(2))
        );
        assert_eq!(
            "XO.......Z".parse::<Board>(),
            Err(BoardParseError::WrongLength(10))
        );
        assert_eq!(
            "XO......Z".parse::<Board>(),
            Err(BoardParseError::InvalidCell('Z'))
        );
    }
}
