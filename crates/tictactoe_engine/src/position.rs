//! Cell coordinates on the 3x3 grid.

use super::action::MoveError;
use super::types::BOARD_SIZE;
use serde::{Deserialize, Serialize};

/// A cell on the tic-tac-toe board, addressed by (row, column).
///
/// Variants are declared in row-major order, so the discriminant is the
/// board index and `Ord` follows the search's tie-break order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// (0, 0)
    TopLeft,
    /// (0, 1)
    TopCenter,
    /// (0, 2)
    TopRight,
    /// (1, 0)
    MiddleLeft,
    /// (1, 1)
    Center,
    /// (1, 2)
    MiddleRight,
    /// (2, 0)
    BottomLeft,
    /// (2, 1)
    BottomCenter,
    /// (2, 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Creates a position from a (row, column) pair.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if either coordinate exceeds 2.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds { row, col });
        }
        Ok(Self::ALL[row * BOARD_SIZE + col])
    }

    /// Creates position from board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Row of this cell.
    pub fn row(self) -> usize {
        self.to_index() / BOARD_SIZE
    }

    /// Column of this cell.
    pub fn col(self) -> usize {
        self.to_index() % BOARD_SIZE
    }

    /// (row, column) pair.
    pub fn coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_maps_row_major() {
        assert_eq!(Position::new(0, 0).unwrap(), Position::TopLeft);
        assert_eq!(Position::new(1, 1).unwrap(), Position::Center);
        assert_eq!(Position::new(2, 0).unwrap(), Position::BottomLeft);
        assert_eq!(Position::new(2, 2).unwrap(), Position::BottomRight);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            Position::new(3, 0),
            Err(MoveError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            Position::new(1, 7),
            Err(MoveError::OutOfBounds { row: 1, col: 7 })
        );
    }

    #[test]
    fn test_coords_round_trip_through_index() {
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(*pos));
            assert_eq!(Position::new(pos.row(), pos.col()).unwrap(), *pos);
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_display_uses_coordinates() {
        assert_eq!(Position::MiddleRight.to_string(), "(1, 2)");
    }
}
