//! Property tests for board evaluation and bookkeeping.

use proptest::prelude::*;
use tictactoe_engine::{Board, CELL_COUNT, MoveError, Outcome, Player, Position};

/// Every cell exactly once, in random order.
fn mark_order() -> impl Strategy<Value = Vec<Position>> {
    Just(Position::ALL.to_vec()).prop_shuffle()
}

proptest! {
    /// Evaluation stays `NoResult` until a line appears or the grid fills.
    #[test]
    fn prop_no_result_until_line_or_full(order in mark_order(), len in 0usize..=9) {
        let mut board = Board::new();
        let mut player = Player::One;

        for pos in order.into_iter().take(len) {
            if board.evaluate().is_terminal() {
                break;
            }
            board.mark(pos, player).unwrap();
            player = player.opponent();

            let outcome = board.evaluate();
            match board.winning_line() {
                Some(line) => {
                    prop_assert_eq!(outcome, Outcome::won_by(line.player()));
                }
                None if board.is_full() => {
                    prop_assert_eq!(outcome, Outcome::Draw);
                }
                None => {
                    prop_assert_eq!(outcome, Outcome::NoResult);
                }
            }
        }
    }

    /// Empty cells plus marks always cover the grid.
    #[test]
    fn prop_empty_plus_marked_is_nine(
        order in mark_order(),
        owners in prop::collection::vec(any::<bool>(), CELL_COUNT),
        len in 0usize..=9,
    ) {
        let mut board = Board::new();
        prop_assert_eq!(board.empty_positions().len() + board.mark_count(), CELL_COUNT);

        for (pos, first) in order.into_iter().zip(owners).take(len) {
            let player = if first { Player::One } else { Player::Two };
            board.mark(pos, player).unwrap();
            prop_assert_eq!(board.empty_positions().len() + board.mark_count(), CELL_COUNT);
            prop_assert!(!board.empty_positions().contains(&pos));
        }

        prop_assert_eq!(board.is_full(), len == CELL_COUNT);
        prop_assert_eq!(board.is_empty_board(), len == 0);
    }

    /// Marking an occupied cell is rejected without touching the board.
    #[test]
    fn prop_remark_is_rejected(
        order in mark_order(),
        len in 1usize..=9,
        pick in any::<prop::sample::Index>(),
    ) {
        let mut board = Board::new();
        let mut player = Player::One;
        let marked: Vec<Position> = order.into_iter().take(len).collect();
        for &pos in &marked {
            board.mark(pos, player).unwrap();
            player = player.opponent();
        }
        let before = board;

        let target = *pick.get(&marked);
        prop_assert_eq!(board.mark(target, player), Err(MoveError::SquareOccupied(target)));
        prop_assert_eq!(board, before);
    }

    /// A reported line's endpoints belong to its owner.
    #[test]
    fn prop_winning_line_endpoints_owned(order in mark_order()) {
        let mut board = Board::new();
        let mut player = Player::One;
        for pos in order {
            board.mark(pos, player).unwrap();
            player = player.opponent();
            if let Some(line) = board.winning_line() {
                for end in line.endpoints() {
                    prop_assert_eq!(board.get(end).player(), Some(line.player()));
                }
                break;
            }
        }
    }
}
