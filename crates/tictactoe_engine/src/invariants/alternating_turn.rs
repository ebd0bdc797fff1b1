//! Alternating turn invariant: players alternate one, two, one, two, ...

use super::Invariant;
use crate::{Game, Player};

/// Invariant: players alternate turns, player one first.
///
/// The player to move must be the one the history implies.
pub struct AlternatingTurnInvariant;

impl<S> Invariant<Game<S>> for AlternatingTurnInvariant {
    fn holds(game: &Game<S>) -> bool {
        let history = game.history();

        if history.first().is_some_and(|mov| mov.player != Player::One) {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        };
        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (one, two, one, ...)"
    }
}
