//! Results of evaluating a grid.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Result of evaluating a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and cells remain.
    NoResult,
    /// Player one completed a line.
    PlayerOneWins,
    /// Player two completed a line.
    PlayerTwoWins,
    /// Full grid without a completed line.
    Draw,
}

impl Outcome {
    /// Outcome for a line completed by `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::One => Outcome::PlayerOneWins,
            Player::Two => Outcome::PlayerTwoWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::PlayerOneWins => Some(Player::One),
            Outcome::PlayerTwoWins => Some(Player::Two),
            Outcome::NoResult | Outcome::Draw => None,
        }
    }

    /// True once the game can no longer continue.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::NoResult)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Leaf value for the search: player one is `+1`, player two `-1`.
    pub fn score(self) -> Option<i8> {
        match self {
            Outcome::PlayerOneWins => Some(1),
            Outcome::PlayerTwoWins => Some(-1),
            Outcome::Draw => Some(0),
            Outcome::NoResult => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::NoResult => write!(f, "In progress"),
            Outcome::PlayerOneWins => write!(f, "Player one wins"),
            Outcome::PlayerTwoWins => write!(f, "Player two wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// A completed line, reported for the renderer's strike-through.
///
/// Pure data: the two end cells of the line and who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    start: Position,
    end: Position,
    player: Player,
}

impl WinningLine {
    pub(crate) fn new(start: Position, end: Position, player: Player) -> Self {
        Self { start, end, player }
    }

    /// First end cell of the line.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Last end cell of the line.
    pub fn end(&self) -> Position {
        self.end
    }

    /// Both end cells.
    pub fn endpoints(&self) -> [Position; 2] {
        [self.start, self.end]
    }

    /// Owner of the line.
    pub fn player(&self) -> Player {
        self.player
    }
}
