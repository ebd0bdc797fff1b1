//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Side length of the grid.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the grid.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Player {
    /// Player one (moves first, plays `X`).
    One,
    /// Player two (plays `O`).
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Symbol this player places on the grid.
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Marked(Player),
}

impl Cell {
    /// Returns the player occupying the cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(player),
        }
    }

    /// Character used in the text rendering of the board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marked(player) => player.symbol(),
        }
    }
}

/// Strategy the solver uses to pick its move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random legal move.
    Easy,
    /// Exhaustive minimax search.
    #[default]
    Hard,
}

/// Who sits on each side of the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    PlayerVsPlayer,
    /// A human plays against the solver.
    #[default]
    PlayerVsAi,
}

impl GameMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::PlayerVsPlayer => GameMode::PlayerVsAi,
            GameMode::PlayerVsAi => GameMode::PlayerVsPlayer,
        }
    }
}

/// Externally supplied game configuration.
///
/// The engine stores these values but never decides them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Human vs human, or human vs solver.
    pub mode: GameMode,
    /// Solver strategy.
    pub difficulty: Difficulty,
    /// Side the solver plays.
    pub ai_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            ai_player: Player::Two,
        }
    }
}
