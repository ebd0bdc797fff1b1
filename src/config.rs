//! Session configuration loaded from TOML and overridden by the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{Difficulty, Game, GameConfig, GameMode, Player};
use tracing::{debug, info, instrument};

/// Settings for an interactive session.
///
/// Every key is optional in the file:
///
/// ```toml
/// mode = "player_vs_ai"
/// difficulty = "hard"
/// ai_player = "two"
/// seed = 7
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Human vs human, or human vs the solver.
    #[serde(default)]
    mode: GameMode,

    /// Solver strategy.
    #[serde(default)]
    difficulty: Difficulty,

    /// Side the solver plays.
    #[serde(default = "default_ai_player")]
    ai_player: Player,

    /// Seed for easy-mode picks. Drawn from the OS when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_ai_player() -> Player {
    Player::Two
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            ai_player: default_ai_player(),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            mode = %config.mode,
            difficulty = %config.difficulty,
            ai_player = %config.ai_player,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Replaces file values with any flags given on the command line.
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        difficulty: Option<Difficulty>,
        ai_player: Option<Player>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(ai_player) = ai_player {
            self.ai_player = ai_player;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// The engine-side view of these settings.
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            mode: self.mode,
            difficulty: self.difficulty,
            ai_player: self.ai_player,
        }
    }

    /// Starts a game with these settings.
    #[instrument(skip(self), fields(seed = ?self.seed))]
    pub fn build_game(&self) -> Game {
        match self.seed {
            Some(seed) => Game::seeded(self.game_config(), seed),
            None => Game::from_entropy(self.game_config()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
