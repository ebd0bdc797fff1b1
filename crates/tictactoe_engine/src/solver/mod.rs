//! The automated opponent.
//!
//! A [`Solver`] plays one side. On `Easy` it picks a uniformly random
//! legal move from an injected [`MoveSource`]; on `Hard` it runs an
//! exhaustive [`minimax`] search and plays the best move for its side.

pub mod minimax;
pub mod source;

pub use minimax::{SearchResult, minimax};
pub use source::{MoveSource, ScriptedSource};

use crate::{Board, Difficulty, MoveError, Player, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// Automated player for one side of the board.
///
/// The search treats player one as the maximizing side. The solver
/// searches its own root as the maximizer when it plays one and as the
/// minimizer when it plays two, so it is optimal on either side.
#[derive(Debug, Clone)]
pub struct Solver<S = StdRng> {
    difficulty: Difficulty,
    player: Player,
    source: S,
}

impl Solver<StdRng> {
    /// Creates a solver whose easy-mode picks come from a seeded RNG.
    pub fn seeded(difficulty: Difficulty, player: Player, seed: u64) -> Self {
        Self::new(difficulty, player, StdRng::seed_from_u64(seed))
    }

    /// Creates a solver seeded from the operating system.
    pub fn from_entropy(difficulty: Difficulty, player: Player) -> Self {
        Self::new(difficulty, player, StdRng::from_os_rng())
    }
}

impl<S: MoveSource> Solver<S> {
    /// Creates a solver with an explicit randomness source.
    pub fn new(difficulty: Difficulty, player: Player, source: S) -> Self {
        Self {
            difficulty,
            player,
            source,
        }
    }

    /// Chooses a move on `board` for this solver's player.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoLegalMoves`] if the board is full.
    #[instrument(skip(self, board), fields(player = %self.player, difficulty = %self.difficulty))]
    pub fn choose_move(&mut self, board: &Board) -> Result<Position, MoveError> {
        let position = match self.difficulty {
            Difficulty::Easy => self.random_move(board)?,
            Difficulty::Hard => {
                let result = self.analyze(board)?;
                result.best_move().ok_or(MoveError::NoLegalMoves)?
            }
        };
        debug!(position = %position, "Solver chose move");
        Ok(position)
    }

    /// Runs the full search from this solver's side, whatever the difficulty.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoLegalMoves`] if the board is full.
    #[instrument(skip(self, board), fields(player = %self.player))]
    pub fn analyze(&self, board: &Board) -> Result<SearchResult, MoveError> {
        if board.is_full() {
            return Err(MoveError::NoLegalMoves);
        }
        let result = minimax(board, self.player == Player::One)?;
        debug!(
            score = result.score(),
            nodes = result.nodes(),
            best_move = ?result.best_move(),
            "Search complete"
        );
        Ok(result)
    }

    fn random_move(&mut self, board: &Board) -> Result<Position, MoveError> {
        let moves = board.empty_positions();
        if moves.is_empty() {
            return Err(MoveError::NoLegalMoves);
        }
        let index = self.source.pick_index(moves.len());
        moves.get(index).copied().ok_or(MoveError::NoLegalMoves)
    }

    /// Current strategy.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Switches strategy for subsequent moves.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Side this solver plays.
    pub fn player(&self) -> Player {
        self.player
    }
}
